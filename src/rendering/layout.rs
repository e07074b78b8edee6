//! Screen geometry of every cell: polygon outlines and hit testing.

use macroquad::prelude::{Vec2, vec2};

use crate::domain::Tessellation;

/// Cached outlines of all cells of one grid, row-major like the grid itself.
///
/// Rebuilt whenever the simulation restarts; the kernel never sees it.
#[derive(Clone, Debug, Default)]
pub struct CellLayout {
    width: usize,
    outlines: Vec<Vec<Vec2>>,
}

impl CellLayout {
    pub fn new(tessellation: Tessellation, cell_diameter: u32, (width, height): (usize, usize)) -> Self {
        let shape = CellShape::new(tessellation, cell_diameter, width);
        let outlines = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| shape.outline(x, y))
            .collect();
        Self { width, outlines }
    }

    /// Outline of the cell at `(x, y)`
    pub fn outline(&self, x: usize, y: usize) -> Option<&[Vec2]> {
        (x < self.width)
            .then(|| self.outlines.get(y * self.width + x))
            .flatten()
            .map(Vec::as_slice)
    }

    /// Cell under `point`, if any. Later cells win where outlines overlap,
    /// matching draw order.
    pub fn hit_test(&self, point: Vec2) -> Option<(usize, usize)> {
        self.outlines
            .iter()
            .rposition(|outline| contains(outline, point))
            .map(|i| (i % self.width, i / self.width))
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &[Vec2])> + '_ {
        self.outlines
            .iter()
            .enumerate()
            .map(|(i, outline)| (i % self.width, i / self.width, outline.as_slice()))
    }
}

/// Unit shape of one tessellation, placed per cell.
struct CellShape {
    tessellation: Tessellation,
    diameter: f32,
    pitch: f32,
    radius: f32,
    side: f32,
    columns: usize,
}

impl CellShape {
    fn new(tessellation: Tessellation, cell_diameter: u32, columns: usize) -> Self {
        Self {
            tessellation,
            diameter: cell_diameter as f32,
            pitch: tessellation.row_pitch(cell_diameter) as f32,
            radius: (cell_diameter / 2) as f32,
            side: Tessellation::hex_side(cell_diameter) as f32,
            columns,
        }
    }

    fn outline(&self, x: usize, y: usize) -> Vec<Vec2> {
        let (d, h) = (self.diameter, self.pitch);
        match self.tessellation {
            Tessellation::Rectangular => {
                let offset = vec2(x as f32 * d, y as f32 * h);
                [vec2(0.0, 0.0), vec2(d, 0.0), vec2(d, h), vec2(0.0, h)]
                    .into_iter()
                    .map(|p| p + offset)
                    .collect()
            }
            Tessellation::Hexagonal => {
                // Odd rows shift by half a cell; the shift wraps so the
                // rendered sheet stays a parallelogram folded into a rectangle.
                let (r, s) = (self.radius, self.side);
                let half_columns = x * 2 + y;
                let effective_x = half_columns % (self.columns * 2).max(1);
                let offset = vec2(effective_x as f32 * r, y as f32 * h);
                [
                    vec2(r, 0.0),
                    vec2(d, s / 2.0),
                    vec2(d, h),
                    vec2(r, s * 2.0),
                    vec2(0.0, h),
                    vec2(0.0, s / 2.0),
                ]
                .into_iter()
                .map(|p| p + offset)
                .collect()
            }
            Tessellation::Triangular => {
                let reflected = self.tessellation.is_reflected_at(x, y);
                let direction = if reflected { -1.0 } else { 1.0 };
                let offset = vec2(
                    x as f32 * d + if reflected { d } else { 0.0 },
                    y as f32 * h,
                );
                [vec2(0.0, 0.0), vec2(d, h), vec2(0.0, h * 2.0)]
                    .into_iter()
                    .map(|p| vec2(direction * p.x, p.y) + offset)
                    .collect()
            }
        }
    }
}

/// Even-odd ray casting
fn contains(polygon: &[Vec2], point: Vec2) -> bool {
    let mut inside = false;
    let mut j = polygon.len().wrapping_sub(1);
    for (i, a) in polygon.iter().enumerate() {
        let b = polygon[j];
        if (a.y > point.y) != (b.y > point.y)
            && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}
