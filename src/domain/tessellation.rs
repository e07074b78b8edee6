//! Planar tilings and the geometry the grid needs from them.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// The tiling shape of the grid.
///
/// Every variant lays cells out in `cells_x` columns and `cells_y` rows; what
/// differs is the row pitch (how tall a row is for a given cell diameter) and
/// whether some cells are mirrored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tessellation {
    Rectangular,
    #[default]
    Hexagonal,
    Triangular,
}

impl Tessellation {
    /// All tessellations, in menu order
    pub fn all() -> Vec<Tessellation> {
        vec![
            Tessellation::Rectangular,
            Tessellation::Hexagonal,
            Tessellation::Triangular,
        ]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Tessellation::Rectangular => "Rectangular",
            Tessellation::Hexagonal => "Hexagonal",
            Tessellation::Triangular => "Triangular",
        }
    }

    /// Vertical distance between two consecutive rows, truncated to whole pixels.
    ///
    /// Hexagons interlock, so a row only advances by one and a half sides.
    /// Triangles alternate up/down and advance by half their height.
    pub fn row_pitch(&self, cell_diameter: u32) -> u32 {
        match self {
            Tessellation::Rectangular => cell_diameter,
            Tessellation::Hexagonal => {
                let side = Self::hex_side(cell_diameter);
                (side * 1.5) as u32
            }
            Tessellation::Triangular => (cell_diameter as f64 / (PI / 3.0).tan()) as u32,
        }
    }

    /// Side length of a hexagon whose flat-to-flat width is `cell_diameter`.
    pub fn hex_side(cell_diameter: u32) -> f64 {
        let radius = (cell_diameter / 2) as f64;
        radius / (PI / 3.0).sin()
    }

    /// Grid dimensions `(cells_x, cells_y)` that fit on a canvas.
    ///
    /// One cell of margin is dropped on each axis. A canvas smaller than a cell
    /// (or a diameter too small to give a non-zero row pitch) yields `(0, 0)` on
    /// the affected axis, which is a valid empty grid.
    pub fn dimensions(&self, canvas_width: u32, canvas_height: u32, cell_diameter: u32) -> (usize, usize) {
        let pitch = self.row_pitch(cell_diameter);
        if cell_diameter == 0 || pitch == 0 {
            return (0, 0);
        }

        let cells_x = (canvas_width / cell_diameter).saturating_sub(1);
        let cells_y = (canvas_height / pitch).saturating_sub(1);
        (cells_x as usize, cells_y as usize)
    }

    /// Whether the cell at `(x, y)` is mirrored horizontally.
    ///
    /// Only triangles flip: they point up and down alternately along the
    /// diagonals, so odd `x + y` cells see their neighborhood with `dx` negated.
    pub const fn is_reflected_at(&self, x: usize, y: usize) -> bool {
        match self {
            Tessellation::Triangular => (x + y) % 2 == 1,
            Tessellation::Rectangular | Tessellation::Hexagonal => false,
        }
    }
}
