mod layout;

pub use layout::CellLayout;

use macroquad::prelude::*;
use crate::application::{GenerationClock, Simulation};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const OUTLINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);
const HOVER_COLOR: Color = Color::new(1.0, 1.0, 0.0, 0.8);

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Fill a convex polygon as a triangle fan
fn fill_polygon(points: &[Vec2], color: Color) {
    if let Some((&first, rest)) = points.split_first() {
        rest.windows(2)
            .for_each(|pair| draw_triangle(first, pair[0], pair[1], color));
    }
}

fn stroke_polygon(points: &[Vec2], thickness: f32, color: Color) {
    let closing = points.last().zip(points.first());
    points
        .windows(2)
        .map(|pair| (&pair[0], &pair[1]))
        .chain(closing)
        .for_each(|(a, b)| draw_line(a.x, a.y, b.x, b.y, thickness, color));
}

/// Draw every cell of the simulation
pub fn draw_cells(sim: &Simulation, layout: &CellLayout, hovered: Option<(usize, usize)>) {
    let draw_outlines = sim.config().cell_diameter >= 6;

    for ((x, y, alive), (_, _, outline)) in sim.cells().zip(layout.iter()) {
        fill_polygon(outline, if alive { ALIVE_COLOR } else { DEAD_COLOR });
        if draw_outlines {
            stroke_polygon(outline, 1.0, OUTLINE_COLOR);
        }
        if hovered == Some((x, y)) {
            stroke_polygon(outline, 2.0, HOVER_COLOR);
        }
    }
}

/// Status line: generation, population and run state
pub fn draw_status(sim: &Simulation, clock: &GenerationClock) {
    let (w, h) = sim.dimensions();
    let state = if sim.is_running() { "Running" } else { "Paused" };
    let text = format!(
        "Gen {} | {} alive / {} cells ({}x{}) | {} | {:.0} gen/s | {}",
        sim.generation(),
        format_number(sim.population()),
        format_number(w * h),
        w,
        h,
        sim.rule(),
        1.0 / clock.delay(),
        state,
    );

    draw_rectangle(0.0, screen_height() - 22.0, screen_width(), 22.0, Color::new(0.0, 0.0, 0.0, 0.7));
    draw_text(&text, 6.0, screen_height() - 6.0, 16.0, LIGHTGRAY);
}
