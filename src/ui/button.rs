use macroquad::prelude::*;

use super::{BUTTON_HEIGHT, PANEL_WIDTH, Bounds, NORMAL_COLOR, HOVER_COLOR};

/// Push button with a changeable caption
#[derive(Clone)]
pub struct Button {
    bounds: Bounds,
    text: String,
}

impl Button {
    pub fn new(x: f32, y: f32, text: impl Into<String>) -> Self {
        Self {
            bounds: Bounds::new(x, y, PANEL_WIDTH, BUTTON_HEIGHT),
            text: text.into(),
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.bounds.x = x;
        self.bounds.y = y;
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let b = &self.bounds;
        let color = if b.contains(mouse_pos) { HOVER_COLOR } else { NORMAL_COLOR };
        draw_rectangle(b.x, b.y, b.w, b.h, color);
        draw_rectangle_lines(b.x, b.y, b.w, b.h, 2.0, WHITE);

        let size = measure_text(&self.text, None, 20, 1.0);
        draw_text(
            &self.text,
            b.x + (b.w - size.width) / 2.0,
            b.y + (b.h + size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.bounds.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
