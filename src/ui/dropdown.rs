use macroquad::prelude::*;

use super::{Bounds, NORMAL_COLOR, HOVER_COLOR, PANEL_WIDTH};

const ROW_HEIGHT: f32 = 30.0;
const FONT_SIZE: f32 = 16.0;

/// Labeled selector; only one list is shown open at a time
#[derive(Clone)]
pub struct Dropdown {
    bounds: Bounds,
    label: String,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            bounds: Bounds::new(x, y, PANEL_WIDTH, ROW_HEIGHT),
            label: label.into(),
            items,
            selected: 0,
            is_open: false,
        }
    }

    /// Get currently selected index
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Set selected index; out-of-range indices are ignored
    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.bounds.x = x;
        self.bounds.y = y;
    }

    /// Bounds of list row `index` below the main box
    fn item_bounds(&self, index: usize) -> Bounds {
        let b = &self.bounds;
        Bounds::new(b.x, b.y + b.h * (index + 1) as f32, b.w, b.h)
    }

    /// Whether `mouse_pos` is over the box or, when open, its list
    pub fn covers(&self, mouse_pos: (f32, f32)) -> bool {
        self.bounds.contains(mouse_pos)
            || (self.is_open && (0..self.items.len()).any(|i| self.item_bounds(i).contains(mouse_pos)))
    }

    /// Handle clicks; returns true when the selection changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }

        if self.bounds.contains(mouse_pos) {
            self.is_open = !self.is_open;
            return false;
        }

        if !self.is_open {
            return false;
        }
        self.is_open = false;

        match (0..self.items.len()).find(|&i| self.item_bounds(i).contains(mouse_pos)) {
            Some(i) if i != self.selected => {
                self.selected = i;
                true
            }
            _ => false,
        }
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let b = &self.bounds;
        draw_text(&self.label, b.x, b.y - 5.0, 14.0, GRAY);

        let color = if b.contains(mouse_pos) { HOVER_COLOR } else { NORMAL_COLOR };
        draw_rectangle(b.x, b.y, b.w, b.h, color);
        draw_rectangle_lines(b.x, b.y, b.w, b.h, 2.0, WHITE);
        draw_text(&self.items[self.selected], b.x + 5.0, b.y + 21.0, FONT_SIZE, WHITE);
        draw_text("v", b.x + b.w - 16.0, b.y + 20.0, FONT_SIZE, WHITE);

        if !self.is_open {
            return;
        }

        for (i, item) in self.items.iter().enumerate() {
            let row = self.item_bounds(i);
            let color = if row.contains(mouse_pos) {
                HOVER_COLOR
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };
            draw_rectangle(row.x, row.y, row.w, row.h, color);
            draw_rectangle_lines(row.x, row.y, row.w, row.h, 1.0, Color::from_rgba(80, 80, 80, 255));
            draw_text(item, row.x + 5.0, row.y + 21.0, FONT_SIZE, WHITE);
        }
    }
}
