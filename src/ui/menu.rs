use macroquad::prelude::*;

use super::{Button, Dropdown, PANEL_MARGIN, PANEL_WIDTH, panel_x};
use crate::application::SimulationConfig;
use crate::domain::{Neighborhood, Rule, Tessellation, all_rules};

/// What the user asked for through the menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Restart,
    TogglePause,
    Step,
}

#[derive(Clone, Copy)]
enum Field {
    Tessellation,
    Neighborhood,
    Rule,
    Wrap,
}

impl Field {
    const ALL: [Field; 4] = [Field::Tessellation, Field::Neighborhood, Field::Rule, Field::Wrap];
}

const WRAP_ITEMS: [&str; 2] = ["On", "Off"];

/// Side panel for editing the next run's configuration.
///
/// Selections only touch a draft; the running simulation picks them up on
/// restart.
pub struct Menu {
    visible: bool,
    draft: SimulationConfig,
    rules: Vec<(String, Rule)>,
    tessellation: Dropdown,
    neighborhood: Dropdown,
    rule: Dropdown,
    wrap: Dropdown,
    restart: Button,
    pause: Button,
    step: Button,
}

impl Menu {
    pub fn new(config: &SimulationConfig) -> Self {
        let mut rules: Vec<(String, Rule)> = all_rules()
            .into_iter()
            .map(|(name, rule)| (name.to_string(), rule))
            .collect();
        if !rules.iter().any(|(_, rule)| *rule == config.rule) {
            rules.push((format!("Custom {}", config.rule), config.rule));
        }

        let names = |items: Vec<&str>| items.into_iter().map(String::from).collect::<Vec<_>>();
        let mut menu = Self {
            visible: false,
            draft: config.clone(),
            tessellation: Dropdown::new(
                0.0,
                0.0,
                "Tessellation",
                names(Tessellation::all().iter().map(|t| t.name()).collect()),
            ),
            neighborhood: Dropdown::new(
                0.0,
                0.0,
                "Neighborhood",
                names(Neighborhood::all().iter().map(|n| n.name()).collect()),
            ),
            rule: Dropdown::new(0.0, 0.0, "Rule", rules.iter().map(|(name, _)| name.clone()).collect()),
            wrap: Dropdown::new(0.0, 0.0, "Edge wrap", names(WRAP_ITEMS.to_vec())),
            rules,
            restart: Button::new(0.0, 0.0, "Restart"),
            pause: Button::new(0.0, 0.0, "Pause"),
            step: Button::new(0.0, 0.0, "Step"),
        };
        menu.sync_selection();
        menu.layout();
        menu
    }

    /// Point every dropdown at the draft's current values
    fn sync_selection(&mut self) {
        let draft = &self.draft;
        let position = |found: Option<usize>| found.unwrap_or(0);

        self.tessellation
            .set_selected(position(Tessellation::all().iter().position(|&t| t == draft.tessellation)));
        self.neighborhood
            .set_selected(position(Neighborhood::all().iter().position(|&n| n == draft.neighborhood)));
        self.rule
            .set_selected(position(self.rules.iter().position(|(_, r)| *r == draft.rule)));
        self.wrap.set_selected(if draft.wrap { 0 } else { 1 });
    }

    /// Update UI positions for responsiveness
    fn layout(&mut self) {
        let px = panel_x();
        self.tessellation.set_position(px, 30.0);
        self.neighborhood.set_position(px, 80.0);
        self.rule.set_position(px, 130.0);
        self.wrap.set_position(px, 180.0);
        self.restart.set_position(px, 230.0);
        self.pause.set_position(px, 280.0);
        self.step.set_position(px, 330.0);
    }

    fn dropdown(&self, field: Field) -> &Dropdown {
        match field {
            Field::Tessellation => &self.tessellation,
            Field::Neighborhood => &self.neighborhood,
            Field::Rule => &self.rule,
            Field::Wrap => &self.wrap,
        }
    }

    fn dropdown_mut(&mut self, field: Field) -> &mut Dropdown {
        match field {
            Field::Tessellation => &mut self.tessellation,
            Field::Neighborhood => &mut self.neighborhood,
            Field::Rule => &mut self.rule,
            Field::Wrap => &mut self.wrap,
        }
    }

    /// Copy a changed selection into the draft
    fn apply(&mut self, field: Field) {
        let selected = self.dropdown(field).selected();
        match field {
            Field::Tessellation => {
                if let Some(&tessellation) = Tessellation::all().get(selected) {
                    self.draft = self.draft.clone().with_tessellation(tessellation);
                    self.sync_selection();
                }
            }
            Field::Neighborhood => {
                if let Some(&neighborhood) = Neighborhood::all().get(selected) {
                    self.draft.neighborhood = neighborhood;
                }
            }
            Field::Rule => {
                if let Some((_, rule)) = self.rules.get(selected) {
                    self.draft.rule = *rule;
                }
            }
            Field::Wrap => self.draft.wrap = selected == 0,
        }
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
        Field::ALL.iter().for_each(|&f| self.dropdown_mut(f).close());
    }

    /// Configuration the next restart should use
    pub fn draft(&self) -> &SimulationConfig {
        &self.draft
    }

    /// Whether the panel is shown and under the cursor
    pub fn covers(&self, mouse_pos: (f32, f32)) -> bool {
        self.visible
            && (mouse_pos.0 >= panel_x() - PANEL_MARGIN
                || Field::ALL.iter().any(|&f| self.dropdown(f).covers(mouse_pos)))
    }

    /// Handle clicks for this frame
    pub fn update(&mut self, mouse_pos: (f32, f32), paused: bool) -> Option<MenuAction> {
        if !self.visible {
            return None;
        }
        self.layout();
        self.pause.set_text(if paused { "Resume" } else { "Pause" });

        // An open list sits on top of the boxes below it, so it alone gets the click
        if let Some(&open) = Field::ALL.iter().find(|&&f| self.dropdown(f).is_open()) {
            if self.dropdown_mut(open).update(mouse_pos) {
                self.apply(open);
            }
            return None;
        }

        for field in Field::ALL {
            if self.dropdown_mut(field).update(mouse_pos) {
                self.apply(field);
            }
            if self.dropdown(field).is_open() {
                return None;
            }
        }

        if self.restart.is_clicked(mouse_pos) {
            Some(MenuAction::Restart)
        } else if self.pause.is_clicked(mouse_pos) {
            Some(MenuAction::TogglePause)
        } else if self.step.is_clicked(mouse_pos) {
            Some(MenuAction::Step)
        } else {
            None
        }
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        if !self.visible {
            return;
        }

        draw_rectangle(
            panel_x() - PANEL_MARGIN,
            0.0,
            PANEL_WIDTH + 2.0 * PANEL_MARGIN,
            screen_height(),
            Color::from_rgba(30, 30, 30, 230),
        );

        self.restart.draw(mouse_pos);
        self.pause.draw(mouse_pos);
        self.step.draw(mouse_pos);

        let px = panel_x();
        let help = [
            "Controls:",
            "P: Pause / resume",
            "Enter: Step",
            "R: Restart",
            "M: Menu",
            "Space / click: Toggle cell",
            "Up/Down: Speed",
        ];
        for (i, line) in help.iter().enumerate() {
            let (size, color) = if i == 0 { (14.0, WHITE) } else { (12.0, GRAY) };
            draw_text(line, px, 400.0 + i as f32 * 14.0, size, color);
        }

        // Draw closed dropdowns first, then the open one on top
        let open = Field::ALL.into_iter().find(|&f| self.dropdown(f).is_open());
        Field::ALL
            .into_iter()
            .filter(|&f| !self.dropdown(f).is_open())
            .for_each(|f| self.dropdown(f).draw(mouse_pos));
        if let Some(field) = open {
            self.dropdown(field).draw(mouse_pos);
        }
    }
}
