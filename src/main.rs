use macroquad::prelude::*;
use hex_life::{
    GenerationClock, Simulation, SimulationConfig,
    input::{self, Command},
    rendering::{self, CellLayout},
    ui::{Menu, MenuAction},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Tessellated Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Config from the JSON file named by the first argument, or the defaults
fn load_config() -> SimulationConfig {
    let Some(path) = std::env::args().nth(1) else {
        return SimulationConfig::default();
    };

    match SimulationConfig::from_json_file(&path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Ignoring config {}: {}", path, err);
            SimulationConfig::default()
        }
    }
}

/// The canvas is always the current window
fn fit_to_window(config: &SimulationConfig) -> SimulationConfig {
    config
        .clone()
        .with_canvas(screen_width() as u32, screen_height() as u32)
}

fn layout_for(sim: &Simulation) -> CellLayout {
    let config = sim.config();
    CellLayout::new(config.tessellation, config.cell_diameter, sim.dimensions())
}

/// Advance one generation, even from the paused state
fn single_step(sim: &mut Simulation) {
    let paused = sim.is_paused();
    sim.resume();
    sim.step();
    if paused {
        sim.pause();
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = fit_to_window(&load_config());
    let mut sim = Simulation::new(config.clone());
    if let Err(err) = sim.build() {
        eprintln!("Cannot build simulation: {}", err);
        return;
    }

    let mut layout = layout_for(&sim);
    let mut clock = GenerationClock::new(config.generation_delay_ms);
    let mut menu = Menu::new(&config);

    loop {
        let mouse_pos = mouse_position();
        let hovered = layout.hit_test(vec2(mouse_pos.0, mouse_pos.1));

        let mut commands = input::keyboard_commands();
        commands.extend(input::mouse_commands(menu.covers(mouse_pos)));
        if let Some(action) = menu.update(mouse_pos, sim.is_paused()) {
            commands.push(match action {
                MenuAction::Restart => Command::Restart,
                MenuAction::TogglePause => Command::TogglePause,
                MenuAction::Step => Command::Step,
            });
        }

        for command in commands {
            match command {
                Command::TogglePause => sim.toggle_pause(),
                Command::Step => single_step(&mut sim),
                Command::Restart => {
                    let next = fit_to_window(menu.draft());
                    match sim.restart(next) {
                        Ok(()) => {
                            layout = layout_for(&sim);
                            clock.reset();
                        }
                        Err(err) => eprintln!("Restart failed: {}", err),
                    }
                }
                Command::ToggleMenu => menu.toggle_visibility(),
                Command::ToggleHovered => {
                    if let Some((x, y)) = hovered {
                        if let Err(err) = sim.toggle_cell(x, y) {
                            eprintln!("{}", err);
                        }
                    }
                }
                Command::SpeedUp => clock.adjust(-0.02),
                Command::SlowDown => clock.adjust(0.02),
            }
        }

        if clock.tick(get_frame_time()) {
            sim.step();
        }

        clear_background(BLACK);
        rendering::draw_cells(&sim, &layout, hovered);
        rendering::draw_status(&sim, &clock);
        menu.draw(mouse_pos);

        next_frame().await;
    }
}
