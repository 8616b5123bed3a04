/// Entry point and turn loop.

mod config;
mod domain;
mod sim;
mod ui;

use config::GameConfig;
use domain::rules::Status;
use log::debug;
use sim::level::{self, LevelDef};
use sim::step;
use sim::world::{Phase, WorldState};
use ui::input::{self, Command};
use ui::renderer::Renderer;

fn main() {
    // Logger first, before the terminal goes raw; RUST_LOG output lands on
    // stderr and can be redirected without disturbing the game screen.
    env_logger::init();

    let config = GameConfig::load();
    let defs = level::collect_levels(&config.levels_dir);

    let mut world = WorldState::new();
    if let Err(e) = world.load_level(0, &defs) {
        eprintln!("Could not load the first level: {e}");
        return;
    }

    let mut renderer = Renderer::new();
    if let Err(e) = renderer.init() {
        eprintln!("Terminal init failed: {e}");
        return;
    }

    let result = game_loop(&mut world, &defs, &mut renderer, &config);

    if let Err(e) = renderer.cleanup() {
        eprintln!("Terminal cleanup failed: {e}");
    }

    if let Err(e) = result {
        eprintln!("Game error: {e}");
    }

    println!();
    match world.phase {
        Phase::Won => println!("You escaped with {} treasure. Well delved!", world.player.treasure),
        Phase::Dead => println!("The dungeon keeps you. {} turns survived.", world.turns),
        Phase::Playing => println!("Thanks for playing Delver!"),
    }
}

fn game_loop(
    world: &mut WorldState,
    defs: &[LevelDef],
    renderer: &mut Renderer,
    config: &GameConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        renderer.draw(world)?;

        match input::read_command(&config.keys)? {
            Command::Quit => return Ok(()),
            Command::Redraw => continue,
            Command::Restart => {
                world.load_level(world.current_level, defs)?;
            }
            Command::Step(dir) => {
                if world.phase != Phase::Playing {
                    continue; // end screen: only restart/quit act
                }
                let report = step::take_turn(world, dir);
                debug!("turn {}: {:?}", world.turns, report);

                match report.status {
                    Status::Escape => {
                        world.phase = Phase::Won;
                    }
                    Status::Leave => {
                        let next = world.current_level + 1;
                        if next >= defs.len() {
                            world.phase = Phase::Won;
                        } else {
                            world.load_level(next, defs)?;
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}
