//! HutJumper entry point
//!
//! Runs the simulation headless with a scripted pilot and logs the
//! player's trajectory. Pass a JSON tuning file as the first argument to
//! override the balance defaults.

use std::env;
use std::fs;
use std::process;

use hutjumper::sim::{ControlIntent, Simulation};
use hutjumper::tuning::Tuning;

fn main() {
    env_logger::init();

    let tuning = match env::args().nth(1) {
        Some(path) => match load_tuning(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides from {path}");
                tuning
            }
            Err(err) => {
                log::error!("Failed to load tuning from {path}: {err}");
                process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    log::info!("HutJumper (headless) starting...");
    let mut sim = Simulation::new(tuning);
    sim.start();

    // Twelve scripted seconds at 60 fps: run right the whole time, hop
    // every two seconds, loose one fireball midway, then swap skins.
    let frame_ms = 1000.0 / 60.0;
    for frame in 0u32..720 {
        let intent = ControlIntent {
            move_x: 1,
            jump_held: frame % 120 < 30,
            fire_requested: frame == 300,
            toggle_character_requested: frame == 450,
            ..Default::default()
        };
        sim.set_intent(intent);

        if let Err(err) = sim.advance(frame_ms) {
            log::error!("Simulation failed at frame {frame}: {err}");
            process::exit(1);
        }

        if frame % 60 == 59 {
            let state = sim.state();
            let player = state.player();
            log::info!(
                "t={:>2}s pos=({:.1}, {:.1}) vel=({:.2}, {:.2}) on_ground={} entities={}",
                (frame + 1) / 60,
                player.position.x,
                player.position.y,
                player.velocity.x,
                player.velocity.y,
                player.is_on_ground(state.world()),
                state.entities().len(),
            );
        }
    }

    let state = sim.state();
    let player = state.player();
    log::info!(
        "Done: player at ({:.1}, {:.1}), character {}, {} entities alive",
        player.position.x,
        player.position.y,
        state.selected_character(),
        state.entities().len(),
    );
}

fn load_tuning(path: &str) -> Result<Tuning, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)?;
    Ok(Tuning::from_json(&json)?)
}
