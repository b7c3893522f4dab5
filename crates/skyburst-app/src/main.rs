//! Headless demo driver.
//!
//! Spawns the game loop, starts a session, and plays for a few seconds by
//! tapping whatever target the latest snapshot shows — exercising the
//! full input → simulation → snapshot round trip without a renderer.
//! Prints the final HUD as JSON.

mod game_loop;
mod state;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use skyburst_core::commands::PlayerCommand;
use skyburst_core::enums::EntityClass;

use crate::state::GameLoopCommand;

/// Demo session length in frames (~8 seconds).
const DEMO_FRAMES: u32 = 480;

fn main() {
    env_logger::init();

    let latest_snapshot = Arc::new(Mutex::new(None));
    let cmd_tx = game_loop::spawn_game_loop(latest_snapshot.clone());

    cmd_tx
        .send(GameLoopCommand::Player(PlayerCommand::StartGame))
        .expect("game loop should be alive");

    for frame in 0..DEMO_FRAMES {
        std::thread::sleep(Duration::from_millis(16));

        // Every ~10 frames, tap the first visible target.
        if frame % 10 != 0 {
            continue;
        }
        let tap = {
            let lock = latest_snapshot.lock().expect("snapshot lock");
            lock.as_ref().and_then(|snapshot| {
                snapshot
                    .entities
                    .iter()
                    .find(|view| {
                        matches!(
                            view.class,
                            EntityClass::Target
                                | EntityClass::ArmoredTarget
                                | EntityClass::PowerUpTarget
                        )
                    })
                    .map(|view| view.position)
            })
        };
        if let Some(world) = tap {
            let _ = cmd_tx.send(GameLoopCommand::Player(PlayerCommand::Tap { world }));
        }
    }

    if let Some(snapshot) = latest_snapshot.lock().expect("snapshot lock").as_ref() {
        match serde_json::to_string_pretty(&snapshot.hud) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("failed to serialize HUD: {err}"),
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
}
