//! Game loop thread — runs the simulation at the nominal tick rate and
//! publishes snapshots.
//!
//! Commands arrive via `mpsc` channel. The latest snapshot is stored in
//! shared state for synchronous polling by the renderer/HUD side. The
//! frame delta is measured per iteration and handed to the engine, which
//! clamps it — so a stall, debugger pause, or suspended process never
//! replays wall-clock time as simulated time.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use skyburst_core::constants::TICK_RATE;
use skyburst_core::events::FeedbackEvent;
use skyburst_core::state::GameStateSnapshot;
use skyburst_sim::engine::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the input layer to use.
pub fn spawn_game_loop(
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("skyburst-game-loop".into())
        .spawn(move || {
            run_game_loop(cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let mut next_tick_time = Instant::now();
    let mut last_frame = Instant::now();

    log::info!("game loop running at {TICK_RATE} Hz");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick with the measured frame delta (engine clamps)
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;
        let snapshot = engine.tick(dt);

        log_transitions(&snapshot);

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

fn log_transitions(snapshot: &GameStateSnapshot) {
    for event in &snapshot.events {
        match event {
            FeedbackEvent::WaveStarted { wave, boss } => {
                log::info!("wave {wave} started (boss: {boss})");
            }
            FeedbackEvent::LevelComplete { level } => {
                log::info!("level {level} complete");
            }
            FeedbackEvent::GameOver { score } => {
                log::info!("game over, final score {score}");
            }
            _ => {}
        }
    }
}
