//! Messages understood by the game loop thread.

use skyburst_core::commands::PlayerCommand;

/// Commands for the loop thread: player input or shutdown.
#[derive(Debug, Clone)]
pub enum GameLoopCommand {
    Player(PlayerCommand),
    Shutdown,
}
