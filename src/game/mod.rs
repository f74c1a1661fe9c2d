//! Game state
//!
//! The per-symbol guess state machine, the session that couples it to player
//! statistics, and the player records themselves.

mod guesses;
mod player;
mod session;

pub use guesses::{GuessBoard, GuessError, HintResult};
pub use player::{Player, Roster};
pub use session::GameSession;
