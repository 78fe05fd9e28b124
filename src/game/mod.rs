//! Core Connect X game logic: board and chips, players, line geometry, win
//! and tie resolution, and the game session tying them together.

pub(crate) mod board;
mod chip;
pub mod geometry;
mod player;
pub mod resolution;
mod session;

pub use board::{Board, BoardLimits, Position};
pub use chip::{Chip, Color};
pub use player::{default_players, Player};
pub use session::{GameOutcome, GameSession, MoveError};
