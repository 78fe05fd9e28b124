//! # Connect X
//!
//! Connect Four generalized to any board size, any line length K and any
//! number of players, with win and tie resolution after every move and a
//! terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Board, chips, players, line geometry, resolution strategies, game session
//! - [`record`]: ASCII game records and move-by-move replay
//! - [`ui`]: Terminal UI: game view
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types
//! - [`logging`]: Tracing subscriber setup

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod record;
pub mod ui;
