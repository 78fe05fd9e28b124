//! Terminal UI for playing Connect X on any configured board.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
