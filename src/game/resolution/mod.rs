//! Win and tie resolution, queried after every move.
//!
//! Strategies borrow the board, the players and the move history for the
//! duration of a single query and never mutate them.

#[cfg(test)]
pub(crate) mod fixtures;
mod tie;
mod win;

pub use tie::TieResolutionStrategy;
pub use win::WinResolutionStrategy;

use super::{Board, Player, Position};

/// Decides whether the game is over in some particular way.
pub trait GameResolutionStrategy {
    /// `player_after_move` is the player whose turn comes next.
    fn handle(&self, player_after_move: &Player) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionKind {
    Win,
    Tie,
}

/// A strategy built by [`ResolutionStrategyFactory`].
#[derive(Debug, Clone, Copy)]
pub enum ResolutionStrategy<'a> {
    Win(WinResolutionStrategy<'a>),
    Tie(TieResolutionStrategy<'a>),
}

impl ResolutionStrategy<'_> {
    pub fn kind(&self) -> ResolutionKind {
        match self {
            ResolutionStrategy::Win(_) => ResolutionKind::Win,
            ResolutionStrategy::Tie(_) => ResolutionKind::Tie,
        }
    }
}

impl GameResolutionStrategy for ResolutionStrategy<'_> {
    fn handle(&self, player_after_move: &Player) -> bool {
        match self {
            ResolutionStrategy::Win(strategy) => strategy.handle(player_after_move),
            ResolutionStrategy::Tie(strategy) => strategy.handle(player_after_move),
        }
    }
}

pub struct ResolutionStrategyFactory;

impl ResolutionStrategyFactory {
    pub fn make<'a>(
        board: &'a Board,
        in_a_row: usize,
        players: &'a [Player],
        taken_positions: &'a [Position],
        kind: ResolutionKind,
    ) -> ResolutionStrategy<'a> {
        match kind {
            ResolutionKind::Win => ResolutionStrategy::Win(WinResolutionStrategy::new(
                board,
                in_a_row,
                players,
                taken_positions,
            )),
            ResolutionKind::Tie => ResolutionStrategy::Tie(TieResolutionStrategy::new(
                board,
                in_a_row,
                players,
                taken_positions,
            )),
        }
    }
}
