use super::GameResolutionStrategy;
use crate::game::geometry::{Axis, ValidationLimits};
use crate::game::{Board, Chip, Player, Position};

/// Detects a completed line through the last dropped chip.
///
/// Only the last move is inspected: every earlier line was already checked
/// when it was played. Each axis costs O(K), whatever the board size.
#[derive(Debug, Clone, Copy)]
pub struct WinResolutionStrategy<'a> {
    board: &'a Board,
    in_a_row: usize,
    players: &'a [Player],
    taken_positions: &'a [Position],
}

impl<'a> WinResolutionStrategy<'a> {
    pub fn new(
        board: &'a Board,
        in_a_row: usize,
        players: &'a [Player],
        taken_positions: &'a [Position],
    ) -> Self {
        assert!(in_a_row > 2, "in-a-row value must be greater than 2, got {in_a_row}");
        assert!(!players.is_empty(), "at least one player is required");

        WinResolutionStrategy {
            board,
            in_a_row,
            players,
            taken_positions,
        }
    }

    /// Check whether the last move completed a line.
    ///
    /// # Panics
    ///
    /// If no move has been played yet.
    pub fn handle(&self, player_after_move: &Player) -> bool {
        let last = *self
            .taken_positions
            .last()
            .unwrap_or_else(|| panic!("win resolution requires at least one move"));
        debug_assert!(
            self.players.contains(player_after_move),
            "{} is not playing",
            player_after_move.name()
        );

        // The mover follows from the move count, not from the caller.
        let mover = &self.players[(self.taken_positions.len() - 1) % self.players.len()];
        let chip = mover.chip();
        debug_assert_eq!(self.board.chip_at(last), chip, "last move was not played by {}", mover.name());

        Axis::ALL
            .into_iter()
            .any(|axis| self.line_length(last, chip, axis) >= self.in_a_row)
    }

    /// Length of the run of `chip` through `from` along `axis`, capped at
    /// what can matter for a line of K.
    fn line_length(&self, from: Position, chip: Chip, axis: Axis) -> usize {
        let limits =
            ValidationLimits::around(from, self.in_a_row, self.board.rows(), self.board.columns());

        1 + self.count_matching(from, chip, axis, -1, limits.backward_reach(axis))
            + self.count_matching(from, chip, axis, 1, limits.forward_reach(axis))
    }

    fn count_matching(
        &self,
        from: Position,
        chip: Chip,
        axis: Axis,
        direction: isize,
        reach: usize,
    ) -> usize {
        (1..=reach as isize)
            .map_while(|distance| from.offset(axis, direction * distance))
            .take_while(|&position| self.board.chip_at(position) == chip)
            .count()
    }
}

impl GameResolutionStrategy for WinResolutionStrategy<'_> {
    fn handle(&self, player_after_move: &Player) -> bool {
        WinResolutionStrategy::handle(self, player_after_move)
    }
}
