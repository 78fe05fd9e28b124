use super::GameResolutionStrategy;
use crate::game::geometry::{Axis, ValidationLimits};
use crate::game::{Board, Chip, Player, Position};

/// Detects that no player can complete a line any more.
///
/// Every window of K cells along each axis is examined. Until a window is
/// complete, its last empty cell and every cell above it stay empty, so the
/// completing move has to come before the board runs out of the other free
/// cells. A window is still winnable for a player when
///
/// 1. it holds no chip of another player,
/// 2. within that horizon the player gets enough turns to fill its empty
///    cells, and
/// 3. the horizon also leaves room to fill the empty cells beneath them.
///
/// These are necessary conditions only: a reported tie is always real, but
/// some ties are reported a few moves after they became certain (drop order
/// and forced moves into a window are not modelled). Callers must check for a
/// win first.
#[derive(Debug, Clone, Copy)]
pub struct TieResolutionStrategy<'a> {
    board: &'a Board,
    in_a_row: usize,
    players: &'a [Player],
    taken_positions: &'a [Position],
}

impl<'a> TieResolutionStrategy<'a> {
    pub fn new(
        board: &'a Board,
        in_a_row: usize,
        players: &'a [Player],
        taken_positions: &'a [Position],
    ) -> Self {
        assert!(in_a_row > 2, "in-a-row value must be greater than 2, got {in_a_row}");
        assert!(!players.is_empty(), "at least one player is required");

        TieResolutionStrategy {
            board,
            in_a_row,
            players,
            taken_positions,
        }
    }

    /// Check whether the game can no longer be won by anyone.
    pub fn handle(&self, player_after_move: &Player) -> bool {
        debug_assert_eq!(
            self.board.free_cells(),
            self.board.rows() * self.board.columns() - self.taken_positions.len(),
            "move history does not match the board"
        );

        !self
            .players
            .iter()
            .any(|player| self.can_still_win(player, player_after_move))
    }

    /// Index of a player in the round robin.
    ///
    /// # Panics
    ///
    /// If the player is not part of the game.
    pub fn player_turn(&self, player: &Player) -> usize {
        self.players
            .iter()
            .position(|candidate| candidate == player)
            .unwrap_or_else(|| panic!("{} is not playing", player.name()))
    }

    /// Moves `player` still gets if the board is filled to the end, turns
    /// starting with `player_after_move`.
    pub fn remaining_moves(&self, player: &Player, player_after_move: &Player) -> usize {
        self.moves_within(player, player_after_move, self.board.free_cells())
    }

    /// Turns `player` gets among the next `horizon` moves.
    fn moves_within(&self, player: &Player, player_after_move: &Player, horizon: usize) -> usize {
        let nb_players = self.players.len();
        let turns_to_wait = (self.player_turn(player) + nb_players
            - self.player_turn(player_after_move))
            % nb_players;

        if horizon > turns_to_wait {
            (horizon - turns_to_wait - 1) / nb_players + 1
        } else {
            0
        }
    }

    fn can_still_win(&self, player: &Player, player_after_move: &Player) -> bool {
        let chip = player.chip();
        Axis::ALL.into_iter().any(|axis| {
            self.window_starts(axis, chip)
                .into_iter()
                .any(|start| self.is_window_winnable(player, player_after_move, start, axis))
        })
    }

    /// Lower ends of all the windows along `axis` worth examining for `chip`.
    fn window_starts(&self, axis: Axis, chip: Chip) -> Vec<Position> {
        let (rows, columns) = (self.board.rows(), self.board.columns());

        if axis == Axis::Vertical {
            // Anything at or below another player's chip is dead.
            return (0..columns)
                .flat_map(|column| {
                    let first_row = self.first_open_row(column, chip);
                    (first_row..(rows + 1).saturating_sub(self.in_a_row))
                        .map(move |row| Position::new(row, column))
                })
                .collect();
        }

        (0..rows)
            .flat_map(|row| (0..columns).map(move |column| Position::new(row, column)))
            .filter(|&start| {
                ValidationLimits::around(start, self.in_a_row, rows, columns).forward_reach(axis)
                    == self.in_a_row - 1
            })
            .collect()
    }

    /// Lowest row of a column not covered by another player's chip.
    fn first_open_row(&self, column: usize, chip: Chip) -> usize {
        self.players
            .iter()
            .map(Player::chip)
            .filter(|&other| other != chip && self.board.is_chip_in_column(column, other))
            .filter_map(|other| self.board.highest_row_of(column, other))
            .max()
            .map_or(0, |row| row + 1)
    }

    fn is_window_winnable(
        &self,
        player: &Player,
        player_after_move: &Player,
        start: Position,
        axis: Axis,
    ) -> bool {
        let chip = player.chip();
        let rows = self.board.rows();
        let mut missing = 0;
        let mut beneath = 0;
        let mut fewest_above: Option<usize> = None;

        for distance in 0..self.in_a_row {
            let Some(position) = start.offset(axis, distance as isize) else {
                return false;
            };
            let occupant = self.board.chip_at(position);
            if occupant == chip {
                continue;
            }
            if !occupant.is_empty() {
                return false;
            }

            missing += 1;
            // Along the vertical axis only the window's ends touch cells
            // outside of it.
            if axis != Axis::Vertical || distance == 0 {
                beneath += position.row - self.board.column_height(position.column);
            }
            if axis != Axis::Vertical || distance == self.in_a_row - 1 {
                let above = rows - 1 - position.row;
                fewest_above = Some(fewest_above.map_or(above, |fewest| fewest.min(above)));
            }
        }

        let horizon = self.board.free_cells() - fewest_above.unwrap_or(0);
        missing + beneath <= horizon
            && self.moves_within(player, player_after_move, horizon) >= missing
    }
}

impl GameResolutionStrategy for TieResolutionStrategy<'_> {
    fn handle(&self, player_after_move: &Player) -> bool {
        TieResolutionStrategy::handle(self, player_after_move)
    }
}
