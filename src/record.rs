//! ASCII game records: a board drawn row by row, top row first, each cell
//! holding the number of the move that filled it.
//!
//! ```text
//! |   |   |   |   |
//! | 5 |   |   |   |
//! | 3 | 4t|   |   |
//! | 1 | 2 |   |   |
//! ```
//!
//! A `w` after a move number marks the move expected to win, a `t` the first
//! move at which a tie is expected. Blank lines and lines starting with `#`
//! are ignored.

use tracing::debug;

use crate::error::RecordError;
use crate::game::resolution::{GameResolutionStrategy, ResolutionKind, ResolutionStrategyFactory};
use crate::game::{Board, BoardLimits, Player, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Win,
    Tie,
}

impl Marker {
    fn symbol(self) -> char {
        match self {
            Marker::Win => 'w',
            Marker::Tie => 't',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedMove {
    /// 1-based move number.
    pub number: usize,
    pub position: Position,
    pub marker: Option<Marker>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    rows: usize,
    columns: usize,
    /// Sorted by move number.
    moves: Vec<RecordedMove>,
}

impl GameRecord {
    pub fn parse(text: &str) -> Result<Self, RecordError> {
        let mut grid: Vec<Vec<Option<(usize, Option<Marker>)>>> = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let inner = trimmed
                .strip_prefix('|')
                .and_then(|rest| rest.strip_suffix('|'))
                .ok_or_else(|| RecordError::InvalidCell {
                    line: line_number,
                    cell: trimmed.to_string(),
                })?;

            let cells = inner
                .split('|')
                .map(|cell| parse_cell(cell, line_number))
                .collect::<Result<Vec<_>, _>>()?;

            if let Some(first) = grid.first() {
                if first.len() != cells.len() {
                    return Err(RecordError::RaggedRow {
                        line: line_number,
                        expected: first.len(),
                        found: cells.len(),
                    });
                }
            }
            grid.push(cells);
        }

        if grid.is_empty() {
            return Err(RecordError::Empty);
        }

        let rows = grid.len();
        let columns = grid[0].len();
        // Lines come top row first; row 0 is the bottom.
        grid.reverse();

        let mut moves: Vec<RecordedMove> = grid
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells.iter().enumerate().filter_map(move |(column, cell)| {
                    cell.map(|(number, marker)| RecordedMove {
                        number,
                        position: Position::new(row, column),
                        marker,
                    })
                })
            })
            .collect();
        moves.sort_by_key(|recorded| recorded.number);

        for (index, recorded) in moves.iter().enumerate() {
            let expected = index + 1;
            if recorded.number < expected {
                return Err(RecordError::DuplicateMove(recorded.number));
            }
            if recorded.number > expected {
                return Err(RecordError::MissingMove(expected));
            }
        }

        for marker in [Marker::Win, Marker::Tie] {
            if moves.iter().filter(|recorded| recorded.marker == Some(marker)).count() > 1 {
                return Err(RecordError::DuplicateMarker(marker.symbol()));
            }
        }

        for recorded in &moves {
            let Position { row, column } = recorded.position;
            let supported = row == 0
                || grid[row - 1][column].is_some_and(|(below, _)| below < recorded.number);
            if !supported {
                return Err(RecordError::FloatingChip {
                    number: recorded.number,
                    position: recorded.position.to_string(),
                });
            }
        }

        Ok(GameRecord {
            rows,
            columns,
            moves,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn moves(&self) -> &[RecordedMove] {
        &self.moves
    }

    pub fn columns_in_play_order(&self) -> Vec<usize> {
        self.moves.iter().map(|recorded| recorded.position.column).collect()
    }

    /// Check that a line of `in_a_row` chips fits on the recorded board.
    pub fn check_in_a_row(&self, in_a_row: usize) -> Result<(), RecordError> {
        if in_a_row > self.rows.max(self.columns) {
            return Err(RecordError::LineTooLong {
                in_a_row,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }

    /// Number of the move marked as winning.
    pub fn expected_win(&self) -> Option<usize> {
        self.marked(Marker::Win)
    }

    /// Number of the first move marked as tied.
    pub fn expected_tie(&self) -> Option<usize> {
        self.marked(Marker::Tie)
    }

    fn marked(&self, marker: Marker) -> Option<usize> {
        self.moves
            .iter()
            .find(|recorded| recorded.marker == Some(marker))
            .map(|recorded| recorded.number)
    }
}

fn parse_cell(cell: &str, line: usize) -> Result<Option<(usize, Option<Marker>)>, RecordError> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(None);
    }

    let (digits, marker) = match cell.chars().last() {
        Some('w') => (&cell[..cell.len() - 1], Some(Marker::Win)),
        Some('t') => (&cell[..cell.len() - 1], Some(Marker::Tie)),
        _ => (cell, None),
    };

    match digits.trim().parse::<usize>() {
        Ok(number) if number > 0 => Ok(Some((number, marker))),
        _ => Err(RecordError::InvalidCell {
            line,
            cell: cell.to_string(),
        }),
    }
}

/// Resolution results right after one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveVerdict {
    pub number: usize,
    pub position: Position,
    pub won: bool,
    pub tied: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    pub verdicts: Vec<MoveVerdict>,
    pub first_win: Option<usize>,
    pub first_tie: Option<usize>,
}

/// Replay every move of a record on a fresh board, asking for a win and a
/// tie after each one. Players take turns in list order.
///
/// # Panics
///
/// If the record's dimensions fall outside `limits`.
pub fn replay(
    record: &GameRecord,
    in_a_row: usize,
    players: &[Player],
    limits: &BoardLimits,
) -> ReplayReport {
    let mut board = Board::new(record.rows, record.columns, limits);
    let mut taken = Vec::with_capacity(record.moves.len());
    let mut verdicts = Vec::with_capacity(record.moves.len());

    for recorded in &record.moves {
        let mover = &players[taken.len() % players.len()];
        let (dropped, position) = board.drop_chip(recorded.position.column, mover.chip());
        debug_assert!(dropped && position == recorded.position);
        taken.push(position);

        let next = &players[taken.len() % players.len()];
        let won = ResolutionStrategyFactory::make(&board, in_a_row, players, &taken, ResolutionKind::Win)
            .handle(next);
        let tied = ResolutionStrategyFactory::make(&board, in_a_row, players, &taken, ResolutionKind::Tie)
            .handle(next);
        debug!(number = recorded.number, %position, player = mover.name(), won, tied, "replayed move");

        verdicts.push(MoveVerdict {
            number: recorded.number,
            position,
            won,
            tied,
        });
    }

    let first_win = verdicts.iter().find(|verdict| verdict.won).map(|verdict| verdict.number);
    let first_tie = verdicts.iter().find(|verdict| verdict.tied).map(|verdict| verdict.number);

    ReplayReport {
        verdicts,
        first_win,
        first_tie,
    }
}
