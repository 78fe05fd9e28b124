use tracing::{debug, info};

use super::resolution::{GameResolutionStrategy, ResolutionKind, ResolutionStrategyFactory};
use super::{Board, BoardLimits, Player, Position};
use crate::config::AppConfig;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column does not exist")]
    InvalidColumn,
    #[error("column is full")]
    ColumnFull,
    #[error("game is over")]
    GameOver,
    #[error("no move to undo")]
    NothingToUndo,
    #[error("no move to redo")]
    NothingToRedo,
}

/// A game in progress: the board, who plays, and every move so far.
///
/// Win and tie are resolved after each drop; once either is reached, further
/// drops are refused until a move is undone or the game is reinitialized.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    players: Vec<Player>,
    in_a_row: usize,
    taken_positions: Vec<Position>,
    /// Columns of undone moves, most recent last.
    undone: Vec<usize>,
    outcome: Option<GameOutcome>,
}

impl GameSession {
    /// # Panics
    ///
    /// If the board falls outside `limits`, if `in_a_row` is not greater
    /// than 2, or with fewer than two players.
    pub fn new(
        rows: usize,
        columns: usize,
        in_a_row: usize,
        players: Vec<Player>,
        limits: &BoardLimits,
    ) -> Self {
        assert!(in_a_row > 2, "in-a-row value must be greater than 2, got {in_a_row}");
        assert!(players.len() >= 2, "at least two players are required");

        GameSession {
            board: Board::new(rows, columns, limits),
            players,
            in_a_row,
            taken_positions: Vec::new(),
            undone: Vec::new(),
            outcome: None,
        }
    }

    /// Start the game described by a configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let game = &config.game;
        Ok(GameSession::new(
            game.rows,
            game.columns,
            game.in_a_row,
            game.players(),
            &config.limits.board(),
        ))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn in_a_row(&self) -> usize {
        self.in_a_row
    }

    /// Positions filled so far, in play order.
    pub fn taken_positions(&self) -> &[Position] {
        &self.taken_positions
    }

    /// Player whose turn it is
    pub fn active_player(&self) -> &Player {
        &self.players[self.active_index()]
    }

    /// Player who plays after the active one
    pub fn next_player(&self) -> &Player {
        let next = (self.active_index() + 1) % self.players.len();
        debug_assert_ne!(next, self.active_index());
        &self.players[next]
    }

    fn active_index(&self) -> usize {
        self.taken_positions.len() % self.players.len()
    }

    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns that still accept a chip; none once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.columns())
            .filter(|&column| !self.board.is_column_full(column))
            .collect()
    }

    /// Drop the active player's chip into `column`.
    pub fn drop_chip(&mut self, column: usize) -> Result<Position, MoveError> {
        let position = self.play(column)?;
        self.undone.clear();
        Ok(position)
    }

    /// Take back the last move.
    pub fn undo(&mut self) -> Result<Position, MoveError> {
        let position = self.taken_positions.pop().ok_or(MoveError::NothingToUndo)?;
        self.board.reset_chip(position);
        self.undone.push(position.column);
        self.outcome = None;

        debug!(%position, "move undone");
        Ok(position)
    }

    /// Play again the last undone move.
    pub fn redo(&mut self) -> Result<Position, MoveError> {
        let column = *self.undone.last().ok_or(MoveError::NothingToRedo)?;
        let position = self.play(column)?;
        self.undone.pop();
        Ok(position)
    }

    /// Clear the board and the history; the first player starts again.
    pub fn reinitialize(&mut self) {
        self.board.reset();
        self.taken_positions.clear();
        self.undone.clear();
        self.outcome = None;
        debug!("game reinitialized");
    }

    fn play(&mut self, column: usize) -> Result<Position, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if column >= self.board.columns() {
            return Err(MoveError::InvalidColumn);
        }

        let mover = self.active_index();
        let (dropped, position) = self.board.drop_chip(column, self.players[mover].chip());
        if !dropped {
            return Err(MoveError::ColumnFull);
        }
        self.taken_positions.push(position);
        debug!(player = self.players[mover].name(), %position, "chip dropped");

        self.outcome = self.resolve(mover);
        match &self.outcome {
            Some(GameOutcome::Winner(player)) => {
                info!(winner = player.name(), moves = self.taken_positions.len(), "game won")
            }
            Some(GameOutcome::Tie) => info!(moves = self.taken_positions.len(), "game tied"),
            None => {}
        }

        Ok(position)
    }

    fn resolve(&self, mover: usize) -> Option<GameOutcome> {
        let player_after_move = self.active_player();
        let strategy = |kind| {
            ResolutionStrategyFactory::make(
                &self.board,
                self.in_a_row,
                &self.players,
                &self.taken_positions,
                kind,
            )
        };

        if strategy(ResolutionKind::Win).handle(player_after_move) {
            Some(GameOutcome::Winner(self.players[mover].clone()))
        } else if strategy(ResolutionKind::Tie).handle(player_after_move) {
            Some(GameOutcome::Tie)
        } else {
            None
        }
    }
}
