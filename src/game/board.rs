use std::fmt;

use super::chip::Chip;
use crate::error::ConfigError;

/// A board slot. Row 0 is the bottom row, column 0 the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Position { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Allowed board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLimits {
    pub min_rows: usize,
    pub max_rows: usize,
    pub min_columns: usize,
    pub max_columns: usize,
}

impl BoardLimits {
    /// Check user-supplied dimensions before building a board from them.
    pub fn check(&self, rows: usize, columns: usize) -> Result<(), ConfigError> {
        if !(self.min_rows..=self.max_rows).contains(&rows) {
            return Err(ConfigError::Validation(format!(
                "rows must be in [{}, {}], got {rows}",
                self.min_rows, self.max_rows
            )));
        }
        if !(self.min_columns..=self.max_columns).contains(&columns) {
            return Err(ConfigError::Validation(format!(
                "columns must be in [{}, {}], got {columns}",
                self.min_columns, self.max_columns
            )));
        }
        Ok(())
    }
}

/// A rows x columns grid of chip slots filled from the bottom up.
///
/// Each column keeps a fill count so that dropping a chip and checking
/// whether a column is full are O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Chip>,
    heights: Vec<usize>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Panics
    ///
    /// If the dimensions fall outside `limits`.
    pub fn new(rows: usize, columns: usize, limits: &BoardLimits) -> Self {
        if let Err(err) = limits.check(rows, columns) {
            panic!("invalid board dimensions {rows}x{columns}: {err}");
        }

        Board {
            rows,
            columns,
            cells: vec![Chip::EMPTY; rows * columns],
            heights: vec![0; columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    fn index(&self, position: Position) -> usize {
        position.row * self.columns + position.column
    }

    fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.column < self.columns
    }

    /// Get the chip at a position. Empty and out-of-range slots yield
    /// [`Chip::EMPTY`].
    pub fn chip_at(&self, position: Position) -> Chip {
        if self.contains(position) {
            self.cells[self.index(position)]
        } else {
            Chip::EMPTY
        }
    }

    /// Number of chips stacked in a column, which is also the row the next
    /// chip dropped there lands on.
    pub fn column_height(&self, column: usize) -> usize {
        self.heights[column]
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        self.heights[column] == self.rows
    }

    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&height| height == self.rows)
    }

    /// Number of slots that can still receive a chip.
    pub fn free_cells(&self) -> usize {
        self.rows * self.columns - self.heights.iter().sum::<usize>()
    }

    /// Whether any chip of this color sits in the column.
    pub fn is_chip_in_column(&self, column: usize, chip: Chip) -> bool {
        self.highest_row_of(column, chip).is_some()
    }

    /// Highest row of the column holding a chip of this color.
    pub fn highest_row_of(&self, column: usize, chip: Chip) -> Option<usize> {
        (0..self.heights[column])
            .rev()
            .find(|&row| self.cells[self.index(Position::new(row, column))] == chip)
    }

    /// Drop a chip into a column.
    ///
    /// Returns `(true, landing position)` on success. A full column is left
    /// untouched and `(false, top row position of that column)` is returned.
    ///
    /// # Panics
    ///
    /// If the column is out of range or the chip is empty.
    pub fn drop_chip(&mut self, column: usize, chip: Chip) -> (bool, Position) {
        assert!(
            column < self.columns,
            "column {column} out of range (board has {} columns)",
            self.columns
        );
        assert!(!chip.is_empty(), "cannot drop an empty chip");

        if self.is_column_full(column) {
            return (false, Position::new(self.rows - 1, column));
        }

        let position = Position::new(self.heights[column], column);
        let index = self.index(position);
        self.cells[index] = chip;
        self.heights[column] += 1;
        (true, position)
    }

    /// Clear a previously dropped chip.
    ///
    /// # Panics
    ///
    /// If `position` is not the topmost chip of its column.
    pub fn reset_chip(&mut self, position: Position) {
        assert!(
            self.contains(position) && self.heights[position.column] == position.row + 1,
            "{position} is not the top chip of its column"
        );

        let index = self.index(position);
        self.cells[index] = Chip::EMPTY;
        self.heights[position.column] -= 1;
    }

    /// Remove every chip.
    pub fn reset(&mut self) {
        self.cells.fill(Chip::EMPTY);
        self.heights.fill(0);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::game::Color;

    pub(crate) const TEST_LIMITS: BoardLimits = BoardLimits {
        min_rows: 1,
        max_rows: 64,
        min_columns: 1,
        max_columns: 64,
    };

    const RED: Chip = Chip::new(Color::RED);
    const BLUE: Chip = Chip::new(Color::BLUE);

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(6, 7, &TEST_LIMITS);
        for row in 0..6 {
            for column in 0..7 {
                assert_eq!(board.chip_at(Position::new(row, column)), Chip::EMPTY);
            }
        }
        assert_eq!(board.free_cells(), 42);
    }

    #[test]
    fn test_drop_chip() {
        let mut board = Board::new(6, 7, &TEST_LIMITS);

        assert_eq!(board.drop_chip(3, RED), (true, Position::new(0, 3)));
        assert_eq!(board.chip_at(Position::new(0, 3)), RED);

        // Lands on top of the first chip
        assert_eq!(board.drop_chip(3, BLUE), (true, Position::new(1, 3)));
        assert_eq!(board.chip_at(Position::new(1, 3)), BLUE);
        assert_eq!(board.column_height(3), 2);
        assert_eq!(board.free_cells(), 40);
    }

    #[test]
    fn test_drop_into_full_column_leaves_board_unchanged() {
        let mut board = Board::new(6, 7, &TEST_LIMITS);
        for _ in 0..6 {
            assert!(board.drop_chip(0, RED).0);
        }
        assert!(board.is_column_full(0));

        let before = board.clone();
        assert_eq!(board.drop_chip(0, BLUE), (false, Position::new(5, 0)));
        assert_eq!(board, before);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_drop_into_invalid_column() {
        let mut board = Board::new(6, 7, &TEST_LIMITS);
        board.drop_chip(7, RED);
    }

    #[test]
    #[should_panic(expected = "invalid board dimensions")]
    fn test_new_board_outside_limits() {
        let limits = BoardLimits {
            min_rows: 6,
            max_rows: 64,
            min_columns: 7,
            max_columns: 64,
        };
        Board::new(5, 7, &limits);
    }

    #[test]
    fn test_chip_at_out_of_range_is_empty() {
        let mut board = Board::new(2, 2, &TEST_LIMITS);
        board.drop_chip(0, RED);
        board.drop_chip(0, RED);
        assert_eq!(board.chip_at(Position::new(2, 0)), Chip::EMPTY);
        assert_eq!(board.chip_at(Position::new(0, 2)), Chip::EMPTY);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(3, 3, &TEST_LIMITS);
        for column in 0..3 {
            for _ in 0..3 {
                board.drop_chip(column, RED);
            }
        }
        assert!(board.is_full());
        assert_eq!(board.free_cells(), 0);
    }

    #[test]
    fn test_column_presence_queries() {
        let mut board = Board::new(6, 7, &TEST_LIMITS);
        board.drop_chip(2, RED);
        board.drop_chip(2, BLUE);
        board.drop_chip(2, RED);
        board.drop_chip(2, BLUE);

        assert!(board.is_chip_in_column(2, RED));
        assert!(!board.is_chip_in_column(3, RED));
        assert_eq!(board.highest_row_of(2, RED), Some(2));
        assert_eq!(board.highest_row_of(2, BLUE), Some(3));
        assert_eq!(board.highest_row_of(0, BLUE), None);
    }

    #[test]
    fn test_reset_chip() {
        let mut board = Board::new(6, 7, &TEST_LIMITS);
        board.drop_chip(1, RED);
        let (_, top) = board.drop_chip(1, BLUE);

        board.reset_chip(top);
        assert_eq!(board.chip_at(top), Chip::EMPTY);
        assert_eq!(board.column_height(1), 1);
        assert_eq!(board.drop_chip(1, BLUE), (true, top));
    }

    #[test]
    #[should_panic(expected = "not the top chip")]
    fn test_reset_chip_below_top_panics() {
        let mut board = Board::new(6, 7, &TEST_LIMITS);
        board.drop_chip(1, RED);
        board.drop_chip(1, BLUE);
        board.reset_chip(Position::new(0, 1));
    }

    #[test]
    fn test_limits_check() {
        let limits = BoardLimits {
            min_rows: 6,
            max_rows: 64,
            min_columns: 7,
            max_columns: 64,
        };
        assert!(limits.check(6, 7).is_ok());
        assert!(limits.check(65, 7).is_err());
        assert!(limits.check(6, 6).is_err());
    }

    #[test]
    fn test_reset() {
        let mut board = Board::new(6, 7, &TEST_LIMITS);
        board.drop_chip(0, RED);
        board.drop_chip(6, BLUE);
        board.reset();
        assert_eq!(board, Board::new(6, 7, &TEST_LIMITS));
    }
}
