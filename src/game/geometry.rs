//! Line geometry shared by the resolution strategies.

use super::board::Position;

/// The four directions a line of chips can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// `-`
    Horizontal,
    /// `|`
    Vertical,
    /// `/`
    AscendingDiagonal,
    /// `\`
    DescendingDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::AscendingDiagonal,
        Axis::DescendingDiagonal,
    ];

    /// Unit step `(row delta, column delta)` towards the forward end of the axis.
    pub fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::AscendingDiagonal => (1, 1),
            Axis::DescendingDiagonal => (-1, 1),
        }
    }
}

impl Position {
    /// The position `distance` steps along `axis` (negative goes backward),
    /// or `None` when it would have a negative coordinate.
    pub fn offset(self, axis: Axis, distance: isize) -> Option<Position> {
        let (row_step, column_step) = axis.step();
        let row = self.row.checked_add_signed(row_step * distance)?;
        let column = self.column.checked_add_signed(column_step * distance)?;
        Some(Position::new(row, column))
    }
}

/// The box a line of `in_a_row` chips through a position can occupy without
/// leaving the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationLimits {
    position: Position,
    left: usize,
    right: usize,
    lower: usize,
    upper: usize,
}

impl ValidationLimits {
    pub fn around(position: Position, in_a_row: usize, rows: usize, columns: usize) -> Self {
        let reach = in_a_row.saturating_sub(1);
        ValidationLimits {
            position,
            left: position.column.saturating_sub(reach),
            right: (position.column + reach).min(columns - 1),
            lower: position.row.saturating_sub(reach),
            upper: (position.row + reach).min(rows - 1),
        }
    }

    /// Leftmost reachable column.
    pub fn left(&self) -> usize {
        self.left
    }

    /// Rightmost reachable column.
    pub fn right(&self) -> usize {
        self.right
    }

    /// Lowest reachable row.
    pub fn lower(&self) -> usize {
        self.lower
    }

    /// Highest reachable row.
    pub fn upper(&self) -> usize {
        self.upper
    }

    /// Steps that can be taken backward along `axis` before leaving the box.
    pub fn backward_reach(&self, axis: Axis) -> usize {
        let Position { row, column } = self.position;
        let to_left = column - self.left;
        match axis {
            Axis::Horizontal => to_left,
            Axis::Vertical => row - self.lower,
            Axis::AscendingDiagonal => to_left.min(row - self.lower),
            Axis::DescendingDiagonal => to_left.min(self.upper - row),
        }
    }

    /// Steps that can be taken forward along `axis` before leaving the box.
    pub fn forward_reach(&self, axis: Axis) -> usize {
        let Position { row, column } = self.position;
        let to_right = self.right - column;
        match axis {
            Axis::Horizontal => to_right,
            Axis::Vertical => self.upper - row,
            Axis::AscendingDiagonal => to_right.min(self.upper - row),
            Axis::DescendingDiagonal => to_right.min(row - self.lower),
        }
    }
}
