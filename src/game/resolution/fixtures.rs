//! Recorded games used to check the resolution strategies move by move.
//!
//! Cells hold move numbers; `w` marks the winning move and `t` the first move
//! at which the tie must be reported.

pub(crate) struct Fixture {
    pub name: &'static str,
    pub in_a_row: usize,
    pub nb_players: usize,
    pub board: &'static str,
}

/// Player 1 stacks four chips in the leftmost column.
pub(crate) const LEFT_VERTICAL_WIN: Fixture = Fixture {
    name: "left vertical win",
    in_a_row: 4,
    nb_players: 2,
    board: "
|   |   |   |   |   |   |   |
|   |   |   |   |   |   |   |
| 7w|   |   |   |   |   |   |
| 5 | 6 |   |   |   |   |   |
| 3 | 4 |   |   |   |   |   |
| 1 | 2 |   |   |   |   |   |
",
};

pub(crate) const DESCENDING_DIAGONAL_WIN: Fixture = Fixture {
    name: "descending diagonal win",
    in_a_row: 4,
    nb_players: 2,
    board: "
|   |   |   |   |   |   |   |
|   |   |   |   |   |   |   |
|   |   |   |11w|   |   |   |
|   |   |   | 9 | 7 |   |   |
|   |   |   | 8 | 5 | 3 |   |
|10 |   |   | 6 | 4 | 2 | 1 |
",
};

/// Three players, K = 3: the last chip joins two pairs into a line of five.
pub(crate) const GAP_FILLING_WIN: Fixture = Fixture {
    name: "gap filling win",
    in_a_row: 3,
    nb_players: 3,
    board: "
|   |   |   |   |   |
| 3 | 6 |   | 9 |12 |
| 2 | 5 |   | 8 |11 |
| 1 | 4 |13w| 7 |10 |
",
};

pub(crate) const WIN_FIXTURES: [Fixture; 3] =
    [LEFT_VERTICAL_WIN, DESCENDING_DIAGONAL_WIN, GAP_FILLING_WIN];

/// Four players, K = 6, play crowded on the left. Before move 36, player 4
/// could still stack six chips in one of the empty columns on the right;
/// after playing elsewhere, every player is left with 5 turns.
pub(crate) const LEFT_VERTICAL_TIE: Fixture = Fixture {
    name: "left vertical tie",
    in_a_row: 6,
    nb_players: 4,
    board: "
|14 |21 |28 |36t|   |   |   |
|13 |20 |27 |35 |   |   |   |
|10 |15 |26 |34 |   |   |   |
| 8 |11 |24 |33 |   |   |   |
| 7 | 9 |22 |32 |31 |   |   |
| 6 | 5 |19 |25 |30 |   |   |
| 4 | 3 |18 |23 |29 |   |   |
| 1 | 2 |16 |17 |12 |   |   |
",
};

/// Three players, K = 7, on a 9x8 board. The horizontal windows close one
/// after the other; the last open window is player 1's vertical one in the
/// fourth column, which move 54 caps.
pub(crate) const HORIZONTAL_TIE: Fixture = Fixture {
    name: "horizontal tie",
    in_a_row: 7,
    nb_players: 3,
    board: "
|   |   |   |   |49 |48 |53 |   |
|52 |   |   |   |47 |40 |50 |   |
|45 |   |   |   |37 |39 |46 |   |
|42 |43 |   |   |33 |29 |36 |   |
|25 |41 |51 |   |32 |28 |35 |   |
|10 |31 |44 |54t|14 |24 |34 |38 |
| 9 |22 |20 |19 |13 |23 |30 |27 |
| 7 |12 |11 | 8 | 4 |17 |26 |21 |
| 5 | 3 | 6 | 1 | 2 |16 |15 |18 |
",
};

/// Three players, K = 3. Nobody can win any more after move 12, but the
/// tie is only reported at move 15.
pub(crate) const LATE_TIE: Fixture = Fixture {
    name: "late tie",
    in_a_row: 3,
    nb_players: 3,
    board: "
|11 |   |12 | 9 |
|10 |15t| 6 | 8 |
| 4 |14 | 5 | 7 |
| 3 |13 | 2 | 1 |
",
};

pub(crate) const TIE_FIXTURES: [Fixture; 3] = [LEFT_VERTICAL_TIE, HORIZONTAL_TIE, LATE_TIE];
