use crate::game::{Board, Chip, Position};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const SELECTED: Color = Color::Cyan;

/// Terminal color of a chip.
pub fn chip_style(chip: Chip) -> Style {
    if chip.is_empty() {
        return Style::default().fg(Color::DarkGray);
    }
    let color = chip.color();
    Style::default().fg(Color::Rgb(color.r, color.g, color.b))
}

/// Lines drawing `board` top row first, framed, with column numbers above
/// and a marker under `selected_column`. Chips of the last move are bold.
pub fn board_lines(board: &Board, selected_column: usize, last_move: Option<Position>) -> Vec<Line<'static>> {
    let columns = board.columns();
    let mut lines = Vec::with_capacity(board.rows() + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for column in 0..columns {
        let label = format!("{:^3}", column + 1);
        if column == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(SELECTED)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(3 * columns + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in (0..board.rows()).rev() {
        let mut row_spans = vec![Span::raw("  ║")];
        for column in 0..columns {
            let position = Position::new(row, column);
            let chip = board.chip_at(position);
            let symbol = if chip.is_empty() { " . " } else { " ● " };
            let mut style = chip_style(chip);
            if last_move == Some(position) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for column in 0..columns {
        if column == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(SELECTED)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}
