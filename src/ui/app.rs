use crate::game::{GameOutcome, GameSession};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    session: GameSession,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(session: GameSession) -> Self {
        let selected_column = session.board().columns() / 2; // Start in middle
        App {
            session,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.session.board().columns() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_chip();
            }
            KeyCode::Char('u') => {
                if let Err(e) = self.session.undo() {
                    self.message = Some(format!("Cannot undo: {e}"));
                }
            }
            KeyCode::Char('y') => match self.session.redo() {
                Ok(_) => self.announce_outcome(),
                Err(e) => self.message = Some(format!("Cannot redo: {e}")),
            },
            KeyCode::Char('r') => {
                self.session.reinitialize();
                self.selected_column = self.session.board().columns() / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop a chip in the selected column
    fn drop_chip(&mut self) {
        if self.session.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart or 'u' to undo.".to_string());
            return;
        }

        match self.session.drop_chip(self.selected_column) {
            Ok(_) => self.announce_outcome(),
            Err(e) => self.message = Some(format!("Cannot drop there: {e}")),
        }
    }

    fn announce_outcome(&mut self) {
        if let Some(outcome) = self.session.outcome() {
            self.message = Some(match outcome {
                GameOutcome::Winner(player) => format!("{} wins!", player.name()),
                GameOutcome::Tie => "It's a tie!".to_string(),
            });
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.selected_column, &self.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::tests::TEST_LIMITS;
    use crate::game::default_players;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(GameSession::new(6, 7, 4, default_players(2), &TEST_LIMITS))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_selection_stays_on_the_board() {
        let mut app = app();
        assert_eq!(app.selected_column, 3);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn test_win_is_announced() {
        let mut app = app();
        for column in [0, 1, 0, 1, 0, 1, 0] {
            app.selected_column = column;
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.message.as_deref(), Some("Player 1 wins!"));

        press(&mut app, KeyCode::Char(' '));
        assert!(app.message.as_deref().unwrap_or("").starts_with("Game over!"));
    }

    #[test]
    fn test_undo_redo_and_restart_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('u'));
        assert!(app.session().taken_positions().is_empty());

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.message.as_deref(), Some("Cannot undo: no move to undo"));

        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.session().taken_positions().len(), 1);

        press(&mut app, KeyCode::Char('r'));
        assert!(app.session().taken_positions().is_empty());
        assert_eq!(app.message.as_deref(), Some("New game started!"));
    }

    #[test]
    fn test_full_column_is_reported() {
        let mut app = app();
        for _ in 0..6 {
            press(&mut app, KeyCode::Enter);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message.as_deref(), Some("Cannot drop there: column is full"));
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_shows_active_player() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(screen.contains("Current Player: Player 1"));
        assert!(screen.contains("6x7, 4 in a row"));
    }
}
