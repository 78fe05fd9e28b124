use super::chip::{Chip, Color};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    name: String,
    chip: Chip,
}

impl Player {
    pub fn new(name: impl Into<String>, chip: Chip) -> Self {
        Player {
            name: name.into(),
            chip,
        }
    }

    /// Get player name for display
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chip(&self) -> Chip {
        self.chip
    }
}

/// Build `count` players named "Player 1".."Player n", colored from the palette.
pub fn default_players(count: usize) -> Vec<Player> {
    assert!(
        count <= Color::PALETTE.len(),
        "at most {} default players are available, {count} requested",
        Color::PALETTE.len()
    );

    Color::PALETTE
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, &(_, color))| Player::new(format!("Player {}", i + 1), Chip::new(color)))
        .collect()
}
