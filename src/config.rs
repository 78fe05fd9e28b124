use std::collections::HashSet;
use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{BoardLimits, Chip, Color, Player};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub limits: Limits,
    pub game: GameSettings,
}

/// Bounds every new game must respect.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Limits {
    pub min_rows: usize,
    pub max_rows: usize,
    pub min_columns: usize,
    pub max_columns: usize,
    pub min_in_a_row: usize,
    pub max_in_a_row: usize,
    pub min_players: usize,
    pub max_players: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            min_rows: 6,
            max_rows: 64,
            min_columns: 7,
            max_columns: 64,
            min_in_a_row: 3,
            max_in_a_row: 8,
            min_players: 2,
            max_players: 10,
        }
    }
}

impl Limits {
    pub fn board(&self) -> BoardLimits {
        BoardLimits {
            min_rows: self.min_rows,
            max_rows: self.max_rows,
            min_columns: self.min_columns,
            max_columns: self.max_columns,
        }
    }
}

/// Settings for the game started at launch.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub rows: usize,
    pub columns: usize,
    pub in_a_row: usize,
    pub players: Vec<PlayerConfig>,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            rows: 6,
            columns: 7,
            in_a_row: 4,
            players: vec![
                PlayerConfig::new("Player 1", "red"),
                PlayerConfig::new("Player 2", "blue"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    /// Palette name (`"red"`) or `#rrggbb`.
    pub color: String,
}

impl PlayerConfig {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        PlayerConfig {
            name: name.into(),
            color: color.into(),
        }
    }
}

impl GameSettings {
    /// Players in turn order. Only meaningful on validated settings: an
    /// unknown color resolves to the transparent chip.
    pub fn players(&self) -> Vec<Player> {
        self.players
            .iter()
            .map(|player| {
                let color = Color::from_name(&player.color).unwrap_or(Color::TRANSPARENT);
                Player::new(player.name.clone(), Chip::new(color))
            })
            .collect()
    }

    /// Replace the players with `count` default ones.
    pub fn use_default_players(&mut self, count: usize) {
        self.players = Color::PALETTE
            .iter()
            .take(count)
            .enumerate()
            .map(|(i, (name, _))| PlayerConfig::new(format!("Player {}", i + 1), *name))
            .collect();
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_limits()?;
        self.validate_game()
    }

    fn validate_limits(&self) -> Result<(), ConfigError> {
        let limits = &self.limits;
        if limits.min_rows == 0 || limits.min_rows > limits.max_rows {
            return Err(ConfigError::Validation(
                "limits.min_rows must be in [1, limits.max_rows]".into(),
            ));
        }
        if limits.min_columns == 0 || limits.min_columns > limits.max_columns {
            return Err(ConfigError::Validation(
                "limits.min_columns must be in [1, limits.max_columns]".into(),
            ));
        }
        if limits.min_in_a_row <= 2 {
            return Err(ConfigError::Validation(
                "limits.min_in_a_row must be > 2".into(),
            ));
        }
        if limits.min_in_a_row > limits.max_in_a_row {
            return Err(ConfigError::Validation(
                "limits.min_in_a_row must be <= limits.max_in_a_row".into(),
            ));
        }
        if limits.min_players < 2 {
            return Err(ConfigError::Validation(
                "limits.min_players must be >= 2".into(),
            ));
        }
        if limits.min_players > limits.max_players {
            return Err(ConfigError::Validation(
                "limits.min_players must be <= limits.max_players".into(),
            ));
        }
        if limits.max_players > Color::PALETTE.len() {
            return Err(ConfigError::Validation(format!(
                "limits.max_players must be <= {}",
                Color::PALETTE.len()
            )));
        }
        Ok(())
    }

    fn validate_game(&self) -> Result<(), ConfigError> {
        let limits = &self.limits;
        let game = &self.game;

        limits.board().check(game.rows, game.columns)?;

        if !(limits.min_in_a_row..=limits.max_in_a_row).contains(&game.in_a_row) {
            return Err(ConfigError::Validation(format!(
                "game.in_a_row must be in [{}, {}]",
                limits.min_in_a_row, limits.max_in_a_row
            )));
        }
        if game.in_a_row > game.rows.max(game.columns) {
            return Err(ConfigError::Validation(
                "game.in_a_row must fit on the board".into(),
            ));
        }
        if !(limits.min_players..=limits.max_players).contains(&game.players.len()) {
            return Err(ConfigError::Validation(format!(
                "game.players must have between {} and {} entries",
                limits.min_players, limits.max_players
            )));
        }

        let mut names = HashSet::new();
        let mut colors = HashSet::new();
        for player in &game.players {
            if player.name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "player names must not be empty".into(),
                ));
            }
            if !names.insert(player.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "player name '{}' is used twice",
                    player.name
                )));
            }

            let color = Color::from_name(&player.color).ok_or_else(|| {
                ConfigError::Validation(format!("unknown color '{}'", player.color))
            })?;
            if color.is_transparent() {
                return Err(ConfigError::Validation(format!(
                    "player '{}' cannot use a transparent color",
                    player.name
                )));
            }
            if !colors.insert(color) {
                return Err(ConfigError::Validation(format!(
                    "color '{}' is used twice",
                    player.color
                )));
            }
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
in_a_row = 5
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.in_a_row, 5);
        // Other fields should be defaults
        assert_eq!(config.game.rows, 6);
        assert_eq!(config.game.players.len(), 2);
        assert_eq!(config.limits, Limits::default());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.game, GameSettings::default());
        assert_eq!(config.limits, Limits::default());
    }

    #[test]
    fn test_players_from_settings() {
        let players = GameSettings::default().players();
        assert_eq!(players[0].name(), "Player 1");
        assert_eq!(players[0].chip(), Chip::new(Color::RED));
        assert_eq!(players[1].chip(), Chip::new(Color::BLUE));
    }

    #[test]
    fn test_use_default_players() {
        let mut config = AppConfig::default();
        config.game.use_default_players(4);
        assert_eq!(config.game.players.len(), 4);
        assert_eq!(config.game.players[3], PlayerConfig::new("Player 4", "green"));
        config.validate().expect("default players should be valid");
    }

    #[test]
    fn test_validation_rejects_small_board() {
        let mut config = AppConfig::default();
        config.game.rows = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_in_a_row_outside_limits() {
        let mut config = AppConfig::default();
        config.game.in_a_row = 9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_in_a_row_larger_than_board() {
        let mut config = AppConfig::default();
        config.limits.min_rows = 3;
        config.limits.min_columns = 3;
        config.game.rows = 3;
        config.game.columns = 4;
        config.game.in_a_row = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_in_a_row_limit_of_two() {
        let mut config = AppConfig::default();
        config.limits.min_in_a_row = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_inverted_limits() {
        let mut config = AppConfig::default();
        config.limits.min_columns = 10;
        config.limits.max_columns = 8;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_too_many_players() {
        let mut config = AppConfig::default();
        config.limits.max_players = 11;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.limits.max_players = 3;
        config.game.use_default_players(4);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_single_player() {
        let mut config = AppConfig::default();
        config.game.players.truncate(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_names() {
        let mut config = AppConfig::default();
        config.game.players[1].name = "Player 1".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_colors() {
        let mut config = AppConfig::default();
        config.game.players[1].color = "#ff0000".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_color() {
        let mut config = AppConfig::default();
        config.game.players[0].color = "ultraviolet".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.game.in_a_row, 4);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r##"
[game]
rows = 8
columns = 7
in_a_row = 6

[[game.players]]
name = "Ann"
color = "orange"

[[game.players]]
name = "Bob"
color = "purple"

[[game.players]]
name = "Cy"
color = "#123456"
"##
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.rows, 8);
        assert_eq!(config.game.players.len(), 3);
        assert_eq!(config.game.players()[2].chip(), Chip::new(Color::rgb(0x12, 0x34, 0x56)));
        // Others are defaults
        assert_eq!(config.limits.max_rows, 64);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[game]\nrows = 100\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "[game\n").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
