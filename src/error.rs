use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur when reading an ASCII game record.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("record contains no board rows")]
    Empty,

    #[error("line {line}: expected {expected} cells, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid cell '{cell}'")]
    InvalidCell { line: usize, cell: String },

    #[error("move {0} appears more than once")]
    DuplicateMove(usize),

    #[error("move {0} is missing")]
    MissingMove(usize),

    #[error("more than one '{0}' marker")]
    DuplicateMarker(char),

    #[error("move {number} at {position} is not supported from below")]
    FloatingChip { number: usize, position: String },

    #[error("{in_a_row} in a row cannot fit on a {rows}x{columns} board")]
    LineTooLong {
        in_a_row: usize,
        rows: usize,
        columns: usize,
    },
}
