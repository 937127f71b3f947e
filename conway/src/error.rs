use std::path::PathBuf;
use thiserror::Error;

/// Shape violations when building a grid from raw rows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must be at least 1x1, got {height}x{width}")]
    Empty { height: usize, width: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
}

/// Malformed grid text. Line, row and column numbers are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("grid text is empty")]
    Empty,

    #[error("lines length mismatch: line {line} contains {found} characters, expected {expected}")]
    WidthMismatch { line: usize, expected: usize, found: usize },

    #[error("invalid character: {ch:?} at position {row}:{col}")]
    InvalidCharacter { ch: char, row: usize, col: usize },
}

/// Errors that can occur when loading a grid file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Format(#[from] FormatError),

    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),
}

/// Errors that can occur when loading settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("live and dead symbols must differ, both are {0:?}")]
    SameSymbols(char),
}

#[derive(Error, Debug)]
pub enum CgolError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CgolError>;
