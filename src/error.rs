//! Crate-level error types.
//!
//! The camera and projection kernel never fails; degenerate numeric input
//! produces degenerate matrices instead. Errors only come from the edges:
//! reading files, parsing option presets, and driver arguments.

use std::fmt;

/// Errors produced by the camkit crate.
#[derive(Debug)]
pub enum CamkitError {
    /// Generic I/O failure (OBJ or preset file).
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Invalid command-line arguments for the driver binary.
    Args(String),
}

impl fmt::Display for CamkitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Args(msg) => write!(f, "invalid arguments: {msg}"),
        }
    }
}

impl std::error::Error for CamkitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CamkitError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
