//! Crate-level error types.
//!
//! The high-frequency input paths never produce errors (malformed input
//! is clamped or dropped); errors exist only on the configuration I/O
//! surface.

use std::fmt;

/// Errors produced by the orbitview crate.
#[derive(Debug)]
pub enum OrbitViewError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for OrbitViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for OrbitViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for OrbitViewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
