//! Error types for libgame.

use thiserror::Error;

/// Errors raised by grid construction and cell access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Width or height is zero or outside the host's declared bounds.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// A cell coordinate lies outside the current grid.
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// Random seeding asked for more live cells than the grid holds.
    #[error("requested {requested} alive cells but the grid only has {available}")]
    TooManyAliveCells { requested: usize, available: usize },
}

/// Selection of a preset name the catalog doesn't know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown preset: {0}")]
pub struct UnknownPreset(pub String);

/// Why a digit string was rejected as a neighbor-count set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("rule digits must not be empty")]
    Empty,

    #[error("rule digits must be at most 9 characters, got {len}")]
    TooLong { len: usize },

    #[error("'{0}' is not a digit")]
    NonDigit(char),

    #[error("digit '{0}' exceeds the maximum neighbor count of 8")]
    DisallowedDigit(char),

    #[error("digit '{0}' appears more than once")]
    DuplicateDigit(char),
}

/// A rejected survive/birth pair, naming the offending side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("invalid survive digits: {0}")]
    Survive(#[source] ValidationError),

    #[error("invalid birth digits: {0}")]
    Birth(#[source] ValidationError),
}

impl RuleError {
    pub fn reason(&self) -> ValidationError {
        match self {
            RuleError::Survive(reason) | RuleError::Birth(reason) => *reason,
        }
    }
}
