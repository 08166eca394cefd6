//! Table layout error types.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TableError {
    #[error("row {row} has {found} children, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid table config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TableError>;
