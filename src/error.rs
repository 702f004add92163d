use thiserror::Error;

/// Errors produced while building a dancing-links matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Ways an input matrix or its column names can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("matrix has no rows")]
    EmptyMatrix,
    #[error("matrix has no columns")]
    ZeroWidth,
    #[error("row {row} has {width} entries, expected {expected}")]
    RowWidth {
        row: usize,
        width: usize,
        expected: usize,
    },
    #[error("column name {name:?} is used more than once")]
    DuplicateName { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
