use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TierError>;

#[derive(Debug, Error)]
pub enum TierError {
    #[error("Index {index} is out of bounds for a sequence of length {len}")]
    InvalidIndex { index: usize, len: usize },

    #[error("Row not found: {0}")]
    UnknownRow(String),

    #[error("Item not found: {0}")]
    UnknownItem(String),

    #[error("Duplicate row name: {0}")]
    DuplicateRow(String),

    #[error("Duplicate item name: {0}")]
    DuplicateItem(String),

    #[error("Invalid direction '{0}'. Valid directions: up, down")]
    InvalidDirection(String),

    #[error("Seed file not found: {}", .0.display())]
    SeedNotFound(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
