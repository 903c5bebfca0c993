use thiserror::Error;

/// Errors from the bounded diff entry points.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    #[error("diff input has {lines} lines, limit is {limit}")]
    InputTooLarge { lines: usize, limit: usize },
}
