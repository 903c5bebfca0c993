use thiserror::Error;

/// Errors surfaced by the line pipeline.
///
/// The transformations themselves never fail; only configuration can be
/// rejected up front.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinesError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
