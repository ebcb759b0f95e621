use thiserror::Error;

/// Errors that can occur in the fallible normalization pipeline.
///
/// Callers that go through [`normalize`](crate::normalize) never see these:
/// the total entry point degrades to case-folded output instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
