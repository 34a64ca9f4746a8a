use thiserror::Error;

/// Errors raised by the similarity engine.
///
/// Degenerate inputs (empty documents, empty token sets) are not errors;
/// every metric resolves to 0.0 in that case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    /// A strategy parameter is out of range, e.g. a chunk size of 0.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A strategy name could not be parsed.
    /// `run_by_name` converts this into the fallback result instead of failing.
    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),

    /// The cancel flag was raised while a scan was in progress.
    #[error("comparison cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, SimilarityError>;
