use thiserror::Error;

/// Errors surfaced by network construction, training and reporting.
///
/// Every variant signals a configuration or programming mistake, not a
/// transient condition; callers should propagate instead of retrying.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Training data or a selector that violates the input contract.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An activation selector with no table entry.
    #[error("unsupported activation function: {0}")]
    UnsupportedActivation(String),
}
