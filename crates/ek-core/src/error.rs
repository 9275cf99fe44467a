/// Alias for `Result<T, EkError>`.
pub type EkResult<T> = Result<T, EkError>;

/// Errors that can occur when constructing model types.
#[derive(Debug, thiserror::Error)]
pub enum EkError {
    /// A constructor was given a value outside its domain.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
}
