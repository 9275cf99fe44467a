/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur while building or running a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A configuration value is outside its valid domain.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A model-type constructor rejected its inputs.
    #[error(transparent)]
    Core(#[from] ek_core::EkError),

    /// Propagated I/O error from the trace sink.
    #[error("trace I/O error: {0}")]
    Trace(#[from] std::io::Error),

    /// A trace file contained a line that is not four real numbers.
    #[error("malformed trace record at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number within the trace file.
        line: usize,
        /// Why the line failed to parse.
        reason: String,
    },
}
