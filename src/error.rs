use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArithmosError {
    /// A single value request named zero or several calculation methods.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Method name outside the fixed vocabulary.
    #[error("unknown calculation method: {0}")]
    UnknownMethod(String),

    /// Malformed character value table data.
    #[error("table error: {0}")]
    Table(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ArithmosError {
    pub(crate) fn single_method_required() -> Self {
        ArithmosError::InvalidArgument(
            "a single value request must name exactly one calculation method".into(),
        )
    }
}
