use thiserror::Error;

/// Convenience result type for cleaning operations.
pub type CleaningResult<T> = Result<T, CleaningError>;

/// Error type returned by cleaning functions.
///
/// The cleaning transform itself defines no failure modes; these variants surface errors from
/// config loading and from the Polars engine unmodified.
#[derive(Debug, Error)]
pub enum CleaningError {
    /// Underlying I/O error (e.g. config file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Sentinel config could not be deserialized.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Error raised by the Polars engine while inspecting schemas or evaluating the rewrite plan.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}
