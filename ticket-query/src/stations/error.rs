//! Station directory error types.

/// Errors that can occur when resolving or caching station data.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// The name is not present in the directory
    #[error("station not found: {0}")]
    NotFound(String),

    /// Cache operation failed
    #[error("cache error: {message}")]
    Cache { message: String },
}
