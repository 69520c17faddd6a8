//! Ticket client error types.

/// Errors from the left-ticket HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum TicketError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered, but with an error status or a body that
    /// is not JSON
    #[error("server is not responding with usable data")]
    ServiceUnavailable,
}
