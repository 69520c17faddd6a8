//! Station name → telecode directory.
//!
//! Provides name → telecode resolution from a bundled dataset, with a
//! best-effort disk cache so the dataset is only parsed once per
//! machine.

mod cache;
mod directory;
mod error;

pub use cache::{StationCache, StationEntry};
pub use directory::StationDirectory;
pub use error::StationError;
