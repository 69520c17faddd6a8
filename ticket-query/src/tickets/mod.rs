//! Upstream left-ticket query client and record decoding.
//!
//! The upstream service returns one pipe-delimited string per train.
//! This module owns that wire contract: the HTTP client that fetches
//! the raw rows, the positional field schema, and the conversion into
//! typed train entries.

mod client;
mod convert;
mod error;
pub mod schema;

pub use client::{LeftTicketData, TicketClient, TicketClientConfig};
pub use convert::{DecodeError, Schedule, StationCall, TrainEntry, TrainFilter, decode_row};
pub use error::TicketError;
