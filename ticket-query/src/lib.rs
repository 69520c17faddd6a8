//! Left-ticket query tool.
//!
//! Queries the railway ticketing service for trains between two
//! stations on a date, decodes the pipe-delimited records, and renders
//! seat availability as a table.

pub mod domain;
pub mod query;
pub mod stations;
pub mod table;
pub mod tickets;
