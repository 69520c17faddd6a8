//! Query orchestration.
//!
//! Wires the station directory, date normalization, and the upstream
//! client together, and wraps the raw response rows in a lazily-decoded
//! collection.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::{DateError, QueryDate};
use crate::stations::{StationDirectory, StationError};
use crate::tickets::{TicketClient, TicketError, TrainEntry, TrainFilter, decode_row};

/// Errors a query can surface to the caller.
///
/// All variants are terminal at the CLI boundary: the message is shown
/// and the process exits. Cache trouble never appears here; it is
/// recovered inside the station directory.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Origin or destination name is absent from the directory
    #[error(transparent)]
    Station(#[from] StationError),

    /// The date input was malformed or out of the query window
    #[error("invalid query date: {0}")]
    InvalidDate(#[from] DateError),

    /// The upstream service failed or returned no usable body
    #[error(transparent)]
    Service(#[from] TicketError),
}

/// A left-ticket query bound to its collaborators.
pub struct TrainQuery {
    directory: StationDirectory,
    client: TicketClient,
}

impl TrainQuery {
    pub fn new(directory: StationDirectory, client: TicketClient) -> Self {
        Self { directory, client }
    }

    /// Execute a query: resolve both stations, normalize the date,
    /// fetch, and wrap the rows.
    pub async fn execute(
        &self,
        from: &str,
        to: &str,
        date_input: &str,
        filter: TrainFilter,
    ) -> Result<TrainCollection, QueryError> {
        let from_code = self.directory.resolve(from)?;
        let to_code = self.directory.resolve(to)?;
        let date = QueryDate::parse(date_input)?;

        debug!(%date, %from_code, %to_code, "querying left tickets");
        let data = self.client.left_tickets(&date, from_code, to_code).await?;

        Ok(TrainCollection::new(data.rows, data.station_names, filter))
    }
}

/// The raw rows of one query, decoded lazily on iteration.
///
/// Read-only once built. `len` reflects the raw row count, before the
/// type filter is applied; `trains` returns a fresh iterator each call.
#[derive(Debug, Clone)]
pub struct TrainCollection {
    rows: Vec<String>,
    station_names: HashMap<String, String>,
    filter: TrainFilter,
}

impl TrainCollection {
    pub fn new(
        rows: Vec<String>,
        station_names: HashMap<String, String>,
        filter: TrainFilter,
    ) -> Self {
        Self {
            rows,
            station_names,
            filter,
        }
    }

    /// Raw row count, pre-filter.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the query matched no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate the decoded train entries that pass the filter.
    ///
    /// Undecodable rows are logged and skipped rather than failing the
    /// whole collection.
    pub fn trains(&self) -> impl Iterator<Item = TrainEntry> + '_ {
        self.rows
            .iter()
            .filter_map(|row| match decode_row(row, &self.station_names, &self.filter) {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping undecodable record");
                    None
                }
            })
    }
}
