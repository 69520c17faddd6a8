//! Left-ticket query HTTP client.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{QueryDate, Telecode};

use super::error::TicketError;

/// Default URL of the left-ticket query endpoint.
const DEFAULT_BASE_URL: &str = "https://kyfw.12306.cn/otn/leftTicket/query";

/// Fixed passenger-purpose parameter the endpoint requires.
const PURPOSE_CODE: &str = "ADULT";

/// Top-level query response. `data` is absent on upstream errors.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    data: Option<QueryData>,
}

/// Payload of a successful query. The upstream omits `result` and
/// `map` on some error paths; both read as empty rather than failing.
#[derive(Debug, Default, Deserialize)]
struct QueryData {
    result: Option<Vec<String>>,
    map: Option<HashMap<String, String>>,
}

/// Raw rows plus the telecode → display-name map from one query.
#[derive(Debug, Clone)]
pub struct LeftTicketData {
    pub rows: Vec<String>,
    pub station_names: HashMap<String, String>,
}

/// Configuration for the ticket client.
#[derive(Debug, Clone)]
pub struct TicketClientConfig {
    /// Base URL for the query endpoint
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TicketClientConfig {
    /// Create a config with the production endpoint and default timeout.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for TicketClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the left-ticket query endpoint.
#[derive(Debug, Clone)]
pub struct TicketClient {
    http: reqwest::Client,
    base_url: String,
}

impl TicketClient {
    /// Create a new ticket client with the given configuration.
    pub fn new(config: TicketClientConfig) -> Result<Self, TicketError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Query left tickets between two stations on a date.
    ///
    /// The endpoint is sensitive to its parameter set; the four
    /// parameters below are sent on every call, names unchanged.
    ///
    /// A response whose body is not JSON at all is a
    /// [`TicketError::ServiceUnavailable`]; well-formed JSON missing
    /// the expected keys yields an empty result set instead.
    pub async fn left_tickets(
        &self,
        date: &QueryDate,
        from: Telecode,
        to: Telecode,
    ) -> Result<LeftTicketData, TicketError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("leftTicketDTO.train_date", date.to_string()),
                ("leftTicketDTO.from_station", from.as_str().to_string()),
                ("leftTicketDTO.to_station", to.as_str().to_string()),
                ("purpose_codes", PURPOSE_CODE.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The body here is typically a busy/maintenance HTML page;
            // log a prefix of it but keep the user-facing error fixed
            let body = response.text().await.unwrap_or_default();
            debug!(
                status = status.as_u16(),
                body = body.chars().take(200).collect::<String>(),
                "query endpoint returned error status"
            );
            return Err(TicketError::ServiceUnavailable);
        }

        let body = response.text().await?;

        let parsed: QueryResponse =
            serde_json::from_str(&body).map_err(|_| TicketError::ServiceUnavailable)?;

        let data = parsed.data.unwrap_or_default();
        let rows = data.result.unwrap_or_default();
        let station_names = data.map.unwrap_or_default();
        debug!(rows = rows.len(), stations = station_names.len(), "query returned");

        Ok(LeftTicketData {
            rows,
            station_names,
        })
    }
}
