//! Conversion from raw left-ticket records to typed train entries.
//!
//! This module handles the transformation of raw pipe-delimited rows
//! into validated train entries: endpoint markers, suspension handling,
//! structured duration and arrival-day classification, and per-class
//! seat availability. It emits structured values only; rendering them
//! as locale text is the presenter's job.

use std::collections::{HashMap, HashSet};

use crate::domain::{DayOffset, SeatClass, TravelTime, arrival_day};

use super::schema;

/// Error during raw record to train entry conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DecodeError {
    /// Record carries fewer fields than the schema requires
    #[error("record has {got} fields, expected at least {min}", min = schema::MIN_FIELDS)]
    TooFewFields { got: usize },

    /// Record has an empty train-number field
    #[error("record has no train number")]
    MissingTrainNumber,

    /// A time field failed to parse
    #[error("invalid {field} time: {value:?}")]
    InvalidTime {
        field: &'static str,
        value: String,
    },
}

/// Single-letter train-type filter.
///
/// An empty filter admits every train; otherwise a train passes when
/// the lowercase first character of its number is a member.
#[derive(Debug, Clone, Default)]
pub struct TrainFilter(HashSet<char>);

impl TrainFilter {
    /// Build a filter from CLI-style letters, e.g. `"gd"`.
    ///
    /// Letters are lowercased; non-alphabetic characters are ignored.
    pub fn from_letters(letters: &str) -> Self {
        Self(
            letters
                .chars()
                .filter(char::is_ascii_alphabetic)
                .map(|c| c.to_ascii_lowercase())
                .collect(),
        )
    }

    /// Whether this filter admits every train.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether a train number passes the filter.
    pub fn matches(&self, train_number: &str) -> bool {
        if self.0.is_empty() {
            return true;
        }
        train_number
            .chars()
            .next()
            .is_some_and(|c| self.0.contains(&c.to_ascii_lowercase()))
    }
}

/// A station on the queried leg, with its role on the full route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationCall {
    /// Display name (or raw telecode when the response map lacks it).
    pub name: String,
    /// Whether this station is the route's own origin/terminus, as
    /// opposed to an intermediate stop the train passes through.
    pub is_endpoint: bool,
}

/// Times of a running (non-suspended) train.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub departure: TravelTime,
    pub arrival: TravelTime,
    pub duration: TravelTime,
    pub arrival_day: DayOffset,
}

/// One decoded train record.
///
/// `schedule` is `None` for suspended services, whose time fields carry
/// no usable values.
#[derive(Debug, Clone)]
pub struct TrainEntry {
    pub train_number: String,
    pub origin: StationCall,
    pub destination: StationCall,
    pub schedule: Option<Schedule>,
    seats: [Option<String>; SeatClass::COUNT],
}

impl TrainEntry {
    /// Whether the service is suspended.
    pub fn is_suspended(&self) -> bool {
        self.schedule.is_none()
    }

    /// Availability string for a seat class, if the record carries one.
    pub fn availability(&self, class: SeatClass) -> Option<&str> {
        self.seats[class.ordinal()].as_deref()
    }
}

/// Decode one raw record.
///
/// Returns `Ok(None)` when the record is filtered out by
/// `filter`; `Err` when the record is structurally unusable. Callers
/// iterating a whole response should skip errored rows rather than
/// abort (bad rows do occur in live data).
pub fn decode_row(
    raw: &str,
    station_names: &HashMap<String, String>,
    filter: &TrainFilter,
) -> Result<Option<TrainEntry>, DecodeError> {
    let fields: Vec<&str> = raw.split('|').collect();
    if fields.len() < schema::MIN_FIELDS {
        return Err(DecodeError::TooFewFields { got: fields.len() });
    }

    let train_number = fields[schema::TRAIN_NUMBER];
    if train_number.is_empty() {
        return Err(DecodeError::MissingTrainNumber);
    }
    if !filter.matches(train_number) {
        return Ok(None);
    }

    let origin_code = fields[schema::FROM_STATION];
    let destination_code = fields[schema::TO_STATION];
    let origin = StationCall {
        name: station_name(station_names, origin_code),
        is_endpoint: origin_code == fields[schema::ROUTE_ORIGIN],
    };
    let destination = StationCall {
        name: station_name(station_names, destination_code),
        is_endpoint: destination_code == fields[schema::ROUTE_TERMINUS],
    };

    let schedule = if fields[schema::STATUS] == schema::SUSPENDED_MARKER {
        None
    } else {
        let departure = parse_time(fields[schema::DEPARTURE_TIME], "departure")?;
        let arrival = parse_time(fields[schema::ARRIVAL_TIME], "arrival")?;
        let duration = parse_time(fields[schema::DURATION], "duration")?;
        Some(Schedule {
            arrival_day: arrival_day(departure, duration),
            departure,
            arrival,
            duration,
        })
    };

    let seats = SeatClass::ALL.map(|class| seat_availability(&fields, class));

    Ok(Some(TrainEntry {
        train_number: train_number.to_string(),
        origin,
        destination,
        schedule,
        seats,
    }))
}

fn parse_time(value: &str, field: &'static str) -> Result<TravelTime, DecodeError> {
    TravelTime::parse(value).map_err(|_| DecodeError::InvalidTime {
        field,
        value: value.to_string(),
    })
}

/// Resolve a telecode through the response's code → name map, falling
/// back to the raw code when the map lacks it.
fn station_name(station_names: &HashMap<String, String>, code: &str) -> String {
    station_names
        .get(code)
        .cloned()
        .unwrap_or_else(|| code.to_string())
}

/// Availability for one seat class, with the business-class secondary
/// field fallback. Empty fields read as "no availability reported".
fn seat_availability(fields: &[&str], class: SeatClass) -> Option<String> {
    let mut value = fields[schema::seat_field(class)];
    if value.is_empty() && class == SeatClass::Business {
        value = fields[schema::BUSINESS_SECONDARY];
    }
    (!value.is_empty()).then(|| value.to_string())
}
