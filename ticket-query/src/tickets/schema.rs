//! Positional field schema for raw left-ticket records.
//!
//! Each raw record is a pipe-delimited string whose fields are read by
//! fixed index. This table is an external contract with the upstream
//! service and must not be inferred from field content; it is the only
//! place indices appear.

use crate::domain::SeatClass;

/// Service status marker ("列车停运" = suspended).
pub const STATUS: usize = 1;
/// Train number, e.g. "G17".
pub const TRAIN_NUMBER: usize = 3;
/// Telecode of the route's origin station.
pub const ROUTE_ORIGIN: usize = 4;
/// Telecode of the route's terminus station.
pub const ROUTE_TERMINUS: usize = 5;
/// Telecode of the actual departure station for this query.
pub const FROM_STATION: usize = 6;
/// Telecode of the actual arrival station for this query.
pub const TO_STATION: usize = 7;
/// Departure time, "HH:MM".
pub const DEPARTURE_TIME: usize = 8;
/// Arrival time, "HH:MM".
pub const ARRIVAL_TIME: usize = 9;
/// Journey duration, "HH:MM".
pub const DURATION: usize = 10;

/// Secondary business-class field. Some train types report business
/// availability here instead of in the primary field.
pub const BUSINESS_SECONDARY: usize = 25;

/// A record must carry at least this many fields to be decodable.
pub const MIN_FIELDS: usize = 34;

/// Value of the status field for a suspended service.
pub const SUSPENDED_MARKER: &str = "列车停运";

/// Primary availability field position for a seat class.
pub fn seat_field(class: SeatClass) -> usize {
    match class {
        SeatClass::Business => 32,
        SeatClass::FirstClass => 31,
        SeatClass::SecondClass => 30,
        SeatClass::PremiumSoft => 21,
        SeatClass::SoftSleeper => 23,
        SeatClass::DeluxeSleeper => 33,
        SeatClass::HardSleeper => 28,
        SeatClass::SoftSeat => 24,
        SeatClass::HardSeat => 29,
        SeatClass::Standing => 26,
        SeatClass::Other => 22,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_seat_fields_fit_in_minimum_record() {
        for class in SeatClass::ALL {
            assert!(seat_field(class) < MIN_FIELDS, "{class:?}");
        }
        assert!(BUSINESS_SECONDARY < MIN_FIELDS);
    }

    #[test]
    fn seat_fields_are_distinct() {
        use std::collections::HashSet;
        let fields: HashSet<_> = SeatClass::ALL.iter().map(|&c| seat_field(c)).collect();
        assert_eq!(fields.len(), SeatClass::COUNT);
    }
}
