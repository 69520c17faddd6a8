//! Time handling for ticket records.
//!
//! The upstream service provides clock times and journey durations as
//! "HH:MM" strings. This module parses them into structured
//! hours/minutes and classifies which calendar day a train arrives on.
//! Rendering those values as text is the presenter's job.

use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// An hours-and-minutes value from the upstream schema.
///
/// Covers both clock times ("23:50") and journey durations ("01:20").
/// Durations on long routes can exceed 24 hours, so hours are not
/// bounded to a single day; minutes are always below 60.
///
/// # Examples
///
/// ```
/// use ticket_query::domain::TravelTime;
///
/// let t = TravelTime::parse("23:50").unwrap();
/// assert_eq!(t.hours, 23);
/// assert_eq!(t.minutes, 50);
/// assert_eq!(t.to_string(), "23:50");
///
/// // Multi-day durations keep the same shape, just more hour digits
/// assert_eq!(TravelTime::parse("100:30").unwrap().hours, 100);
///
/// assert!(TravelTime::parse("2350").is_err());
/// assert!(TravelTime::parse("23:5").is_err());
/// assert!(TravelTime::parse("23:60").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelTime {
    pub hours: u32,
    pub minutes: u32,
}

impl TravelTime {
    /// Parse an "HH:MM" string.
    ///
    /// Hours take two digits on clock times but grow to three on the
    /// longest route durations; minutes are always exactly two digits.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let Some((hours_part, minutes_part)) = s.split_once(':') else {
            return Err(TimeError::new("expected ':' separator"));
        };

        if hours_part.is_empty() || hours_part.len() > 3 {
            return Err(TimeError::new("expected one to three hour digits"));
        }
        if minutes_part.len() != 2 {
            return Err(TimeError::new("expected two minute digits"));
        }
        if !hours_part.bytes().all(|b| b.is_ascii_digit())
            || !minutes_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(TimeError::new("expected decimal digits"));
        }

        let hours = hours_part
            .parse()
            .map_err(|_| TimeError::new("hours out of range"))?;
        let minutes = minutes_part
            .parse()
            .map_err(|_| TimeError::new("minutes out of range"))?;

        if minutes >= 60 {
            return Err(TimeError::new("minutes out of range"));
        }

        Ok(Self { hours, minutes })
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Which calendar day a train arrives on, relative to departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOffset {
    SameDay,
    NextDay,
    DayAfterNext,
    ThirdDay,
}

/// Classify the arrival day from departure time plus journey duration.
///
/// Minutes carry into hours when they sum past sixty; the elapsed hour
/// total then buckets into 24-hour days.
pub fn arrival_day(departure: TravelTime, duration: TravelTime) -> DayOffset {
    let mut hours = departure.hours + duration.hours;
    if departure.minutes + duration.minutes >= 60 {
        hours += 1;
    }

    match hours {
        0..=23 => DayOffset::SameDay,
        24..=47 => DayOffset::NextDay,
        48..=71 => DayOffset::DayAfterNext,
        _ => DayOffset::ThirdDay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        let t = TravelTime::parse("00:00").unwrap();
        assert_eq!((t.hours, t.minutes), (0, 0));

        let t = TravelTime::parse("23:59").unwrap();
        assert_eq!((t.hours, t.minutes), (23, 59));

        // Durations can exceed a day
        let t = TravelTime::parse("47:30").unwrap();
        assert_eq!((t.hours, t.minutes), (47, 30));
    }

    #[test]
    fn parse_long_durations() {
        // Slow trains across the network can run past the hundred-hour mark
        let t = TravelTime::parse("100:30").unwrap();
        assert_eq!((t.hours, t.minutes), (100, 30));
        assert_eq!(t.to_string(), "100:30");

        let t = TravelTime::parse("9:05").unwrap();
        assert_eq!((t.hours, t.minutes), (9, 5));

        assert!(TravelTime::parse("1000:30").is_err());
        assert!(TravelTime::parse(":30").is_err());
    }

    #[test]
    fn parse_rejects_bad_formats() {
        assert!(TravelTime::parse("").is_err());
        assert!(TravelTime::parse("1430").is_err());
        assert!(TravelTime::parse("14:3").is_err());
        assert!(TravelTime::parse("14:305").is_err());
        assert!(TravelTime::parse("14-30").is_err());
        assert!(TravelTime::parse("1h:30").is_err());
        assert!(TravelTime::parse("14:60").is_err());
        assert!(TravelTime::parse("-4:30").is_err());
    }

    #[test]
    fn display_zero_pads() {
        assert_eq!(TravelTime::parse("05:07").unwrap().to_string(), "05:07");
        assert_eq!(TravelTime::parse("23:50").unwrap().to_string(), "23:50");
    }

    #[test]
    fn same_day_arrival() {
        let dep = TravelTime::parse("08:00").unwrap();
        let dur = TravelTime::parse("05:30").unwrap();
        assert_eq!(arrival_day(dep, dur), DayOffset::SameDay);
    }

    #[test]
    fn minute_carry_pushes_into_next_day() {
        // 23:50 + 01:20 carries to 25 elapsed hours
        let dep = TravelTime::parse("23:50").unwrap();
        let dur = TravelTime::parse("01:20").unwrap();
        assert_eq!(arrival_day(dep, dur), DayOffset::NextDay);
    }

    #[test]
    fn boundary_at_24_hours() {
        let dep = TravelTime::parse("12:00").unwrap();
        assert_eq!(
            arrival_day(dep, TravelTime::parse("11:59").unwrap()),
            DayOffset::SameDay
        );
        assert_eq!(
            arrival_day(dep, TravelTime::parse("12:00").unwrap()),
            DayOffset::NextDay
        );
    }

    #[test]
    fn long_journeys() {
        let dep = TravelTime::parse("10:00").unwrap();
        assert_eq!(
            arrival_day(dep, TravelTime::parse("40:00").unwrap()),
            DayOffset::DayAfterNext
        );
        assert_eq!(
            arrival_day(dep, TravelTime::parse("70:00").unwrap()),
            DayOffset::ThirdDay
        );
        // Past three elapsed days everything buckets as the third day
        assert_eq!(
            arrival_day(dep, TravelTime::parse("100:30").unwrap()),
            DayOffset::ThirdDay
        );
    }
}
