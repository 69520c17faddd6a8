//! Query date normalization.
//!
//! Users type dates loosely: "6-26", "0626", "2016/6/26", "20160626".
//! This module turns any of those into a canonical calendar date and
//! checks it against the service's bookable window.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

/// Earliest permitted offset from today, in days.
const WINDOW_MIN_DAYS: i64 = -1;
/// Latest permitted offset from today, in days.
const WINDOW_MAX_DAYS: i64 = 49;

/// Error returned for malformed or out-of-range date input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The input did not contain a usable number of digits
    #[error("unrecognized date input")]
    Unrecognized,

    /// The digits did not form a real calendar date
    #[error("not a calendar date")]
    NotACalendarDate,

    /// The date falls outside the bookable query window
    #[error("date outside the bookable window")]
    OutOfWindow,
}

/// A validated query date.
///
/// Always a real calendar date within `[today - 1 day, today + 49 days]`.
/// Displays in the `YYYY-MM-DD` form the upstream service expects.
///
/// # Examples
///
/// ```
/// use ticket_query::domain::QueryDate;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2016, 6, 1).unwrap();
///
/// let date = QueryDate::parse_with_today("6/26", today).unwrap();
/// assert_eq!(date.to_string(), "2016-06-26");
///
/// let date = QueryDate::parse_with_today("20160626", today).unwrap();
/// assert_eq!(date.to_string(), "2016-06-26");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDate(NaiveDate);

impl QueryDate {
    /// Parse a user-supplied date string against the local calendar.
    pub fn parse(input: &str) -> Result<Self, DateError> {
        Self::parse_with_today(input, Local::now().date_naive())
    }

    /// Parse a user-supplied date string against an explicit "today".
    ///
    /// Only the decimal digits of the input matter; separators and any
    /// other characters are discarded. 2-4 digits are read as month+day
    /// in the current year, 6-8 digits as a full year+month+day.
    pub fn parse_with_today(input: &str, today: NaiveDate) -> Result<Self, DateError> {
        let digits: String = input.chars().filter(char::is_ascii_digit).collect();

        let digits = match digits.len() {
            2..=4 => format!("{}{}", today.year(), digits),
            6..=8 => digits,
            _ => return Err(DateError::Unrecognized),
        };

        // The year is always the leading four digits; month and day share
        // whatever remains.
        let (year_digits, month_day) = digits.split_at(4);
        let year: i32 = year_digits.parse().map_err(|_| DateError::Unrecognized)?;

        let date = split_month_day(year, month_day).ok_or(DateError::NotACalendarDate)?;

        let offset = (date - today).num_days();
        if !(WINDOW_MIN_DAYS..=WINDOW_MAX_DAYS).contains(&offset) {
            return Err(DateError::OutOfWindow);
        }

        Ok(Self(date))
    }

    /// The underlying calendar date.
    pub fn as_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for QueryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Split a 2-4 digit month+day string into a calendar date.
///
/// Month and day are concatenated without separators, so "626" could
/// read as 6/26 or 62/6. Prefer the two-digit month and fall back to
/// one digit when the remainder is not a valid day.
fn split_month_day(year: i32, month_day: &str) -> Option<NaiveDate> {
    for month_width in [2usize, 1] {
        if month_day.len() <= month_width || month_day.len() - month_width > 2 {
            continue;
        }
        let (m, d) = month_day.split_at(month_width);
        let (Ok(month), Ok(day)) = (m.parse::<u32>(), d.parse::<u32>()) else {
            continue;
        };
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }
    None
}
