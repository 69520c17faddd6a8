//! Domain types for left-ticket queries.
//!
//! This module contains the core domain model types that represent
//! validated ticket data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod date;
mod seat;
mod telecode;
mod time;

pub use date::{DateError, QueryDate};
pub use seat::SeatClass;
pub use telecode::{InvalidTelecode, Telecode};
pub use time::{DayOffset, TimeError, TravelTime, arrival_day};
