//! Seat class enumeration.

/// A fare/accommodation tier with its own availability field in the
/// upstream record.
///
/// Variants are declared in presentation order, which also fixes each
/// class's ordinal (used to index per-entry availability storage). The
/// raw field position each class reads from lives in the wire schema,
/// not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatClass {
    /// 商务座
    Business,
    /// 一等座
    FirstClass,
    /// 二等座
    SecondClass,
    /// 高级软卧
    PremiumSoft,
    /// 软卧
    SoftSleeper,
    /// 动卧
    DeluxeSleeper,
    /// 硬卧
    HardSleeper,
    /// 软座
    SoftSeat,
    /// 硬座
    HardSeat,
    /// 无座
    Standing,
    /// 其他
    Other,
}

impl SeatClass {
    /// Number of seat classes.
    pub const COUNT: usize = 11;

    /// All classes in presentation (column) order.
    pub const ALL: [SeatClass; Self::COUNT] = [
        SeatClass::Business,
        SeatClass::FirstClass,
        SeatClass::SecondClass,
        SeatClass::PremiumSoft,
        SeatClass::SoftSleeper,
        SeatClass::DeluxeSleeper,
        SeatClass::HardSleeper,
        SeatClass::SoftSeat,
        SeatClass::HardSeat,
        SeatClass::Standing,
        SeatClass::Other,
    ];

    /// Ordinal of this class within [`SeatClass::ALL`].
    pub fn ordinal(self) -> usize {
        self as usize
    }
}
