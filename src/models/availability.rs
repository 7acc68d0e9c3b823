//! Availability models and the fixed operating window.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{BookingInterval, time_format};

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// The system-wide daily operating window.
///
/// Bookable slots run from 08:00 to 23:00. For deciding whether a day is
/// fully booked, the window is taken to extend to 23:59.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingHours;

impl OperatingHours {
    /// Hour at which bookable time begins.
    pub const OPENING_HOUR: u32 = 8;
    /// Hour at which bookable time ends.
    pub const CLOSING_HOUR: u32 = 23;

    /// 08:00.
    pub fn opening() -> NaiveTime {
        hm(Self::OPENING_HOUR, 0)
    }

    /// 23:00.
    pub fn closing() -> NaiveTime {
        hm(Self::CLOSING_HOUR, 0)
    }

    /// 00:00, the start of a clipped multi-day booking's later days.
    pub fn day_start() -> NaiveTime {
        hm(0, 0)
    }

    /// 23:59, the end of a clipped multi-day booking's earlier days.
    pub fn day_end() -> NaiveTime {
        hm(23, 59)
    }

    /// The untouched bookable slot for a day.
    pub fn full_slot() -> TimeSlot {
        TimeSlot::new(Self::opening(), Self::closing())
    }
}

/// A free interval within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Start of the free interval.
    #[serde(with = "time_format")]
    pub start_time: NaiveTime,
    /// End of the free interval.
    #[serde(with = "time_format")]
    pub end_time: NaiveTime,
}

impl TimeSlot {
    /// Creates a slot from start and end times.
    pub fn new(start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// Returns true if the slot has positive length.
    pub fn is_empty(&self) -> bool {
        self.end_time <= self.start_time
    }
}

/// Free/busy summary for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    /// The day summarised.
    pub date: NaiveDate,
    /// True if nothing remains bookable.
    pub is_fully_booked: bool,
    /// Blocking bookings clipped to this day.
    pub bookings: Vec<BookingInterval>,
    /// Free intervals, sorted by start time and never overlapping.
    pub available_slots: Vec<TimeSlot>,
}
