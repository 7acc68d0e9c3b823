//! Free slot calculation.
//!
//! Each day starts with the bookable window [08:00, 23:00]. Every blocking
//! booking on the day is subtracted from the remaining slots; whatever is
//! left is available. A day is fully booked if one booking covers the whole
//! day, or if nothing is left after subtraction.

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use crate::models::{BookingRecord, DayAvailability, OperatingHours, TimeSlot};

use super::day_segments::{intervals_for_day, is_full_day_block};

/// Removes `[start, end)` from every slot in `slots`.
///
/// Each slot falls into one of five cases against the booked interval:
///
/// - no overlap: kept as is
/// - full cover: dropped
/// - left overlap: trimmed to start at `end`
/// - right overlap: trimmed to end at `start`
/// - contained: split into the parts before `start` and after `end`
///
/// An empty or inverted interval removes nothing. Input order is preserved,
/// so sorted non-overlapping slots stay sorted and non-overlapping.
pub fn subtract_interval(slots: &[TimeSlot], start: NaiveTime, end: NaiveTime) -> Vec<TimeSlot> {
    if end <= start {
        return slots.to_vec();
    }

    let mut remaining = Vec::with_capacity(slots.len() + 1);
    for slot in slots {
        if end <= slot.start_time || start >= slot.end_time {
            remaining.push(*slot);
        } else if start <= slot.start_time && end >= slot.end_time {
            // fully covered
        } else if start <= slot.start_time {
            remaining.push(TimeSlot::new(end, slot.end_time));
        } else if end >= slot.end_time {
            remaining.push(TimeSlot::new(slot.start_time, start));
        } else {
            remaining.push(TimeSlot::new(slot.start_time, start));
            remaining.push(TimeSlot::new(end, slot.end_time));
        }
    }
    remaining
}

/// Computes free/busy information for a single day.
///
/// `bookings` may contain bookings for any facility day; only blocking
/// bookings covering `date` are considered.
pub fn calculate_day_availability(bookings: &[BookingRecord], date: NaiveDate) -> DayAvailability {
    let intervals = intervals_for_day(bookings, date);

    if intervals.iter().any(is_full_day_block) {
        return DayAvailability {
            date,
            is_fully_booked: true,
            bookings: intervals,
            available_slots: Vec::new(),
        };
    }

    let available_slots = intervals
        .iter()
        .fold(vec![OperatingHours::full_slot()], |slots, interval| {
            subtract_interval(&slots, interval.start_time, interval.end_time)
        });

    DayAvailability {
        date,
        is_fully_booked: available_slots.is_empty(),
        bookings: intervals,
        available_slots,
    }
}

/// Computes availability for `days` consecutive days starting at
/// `window_start`.
///
/// # Example
///
/// ```
/// use booking_engine::calculation::calculate_availability;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
/// let days = calculate_availability(&[], today, 30);
///
/// assert_eq!(days.len(), 30);
/// assert!(days.iter().all(|day| !day.is_fully_booked));
/// ```
pub fn calculate_availability(
    bookings: &[BookingRecord],
    window_start: NaiveDate,
    days: u32,
) -> Vec<DayAvailability> {
    let availability: Vec<DayAvailability> = window_start
        .iter_days()
        .take(days as usize)
        .map(|date| calculate_day_availability(bookings, date))
        .collect();

    debug!(
        window_start = %window_start,
        days,
        bookings = bookings.len(),
        fully_booked = availability.iter().filter(|d| d.is_fully_booked).count(),
        "Calculated availability window"
    );

    availability
}
