//! Clipping bookings to single days.
//!
//! A multi-day booking runs from its start time on the first day to its end
//! time on the last. For availability purposes it is split into one
//! [`BookingInterval`] per day:
//!
//! - first day: start time until 23:59
//! - middle days: 00:00 until 23:59
//! - last day: 00:00 until end time

use chrono::NaiveDate;

use crate::models::{BookingInterval, BookingRecord, OperatingHours};

/// Clips `booking` to `date`, or returns `None` if the booking doesn't cover
/// that day.
///
/// # Example
///
/// ```
/// use booking_engine::calculation::clip_to_day;
/// use booking_engine::models::{BookingRecord, BookingStatus};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let booking = BookingRecord {
///     id: None,
///     start_date: NaiveDate::from_ymd_opt(2026, 10, 14).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
///     start_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
///     booking_status: BookingStatus::Approved,
/// };
///
/// let first = clip_to_day(&booking, booking.start_date).unwrap();
/// assert_eq!(first.end_time, NaiveTime::from_hms_opt(23, 59, 0).unwrap());
///
/// let last = clip_to_day(&booking, booking.end_date).unwrap();
/// assert_eq!(last.start_time, NaiveTime::from_hms_opt(0, 0, 0).unwrap());
/// ```
pub fn clip_to_day(booking: &BookingRecord, date: NaiveDate) -> Option<BookingInterval> {
    if !booking.covers(date) {
        return None;
    }

    let start_time = if date == booking.start_date {
        booking.start_time
    } else {
        OperatingHours::day_start()
    };
    let end_time = if date == booking.end_date {
        booking.end_time
    } else {
        OperatingHours::day_end()
    };

    Some(BookingInterval {
        booking_id: booking.id.clone(),
        date,
        start_time,
        end_time,
        status: booking.booking_status,
    })
}

/// Returns the blocking bookings on `date`, clipped and sorted by start time.
///
/// Bookings that don't block availability (rejected, awaiting or under
/// payment review) are skipped.
pub fn intervals_for_day(bookings: &[BookingRecord], date: NaiveDate) -> Vec<BookingInterval> {
    let mut intervals: Vec<BookingInterval> = bookings
        .iter()
        .filter(|booking| booking.booking_status.blocks_availability())
        .filter_map(|booking| clip_to_day(booking, date))
        .collect();
    intervals.sort_by_key(|interval| (interval.start_time, interval.end_time));
    intervals
}

/// Returns true if `interval` occupies the whole day.
///
/// That is the case when it starts no later than opening (08:00) and runs to
/// the end of the day (23:59), which covers both 00:00–23:59 and
/// 08:00–23:59.
pub fn is_full_day_block(interval: &BookingInterval) -> bool {
    interval.start_time <= OperatingHours::opening() && interval.end_time >= OperatingHours::day_end()
}
