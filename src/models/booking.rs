//! Booking records and their per-day intervals.
//!
//! [`BookingRecord`] is the shape bookings arrive in from the CMS. The slot
//! calculator clips each record to the days it covers, producing
//! [`BookingInterval`]s.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::time_format;

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Submitted, awaiting staff review.
    Pending,
    /// Approved by staff.
    Approved,
    /// Rejected by staff.
    Rejected,
    /// Approved in principle, waiting for the citizen to pay.
    AwaitingPayment,
    /// Payment proof uploaded, waiting for staff review.
    ReviewPayment,
}

impl BookingStatus {
    /// Returns true if a booking in this status occupies the facility.
    ///
    /// Only pending and approved bookings block availability.
    ///
    /// # Example
    ///
    /// ```
    /// use booking_engine::models::BookingStatus;
    ///
    /// assert!(BookingStatus::Pending.blocks_availability());
    /// assert!(!BookingStatus::Rejected.blocks_availability());
    /// ```
    pub fn blocks_availability(self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Approved)
    }
}

/// A booking as supplied by the caller.
///
/// `start_time` applies to `start_date` and `end_time` to `end_date`, so a
/// multi-day booking runs continuously from its first start to its last end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    /// CMS identifier, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// First day of the booking.
    pub start_date: NaiveDate,
    /// Last day of the booking (inclusive).
    pub end_date: NaiveDate,
    /// Start time on `start_date`.
    #[serde(with = "time_format")]
    pub start_time: NaiveTime,
    /// End time on `end_date`.
    #[serde(with = "time_format")]
    pub end_time: NaiveTime,
    /// Current lifecycle status.
    pub booking_status: BookingStatus,
}

impl BookingRecord {
    /// Returns true if the booking's date range includes `date`.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// A booking clipped to a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingInterval {
    /// CMS identifier of the originating booking, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    /// The day this interval falls on.
    pub date: NaiveDate,
    /// Effective start time on this day.
    #[serde(with = "time_format")]
    pub start_time: NaiveTime,
    /// Effective end time on this day.
    #[serde(with = "time_format")]
    pub end_time: NaiveTime,
    /// Status of the originating booking.
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_only_pending_and_approved_block() {
        assert!(BookingStatus::Pending.blocks_availability());
        assert!(BookingStatus::Approved.blocks_availability());
        assert!(!BookingStatus::Rejected.blocks_availability());
        assert!(!BookingStatus::AwaitingPayment.blocks_availability());
        assert!(!BookingStatus::ReviewPayment.blocks_availability());
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::AwaitingPayment).unwrap(),
            "\"AWAITING_PAYMENT\""
        );
        let status: BookingStatus = serde_json::from_str("\"REVIEW_PAYMENT\"").unwrap();
        assert_eq!(status, BookingStatus::ReviewPayment);
    }

    #[test]
    fn test_deserialize_cms_booking() {
        let json = r#"{
            "id": "42",
            "start_date": "2026-10-14",
            "end_date": "2026-10-16",
            "start_time": "18:00:00.000",
            "end_time": "10:00:00.000",
            "booking_status": "APPROVED"
        }"#;

        let booking: BookingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(booking.id.as_deref(), Some("42"));
        assert_eq!(booking.start_time, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        assert!(booking.covers(make_date("2026-10-15")));
        assert!(!booking.covers(make_date("2026-10-17")));
    }

    #[test]
    fn test_booking_without_id() {
        let json = r#"{
            "start_date": "2026-10-14",
            "end_date": "2026-10-14",
            "start_time": "09:00",
            "end_time": "12:00",
            "booking_status": "PENDING"
        }"#;

        let booking: BookingRecord = serde_json::from_str(json).unwrap();
        assert!(booking.id.is_none());
        assert!(!serde_json::to_string(&booking).unwrap().contains("\"id\""));
    }
}
