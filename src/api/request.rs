//! Request types for the booking engine API.
//!
//! This module defines the JSON request structures for the `/quote` and
//! availability endpoints.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::calculation::PricingRequest;
use crate::models::{BookingRecord, time_format};

/// Request body for the `/quote` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The facility to price.
    pub facility_id: String,
    /// First day of the booking.
    pub start_date: NaiveDate,
    /// Last day of the booking; defaults to `start_date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Daily start time.
    #[serde(with = "time_format")]
    pub start_time: NaiveTime,
    /// Daily end time.
    #[serde(with = "time_format")]
    pub end_time: NaiveTime,
    /// Equipment names to add.
    #[serde(default)]
    pub equipment: Vec<String>,
}

impl From<QuoteRequest> for PricingRequest {
    fn from(req: QuoteRequest) -> Self {
        PricingRequest {
            start_date: req.start_date,
            end_date: req.end_date.unwrap_or(req.start_date),
            start_time: req.start_time,
            end_time: req.end_time,
            equipment: req.equipment,
        }
    }
}

/// Request body for the availability endpoint.
///
/// The caller supplies the facility's bookings as fetched from the CMS.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    /// Bookings for the facility. Non-blocking statuses are ignored.
    #[serde(default)]
    pub bookings: Vec<BookingRecord>,
    /// First day of the window; defaults to today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Window length; defaults to the catalog's configured window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
}
