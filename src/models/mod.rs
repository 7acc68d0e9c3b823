//! Core data models for the booking engine.
//!
//! This module contains all the domain models used throughout the engine.

mod availability;
mod booking;
mod price_quote;
mod pricing_result;
mod rate_card;
pub mod time_format;

pub use availability::{DayAvailability, OperatingHours, TimeSlot};
pub use booking::{BookingInterval, BookingRecord, BookingStatus};
pub use price_quote::{AuditStep, AuditTrace, PriceQuote};
pub use pricing_result::{LineType, PricingBreakdownLine, PricingResult};
pub use rate_card::{
    DEFAULT_FULL_DAY_HOURS, DEFAULT_HALF_DAY_HOURS, EquipmentRates, PricingTier, RateCard,
};
