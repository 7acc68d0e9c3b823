//! Calculation logic for the booking engine.
//!
//! This module contains the pricing optimizer (billable hours, per-day tier
//! selection, equipment charges and the combined price), the slot
//! calculator (day clipping and interval subtraction over the operating
//! window), and booking number formatting.

mod billable_hours;
mod booking_number;
mod day_segments;
mod equipment_charge;
mod pricing;
mod slots;
mod tier_selection;

pub use billable_hours::{
    BillableSpan, MAX_BOOKING_DAYS, billable_hours, booking_days, calculate_billable_span,
};
pub use booking_number::{
    BookingNumber, BookingNumberAllocator, format_booking_number, parse_booking_number,
};
pub use day_segments::{clip_to_day, intervals_for_day, is_full_day_block};
pub use equipment_charge::{EquipmentChargeResult, calculate_equipment_charges};
pub use pricing::{PricingCalculation, PricingRequest, calculate_price};
pub use slots::{calculate_availability, calculate_day_availability, subtract_interval};
pub use tier_selection::{DayTierSelection, TierAllocation, candidate_tilings, select_day_tiers};
