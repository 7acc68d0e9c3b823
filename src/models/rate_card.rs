//! Rate card model and pricing tiers.
//!
//! This module defines the [`RateCard`] a facility is priced by, the
//! [`PricingTier`] options that can be combined to cover a booking, and the
//! [`EquipmentRates`] add-on table.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-day flat rates for equipment add-ons, keyed by equipment name.
pub type EquipmentRates = BTreeMap<String, Decimal>;

/// Default length of the half-day package in hours.
pub const DEFAULT_HALF_DAY_HOURS: u32 = 5;

/// Default length of the full-day package in hours.
pub const DEFAULT_FULL_DAY_HOURS: u32 = 8;

fn default_half_day_hours() -> u32 {
    DEFAULT_HALF_DAY_HOURS
}

fn default_full_day_hours() -> u32 {
    DEFAULT_FULL_DAY_HOURS
}

/// A pricing option applicable to a booking span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingTier {
    /// Billed per whole hour.
    Hourly,
    /// Fixed-price package covering `half_day_hours`.
    HalfDay,
    /// Fixed-price package covering `full_day_hours`.
    FullDay,
}

impl std::fmt::Display for PricingTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingTier::Hourly => write!(f, "Hourly"),
            PricingTier::HalfDay => write!(f, "Half-day"),
            PricingTier::FullDay => write!(f, "Full-day"),
        }
    }
}

/// The static pricing configuration of a facility.
///
/// Rates are non-negative decimals and the card is immutable once loaded.
///
/// # Example
///
/// ```
/// use booking_engine::models::{PricingTier, RateCard};
/// use rust_decimal::Decimal;
///
/// let card = RateCard::new(Decimal::from(50), Decimal::from(200), Decimal::from(300));
/// assert_eq!(card.half_day_hours, 5);
/// assert_eq!(card.full_day_hours, 8);
/// assert_eq!(card.package_price(PricingTier::FullDay), Decimal::from(300));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCard {
    /// Price per billable hour.
    pub hourly_rate: Decimal,
    /// Price of the half-day package.
    pub half_day_rate: Decimal,
    /// Price of the full-day package.
    pub full_day_rate: Decimal,
    /// Hours covered by the half-day package.
    #[serde(default = "default_half_day_hours")]
    pub half_day_hours: u32,
    /// Hours covered by the full-day package.
    #[serde(default = "default_full_day_hours")]
    pub full_day_hours: u32,
}

impl RateCard {
    /// Creates a rate card with the default package lengths (5h and 8h).
    pub fn new(hourly_rate: Decimal, half_day_rate: Decimal, full_day_rate: Decimal) -> Self {
        Self {
            hourly_rate,
            half_day_rate,
            full_day_rate,
            half_day_hours: DEFAULT_HALF_DAY_HOURS,
            full_day_hours: DEFAULT_FULL_DAY_HOURS,
        }
    }

    /// Returns the unit price of a tier: the hourly rate for
    /// [`PricingTier::Hourly`], or the package price otherwise.
    pub fn package_price(&self, tier: PricingTier) -> Decimal {
        match tier {
            PricingTier::Hourly => self.hourly_rate,
            PricingTier::HalfDay => self.half_day_rate,
            PricingTier::FullDay => self.full_day_rate,
        }
    }

    /// Returns the cost of billing `hours` purely at the hourly rate.
    pub fn hourly_cost(&self, hours: u32) -> Decimal {
        self.hourly_rate * Decimal::from(hours)
    }

    /// Returns true if every rate is non-negative and the half-day package
    /// is no longer than the full-day package.
    pub fn is_valid(&self) -> bool {
        !self.hourly_rate.is_sign_negative()
            && !self.half_day_rate.is_sign_negative()
            && !self.full_day_rate.is_sign_negative()
            && self.half_day_hours > 0
            && self.half_day_hours <= self.full_day_hours
    }
}
