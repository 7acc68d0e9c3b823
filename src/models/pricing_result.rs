//! Pricing result models.
//!
//! This module contains the [`PricingResult`] produced by the pricing
//! optimizer and its itemised [`PricingBreakdownLine`]s.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a breakdown line charges for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineType {
    /// Use of the facility itself.
    Facility,
    /// An equipment add-on.
    Equipment,
}

/// A single priced component of a booking.
///
/// # Example
///
/// ```
/// use booking_engine::models::{LineType, PricingBreakdownLine};
/// use rust_decimal::Decimal;
///
/// let line = PricingBreakdownLine::new(
///     "Hourly rate",
///     LineType::Facility,
///     Decimal::from(3),
///     Decimal::from(50),
/// );
/// assert_eq!(line.total_price, Decimal::from(150));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingBreakdownLine {
    /// Human-readable description of the component.
    pub description: String,
    /// Whether this line is for the facility or for equipment.
    #[serde(rename = "type")]
    pub line_type: LineType,
    /// Number of units (hours, packages or equipment-days).
    pub quantity: Decimal,
    /// Price per unit.
    pub unit_price: Decimal,
    /// `quantity * unit_price`.
    pub total_price: Decimal,
}

impl PricingBreakdownLine {
    /// Creates a line, computing `total_price` from quantity and unit price.
    pub fn new(
        description: impl Into<String>,
        line_type: LineType,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            line_type,
            quantity,
            unit_price,
            total_price: quantity * unit_price,
        }
    }
}

/// The priced outcome of a booking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Sum of every breakdown line.
    pub total_price: Decimal,
    /// Itemised components, facility lines first.
    pub breakdown: Vec<PricingBreakdownLine>,
    /// How much cheaper the facility cost is than pure hourly billing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings: Option<Decimal>,
}

impl PricingResult {
    /// Builds a result from its breakdown, deriving the total.
    pub fn from_breakdown(breakdown: Vec<PricingBreakdownLine>, savings: Option<Decimal>) -> Self {
        let total_price = breakdown.iter().map(|line| line.total_price).sum();
        Self {
            total_price,
            breakdown,
            savings,
        }
    }

    /// Sum of the breakdown lines of the given type.
    pub fn subtotal(&self, line_type: LineType) -> Decimal {
        self.breakdown
            .iter()
            .filter(|line| line.line_type == line_type)
            .map(|line| line.total_price)
            .sum()
    }
}
