//! Price quote envelope and audit trace.
//!
//! A [`PriceQuote`] wraps a [`PricingResult`] with identifying metadata and
//! an [`AuditTrace`] recording every tier decision that produced it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PricingResult;

/// A single step in the audit trace recording a pricing decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The day the decision applies to, when it is day-specific.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a quote.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of pricing steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// A priced booking request as returned to callers.
///
/// # Example
///
/// ```
/// use booking_engine::models::{AuditTrace, PriceQuote, PricingResult};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let quote = PriceQuote {
///     quote_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     facility_id: "community_hall".to_string(),
///     pricing: PricingResult::from_breakdown(vec![], None),
///     audit_trace: AuditTrace::default(),
/// };
/// assert!(quote.pricing.breakdown.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Unique identifier for this quote.
    pub quote_id: Uuid,
    /// When the quote was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the quote.
    pub engine_version: String,
    /// The facility being priced.
    pub facility_id: String,
    /// The priced outcome.
    pub pricing: PricingResult,
    /// Record of the pricing decisions.
    pub audit_trace: AuditTrace,
}
