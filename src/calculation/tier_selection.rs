//! Per-day pricing tier selection.
//!
//! For one day's billable hours, this module enumerates the ways the
//! hourly, half-day and full-day tiers can tile the span and picks the
//! cheapest.
//!
//! | Hours `h`                         | Candidates                                              |
//! |-----------------------------------|---------------------------------------------------------|
//! | `h <= half_day_hours`             | half-day; hourly × h                                    |
//! | `half_day_hours < h <= full_day`  | full-day; half-day + hourly × (h − half); hourly × h    |
//! | `h > full_day_hours`              | full-day + hourly × (h − full); hourly × h              |
//!
//! A plain half-day package is not a candidate above `half_day_hours`; the
//! hours past the package are always billed hourly.
//!
//! Candidates are listed packages first and a later candidate only wins if
//! it is strictly cheaper, so ties resolve to the package.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{AuditStep, PricingTier, RateCard};

/// A quantity of one tier within a tiling.
///
/// For [`PricingTier::Hourly`] the quantity is hours; for packages it is the
/// number of packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierAllocation {
    /// The tier used.
    pub tier: PricingTier,
    /// Hours (hourly) or packages (half/full day).
    pub quantity: u32,
}

impl TierAllocation {
    fn new(tier: PricingTier, quantity: u32) -> Self {
        Self { tier, quantity }
    }

    /// Cost of this allocation under `rate_card`.
    pub fn cost(&self, rate_card: &RateCard) -> Decimal {
        rate_card.package_price(self.tier) * Decimal::from(self.quantity)
    }
}

/// The cheapest tiling for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTierSelection {
    /// Billable hours on the day.
    pub hours: u32,
    /// Tiers making up the chosen tiling. Zero-quantity entries are omitted.
    pub allocations: Vec<TierAllocation>,
    /// Cost of the chosen tiling.
    pub cost: Decimal,
    /// Cost of billing the day purely hourly.
    pub hourly_cost: Decimal,
    /// The audit step recording the decision.
    pub audit_step: AuditStep,
}

fn tiling_cost(tiling: &[TierAllocation], rate_card: &RateCard) -> Decimal {
    tiling.iter().map(|a| a.cost(rate_card)).sum()
}

fn describe(tiling: &[TierAllocation]) -> String {
    tiling
        .iter()
        .map(|a| match a.tier {
            PricingTier::Hourly => format!("{}h hourly", a.quantity),
            tier => format!("{} {}", a.quantity, tier.to_string().to_lowercase()),
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Enumerates the candidate tilings for `hours`, packages first.
pub fn candidate_tilings(hours: u32, rate_card: &RateCard) -> Vec<Vec<TierAllocation>> {
    let half = rate_card.half_day_hours;
    let full = rate_card.full_day_hours;
    let hourly_only = vec![TierAllocation::new(PricingTier::Hourly, hours)];

    let mut candidates = if hours <= half {
        vec![vec![TierAllocation::new(PricingTier::HalfDay, 1)]]
    } else if hours <= full {
        vec![
            vec![TierAllocation::new(PricingTier::FullDay, 1)],
            vec![
                TierAllocation::new(PricingTier::HalfDay, 1),
                TierAllocation::new(PricingTier::Hourly, hours - half),
            ],
        ]
    } else {
        vec![vec![
            TierAllocation::new(PricingTier::FullDay, 1),
            TierAllocation::new(PricingTier::Hourly, hours - full),
        ]]
    };
    candidates.push(hourly_only);

    for tiling in &mut candidates {
        tiling.retain(|a| a.quantity > 0);
    }
    candidates
}

/// Selects the cheapest tier tiling for one day.
///
/// # Examples
///
/// ```
/// use booking_engine::calculation::select_day_tiers;
/// use booking_engine::models::RateCard;
/// use rust_decimal::Decimal;
///
/// let card = RateCard::new(Decimal::from(50), Decimal::from(200), Decimal::from(300));
///
/// assert_eq!(select_day_tiers(3, &card, None, 1).cost, Decimal::from(150));
/// assert_eq!(select_day_tiers(5, &card, None, 1).cost, Decimal::from(200));
/// assert_eq!(select_day_tiers(8, &card, None, 1).cost, Decimal::from(300));
/// assert_eq!(select_day_tiers(12, &card, None, 1).cost, Decimal::from(500));
/// ```
pub fn select_day_tiers(
    hours: u32,
    rate_card: &RateCard,
    date: Option<NaiveDate>,
    step_number: u32,
) -> DayTierSelection {
    let hourly_cost = rate_card.hourly_cost(hours);
    let candidates = candidate_tilings(hours, rate_card);

    let mut best: Option<(Vec<TierAllocation>, Decimal)> = None;
    let mut considered = Vec::with_capacity(candidates.len());
    for tiling in candidates {
        let cost = tiling_cost(&tiling, rate_card);
        considered.push(serde_json::json!({
            "tiling": describe(&tiling),
            "cost": cost.normalize().to_string()
        }));
        match &best {
            Some((_, best_cost)) if cost >= *best_cost => {}
            _ => best = Some((tiling, cost)),
        }
    }

    let (allocations, cost) = best.unwrap_or_default();

    debug!(
        hours,
        cost = %cost,
        hourly_cost = %hourly_cost,
        tiling = %describe(&allocations),
        "Selected pricing tiers"
    );

    let reasoning = if cost < hourly_cost {
        format!(
            "{} hours billed as {} for {}, saving {} over hourly billing",
            hours,
            describe(&allocations),
            cost.normalize(),
            (hourly_cost - cost).normalize()
        )
    } else {
        format!(
            "{} hours billed as {} for {}, no package is cheaper",
            hours,
            describe(&allocations),
            cost.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "tier_selection".to_string(),
        rule_name: "Pricing Tier Selection".to_string(),
        date,
        input: serde_json::json!({
            "hours": hours,
            "hourly_rate": rate_card.hourly_rate.normalize().to_string(),
            "half_day_rate": rate_card.half_day_rate.normalize().to_string(),
            "half_day_hours": rate_card.half_day_hours,
            "full_day_rate": rate_card.full_day_rate.normalize().to_string(),
            "full_day_hours": rate_card.full_day_hours
        }),
        output: serde_json::json!({
            "candidates": considered,
            "selected": describe(&allocations),
            "cost": cost.normalize().to_string()
        }),
        reasoning,
    };

    DayTierSelection {
        hours,
        allocations,
        cost,
        hourly_cost,
        audit_step,
    }
}
