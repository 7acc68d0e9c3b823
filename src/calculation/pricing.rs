//! Booking price calculation.
//!
//! Combines billable hours, per-day tier selection and equipment charges
//! into a single [`PricingResult`]. Multi-day bookings repeat the per-day
//! selection and sum; breakdown lines for the same tier are merged.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::FacilityConfig;
use crate::error::EngineResult;
use crate::models::{AuditStep, LineType, PricingBreakdownLine, PricingResult, PricingTier, RateCard};

use super::billable_hours::calculate_billable_span;
use super::equipment_charge::calculate_equipment_charges;
use super::tier_selection::{DayTierSelection, select_day_tiers};

/// What the caller wants priced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingRequest {
    /// First day of the booking.
    pub start_date: NaiveDate,
    /// Last day of the booking (inclusive).
    pub end_date: NaiveDate,
    /// Daily start time.
    pub start_time: NaiveTime,
    /// Daily end time.
    pub end_time: NaiveTime,
    /// Equipment names to add.
    pub equipment: Vec<String>,
}

/// A priced booking together with the decisions that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingCalculation {
    /// The priced outcome.
    pub result: PricingResult,
    /// Per-day tier selections, one per booked day.
    pub days: Vec<DayTierSelection>,
    /// Audit steps in evaluation order.
    pub audit_steps: Vec<AuditStep>,
}

fn tier_description(tier: PricingTier, rate_card: &RateCard) -> String {
    match tier {
        PricingTier::Hourly => "Hourly rate".to_string(),
        PricingTier::HalfDay => format!("Half-day package ({} hours)", rate_card.half_day_hours),
        PricingTier::FullDay => format!("Full-day package ({} hours)", rate_card.full_day_hours),
    }
}

/// Collapses per-day selections into one facility line per tier, in order of
/// first use.
fn facility_lines(days: &[DayTierSelection], rate_card: &RateCard) -> Vec<PricingBreakdownLine> {
    let mut totals: Vec<(PricingTier, u32)> = Vec::new();
    for allocation in days.iter().flat_map(|day| &day.allocations) {
        match totals.iter_mut().find(|(tier, _)| *tier == allocation.tier) {
            Some((_, quantity)) => *quantity += allocation.quantity,
            None => totals.push((allocation.tier, allocation.quantity)),
        }
    }

    totals
        .into_iter()
        .map(|(tier, quantity)| {
            PricingBreakdownLine::new(
                tier_description(tier, rate_card),
                LineType::Facility,
                Decimal::from(quantity),
                rate_card.package_price(tier),
            )
        })
        .collect()
}

/// Prices a booking request against a facility's rate table.
///
/// Returns an error if the end time is not after the start time, the daily
/// times fall outside operating hours, the date span is reversed or longer
/// than [`MAX_BOOKING_DAYS`](super::MAX_BOOKING_DAYS), or an equipment item
/// isn't offered.
///
/// # Example
///
/// ```
/// use booking_engine::calculation::{PricingRequest, calculate_price};
/// use booking_engine::config::FacilityConfig;
/// use booking_engine::models::{EquipmentRates, RateCard};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let facility = FacilityConfig {
///     id: "community_hall".to_string(),
///     name: "Community Hall".to_string(),
///     description: String::new(),
///     capacity: None,
///     rate_card: RateCard::new(Decimal::from(50), Decimal::from(200), Decimal::from(300)),
///     equipment: EquipmentRates::new(),
/// };
/// let day = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
/// let request = PricingRequest {
///     start_date: day,
///     end_date: day,
///     start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
///     equipment: vec![],
/// };
///
/// let calculation = calculate_price(&facility, &request).unwrap();
/// assert_eq!(calculation.result.total_price, Decimal::from(500));
/// assert_eq!(calculation.result.savings, Some(Decimal::from(100)));
/// ```
pub fn calculate_price(
    facility: &FacilityConfig,
    request: &PricingRequest,
) -> EngineResult<PricingCalculation> {
    let rate_card = &facility.rate_card;
    let mut audit_steps = Vec::new();
    let mut step_number: u32 = 1;

    let span = calculate_billable_span(
        request.start_date,
        request.end_date,
        request.start_time,
        request.end_time,
        step_number,
    )?;
    audit_steps.push(span.audit_step.clone());
    step_number += 1;

    let mut days = Vec::with_capacity(span.days.len());
    for date in &span.days {
        let selection = select_day_tiers(span.hours_per_day, rate_card, Some(*date), step_number);
        audit_steps.push(selection.audit_step.clone());
        step_number += 1;
        days.push(selection);
    }

    let equipment =
        calculate_equipment_charges(facility, &request.equipment, span.day_count(), step_number)?;
    audit_steps.push(equipment.audit_step.clone());

    let facility_cost: Decimal = days.iter().map(|day| day.cost).sum();
    let hourly_cost: Decimal = days.iter().map(|day| day.hourly_cost).sum();
    let savings = (hourly_cost > facility_cost).then(|| hourly_cost - facility_cost);

    let mut breakdown = facility_lines(&days, rate_card);
    breakdown.extend(equipment.lines);

    let result = PricingResult::from_breakdown(breakdown, savings);

    debug!(
        facility_id = %facility.id,
        days = days.len(),
        hours_per_day = span.hours_per_day,
        total_price = %result.total_price,
        "Priced booking request"
    );

    Ok(PricingCalculation {
        result,
        days,
        audit_steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::EquipmentRates;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn t(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn hall() -> FacilityConfig {
        let mut equipment = EquipmentRates::new();
        equipment.insert("projector".to_string(), dec("25"));
        equipment.insert("sound_system".to_string(), dec("40"));
        FacilityConfig {
            id: "community_hall".to_string(),
            name: "Community Hall".to_string(),
            description: String::new(),
            capacity: Some(300),
            rate_card: RateCard::new(dec("50"), dec("200"), dec("300")),
            equipment,
        }
    }

    fn single_day(start: NaiveTime, end: NaiveTime) -> PricingRequest {
        PricingRequest {
            start_date: make_date("2026-10-14"),
            end_date: make_date("2026-10-14"),
            start_time: start,
            end_time: end,
            equipment: vec![],
        }
    }

    fn assert_breakdown_sums(result: &PricingResult) {
        let sum: Decimal = result.breakdown.iter().map(|l| l.total_price).sum();
        assert_eq!(sum, result.total_price);
    }

    #[test]
    fn test_3h_billed_hourly() {
        let calc = calculate_price(&hall(), &single_day(t(9, 0), t(12, 0))).unwrap();
        assert_eq!(calc.result.total_price, dec("150"));
        assert_eq!(calc.result.breakdown.len(), 1);
        assert_eq!(calc.result.breakdown[0].description, "Hourly rate");
        assert_eq!(calc.result.breakdown[0].quantity, dec("3"));
        assert_eq!(calc.result.savings, None);
    }

    #[test]
    fn test_5h_half_day() {
        let calc = calculate_price(&hall(), &single_day(t(9, 0), t(14, 0))).unwrap();
        assert_eq!(calc.result.total_price, dec("200"));
        assert_eq!(calc.result.breakdown[0].description, "Half-day package (5 hours)");
        assert_eq!(calc.result.savings, Some(dec("50")));
    }

    #[test]
    fn test_8h_full_day() {
        let calc = calculate_price(&hall(), &single_day(t(9, 0), t(17, 0))).unwrap();
        assert_eq!(calc.result.total_price, dec("300"));
        assert_eq!(calc.result.breakdown[0].description, "Full-day package (8 hours)");
        assert_eq!(calc.result.savings, Some(dec("100")));
    }

    #[test]
    fn test_12h_full_day_plus_hourly() {
        let calc = calculate_price(&hall(), &single_day(t(8, 0), t(20, 0))).unwrap();
        assert_eq!(calc.result.total_price, dec("500"));
        assert_eq!(calc.result.breakdown.len(), 2);
        assert_eq!(calc.result.breakdown[0].total_price, dec("300"));
        assert_eq!(calc.result.breakdown[1].quantity, dec("4"));
        assert_breakdown_sums(&calc.result);
    }

    #[test]
    fn test_partial_hour_rounds_up_before_pricing() {
        // 2h10m bills as 3 hours
        let calc = calculate_price(&hall(), &single_day(t(9, 0), t(11, 10))).unwrap();
        assert_eq!(calc.result.total_price, dec("150"));
    }

    #[test]
    fn test_equipment_added_after_facility_cost() {
        let mut request = single_day(t(9, 0), t(17, 0));
        request.equipment = vec!["projector".to_string(), "sound_system".to_string()];

        let calc = calculate_price(&hall(), &request).unwrap();
        assert_eq!(calc.result.total_price, dec("365"));
        assert_eq!(calc.result.subtotal(LineType::Facility), dec("300"));
        assert_eq!(calc.result.subtotal(LineType::Equipment), dec("65"));
        assert_eq!(calc.result.breakdown.last().unwrap().description, "Equipment: sound_system");
        // savings compare facility cost only
        assert_eq!(calc.result.savings, Some(dec("100")));
        assert_breakdown_sums(&calc.result);
    }

    #[test]
    fn test_multi_day_repeats_and_merges_lines() {
        let request = PricingRequest {
            start_date: make_date("2026-10-14"),
            end_date: make_date("2026-10-16"),
            start_time: t(8, 0),
            end_time: t(20, 0),
            equipment: vec!["projector".to_string()],
        };

        let calc = calculate_price(&hall(), &request).unwrap();
        assert_eq!(calc.days.len(), 3);
        // 3 * (300 + 4*50) + 3 * 25
        assert_eq!(calc.result.total_price, dec("1575"));
        assert_eq!(calc.result.breakdown.len(), 3);
        assert_eq!(calc.result.breakdown[0].quantity, dec("3"));
        assert_eq!(calc.result.breakdown[1].quantity, dec("12"));
        assert_eq!(calc.result.breakdown[2].quantity, dec("3"));
        assert_eq!(calc.result.savings, Some(dec("300")));
        assert_breakdown_sums(&calc.result);
    }

    #[test]
    fn test_audit_steps_are_sequential() {
        let request = PricingRequest {
            start_date: make_date("2026-10-14"),
            end_date: make_date("2026-10-15"),
            start_time: t(9, 0),
            end_time: t(12, 0),
            equipment: vec![],
        };

        let calc = calculate_price(&hall(), &request).unwrap();
        let numbers: Vec<u32> = calc.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(calc.audit_steps[0].rule_id, "billable_hours");
        assert_eq!(calc.audit_steps[1].date, Some(make_date("2026-10-14")));
        assert_eq!(calc.audit_steps[2].date, Some(make_date("2026-10-15")));
        assert_eq!(calc.audit_steps[3].rule_id, "equipment_charge");
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        let result = calculate_price(&hall(), &single_day(t(9, 0), t(9, 0)));
        assert!(matches!(result, Err(EngineError::InvalidTimeRange { .. })));
    }

    #[test]
    fn test_end_date_before_start_is_rejected() {
        let mut request = single_day(t(9, 0), t(12, 0));
        request.end_date = make_date("2026-10-13");
        let result = calculate_price(&hall(), &request);
        assert!(matches!(result, Err(EngineError::InvalidTimeRange { .. })));
    }

    #[test]
    fn test_unknown_equipment_is_rejected() {
        let mut request = single_day(t(9, 0), t(12, 0));
        request.equipment = vec!["piano".to_string()];
        let result = calculate_price(&hall(), &request);
        assert!(matches!(result, Err(EngineError::EquipmentNotFound { .. })));
    }

    proptest! {
        #[test]
        fn prop_breakdown_always_sums_to_total(
            start_hour in 8u32..23,
            length_minutes in 1i64..=900,
            days in 0i64..5,
            hourly in 0u32..200,
            half in 0u32..1000,
            full in 0u32..2000,
            with_projector in any::<bool>(),
        ) {
            let start = t(start_hour, 0);
            let end_seconds = (start_hour as i64 * 60 + length_minutes).min(23 * 60 + 59) * 60;
            prop_assume!(end_seconds > start_hour as i64 * 3600);
            let end = NaiveTime::from_num_seconds_from_midnight_opt(end_seconds as u32, 0).unwrap();

            let mut facility = hall();
            facility.rate_card = RateCard::new(Decimal::from(hourly), Decimal::from(half), Decimal::from(full));

            let start_date = make_date("2026-10-14");
            let request = PricingRequest {
                start_date,
                end_date: start_date + chrono::Duration::days(days),
                start_time: start,
                end_time: end,
                equipment: if with_projector { vec!["projector".to_string()] } else { vec![] },
            };

            let calc = calculate_price(&facility, &request).unwrap();
            let sum: Decimal = calc.result.breakdown.iter().map(|l| l.total_price).sum();
            prop_assert_eq!(sum, calc.result.total_price);
            prop_assert_eq!(calc.days.len() as i64, days + 1);
        }
    }
}
