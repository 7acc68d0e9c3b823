//! Equipment add-on charges.
//!
//! Each selected equipment item is billed at its flat per-day rate for every
//! day of the booking, regardless of how the facility itself was priced.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::FacilityConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, LineType, PricingBreakdownLine};

/// The priced equipment for a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentChargeResult {
    /// One breakdown line per distinct selected item, in selection order.
    pub lines: Vec<PricingBreakdownLine>,
    /// Sum of all equipment lines.
    pub total: Decimal,
    /// The audit step recording the charges.
    pub audit_step: AuditStep,
}

/// Prices the selected equipment for a booking of `days` days.
///
/// Selecting the same item twice bills it once. Returns
/// [`EngineError::EquipmentNotFound`] for items the facility doesn't offer.
pub fn calculate_equipment_charges(
    facility: &FacilityConfig,
    selected: &[String],
    days: u32,
    step_number: u32,
) -> EngineResult<EquipmentChargeResult> {
    let mut lines: Vec<PricingBreakdownLine> = Vec::new();
    let mut billed: Vec<&str> = Vec::new();
    let mut duplicates: Vec<&str> = Vec::new();

    for name in selected {
        let name = name.trim();
        if billed.contains(&name) {
            debug!(
                facility_id = %facility.id,
                equipment = %name,
                "Dropped duplicate equipment selection"
            );
            duplicates.push(name);
            continue;
        }

        let rate = facility
            .equipment
            .get(name)
            .ok_or_else(|| EngineError::EquipmentNotFound {
                facility_id: facility.id.clone(),
                equipment: name.to_string(),
            })?;

        lines.push(PricingBreakdownLine::new(
            format!("Equipment: {}", name),
            LineType::Equipment,
            Decimal::from(days),
            *rate,
        ));
        billed.push(name);
    }

    let total: Decimal = lines.iter().map(|line| line.total_price).sum();

    let reasoning = if lines.is_empty() {
        "No equipment selected".to_string()
    } else {
        format!(
            "{} item(s) billed for {} day(s), totalling {}",
            lines.len(),
            days,
            total.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "equipment_charge".to_string(),
        rule_name: "Equipment Charge".to_string(),
        date: None,
        input: serde_json::json!({
            "selected": billed,
            "duplicates": duplicates,
            "days": days
        }),
        output: serde_json::json!({
            "total": total.normalize().to_string()
        }),
        reasoning,
    };

    Ok(EquipmentChargeResult {
        lines,
        total,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EquipmentRates, RateCard};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn facility() -> FacilityConfig {
        let mut equipment = EquipmentRates::new();
        equipment.insert("projector".to_string(), dec("25"));
        equipment.insert("sound_system".to_string(), dec("40.50"));
        FacilityConfig {
            id: "community_hall".to_string(),
            name: "Community Hall".to_string(),
            description: String::new(),
            capacity: None,
            rate_card: RateCard::new(dec("50"), dec("200"), dec("300")),
            equipment,
        }
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_equipment_selected() {
        let result = calculate_equipment_charges(&facility(), &[], 1, 1).unwrap();
        assert!(result.lines.is_empty());
        assert_eq!(result.total, Decimal::ZERO);
        assert_eq!(result.audit_step.reasoning, "No equipment selected");
    }

    #[test]
    fn test_equipment_billed_per_day() {
        let result =
            calculate_equipment_charges(&facility(), &names(&["projector", "sound_system"]), 3, 1)
                .unwrap();

        assert_eq!(result.lines.len(), 2);
        assert_eq!(result.lines[0].description, "Equipment: projector");
        assert_eq!(result.lines[0].line_type, LineType::Equipment);
        assert_eq!(result.lines[0].quantity, dec("3"));
        assert_eq!(result.lines[0].total_price, dec("75"));
        assert_eq!(result.lines[1].total_price, dec("121.50"));
        assert_eq!(result.total, dec("196.50"));
    }

    #[test]
    fn test_duplicate_selection_billed_once() {
        let result =
            calculate_equipment_charges(&facility(), &names(&["projector", "projector"]), 1, 1)
                .unwrap();
        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.total, dec("25"));
        assert_eq!(
            result.audit_step.input["duplicates"],
            serde_json::json!(["projector"])
        );
    }

    #[test]
    fn test_unknown_equipment_is_rejected() {
        match calculate_equipment_charges(&facility(), &names(&["piano"]), 1, 1) {
            Err(EngineError::EquipmentNotFound {
                facility_id,
                equipment,
            }) => {
                assert_eq!(facility_id, "community_hall");
                assert_eq!(equipment, "piano");
            }
            other => panic!("Expected EquipmentNotFound, got {:?}", other),
        }
    }
}
