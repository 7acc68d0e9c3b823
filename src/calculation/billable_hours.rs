//! Billable duration of a booking request.
//!
//! A request covers every day from its start date to its end date, and on
//! each of those days runs from the start time to the end time. Elapsed time
//! is rounded up to the next whole hour. Daily times must fall inside the
//! operating window (08:00 to 23:59), so a day never bills more than 16 hours.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, OperatingHours};

const SECONDS_PER_HOUR: i64 = 3600;

/// Longest span of days a single request may cover.
pub const MAX_BOOKING_DAYS: i64 = 366;

/// The billable shape of a booking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillableSpan {
    /// Every day the booking covers, in order.
    pub days: Vec<NaiveDate>,
    /// Whole hours billed on each day.
    pub hours_per_day: u32,
    /// The audit step recording the duration calculation.
    pub audit_step: AuditStep,
}

impl BillableSpan {
    /// Number of days covered.
    pub fn day_count(&self) -> u32 {
        self.days.len() as u32
    }
}

/// Rounds the time between `start` and `end` up to whole hours.
///
/// Returns [`EngineError::InvalidTimeRange`] if `end` is not after `start`.
///
/// # Examples
///
/// ```
/// use booking_engine::calculation::billable_hours;
/// use chrono::NaiveTime;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// assert_eq!(billable_hours(t(9, 0), t(12, 0)).unwrap(), 3);
/// assert_eq!(billable_hours(t(9, 0), t(12, 1)).unwrap(), 4);
/// assert!(billable_hours(t(12, 0), t(9, 0)).is_err());
/// ```
pub fn billable_hours(start: NaiveTime, end: NaiveTime) -> EngineResult<u32> {
    let seconds = (end - start).num_seconds();
    if seconds <= 0 {
        return Err(EngineError::InvalidTimeRange {
            message: format!(
                "end time {} is not after start time {}",
                end.format("%H:%M"),
                start.format("%H:%M")
            ),
        });
    }

    let hours = (seconds + SECONDS_PER_HOUR - 1) / SECONDS_PER_HOUR;
    u32::try_from(hours).map_err(|_| EngineError::CalculationError {
        message: format!("billable hours out of range: {}", hours),
    })
}

/// Lists every day from `start_date` to `end_date` inclusive.
///
/// Returns [`EngineError::InvalidTimeRange`] if the end date precedes the
/// start date or the span exceeds [`MAX_BOOKING_DAYS`].
pub fn booking_days(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Vec<NaiveDate>> {
    if end_date < start_date {
        return Err(EngineError::InvalidTimeRange {
            message: format!("end date {} is before start date {}", end_date, start_date),
        });
    }

    let day_count = (end_date - start_date).num_days() + 1;
    if day_count > MAX_BOOKING_DAYS {
        return Err(EngineError::InvalidTimeRange {
            message: format!(
                "booking covers {} days, at most {} are allowed",
                day_count, MAX_BOOKING_DAYS
            ),
        });
    }

    Ok(start_date.iter_days().take(day_count as usize).collect())
}

fn check_operating_window(start_time: NaiveTime, end_time: NaiveTime) -> EngineResult<()> {
    if start_time < OperatingHours::opening() || end_time > OperatingHours::day_end() {
        return Err(EngineError::InvalidTimeRange {
            message: format!(
                "{} to {} is outside operating hours {} to {}",
                start_time.format("%H:%M"),
                end_time.format("%H:%M"),
                OperatingHours::opening().format("%H:%M"),
                OperatingHours::day_end().format("%H:%M")
            ),
        });
    }
    Ok(())
}

/// Computes the days and per-day billable hours of a request.
pub fn calculate_billable_span(
    start_date: NaiveDate,
    end_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    step_number: u32,
) -> EngineResult<BillableSpan> {
    let days = booking_days(start_date, end_date)?;
    let hours_per_day = billable_hours(start_time, end_time)?;
    check_operating_window(start_time, end_time)?;
    let elapsed_minutes = (end_time - start_time).num_minutes();

    let reasoning = if elapsed_minutes % 60 == 0 {
        format!(
            "{} to {} is exactly {} hours on each of {} day(s)",
            start_time.format("%H:%M"),
            end_time.format("%H:%M"),
            hours_per_day,
            days.len()
        )
    } else {
        format!(
            "{} to {} is {} minutes, rounded up to {} hours on each of {} day(s)",
            start_time.format("%H:%M"),
            end_time.format("%H:%M"),
            elapsed_minutes,
            hours_per_day,
            days.len()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "billable_hours".to_string(),
        rule_name: "Billable Hours".to_string(),
        date: None,
        input: serde_json::json!({
            "start_date": start_date.to_string(),
            "end_date": end_date.to_string(),
            "start_time": start_time.format("%H:%M").to_string(),
            "end_time": end_time.format("%H:%M").to_string()
        }),
        output: serde_json::json!({
            "days": days.len(),
            "hours_per_day": hours_per_day
        }),
        reasoning,
    };

    Ok(BillableSpan {
        days,
        hours_per_day,
        audit_step,
    })
}
