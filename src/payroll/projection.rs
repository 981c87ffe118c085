//! Linear extrapolation of the period's payroll cost from the days elapsed.
//!
//! Assumes work is spread evenly across the period. It is an estimate for the
//! dashboard, not a forecast.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::model::pay_period::PayPeriod;
use crate::payroll::error::PayrollError;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PayrollProjection {
    /// Both endpoints included.
    pub period_days: i64,
    /// Clamped to `1..=period_days`.
    pub days_elapsed: i64,
    pub multiplier: f64,
    pub projected_payroll: f64,
    pub is_complete: bool,
}

/// Days in the period, counting both start and end. Rejects periods that end
/// before they start.
pub fn period_days(period: &PayPeriod) -> Result<i64, PayrollError> {
    if period.end_date < period.start_date {
        return Err(PayrollError::InvalidPeriod {
            period_id: period.id,
            start_date: period.start_date,
            end_date: period.end_date,
        });
    }

    Ok((period.end_date - period.start_date).num_days() + 1)
}

pub fn project(
    period: &PayPeriod,
    gross_pay: f64,
    today: NaiveDate,
) -> Result<PayrollProjection, PayrollError> {
    let period_days = period_days(period)?;

    // today counts as a worked day
    let raw_elapsed = (today - period.start_date).num_days() + 1;
    let days_elapsed = raw_elapsed.clamp(1, period_days);

    let multiplier = period_days as f64 / days_elapsed as f64;

    Ok(PayrollProjection {
        period_days,
        days_elapsed,
        multiplier,
        projected_payroll: gross_pay * multiplier,
        is_complete: days_elapsed >= period_days,
    })
}
