use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::model::pay_period::PayPeriod;
use crate::model::payroll_summary::PayrollSummary;
use crate::payroll::alerts::{AlertPolicy, PayrollAlert, generate_alerts};
use crate::payroll::error::PayrollError;
use crate::payroll::projection::{PayrollProjection, period_days, project};
use crate::payroll::totals::PayrollTotals;

/// Allowed drift between reported gross pay and its breakdown.
pub const GROSS_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GrossPayMismatch {
    pub technician_id: u64,
    pub technician_name: String,
    pub reported_gross: f64,
    pub expected_gross: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PayrollDashboard {
    pub period: PayPeriod,
    #[schema(value_type = String, format = "date")]
    pub as_of: NaiveDate,
    pub totals: PayrollTotals,
    pub projection: PayrollProjection,
    pub alerts: Vec<PayrollAlert>,
    pub gross_pay_mismatches: Vec<GrossPayMismatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DashboardState {
    /// Nothing to aggregate for the period yet.
    NoData { period: PayPeriod },
    Ready(PayrollDashboard),
}

/// Rows whose gross pay does not add up to regular + overtime + commission
/// (or guarantee pay when the backboard applied).
pub fn gross_pay_mismatches(summaries: &[PayrollSummary]) -> Vec<GrossPayMismatch> {
    summaries
        .iter()
        .filter_map(|row| {
            let expected = row.expected_gross();
            ((row.gross_pay - expected).abs() > GROSS_TOLERANCE).then(|| GrossPayMismatch {
                technician_id: row.technician_id,
                technician_name: row.technician_name.clone(),
                reported_gross: row.gross_pay,
                expected_gross: expected,
            })
        })
        .collect()
}

pub fn build_dashboard(
    period: &PayPeriod,
    summaries: &[PayrollSummary],
    today: NaiveDate,
    policy: &AlertPolicy,
) -> Result<DashboardState, PayrollError> {
    period_days(period)?;

    if summaries.is_empty() {
        return Ok(DashboardState::NoData {
            period: period.clone(),
        });
    }

    let totals = PayrollTotals::from_summaries(summaries);
    let projection = project(period, totals.gross_pay, today)?;
    let alerts = generate_alerts(summaries, &totals, period.status, policy);

    Ok(DashboardState::Ready(PayrollDashboard {
        period: period.clone(),
        as_of: today,
        totals,
        projection,
        alerts,
        gross_pay_mismatches: gross_pay_mismatches(summaries),
    }))
}
