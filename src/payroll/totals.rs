//! Period totals folded from per-technician payroll rows.

use serde::Serialize;
use utoipa::ToSchema;

use crate::model::payroll_summary::PayrollSummary;

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct PayrollTotals {
    pub tech_count: u32,
    pub backboard_count: u32,

    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub total_hours: f64,

    pub regular_pay: f64,
    pub overtime_pay: f64,
    pub total_commissions: f64,
    pub commission_pay: f64,
    pub backboard_amount: f64,
    pub gross_pay: f64,

    pub jobs_completed: u64,

    /// Share of all hours paid at overtime rate, 0..=100.
    pub overtime_percent: f64,
    pub avg_hours_per_tech: f64,
    pub avg_pay_per_tech: f64,
    /// Falls back to the whole gross when no jobs were completed.
    pub labor_cost_per_job: f64,
}

impl PayrollTotals {
    pub fn from_summaries(summaries: &[PayrollSummary]) -> Self {
        let mut totals = summaries
            .iter()
            .fold(PayrollTotals::default(), |mut acc, row| {
                acc.tech_count += 1;
                if row.backboard_applied {
                    acc.backboard_count += 1;
                }
                acc.regular_hours += row.regular_hours;
                acc.overtime_hours += row.overtime_hours;
                acc.regular_pay += row.regular_pay;
                acc.overtime_pay += row.overtime_pay;
                acc.total_commissions += row.total_commissions;
                acc.commission_pay += row.commission_pay;
                acc.backboard_amount += row.backboard_amount;
                acc.gross_pay += row.gross_pay;
                acc.jobs_completed += u64::from(row.jobs_completed);
                acc
            });

        totals.total_hours = totals.regular_hours + totals.overtime_hours;
        totals.overtime_percent = ratio(totals.overtime_hours, totals.total_hours) * 100.0;

        let techs = f64::from(totals.tech_count);
        totals.avg_hours_per_tech = ratio(totals.total_hours, techs);
        totals.avg_pay_per_tech = ratio(totals.gross_pay, techs);

        totals.labor_cost_per_job = if totals.jobs_completed > 0 {
            totals.gross_pay / totals.jobs_completed as f64
        } else {
            totals.gross_pay
        };

        totals
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
