//! Advisory messages for the payroll dashboard. Pure text, no side effects.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::pay_period::PayPeriodStatus;
use crate::model::payroll_summary::PayrollSummary;
use crate::payroll::totals::PayrollTotals;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Success,
    Info,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PayrollAlert {
    pub level: AlertLevel,
    pub title: String,
    pub message: String,
    /// Set when the alert is about a single technician.
    pub technician_id: Option<u64>,
}

/// Thresholds the alerts are measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertPolicy {
    pub overtime_warn_percent: f64,
    pub overtime_healthy_percent: f64,
    pub tech_overtime_hours: f64,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self {
            overtime_warn_percent: 20.0,
            overtime_healthy_percent: 15.0,
            tech_overtime_hours: 10.0,
        }
    }
}

impl PayrollAlert {
    fn new(level: AlertLevel, title: &str, message: String) -> Self {
        Self {
            level,
            title: title.to_string(),
            message,
            technician_id: None,
        }
    }

    fn for_technician(mut self, technician_id: u64) -> Self {
        self.technician_id = Some(technician_id);
        self
    }
}

/// Alerts in a fixed order: guarantee-pay warnings, the low commission
/// summary, period overtime, per-technician overtime, missing jobs, and
/// finally the draft-ready notice.
pub fn generate_alerts(
    summaries: &[PayrollSummary],
    totals: &PayrollTotals,
    status: PayPeriodStatus,
    policy: &AlertPolicy,
) -> Vec<PayrollAlert> {
    let mut alerts = Vec::new();

    for row in summaries.iter().filter(|r| r.backboard_applied) {
        alerts.push(
            PayrollAlert::new(
                AlertLevel::Warning,
                "Backboard applied",
                format!(
                    "{} earned ${:.2} in commissions, below the ${:.2} threshold; \
                     guarantee of ${:.2} paid instead",
                    row.technician_name,
                    row.total_commissions,
                    row.backboard_threshold,
                    row.backboard_amount
                ),
            )
            .for_technician(row.technician_id),
        );
    }

    if totals.backboard_count > 0 {
        alerts.push(PayrollAlert::new(
            AlertLevel::Info,
            "Low commission period",
            format!(
                "{} of {} technicians are on guarantee pay this period",
                totals.backboard_count, totals.tech_count
            ),
        ));
    }

    if totals.overtime_percent > policy.overtime_warn_percent {
        alerts.push(PayrollAlert::new(
            AlertLevel::Warning,
            "High overtime",
            format!(
                "Overtime is {:.1}% of hours worked; a healthy ceiling is {:.0}%",
                totals.overtime_percent, policy.overtime_healthy_percent
            ),
        ));
    }

    for row in summaries
        .iter()
        .filter(|r| r.overtime_hours > policy.tech_overtime_hours)
    {
        alerts.push(
            PayrollAlert::new(
                AlertLevel::Danger,
                "Excessive overtime",
                format!(
                    "{} logged {:.1} overtime hours (limit {:.0})",
                    row.technician_name, row.overtime_hours, policy.tech_overtime_hours
                ),
            )
            .for_technician(row.technician_id),
        );
    }

    if totals.tech_count > 0 && totals.jobs_completed == 0 {
        alerts.push(PayrollAlert::new(
            AlertLevel::Info,
            "No completed jobs",
            "Time was tracked this period but no completed jobs are linked to it".to_string(),
        ));
    }

    if status == PayPeriodStatus::Draft && totals.gross_pay > 0.0 {
        alerts.push(PayrollAlert::new(
            AlertLevel::Success,
            "Ready for review",
            format!(
                "Draft payroll of ${:.2} is ready for review",
                totals.gross_pay
            ),
        ));
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: u64, name: &str, overtime: f64, jobs: u32) -> PayrollSummary {
        PayrollSummary {
            technician_id: id,
            technician_name: name.to_string(),
            regular_hours: 40.0,
            overtime_hours: overtime,
            regular_pay: 1000.0,
            overtime_pay: overtime * 37.5,
            total_commissions: 250.0,
            commission_pay: 250.0,
            backboard_applied: false,
            backboard_amount: 0.0,
            backboard_threshold: 500.0,
            gross_pay: 1250.0 + overtime * 37.5,
            jobs_completed: jobs,
        }
    }

    fn run(rows: &[PayrollSummary], status: PayPeriodStatus) -> Vec<PayrollAlert> {
        let totals = PayrollTotals::from_summaries(rows);
        generate_alerts(rows, &totals, status, &AlertPolicy::default())
    }

    #[test]
    fn quiet_period_has_no_alerts() {
        let rows = [row(1, "Ana", 2.0, 10), row(2, "Ben", 0.0, 8)];
        assert!(run(&rows, PayPeriodStatus::Processing).is_empty());
    }

    #[test]
    fn backboard_warning_names_amounts() {
        let mut guaranteed = row(9, "Cruz", 0.0, 4);
        guaranteed.backboard_applied = true;
        guaranteed.total_commissions = 312.5;
        guaranteed.backboard_amount = 500.0;

        let alerts = run(&[guaranteed], PayPeriodStatus::Approved);
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].level, AlertLevel::Warning);
        assert_eq!(alerts[0].technician_id, Some(9));
        assert_eq!(
            alerts[0].message,
            "Cruz earned $312.50 in commissions, below the $500.00 threshold; \
             guarantee of $500.00 paid instead"
        );
        assert_eq!(alerts[1].title, "Low commission period");
        assert_eq!(
            alerts[1].message,
            "1 of 1 technicians are on guarantee pay this period"
        );
    }

    #[test]
    fn overtime_warning_above_twenty_percent() {
        // 12 / 52 hours is about 23%
        let alerts = run(&[row(1, "Ana", 12.0, 3)], PayPeriodStatus::Paid);
        let levels: Vec<_> = alerts.iter().map(|a| a.level).collect();
        assert_eq!(levels, vec![AlertLevel::Warning, AlertLevel::Danger]);
        assert_eq!(alerts[0].title, "High overtime");
        assert!(alerts[0].message.contains("23.1%"));
        assert_eq!(alerts[1].technician_id, Some(1));
    }

    #[test]
    fn exactly_ten_overtime_hours_is_not_excessive() {
        let alerts = run(&[row(1, "Ana", 10.0, 3)], PayPeriodStatus::Paid);
        assert!(alerts.iter().all(|a| a.level != AlertLevel::Danger));
    }

    #[test]
    fn tracked_time_without_jobs() {
        let alerts = run(&[row(1, "Ana", 0.0, 0)], PayPeriodStatus::Processing);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].title, "No completed jobs");
    }

    #[test]
    fn draft_with_pay_is_ready_for_review() {
        let alerts = run(&[row(1, "Ana", 0.0, 2)], PayPeriodStatus::Draft);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].level, AlertLevel::Success);

        let mut unpaid = row(1, "Ana", 0.0, 2);
        unpaid.gross_pay = 0.0;
        assert!(run(&[unpaid], PayPeriodStatus::Draft).is_empty());
    }

    #[test]
    fn custom_policy_moves_thresholds() {
        let rows = [row(1, "Ana", 6.0, 3)];
        let totals = PayrollTotals::from_summaries(&rows);
        let strict = AlertPolicy {
            overtime_warn_percent: 10.0,
            overtime_healthy_percent: 8.0,
            tech_overtime_hours: 5.0,
        };

        let alerts = generate_alerts(&rows, &totals, PayPeriodStatus::Paid, &strict);
        assert_eq!(alerts.len(), 2);
        assert!(alerts[0].message.ends_with("a healthy ceiling is 8%"));
    }

    #[test]
    fn order_is_stable_across_runs() {
        let mut rows = vec![row(1, "Ana", 14.0, 0), row(2, "Ben", 11.0, 0)];
        rows[1].backboard_applied = true;

        let first = run(&rows, PayPeriodStatus::Draft);
        let second = run(&rows, PayPeriodStatus::Draft);
        assert_eq!(first, second);

        let titles: Vec<_> = first.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Backboard applied",
                "Low commission period",
                "High overtime",
                "Excessive overtime",
                "Excessive overtime",
                "No completed jobs",
                "Ready for review",
            ]
        );
    }
}
