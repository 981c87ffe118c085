use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::payroll::error::PayrollError;

/// One technician's pay for one pay period, as produced by the payroll run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "technician_id": 41,
        "technician_name": "Dana Ruiz",
        "regular_hours": 80.0,
        "overtime_hours": 5.0,
        "regular_pay": 1800.0,
        "overtime_pay": 168.75,
        "total_commissions": 431.25,
        "commission_pay": 431.25,
        "backboard_applied": false,
        "backboard_amount": 0.0,
        "backboard_threshold": 1200.0,
        "gross_pay": 2400.0,
        "jobs_completed": 22
    })
)]
pub struct PayrollSummary {
    pub technician_id: u64,
    pub technician_name: String,

    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub regular_pay: f64,
    pub overtime_pay: f64,

    #[serde(default)]
    pub total_commissions: f64,
    #[serde(default)]
    pub commission_pay: f64,

    /// Guarantee pay replaced commission for this period.
    #[serde(default)]
    pub backboard_applied: bool,
    #[serde(default)]
    pub backboard_amount: f64,
    #[serde(default)]
    pub backboard_threshold: f64,

    pub gross_pay: f64,
    pub jobs_completed: u32,
}

impl PayrollSummary {
    /// Gross pay implied by the breakdown. Commission and guarantee pay are
    /// assumed to be mutually exclusive.
    pub fn expected_gross(&self) -> f64 {
        let variable = if self.backboard_applied {
            self.backboard_amount
        } else {
            self.commission_pay
        };
        self.regular_pay + self.overtime_pay + variable
    }

    /// Hours, pay and thresholds must all be finite and non-negative.
    pub fn validate(&self) -> Result<(), PayrollError> {
        let amounts = [
            ("regular_hours", self.regular_hours),
            ("overtime_hours", self.overtime_hours),
            ("regular_pay", self.regular_pay),
            ("overtime_pay", self.overtime_pay),
            ("total_commissions", self.total_commissions),
            ("commission_pay", self.commission_pay),
            ("backboard_amount", self.backboard_amount),
            ("backboard_threshold", self.backboard_threshold),
            ("gross_pay", self.gross_pay),
        ];

        match amounts
            .into_iter()
            .find(|(_, value)| !(value.is_finite() && *value >= 0.0))
        {
            Some((field, value)) => Err(PayrollError::InvalidAmount {
                technician_id: self.technician_id,
                field,
                value,
            }),
            None => Ok(()),
        }
    }
}
