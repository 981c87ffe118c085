use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};
use utoipa::ToSchema;

use crate::payroll::error::PayrollError;

#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    EnumString,
    AsRefStr,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PayPeriodStatus {
    Draft,
    Processing,
    Approved,
    Paid,
    Void,
}

impl TryFrom<String> for PayPeriodStatus {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().to_lowercase().parse()
    }
}

impl PayPeriodStatus {
    /// Forward steps only; anything still open can be voided.
    pub fn can_transition_to(self, next: PayPeriodStatus) -> bool {
        use PayPeriodStatus::*;

        matches!(
            (self, next),
            (Draft, Processing)
                | (Processing, Approved)
                | (Approved, Paid)
                | (Draft, Void)
                | (Processing, Void)
                | (Approved, Void)
        )
    }

    pub fn transition(self, next: PayPeriodStatus) -> Result<PayPeriodStatus, PayrollError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(PayrollError::IllegalTransition {
                from: self,
                to: next,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 12,
        "start_date": "2026-01-01",
        "end_date": "2026-01-31",
        "status": "draft"
    })
)]
pub struct PayPeriod {
    #[schema(example = 12)]
    pub id: u64,

    #[schema(example = "2026-01-01", value_type = String, format = "date")]
    pub start_date: NaiveDate,

    #[schema(example = "2026-01-31", value_type = String, format = "date")]
    pub end_date: NaiveDate,

    #[sqlx(try_from = "String")]
    pub status: PayPeriodStatus,
}
