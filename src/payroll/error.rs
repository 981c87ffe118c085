use chrono::NaiveDate;
use derive_more::{Display, Error};

use crate::model::pay_period::PayPeriodStatus;

#[derive(Debug, Display, Error, Clone, PartialEq)]
pub enum PayrollError {
    #[display(
        fmt = "pay period {} ends on {} before it starts on {}",
        period_id,
        end_date,
        start_date
    )]
    InvalidPeriod {
        period_id: u64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    },

    #[display(
        fmt = "technician {} has an invalid {}: {}",
        technician_id,
        field,
        value
    )]
    InvalidAmount {
        technician_id: u64,
        field: &'static str,
        value: f64,
    },

    #[display(fmt = "cannot move pay period from {} to {}", from, to)]
    IllegalTransition {
        from: PayPeriodStatus,
        to: PayPeriodStatus,
    },
}
