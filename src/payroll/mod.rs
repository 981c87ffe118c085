//! Payroll aggregation for the dashboard: totals, a linear end-of-period
//! projection and advisory alerts. Everything here is pure; handlers do the I/O.

pub mod alerts;
pub mod dashboard;
pub mod error;
pub mod projection;
pub mod totals;
