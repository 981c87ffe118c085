pub mod pay_period;
pub mod payroll_summary;
pub mod role;
pub mod user;
