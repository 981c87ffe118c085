use std::env;
use std::str::FromStr;

use anyhow::{Context, Result, ensure};

use crate::payroll::alerts::AlertPolicy;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub server_addr: String,
    pub access_token_ttl: usize,
    pub refresh_token_ttl: usize,

    // Rate limiting
    pub rate_login_per_min: u32,
    pub rate_refresh_per_min: u32,
    pub rate_protected_per_min: u32,

    pub api_prefix: String,

    /// Seconds a computed dashboard is reused for the same period and day
    pub dashboard_cache_ttl: u64,
    pub alert_policy: AlertPolicy,
}

fn required(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("{key} must be set"))
}

fn optional<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}

/// Alert thresholds: comparisons against NaN are always false, which would
/// silently switch the alerts off.
fn threshold(key: &str, default: f64) -> Result<f64> {
    let value = optional(key, default)?;
    ensure!(
        value.is_finite() && value >= 0.0,
        "{key} must be a finite, non-negative number, got {value}"
    );
    Ok(value)
}

impl Config {
    /// Reads the process environment; `main` loads `.env` beforehand.
    pub fn from_env() -> Result<Self> {
        let defaults = AlertPolicy::default();

        Ok(Self {
            server_addr: required("SERVER_ADDR")?,
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            access_token_ttl: optional("ACCESS_TOKEN_TTL", 900)?, // 15 min
            refresh_token_ttl: optional("REFRESH_TOKEN_TTL", 604_800)?, // 7 days

            rate_login_per_min: optional("RATE_LOGIN_PER_MIN", 60)?,
            rate_refresh_per_min: optional("RATE_REFRESH_PER_MIN", 30)?,
            rate_protected_per_min: optional("RATE_PROTECTED_PER_MIN", 1000)?,

            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),

            dashboard_cache_ttl: optional("DASHBOARD_CACHE_TTL", 300)?,
            alert_policy: AlertPolicy {
                overtime_warn_percent: threshold(
                    "PAYROLL_OT_WARN_PERCENT",
                    defaults.overtime_warn_percent,
                )?,
                overtime_healthy_percent: threshold(
                    "PAYROLL_OT_HEALTHY_PERCENT",
                    defaults.overtime_healthy_percent,
                )?,
                tech_overtime_hours: threshold(
                    "PAYROLL_TECH_OT_HOURS",
                    defaults.tech_overtime_hours,
                )?,
            },
        })
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            database_url: "mysql://localhost/payroll_test".into(),
            jwt_secret: "test-secret".into(),
            server_addr: "127.0.0.1:0".into(),
            access_token_ttl: 900,
            refresh_token_ttl: 3600,
            rate_login_per_min: 60,
            rate_refresh_per_min: 30,
            rate_protected_per_min: 1000,
            api_prefix: "/api".into(),
            dashboard_cache_ttl: 300,
            alert_policy: AlertPolicy::default(),
        }
    }
}
