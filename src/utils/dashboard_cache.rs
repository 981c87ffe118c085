use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use moka::future::Cache;

use crate::payroll::dashboard::DashboardState;

/// Computed dashboards keyed by pay period id.
///
/// An entry only answers for the day it was computed on, since the
/// projection depends on the date.
#[derive(Clone)]
pub struct DashboardCache {
    inner: Cache<u64, (NaiveDate, Arc<DashboardState>)>,
}

impl DashboardCache {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(1_000) // periods, not rows
                .time_to_live(Duration::from_secs(ttl_secs.max(1)))
                .build(),
        }
    }

    pub async fn get(&self, period_id: u64, today: NaiveDate) -> Option<Arc<DashboardState>> {
        match self.inner.get(&period_id).await {
            Some((computed_on, state)) if computed_on == today => Some(state),
            _ => None,
        }
    }

    pub async fn insert(&self, period_id: u64, today: NaiveDate, state: Arc<DashboardState>) {
        self.inner.insert(period_id, (today, state)).await;
    }

    pub async fn invalidate(&self, period_id: u64) {
        self.inner.invalidate(&period_id).await;
    }
}
