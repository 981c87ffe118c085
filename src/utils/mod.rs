pub mod dashboard_cache;
