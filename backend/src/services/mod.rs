//! Service layer for business logic.
//!
//! Services here are pure computations over data already loaded by the
//! repository layer; orchestration with storage lives in `db::services`.

pub mod analytics;

pub use analytics::{aggregate, AnalyticsError, AnalyticsResult};

#[cfg(test)]
#[path = "analytics_tests.rs"]
mod analytics_tests;
