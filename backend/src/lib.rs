//! # FlowTrack Backend
//!
//! Personal-productivity tracking: users log timed activity sessions with a
//! self-rated effectiveness score and a distraction count, keep goals, and read
//! back effectiveness analytics (hourly and weekly trends, peak time and day,
//! averages).
//!
//! ## Architecture
//!
//! - [`models`]: Activity records, goals and their id types
//! - [`services`]: The pure analytics aggregator
//! - [`db`]: Repository traits, the in-memory store, and the service layer
//! - [`config`]: TOML/env configuration for the server
//! - [`http`]: Axum-based REST API
//!
//! ## Example
//!
//! ```
//! use flowtrack::models::ActivityRecord;
//! use flowtrack::services::aggregate;
//!
//! let records: Vec<ActivityRecord> = serde_json::from_str(
//!     r#"[{"date":"2025-12-09","startTime":"09:00","effectiveness":9,"distractions":1},
//!         {"date":"2025-12-09","startTime":"09:15","effectiveness":7,"distractions":3}]"#,
//! ).unwrap();
//!
//! let analytics = aggregate(&records).unwrap();
//! assert_eq!(analytics.hourly_data[0].hour, "9 AM");
//! assert_eq!(analytics.hourly_data[0].effectiveness, 8);
//! assert_eq!(analytics.summary_stats.average_effectiveness, "8.0");
//! ```

pub mod config;
pub mod db;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
