//! Effectiveness analytics over a user's activity log.
//!
//! [`aggregate`] turns a flat list of [`ActivityRecord`]s into the four views
//! the dashboard renders: records grouped by date, average effectiveness per
//! hour of day, average effectiveness per weekday, and summary statistics.
//! The computation is pure: no I/O, no shared state, and the same input always
//! serializes to the same output.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::models::ActivityRecord;

/// Hours of day shown on the hourly chart (6 AM through 11 PM).
/// Records starting outside this window are not charted.
pub const DISPLAY_HOURS: RangeInclusive<u32> = 6..=23;

/// Weekday labels, Monday first.
pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Placeholder label when there is no peak to report.
pub const NO_PEAK: &str = "—";

/// Error raised when a record cannot be placed in a bucket.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyticsError {
    #[error("record {index}: invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { index: usize, value: String },

    #[error("record {index}: invalid startTime '{value}', expected HH:MM")]
    InvalidStartTime { index: usize, value: String },
}

/// Average effectiveness for one hour-of-day bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyPoint {
    pub hour: String,
    pub effectiveness: i64,
}

/// Average effectiveness for one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPoint {
    pub day: String,
    pub effectiveness: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub peak_time_label: String,
    pub peak_day_label: String,
    /// Mean over every input record, one decimal place.
    pub average_effectiveness: String,
    /// Mean over every input record, one decimal place.
    pub average_distractions: String,
}

/// Complete analytics view of an activity list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResult {
    /// Records keyed by their `date` string; input order within each date.
    pub activities_by_date: BTreeMap<String, Vec<ActivityRecord>>,
    /// Only hours in [`DISPLAY_HOURS`] with at least one record, in hour order.
    pub hourly_data: Vec<HourlyPoint>,
    /// Always seven entries, Mon..Sun. Days without records report 0.
    pub weekly_data: Vec<WeeklyPoint>,
    pub summary_stats: SummaryStats,
}

/// Running sum and count of effectiveness scores for one key.
///
/// Scores are unbounded `i64`s, so the sum is widened to `i128`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Bucket {
    pub sum: i128,
    pub count: u64,
}

impl Bucket {
    fn add(&mut self, effectiveness: i64) {
        self.sum += i128::from(effectiveness);
        self.count += 1;
    }

    /// Rounded mean (half away from zero), 0 when empty.
    pub(crate) fn rounded_average(&self) -> i64 {
        if self.count == 0 {
            return 0;
        }
        // `as` saturates at the i64 bounds.
        (self.sum as f64 / self.count as f64).round() as i64
    }
}

/// 12-hour clock label for an hour of day: 0 -> "12 AM", 13 -> "1 PM".
pub fn hour_label(hour: u32) -> String {
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{} {}", display, suffix)
}

/// Build the full analytics view for `activities`.
///
/// Fails on the first record whose `date` or `startTime` does not parse;
/// records are never skipped or coerced.
pub fn aggregate(activities: &[ActivityRecord]) -> Result<AnalyticsResult, AnalyticsError> {
    let activities_by_date = group_by_date(activities);
    let hourly_buckets = bucket_by_hour(activities)?;
    let weekly_buckets = bucket_by_weekday(activities)?;

    let hourly_data: Vec<HourlyPoint> = DISPLAY_HOURS
        .filter_map(|hour| {
            hourly_buckets.get(&hour).map(|bucket| HourlyPoint {
                hour: hour_label(hour),
                effectiveness: bucket.rounded_average(),
            })
        })
        .collect();

    let weekly_data: Vec<WeeklyPoint> = WEEKDAYS
        .iter()
        .zip(weekly_buckets.iter())
        .map(|(day, bucket)| WeeklyPoint {
            day: (*day).to_string(),
            effectiveness: bucket.rounded_average(),
        })
        .collect();

    let peak_time_label = peak_label(
        hourly_data.iter().map(|p| (p.hour.as_str(), p.effectiveness)),
        None,
    );
    // Absent days read as 0, so only a strictly positive day can be the peak.
    let peak_day_label = peak_label(
        weekly_data.iter().map(|p| (p.day.as_str(), p.effectiveness)),
        Some(0),
    );

    let total_effectiveness: i128 = activities
        .iter()
        .map(|a| i128::from(a.effectiveness))
        .sum();
    let total_distractions: u64 = activities.iter().map(|a| u64::from(a.distractions)).sum();

    log::debug!(
        "aggregated {} activities into {} dates, {} charted hours",
        activities.len(),
        activities_by_date.len(),
        hourly_data.len()
    );

    Ok(AnalyticsResult {
        activities_by_date,
        hourly_data,
        weekly_data,
        summary_stats: SummaryStats {
            peak_time_label,
            peak_day_label,
            average_effectiveness: format_mean(total_effectiveness as f64, activities.len()),
            average_distractions: format_mean(total_distractions as f64, activities.len()),
        },
    })
}

/// Stable grouping by the raw `date` string.
pub(crate) fn group_by_date(
    activities: &[ActivityRecord],
) -> BTreeMap<String, Vec<ActivityRecord>> {
    activities.iter().fold(BTreeMap::new(), |mut groups, record| {
        groups
            .entry(record.date.clone())
            .or_insert_with(Vec::new)
            .push(record.clone());
        groups
    })
}

/// Effectiveness buckets keyed by start hour (0-23). Records without a start
/// time are left out.
pub(crate) fn bucket_by_hour(
    activities: &[ActivityRecord],
) -> Result<BTreeMap<u32, Bucket>, AnalyticsError> {
    activities
        .iter()
        .enumerate()
        .try_fold(BTreeMap::new(), |mut buckets, (index, record)| {
            if let Some(parsed) = record.start_hour() {
                let hour = parsed.map_err(|_| AnalyticsError::InvalidStartTime {
                    index,
                    value: record.start_time.clone().unwrap_or_default(),
                })?;
                buckets
                    .entry(hour)
                    .or_insert_with(Bucket::default)
                    .add(record.effectiveness);
            }
            Ok(buckets)
        })
}

/// Effectiveness buckets indexed by ISO weekday, Monday = 0.
pub(crate) fn bucket_by_weekday(
    activities: &[ActivityRecord],
) -> Result<[Bucket; 7], AnalyticsError> {
    activities
        .iter()
        .enumerate()
        .try_fold([Bucket::default(); 7], |mut buckets, (index, record)| {
            let date = record
                .parsed_date()
                .map_err(|_| AnalyticsError::InvalidDate {
                    index,
                    value: record.date.clone(),
                })?;
            buckets[date.weekday().num_days_from_monday() as usize].add(record.effectiveness);
            Ok(buckets)
        })
}

/// Label with the strictly greatest value; earlier entries win ties.
///
/// With a `floor`, a label must also exceed it to count.
pub(crate) fn peak_label<'a, I>(points: I, floor: Option<i64>) -> String
where
    I: IntoIterator<Item = (&'a str, i64)>,
{
    let mut best: Option<(&str, i64)> = None;
    for (label, value) in points {
        let beats = match best {
            Some((_, current)) => value > current,
            None => floor.map_or(true, |f| value > f),
        };
        if beats {
            best = Some((label, value));
        }
    }
    best.map_or_else(|| NO_PEAK.to_string(), |(label, _)| label.to_string())
}

/// Mean to one decimal place, `"0.0"` when there is nothing to average.
pub(crate) fn format_mean(total: f64, count: usize) -> String {
    if count == 0 {
        return "0.0".to_string();
    }
    let mean = total / count as f64;
    // `+ 0.0` turns a rounded -0.0 into 0.0.
    let rounded = (mean * 10.0).round() / 10.0 + 0.0;
    format!("{:.1}", rounded)
}
