//! Activity records as logged by users.
//!
//! An [`ActivityRecord`] is the plain value the analytics aggregator consumes.
//! A [`StoredActivity`] wraps it with ownership and soft-delete state once it
//! has been persisted by a repository.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

crate::define_id_type!(i64, ActivityId);
crate::define_id_type!(i64, UserId);

/// Calendar date format used on the wire (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One logged session of work, as submitted by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    /// Local wall-clock date, `YYYY-MM-DD`.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    /// `HH:MM`, 24-hour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Self-rated score, conventionally 0-10. Not clamped.
    pub effectiveness: i64,
    pub distractions: u32,
}

impl ActivityRecord {
    /// Parse `date` as a naive calendar date.
    pub fn parsed_date(&self) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
    }

    /// Hour of day (0-23) of `start_time`, or `None` when no start time was logged.
    ///
    /// A blank start time counts as not logged.
    pub fn start_hour(&self) -> Option<Result<u32, chrono::ParseError>> {
        non_blank(&self.start_time).map(|raw| parse_time_of_day(raw).map(|t| t.hour()))
    }

    /// Drop blank `start_time`/`end_time` values so they read as absent.
    pub fn clear_blank_times(&mut self) {
        for field in [&mut self.start_time, &mut self.end_time] {
            if non_blank(field).is_none() {
                *field = None;
            }
        }
    }

    /// Minutes between `start_time` and `end_time`, wrapping past midnight.
    ///
    /// Returns `Ok(None)` unless both ends are present.
    pub fn span_minutes(&self) -> Result<Option<u32>, chrono::ParseError> {
        let (Some(start), Some(end)) = (non_blank(&self.start_time), non_blank(&self.end_time))
        else {
            return Ok(None);
        };
        let start = parse_time_of_day(start)?;
        let end = parse_time_of_day(end)?;
        let minutes = (end - start).num_minutes().rem_euclid(24 * 60);
        Ok(Some(minutes as u32))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|raw| !raw.trim().is_empty())
}

/// Parse a 24-hour time of day in `HH:MM` (or `HH:MM:SS`) form.
pub fn parse_time_of_day(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|e| NaiveTime::parse_from_str(raw, "%H:%M:%S").map_err(|_| e))
}

/// An activity owned by a user, as held by a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredActivity {
    pub id: ActivityId,
    pub user_id: UserId,
    #[serde(flatten)]
    pub record: ActivityRecord,
    #[serde(default)]
    pub deleted: bool,
}
