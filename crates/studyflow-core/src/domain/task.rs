//! Task Entity
//!
//! A study task in the tracker: subject, title, due date and a time estimate.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::Entity;

/// Minutes used when a time estimate cannot be parsed
const DEFAULT_MINUTES: u32 = 30;

/// Estimates beyond a day are treated as unparseable
const MAX_MINUTES: u32 = 24 * 60;

/// Time estimate chip values
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimeEstimate {
    Min15,
    #[default]
    Min30,
    Min45,
    Hour1,
    Hour1Half,
    Hour2,
    Hour3,
    /// Label found in stored data that is not one of the chips
    Other(String),
}

impl TimeEstimate {
    /// Chip order shown in the add-task form
    pub const ALL: [TimeEstimate; 7] = [
        TimeEstimate::Min15,
        TimeEstimate::Min30,
        TimeEstimate::Min45,
        TimeEstimate::Hour1,
        TimeEstimate::Hour1Half,
        TimeEstimate::Hour2,
        TimeEstimate::Hour3,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            TimeEstimate::Min15 => "15m",
            TimeEstimate::Min30 => "30m",
            TimeEstimate::Min45 => "45m",
            TimeEstimate::Hour1 => "1h",
            TimeEstimate::Hour1Half => "1.5h",
            TimeEstimate::Hour2 => "2h",
            TimeEstimate::Hour3 => "3h",
            TimeEstimate::Other(label) => label,
        }
    }

    pub fn from_label(s: &str) -> Self {
        match s {
            "15m" => TimeEstimate::Min15,
            "30m" => TimeEstimate::Min30,
            "45m" => TimeEstimate::Min45,
            "1h" => TimeEstimate::Hour1,
            "1.5h" => TimeEstimate::Hour1Half,
            "2h" => TimeEstimate::Hour2,
            "3h" => TimeEstimate::Hour3,
            other => TimeEstimate::Other(other.to_string()),
        }
    }

    /// Estimated duration in minutes
    pub fn minutes(&self) -> u32 {
        parse_minutes(self.as_str())
    }
}

impl From<String> for TimeEstimate {
    fn from(label: String) -> Self {
        TimeEstimate::from_label(&label)
    }
}

impl From<TimeEstimate> for String {
    fn from(estimate: TimeEstimate) -> Self {
        estimate.as_str().to_string()
    }
}

/// Parse a time label into minutes.
///
/// `"Nh"` is hours (fractions allowed), `"Nm"` is minutes. Anything that does
/// not yield a minute count in `1..=1440` falls back to 30.
pub fn parse_minutes(label: &str) -> u32 {
    let label = label.trim();
    let minutes = if label.contains('h') {
        label
            .replace('h', "")
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|hours| hours.is_finite() && (0.0..=24.0).contains(hours))
            .map(|hours| (hours * 60.0).round() as u32)
    } else {
        let digits: String = label.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse::<u32>().ok()
    };

    match minutes {
        Some(m) if (1..=MAX_MINUTES).contains(&m) => m,
        _ => DEFAULT_MINUTES,
    }
}

/// Time-based id with a short random suffix so two adds in the same
/// millisecond still differ.
pub fn new_task_id(now: DateTime<Utc>) -> String {
    let mut millis = now.timestamp_millis().max(0) as u64;
    let mut base36 = Vec::new();
    loop {
        let digit = (millis % 36) as u32;
        base36.push(std::char::from_digit(digit, 36).unwrap_or('0'));
        millis /= 36;
        if millis == 0 {
            break;
        }
    }
    base36.reverse();

    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}{}", base36.into_iter().collect::<String>(), &suffix[..4])
}

/// A study task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub subject: String,
    pub title: String,
    /// Due date
    pub date: NaiveDate,
    #[serde(default)]
    pub time: TimeEstimate,
    #[serde(default)]
    pub completed: bool,
    /// Epoch milliseconds
    pub created_at: i64,
    /// Epoch milliseconds, set iff `completed`
    #[serde(default)]
    pub completed_at: Option<i64>,
}

impl Task {
    pub fn new(
        id: String,
        subject: String,
        title: String,
        date: NaiveDate,
        time: TimeEstimate,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            subject,
            title,
            date,
            time,
            completed: false,
            created_at: now.timestamp_millis(),
            completed_at: None,
        }
    }

    /// Flip completion, keeping `completed_at` in step. Returns the new state.
    pub fn toggle(&mut self, now: DateTime<Utc>) -> bool {
        self.completed = !self.completed;
        self.completed_at = self.completed.then(|| now.timestamp_millis());
        self.completed
    }
}

impl Entity for Task {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("1h"), 60);
        assert_eq!(parse_minutes("1.5h"), 90);
        assert_eq!(parse_minutes("45m"), 45);
        assert_eq!(parse_minutes(""), 30);
        assert_eq!(parse_minutes("soon"), 30);
        assert_eq!(parse_minutes("xh"), 30);
        assert_eq!(parse_minutes("0m"), 30);
    }

    #[test]
    fn test_parse_minutes_rejects_absurd_estimates() {
        assert_eq!(parse_minutes("24h"), 1440);
        assert_eq!(parse_minutes("1e10h"), 30);
        assert_eq!(parse_minutes("25h"), 30);
        assert_eq!(parse_minutes("99999999999m"), 30);
        assert_eq!(parse_minutes("1441m"), 30);
    }

    #[test]
    fn test_time_estimate_serialization() {
        let json = serde_json::to_string(&TimeEstimate::Hour1Half).unwrap();
        assert_eq!(json, "\"1.5h\"");
        let parsed: TimeEstimate = serde_json::from_str("\"2h\"").unwrap();
        assert_eq!(parsed, TimeEstimate::Hour2);
        let other: TimeEstimate = serde_json::from_str("\"90m\"").unwrap();
        assert_eq!(other, TimeEstimate::Other("90m".to_string()));
        assert_eq!(other.minutes(), 90);
        assert_eq!(TimeEstimate::from_label("45m"), TimeEstimate::Min45);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let mut task = Task::new("t1".into(), "Math".into(), "Limits".into(), date, TimeEstimate::Hour1, now());
        assert!(task.toggle(now()));
        assert_eq!(task.completed_at, Some(now().timestamp_millis()));
        assert!(!task.toggle(now()));
        assert!(!task.completed);
        assert_eq!(task.completed_at, None);
    }

    #[test]
    fn test_task_json_uses_camel_case() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let task = Task::new("t1".into(), "CS".into(), "Heaps".into(), date, TimeEstimate::Min45, now());
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["date"], "2026-10-16");
        assert_eq!(value["time"], "45m");
        assert!(value.get("createdAt").is_some());
        assert!(value["completedAt"].is_null());
    }

    #[test]
    fn test_new_task_id_is_time_prefixed_and_distinct() {
        let a = new_task_id(now());
        let b = new_task_id(now());
        assert_ne!(a, b);
        assert_eq!(a[..a.len() - 4], b[..b.len() - 4]);
    }
}
