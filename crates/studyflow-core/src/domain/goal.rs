//! Goal Entity
//!
//! A planner goal with a target date and a 0-100 progress value.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;

pub const MAX_PROGRESS: u8 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Epoch milliseconds at creation, bumped if needed to stay unique
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub completed: bool,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
}

impl Goal {
    pub fn new(id: i64, title: String, date: NaiveDate, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            date,
            progress: 0,
            completed: false,
            created_at: now.timestamp_millis(),
            completed_at: None,
        }
    }

    /// Set progress, clamped to 0..=100.
    ///
    /// Reaching 100 completes the goal. Completion is never cleared here, so a
    /// goal stays completed if its progress is later lowered.
    pub fn set_progress(&mut self, progress: i32, now: DateTime<Utc>) {
        self.progress = progress.clamp(0, MAX_PROGRESS as i32) as u8;
        if self.progress == MAX_PROGRESS && !self.completed {
            self.completed = true;
            self.completed_at = Some(now.timestamp_millis());
        }
    }
}

impl Entity for Goal {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}
