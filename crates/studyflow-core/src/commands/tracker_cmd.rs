//! Tracker Commands
//!
//! Add, toggle and delete study tasks.

use chrono::{DateTime, NaiveDate, Utc};
use log::debug;

use crate::domain::{find_mut, new_task_id, remove_by_id, DomainResult, Task, TimeEstimate, ValidationError};
use super::outcome::{Notice, Outcome};

/// Add-task form input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTask {
    /// Subject chip picked in the form
    pub selected_subject: String,
    /// Free-text subject; wins over the chip when non-blank
    pub custom_subject: String,
    pub title: String,
    pub date: Option<NaiveDate>,
    /// Defaults to 30 minutes
    pub time: Option<TimeEstimate>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrackerCommand {
    Add(NewTask),
    Toggle(String),
    Delete(String),
}

/// Validate and prepend a new task
pub fn add_task(tasks: &mut Vec<Task>, input: NewTask, now: DateTime<Utc>) -> DomainResult<Outcome> {
    let custom = input.custom_subject.trim();
    let subject = if custom.is_empty() { input.selected_subject.trim() } else { custom };
    if subject.is_empty() {
        return Err(ValidationError::MissingSubject.into());
    }
    let title = input.title.trim();
    if title.is_empty() {
        return Err(ValidationError::MissingTitle.into());
    }
    let date = input.date.ok_or(ValidationError::MissingDate)?;

    let task = Task::new(
        new_task_id(now),
        subject.to_string(),
        title.to_string(),
        date,
        input.time.unwrap_or_default(),
        now,
    );
    debug!("[TRACKER] Adding task {} ({})", task.id, task.subject);
    tasks.insert(0, task);

    Ok(Outcome::changed().with_notice(Notice::success("✅ Task added!")))
}

/// Flip a task's completion; unknown ids are ignored
pub fn toggle_task(tasks: &mut [Task], id: &str, now: DateTime<Utc>) -> Outcome {
    let Some(task) = find_mut(tasks, &id.to_string()) else {
        debug!("[TRACKER] Toggle ignored, no task {}", id);
        return Outcome::unchanged();
    };

    if task.toggle(now) {
        Outcome::changed().with_notice(Notice::success("🎉 Great job! Task completed!"))
    } else {
        Outcome::changed()
    }
}

/// Remove a task; unknown ids are ignored
pub fn delete_task(tasks: &mut Vec<Task>, id: &str) -> Outcome {
    if remove_by_id(tasks, &id.to_string()) {
        Outcome::changed().with_notice(Notice::info("🗑️ Task removed"))
    } else {
        debug!("[TRACKER] Delete ignored, no task {}", id);
        Outcome::unchanged()
    }
}

pub fn dispatch_tracker(tasks: &mut Vec<Task>, command: TrackerCommand, now: DateTime<Utc>) -> DomainResult<Outcome> {
    match command {
        TrackerCommand::Add(input) => add_task(tasks, input, now),
        TrackerCommand::Toggle(id) => Ok(toggle_task(tasks, &id, now)),
        TrackerCommand::Delete(id) => Ok(delete_task(tasks, &id)),
    }
}
