//! Tracker controller

use chrono::{DateTime, NaiveDate, Utc};
use log::{error, info, warn};

use crate::commands::{dispatch_tracker, Outcome, TrackerCommand};
use crate::domain::{DomainResult, Task};
use crate::repository::{KeyValueStore, StorageSlot};
use crate::views::TrackerViews;

use super::seed::demo_tasks;

pub struct TrackerApp<S: KeyValueStore> {
    tasks: Vec<Task>,
    slot: StorageSlot<S>,
}

impl<S: KeyValueStore> TrackerApp<S> {
    /// Restore tasks from storage, seeding demo tasks when there are none.
    pub fn load(backend: S, key: &str, now: DateTime<Utc>) -> Self {
        let slot = StorageSlot::new(backend, key);
        let tasks: Vec<Task> = slot.load();
        let mut app = Self { tasks, slot };

        if app.tasks.is_empty() {
            info!("[TRACKER] No saved tasks, seeding demo data");
            app.tasks = demo_tasks(now);
            if let Err(e) = app.persist() {
                warn!("[TRACKER] Could not persist demo data: {}", e);
            }
        } else {
            info!("[TRACKER] Loaded {} tasks", app.tasks.len());
        }
        app
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_degraded(&self) -> bool {
        self.slot.is_degraded()
    }

    /// Apply a command and persist the result.
    ///
    /// Only validation errors are returned; a failed save is logged and the
    /// in-memory change stands.
    pub fn dispatch(&mut self, command: TrackerCommand, now: DateTime<Utc>) -> DomainResult<Outcome> {
        let outcome = dispatch_tracker(&mut self.tasks, command, now)?;
        if outcome.changed {
            if let Err(e) = self.persist() {
                error!("[TRACKER] Could not save tasks: {}", e);
            }
        }
        Ok(outcome)
    }

    pub fn views(&self, today: NaiveDate) -> TrackerViews {
        TrackerViews::derive(&self.tasks, today)
    }

    fn persist(&mut self) -> DomainResult<()> {
        self.slot.save(&self.tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::NewTask;
    use crate::repository::{MemoryStore, ReadOnlyStore};
    use chrono::TimeZone;

    const KEY: &str = "studyflow_tasks";

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 14, 0, 0).unwrap()
    }

    #[test]
    fn test_first_load_seeds_and_persists_demo() {
        let store = MemoryStore::new();
        let app = TrackerApp::load(store.clone(), KEY, now());
        assert_eq!(app.tasks().len(), 6);
        assert!(store.raw(KEY).is_some());

        let views = app.views(now().date_naive());
        assert_eq!(views.progress.total, 3);
        assert_eq!(views.progress.done, 1);
        assert_eq!(views.upcoming.tasks.len(), 3);
    }

    #[test]
    fn test_dispatch_persists_and_reload_reproduces() {
        let store = MemoryStore::new();
        let mut app = TrackerApp::load(store.clone(), KEY, now());

        let add = NewTask {
            selected_subject: "History".into(),
            title: "Cold War essay".into(),
            date: NaiveDate::from_ymd_opt(2026, 10, 20),
            ..NewTask::default()
        };
        app.dispatch(TrackerCommand::Add(add), now()).unwrap();
        app.dispatch(TrackerCommand::Toggle("d1".into()), now()).unwrap();
        app.dispatch(TrackerCommand::Delete("d6".into()), now()).unwrap();

        let reloaded = TrackerApp::load(store, KEY, now());
        assert_eq!(reloaded.tasks(), app.tasks());
        assert_eq!(reloaded.tasks()[0].title, "Cold War essay");
    }

    #[test]
    fn test_oversized_time_labels_load_and_derive() {
        let store = MemoryStore::new();
        store.insert(
            KEY,
            r#"[
                {"id":"x1","subject":"Math","title":"A","date":"2026-10-16","time":"1e10h","completed":true,"createdAt":0,"completedAt":1},
                {"id":"x2","subject":"Math","title":"B","date":"2026-10-16","time":"1e10h","completed":false,"createdAt":0}
            ]"#,
        );
        let app = TrackerApp::load(store, KEY, now());
        assert_eq!(app.tasks().len(), 2);

        let views = app.views(now().date_naive());
        assert_eq!(views.progress.planned_minutes, 60);
        assert_eq!(views.progress.studied_minutes, 30);
    }

    #[test]
    fn test_failed_save_still_reports_outcome() {
        let inner = MemoryStore::new();
        let mut app = TrackerApp::load(ReadOnlyStore::new(inner.clone()), KEY, now());

        let outcome = app.dispatch(TrackerCommand::Toggle("d1".into()), now()).unwrap();
        assert!(outcome.changed);
        assert!(outcome.notice.is_some());
        assert!(app.is_degraded());
        assert!(app.tasks().iter().any(|t| t.id == "d1" && t.completed));
        assert!(inner.raw(KEY).is_none());
    }

    #[test]
    fn test_rejected_add_does_not_touch_storage() {
        let store = MemoryStore::new();
        let mut app = TrackerApp::load(store.clone(), KEY, now());
        let before = store.raw(KEY);

        let result = app.dispatch(TrackerCommand::Add(NewTask::default()), now());
        assert!(result.is_err());
        assert_eq!(store.raw(KEY), before);
        assert_eq!(app.tasks().len(), 6);
    }
}
