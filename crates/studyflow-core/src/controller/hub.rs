//! Study hub controller: library, planner and search history share one document.

use chrono::{DateTime, Utc};
use log::{error, info};

use crate::commands::{dispatch_hub, HubCommand, Outcome};
use crate::domain::{DomainResult, HubData};
use crate::repository::{KeyValueStore, StorageSlot};
use crate::views::PlannerView;

pub struct StudyHubApp<S: KeyValueStore> {
    data: HubData,
    slot: StorageSlot<S>,
    history_cap: usize,
}

impl<S: KeyValueStore> StudyHubApp<S> {
    pub fn load(backend: S, key: &str, history_cap: usize) -> Self {
        let slot = StorageSlot::new(backend, key);
        let data: HubData = slot.load();
        info!(
            "[HUB] Loaded {} saved, {} goals, {} searches",
            data.saved.len(),
            data.goals.len(),
            data.history.len()
        );
        Self { data, slot, history_cap }
    }

    pub fn data(&self) -> &HubData {
        &self.data
    }

    pub fn is_degraded(&self) -> bool {
        self.slot.is_degraded()
    }

    /// Apply a command and persist the result. A failed save is logged, not returned.
    pub fn dispatch(&mut self, command: HubCommand, now: DateTime<Utc>) -> DomainResult<Outcome> {
        let outcome = dispatch_hub(&mut self.data, command, now, self.history_cap)?;
        if outcome.changed {
            if let Err(e) = self.slot.save(&self.data) {
                error!("[HUB] Could not save hub data: {}", e);
            }
        }
        Ok(outcome)
    }

    pub fn planner(&self) -> PlannerView {
        PlannerView::derive(&self.data.goals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::NewGoal;
    use crate::repository::{MemoryStore, ReadOnlyStore};
    use crate::search::{generate, Level};
    use chrono::NaiveDate;

    const KEY: &str = "studyhub_data";

    #[test]
    fn test_fresh_hub_is_empty() {
        let hub = StudyHubApp::load(MemoryStore::new(), KEY, 8);
        assert_eq!(hub.data(), &HubData::default());
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let store = MemoryStore::new();
        store.insert(KEY, r#"{"history": ["Algebra"]}"#);
        let hub = StudyHubApp::load(store, KEY, 8);
        assert_eq!(hub.data().history.entries(), ["Algebra"]);
        assert!(hub.data().goals.is_empty());
    }

    #[test]
    fn test_round_trip_through_storage() {
        let store = MemoryStore::new();
        let now = Utc::now();
        let mut hub = StudyHubApp::load(store.clone(), KEY, 8);

        let outcome = hub
            .dispatch(HubCommand::Search { query: "Genetics".into(), level: Level::Intermediate }, now)
            .unwrap();
        let request = outcome.search.expect("search request");
        let first = generate(&request).remove(0);
        hub.dispatch(HubCommand::Save(first), now).unwrap();
        hub.dispatch(
            HubCommand::AddGoal(NewGoal { title: "Mock exam".into(), date: NaiveDate::from_ymd_opt(2026, 11, 2) }),
            now,
        )
        .unwrap();
        let id = hub.data().goals[0].id;
        hub.dispatch(HubCommand::UpdateProgress { id, progress: 100 }, now).unwrap();

        let reloaded = StudyHubApp::load(store, KEY, 8);
        assert_eq!(reloaded.data(), hub.data());
        assert_eq!(reloaded.planner().completed, 1);
        assert_eq!(reloaded.planner().streak, 1);
    }

    #[test]
    fn test_history_cap_comes_from_config() {
        let mut hub = StudyHubApp::load(MemoryStore::new(), KEY, 3);
        for topic in ["a", "b", "c", "d", "e"] {
            hub.dispatch(HubCommand::Search { query: topic.into(), level: Level::Beginner }, Utc::now())
                .unwrap();
        }
        assert_eq!(hub.data().history.entries(), ["e", "d", "c"]);
    }

    #[test]
    fn test_state_survives_session_when_storage_rejects_writes() {
        let inner = MemoryStore::new();
        let mut hub = StudyHubApp::load(ReadOnlyStore::new(inner.clone()), KEY, 8);
        hub.dispatch(HubCommand::Search { query: "Optics".into(), level: Level::Beginner }, Utc::now())
            .unwrap();

        assert!(hub.is_degraded());
        assert_eq!(hub.data().history.entries(), ["Optics"]);
        assert!(inner.raw(KEY).is_none());
    }
}
