//! Study Hub Commands
//!
//! Search history, the saved-resources library and the goal planner.

use chrono::{DateTime, NaiveDate, Utc};
use log::debug;

use crate::domain::{find_mut, remove_by_id, DomainResult, Goal, HubData, ValidationError};
use crate::search::{Level, SearchRequest, SearchResult};
use super::outcome::{Notice, Outcome};

/// Add-goal form input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewGoal {
    pub title: String,
    /// Defaults to today
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HubCommand {
    Search { query: String, level: Level },
    Save(SearchResult),
    Unsave(String),
    ClearHistory,
    AddGoal(NewGoal),
    UpdateProgress { id: i64, progress: i32 },
    RemoveGoal(i64),
}

/// Record a search in history and hand back the request to generate results for
pub fn search(data: &mut HubData, query: &str, level: Level, history_cap: usize) -> DomainResult<Outcome> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ValidationError::MissingQuery.into());
    }
    data.history.record(query, history_cap);

    Ok(Outcome {
        search: Some(SearchRequest { query: query.to_string(), level }),
        ..Outcome::changed()
    })
}

/// Save a result to the library; saving a link twice is a no-op
pub fn save_resource(data: &mut HubData, result: SearchResult, now: DateTime<Utc>) -> Outcome {
    if data.is_saved(&result.link) {
        return Outcome::unchanged().with_notice(Notice::info("Already in your library"));
    }
    data.saved.push(result.into_saved(now));
    Outcome::changed().with_notice(Notice::success("📚 Saved to library"))
}

pub fn unsave_resource(data: &mut HubData, link: &str) -> Outcome {
    if remove_by_id(&mut data.saved, &link.to_string()) {
        Outcome::changed().with_notice(Notice::info("Removed from library"))
    } else {
        Outcome::unchanged()
    }
}

pub fn clear_history(data: &mut HubData) -> Outcome {
    if data.history.is_empty() {
        return Outcome::unchanged();
    }
    data.history.clear();
    Outcome::changed()
}

/// Id from the creation time, bumped past any existing id
fn next_goal_id(goals: &[Goal], now: DateTime<Utc>) -> i64 {
    let newest = goals.iter().map(|g| g.id).max().unwrap_or(i64::MIN);
    now.timestamp_millis().max(newest.saturating_add(1))
}

pub fn add_goal(data: &mut HubData, input: NewGoal, now: DateTime<Utc>) -> DomainResult<Outcome> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(ValidationError::MissingGoalTitle.into());
    }
    let date = input.date.unwrap_or_else(|| now.date_naive());
    let id = next_goal_id(&data.goals, now);
    debug!("[PLANNER] Adding goal {}", id);
    data.goals.insert(0, Goal::new(id, title.to_string(), date, now));

    Ok(Outcome::changed().with_notice(Notice::success("🎯 Goal added!")))
}

/// Set a goal's progress; unknown ids are ignored
pub fn update_progress(data: &mut HubData, id: i64, progress: i32, now: DateTime<Utc>) -> Outcome {
    let Some(goal) = find_mut(&mut data.goals, &id) else {
        debug!("[PLANNER] Progress ignored, no goal {}", id);
        return Outcome::unchanged();
    };

    let was_completed = goal.completed;
    goal.set_progress(progress, now);
    if goal.completed && !was_completed {
        Outcome::changed().with_notice(Notice::success("🏆 Goal completed!"))
    } else {
        Outcome::changed()
    }
}

pub fn remove_goal(data: &mut HubData, id: i64) -> Outcome {
    if remove_by_id(&mut data.goals, &id) {
        Outcome::changed()
    } else {
        Outcome::unchanged()
    }
}

pub fn dispatch_hub(
    data: &mut HubData,
    command: HubCommand,
    now: DateTime<Utc>,
    history_cap: usize,
) -> DomainResult<Outcome> {
    match command {
        HubCommand::Search { query, level } => search(data, &query, level, history_cap),
        HubCommand::Save(result) => Ok(save_resource(data, result, now)),
        HubCommand::Unsave(link) => Ok(unsave_resource(data, &link)),
        HubCommand::ClearHistory => Ok(clear_history(data)),
        HubCommand::AddGoal(input) => add_goal(data, input, now),
        HubCommand::UpdateProgress { id, progress } => Ok(update_progress(data, id, progress, now)),
        HubCommand::RemoveGoal(id) => Ok(remove_goal(data, id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, DEFAULT_HISTORY_CAP};
    use crate::search::generate;
    use crate::views::PlannerView;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 14, 0, 0).unwrap()
    }

    fn goal_input(title: &str) -> NewGoal {
        NewGoal { title: title.into(), date: NaiveDate::from_ymd_opt(2026, 12, 1) }
    }

    #[test]
    fn test_search_records_history_and_returns_request() {
        let mut data = HubData::default();
        let outcome = search(&mut data, "  Algebra ", Level::Advanced, DEFAULT_HISTORY_CAP).unwrap();
        assert!(outcome.changed);
        assert_eq!(outcome.search, Some(SearchRequest { query: "Algebra".into(), level: Level::Advanced }));
        assert_eq!(data.history.entries(), ["Algebra"]);
    }

    #[test]
    fn test_blank_search_is_rejected() {
        let mut data = HubData::default();
        let err = search(&mut data, " ", Level::Beginner, DEFAULT_HISTORY_CAP).unwrap_err();
        assert!(matches!(err, DomainError::Validation(ValidationError::MissingQuery)));
        assert!(data.history.is_empty());
    }

    #[test]
    fn test_saving_same_link_twice_keeps_one() {
        let mut data = HubData::default();
        let request = SearchRequest { query: "Biology".into(), level: Level::Beginner };
        let result = generate(&request).remove(0);

        assert!(save_resource(&mut data, result.clone(), now()).changed);
        let again = save_resource(&mut data, result, now());
        assert!(!again.changed);
        assert_eq!(again.notice.unwrap().message, "Already in your library");
        assert_eq!(data.saved.len(), 1);
    }

    #[test]
    fn test_unsave_by_link() {
        let mut data = HubData::default();
        let request = SearchRequest { query: "Biology".into(), level: Level::Beginner };
        let result = generate(&request).remove(1);
        let link = result.link.clone();
        save_resource(&mut data, result, now());

        assert!(unsave_resource(&mut data, &link).changed);
        assert!(!unsave_resource(&mut data, &link).changed);
        assert!(data.saved.is_empty());
    }

    #[test]
    fn test_add_goal_requires_title_and_defaults_date() {
        let mut data = HubData::default();
        let err = add_goal(&mut data, goal_input("  "), now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(ValidationError::MissingGoalTitle)));

        add_goal(&mut data, NewGoal { title: "Read ch. 4".into(), date: None }, now()).unwrap();
        assert_eq!(data.goals[0].date, now().date_naive());
        assert_eq!(data.goals[0].progress, 0);
    }

    #[test]
    fn test_goal_ids_stay_unique_within_a_millisecond() {
        let mut data = HubData::default();
        add_goal(&mut data, goal_input("A"), now()).unwrap();
        add_goal(&mut data, goal_input("B"), now()).unwrap();
        assert_eq!(data.goals[0].title, "B");
        assert_eq!(data.goals[0].id, now().timestamp_millis() + 1);
        assert_eq!(data.goals[1].id, now().timestamp_millis());
        assert_eq!(PlannerView::derive(&data.goals).goals[0].title, "B");
    }

    #[test]
    fn test_progress_to_100_completes_and_stays_completed() {
        let mut data = HubData::default();
        add_goal(&mut data, goal_input("Finish unit"), now()).unwrap();
        let id = data.goals[0].id;

        let done = update_progress(&mut data, id, 100, now());
        assert!(data.goals[0].completed);
        assert_eq!(done.notice.unwrap().message, "🏆 Goal completed!");

        let lowered = update_progress(&mut data, id, 30, now());
        assert!(lowered.changed);
        assert!(data.goals[0].completed);
        assert_eq!(data.goals[0].progress, 30);
    }

    #[test]
    fn test_missing_goal_is_a_noop() {
        let mut data = HubData::default();
        assert_eq!(update_progress(&mut data, 7, 50, now()), Outcome::unchanged());
        assert_eq!(remove_goal(&mut data, 7), Outcome::unchanged());
    }

    #[test]
    fn test_remove_goal_takes_effect_at_once() {
        let mut data = HubData::default();
        add_goal(&mut data, goal_input("A"), now()).unwrap();
        add_goal(&mut data, goal_input("B"), now()).unwrap();
        let id = data.goals[1].id;

        let outcome = dispatch_hub(&mut data, HubCommand::RemoveGoal(id), now(), DEFAULT_HISTORY_CAP).unwrap();
        assert!(outcome.changed);
        assert_eq!(data.goals.len(), 1);
        assert_eq!(data.goals[0].title, "B");
        assert_eq!(remove_goal(&mut data, id), Outcome::unchanged());
    }

    #[test]
    fn test_dispatch_clear_history() {
        let mut data = HubData::default();
        dispatch_hub(&mut data, HubCommand::Search { query: "Physics".into(), level: Level::Beginner }, now(), 8).unwrap();
        let outcome = dispatch_hub(&mut data, HubCommand::ClearHistory, now(), 8).unwrap();
        assert!(outcome.changed);
        assert!(data.history.is_empty());
    }
}
