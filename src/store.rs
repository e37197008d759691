//! Global UI State Store
//!
//! Holds the derived views the components render. Uses Leptos reactive_stores
//! for fine-grained reactivity; only the controllers write to it.

use reactive_stores::Store;
use studyflow_core::commands::Notice;
use studyflow_core::domain::HubData;
use studyflow_core::search::SearchResult;
use studyflow_core::views::{PlannerView, TrackerViews};

/// Results area of the search panel
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    /// A search was submitted and its results are not in yet
    pub loading: bool,
    /// Query the current results belong to
    pub query: String,
    pub results: Vec<SearchResult>,
}

/// Everything the views render, re-derived after each command
#[derive(Clone, Debug, Store)]
pub struct UiState {
    pub tracker: TrackerViews,
    pub hub: HubData,
    pub planner: PlannerView,
    pub search: SearchState,
    pub toast: Option<Notice>,
}

impl UiState {
    pub fn new(tracker: TrackerViews, hub: HubData, planner: PlannerView) -> Self {
        Self {
            tracker,
            hub,
            planner,
            search: SearchState::default(),
            toast: None,
        }
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;
