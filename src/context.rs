//! Application Context
//!
//! Owns the controllers and the countdown, and is the only place commands are
//! dispatched from. Provided to all components via the Leptos Context API.

use chrono::Utc;
use leptos::prelude::*;
use leptos_ticker::{delay, Ticker};
use log::{error, info, warn};
use reactive_stores::Store;

use studyflow_core::commands::{HubCommand, Notice, Outcome, TrackerCommand};
use studyflow_core::search::{self, SearchRequest};
use studyflow_core::timer::{Countdown, TickEvent};
use studyflow_core::{AppConfig, DomainError, StudyHubApp, TrackerApp};

use crate::storage::BrowserStorage;
use crate::store::{SearchState, UiState, UiStateStoreFields, UiStore};

/// Local-storage key holding an optional JSON config override
pub const CONFIG_KEY: &str = "studyflow_config";

/// Read the config override, falling back to defaults
pub fn load_config() -> AppConfig {
    use studyflow_core::repository::KeyValueStore;

    match BrowserStorage.get(CONFIG_KEY) {
        Ok(Some(raw)) => AppConfig::from_json(&raw).unwrap_or_else(|e| {
            warn!("[CONFIG] Ignoring `{}`: {}", CONFIG_KEY, e);
            AppConfig::default()
        }),
        Ok(None) => AppConfig::default(),
        Err(e) => {
            warn!("[CONFIG] {}", e);
            AppConfig::default()
        }
    }
}

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Derived views for rendering
    pub ui: UiStore,
    /// Countdown state; written only through the timer methods below
    pub timer: RwSignal<Countdown>,
    pub config: StoredValue<AppConfig>,
    tracker: StoredValue<TrackerApp<BrowserStorage>, LocalStorage>,
    hub: StoredValue<StudyHubApp<BrowserStorage>, LocalStorage>,
    ticker: Ticker,
    toast_seq: RwSignal<u32>,
}

impl AppContext {
    pub fn new(config: AppConfig, ticker: Ticker) -> Self {
        let now = Utc::now();
        let tracker = TrackerApp::load(BrowserStorage, &config.tracker_key, now);
        let hub = StudyHubApp::load(BrowserStorage, &config.hub_key, config.history_cap);
        if tracker.is_degraded() {
            warn!("[APP] Storage unavailable, changes last for this session only");
        }

        let ui = Store::new(UiState::new(
            tracker.views(now.date_naive()),
            hub.data().clone(),
            hub.planner(),
        ));
        info!("[APP] Ready with {} tasks", tracker.tasks().len());

        Self {
            ui,
            timer: RwSignal::new(Countdown::new(config.default_timer_minutes)),
            config: StoredValue::new(config),
            tracker: StoredValue::new_local(tracker),
            hub: StoredValue::new_local(hub),
            ticker,
            toast_seq: RwSignal::new(0),
        }
    }

    // ========================
    // Commands
    // ========================

    /// Run a tracker command. Returns whether it was accepted.
    pub fn dispatch_tracker(&self, command: TrackerCommand) -> bool {
        let now = Utc::now();
        let result = self.tracker.try_update_value(|app| {
            app.dispatch(command, now).map(|outcome| (outcome, app.views(now.date_naive())))
        });

        match result {
            Some(Ok((outcome, views))) => {
                if outcome.changed {
                    *self.ui.tracker().write() = views;
                }
                self.finish(outcome);
                true
            }
            Some(Err(e)) => {
                self.report(e);
                false
            }
            None => false,
        }
    }

    /// Run a hub command. Returns whether it was accepted.
    pub fn dispatch_hub(&self, command: HubCommand) -> bool {
        let now = Utc::now();
        let result = self.hub.try_update_value(|app| {
            app.dispatch(command, now).map(|outcome| (outcome, app.data().clone(), app.planner()))
        });

        match result {
            Some(Ok((mut outcome, data, planner))) => {
                if outcome.changed {
                    *self.ui.hub().write() = data;
                    *self.ui.planner().write() = planner;
                }
                if let Some(request) = outcome.search.take() {
                    self.run_search(request);
                }
                self.finish(outcome);
                true
            }
            Some(Err(e)) => {
                self.report(e);
                false
            }
            None => false,
        }
    }

    /// Show a loading state, then the generated results after the configured delay.
    /// Overlapping searches are not cancelled; whichever finishes last is shown.
    fn run_search(&self, request: SearchRequest) {
        *self.ui.search().write() = SearchState {
            loading: true,
            query: request.query.clone(),
            results: Vec::new(),
        };

        let ui = self.ui;
        let wait = self.config.with_value(|c| c.search_delay_ms);
        delay(wait, move || {
            let results = search::generate(&request);
            *ui.search().write() = SearchState {
                loading: false,
                query: request.query,
                results,
            };
        });
    }

    fn finish(&self, outcome: Outcome) {
        if let Some(notice) = outcome.notice {
            self.notify(notice);
        }
    }

    fn report(&self, e: DomainError) {
        if e.is_user_facing() {
            self.notify(Notice::warning(e.to_string()));
        } else {
            error!("[APP] {}", e);
        }
    }

    // ========================
    // Toasts
    // ========================

    /// Show a toast; it hides itself unless a newer one replaced it
    pub fn notify(&self, notice: Notice) {
        *self.ui.toast().write() = Some(notice);
        self.toast_seq.update(|seq| *seq = seq.wrapping_add(1));

        let shown = self.toast_seq.get_untracked();
        let seq = self.toast_seq;
        let ui = self.ui;
        let wait = self.config.with_value(|c| c.toast_ms);
        delay(wait, move || {
            if seq.get_untracked() == shown {
                *ui.toast().write() = None;
            }
        });
    }

    // ========================
    // Timer
    // ========================

    pub fn toggle_timer(&self) {
        let running = self.timer.try_update(|t| t.toggle()).unwrap_or(false);
        if running {
            let ctx = *self;
            self.ticker.start(1000, move || ctx.tick_timer());
        } else {
            self.ticker.stop();
        }
    }

    pub fn set_timer_preset(&self, minutes: u32) {
        self.ticker.stop();
        self.timer.update(|t| t.set_preset(minutes));
    }

    pub fn reset_timer(&self) {
        self.ticker.stop();
        self.timer.update(|t| t.reset());
    }

    fn tick_timer(&self) {
        match self.timer.try_update(|t| t.tick()) {
            Some(TickEvent::Expired) => {
                self.ticker.stop();
                info!("[TIMER] Session finished");
                self.notify(Notice::success("⏰ Time's up! Take a break."));
            }
            Some(TickEvent::Ignored) => self.ticker.stop(),
            _ => {}
        }
    }
}

/// Get the app context
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
