//! Controllers
//!
//! Each app owns its store and storage slot. `dispatch` runs a command handler
//! and persists synchronously whenever the store changed.

mod seed;
mod tracker;
mod hub;

pub use seed::demo_tasks;
pub use tracker::TrackerApp;
pub use hub::StudyHubApp;
