//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer knows nothing about storage or rendering.

mod entity;
mod task;
mod goal;
mod saved_item;
mod history;
mod subject;
mod hub_data;

pub use entity::{Entity, DomainError, DomainResult, ValidationError, find_mut, remove_by_id};
pub use task::{Task, TimeEstimate, parse_minutes, new_task_id};
pub use goal::Goal;
pub use saved_item::{ResourceKind, SavedItem};
pub use history::{SearchHistory, DEFAULT_HISTORY_CAP};
pub use subject::{Subject, SUBJECTS, subject_class};
pub use hub_data::HubData;
