//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all stored records.
//! Every record has an identifier that is unique within its store.

use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: PartialEq + Clone + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Remove every entity with the given id, returning whether anything was removed.
pub fn remove_by_id<T: Entity>(list: &mut Vec<T>, id: &T::Id) -> bool {
    let before = list.len();
    list.retain(|entity| entity.id() != *id);
    list.len() != before
}

/// Find a mutable entity by id.
pub fn find_mut<'a, T: Entity>(list: &'a mut [T], id: &T::Id) -> Option<&'a mut T> {
    list.iter_mut().find(|entity| entity.id() == *id)
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Missing or malformed user input. The display text is shown to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("⚠️ Please select or type a subject")]
    MissingSubject,
    #[error("⚠️ Please enter a task name")]
    MissingTitle,
    #[error("⚠️ Please select a date")]
    MissingDate,
    #[error("⚠️ Please enter a goal")]
    MissingGoalTitle,
    #[error("⚠️ Please enter a topic to search")]
    MissingQuery,
}

/// Domain-level errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Storage unavailable: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DomainError {
    /// Whether the error should be shown to the user rather than logged.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }
}
