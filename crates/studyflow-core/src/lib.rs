//! StudyFlow Core
//!
//! Layered architecture:
//! - domain: records (tasks, goals, saved resources, search history) and errors
//! - repository: durable key-value storage and the JSON slot over it
//! - commands: mutation handlers routed through `dispatch_*`
//! - views: derived, display-ready views of the stores
//! - controller: apps that own a store, dispatch commands and persist
//!
//! Plus the search generator, the countdown timer and configuration.

pub mod config;
pub mod domain;
pub mod repository;
pub mod commands;
pub mod views;
pub mod controller;
pub mod search;
pub mod timer;

pub use config::AppConfig;
pub use controller::{StudyHubApp, TrackerApp};
pub use domain::{DomainError, DomainResult};
