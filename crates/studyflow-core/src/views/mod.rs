//! Views Layer
//!
//! Read-only derivations from the stores into what the UI displays.

mod format;
mod tracker_view;
mod planner_view;

pub use format::{describe_date, format_minutes, header_date};
pub use tracker_view::{Banner, DailyProgress, EmptyState, Section, SectionKind, TrackerViews};
pub use planner_view::PlannerView;
