//! UI Components
//!
//! Leptos components rendering the derived views.

mod toast;
mod progress_card;
mod task_card;
mod task_section;
mod add_task_modal;
mod tracker_page;
mod search_panel;
mod library_panel;
mod planner_panel;
mod timer_panel;
mod hub_page;

pub use toast::Toast;
pub use progress_card::ProgressCard;
pub use task_card::TaskCard;
pub use task_section::TaskSection;
pub use add_task_modal::AddTaskModal;
pub use tracker_page::TrackerPage;
pub use search_panel::SearchPanel;
pub use library_panel::LibraryPanel;
pub use planner_panel::PlannerPanel;
pub use timer_panel::TimerPanel;
pub use hub_page::HubPage;
