//! Task Card Component
//!
//! One task row: completion check, subject tag, title and meta.

use chrono::NaiveDate;
use leptos::prelude::*;
use studyflow_core::commands::TrackerCommand;
use studyflow_core::domain::{subject_class, Task};
use studyflow_core::views::describe_date;

use crate::context::use_app;

#[component]
pub fn TaskCard(task: Task, today: NaiveDate) -> impl IntoView {
    let ctx = use_app();

    let toggle_id = task.id.clone();
    let delete_id = task.id.clone();
    let completed = task.completed;
    let tag_class = format!("task-subject-tag {}", subject_class(&task.subject));

    view! {
        <div class=if completed { "task-card completed-task" } else { "task-card" }>
            <button
                class="task-check"
                title=if completed { "Mark as not done" } else { "Mark as done" }
                on:click=move |_| {
                    ctx.dispatch_tracker(TrackerCommand::Toggle(toggle_id.clone()));
                }
            >
                {if completed { "✓" } else { "" }}
            </button>
            <div class="task-body">
                <span class=tag_class>{task.subject}</span>
                <div class="task-title">{task.title}</div>
                <div class="task-meta">
                    <span class="task-meta-item">{format!("📅 {}", describe_date(task.date, today))}</span>
                    <span class="task-meta-item">{format!("⏱️ {}", task.time.as_str())}</span>
                </div>
            </div>
            <div class="task-actions">
                <button
                    class="task-delete"
                    title="Delete task"
                    on:click=move |_| {
                        ctx.dispatch_tracker(TrackerCommand::Delete(delete_id.clone()));
                    }
                >
                    "🗑️"
                </button>
            </div>
        </div>
    }
}
