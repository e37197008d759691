//! Task Section Component
//!
//! A collapsible section of task cards with its empty state.

use chrono::NaiveDate;
use leptos::prelude::*;
use studyflow_core::views::Section;

use crate::components::TaskCard;

#[component]
pub fn TaskSection(section: Section, today: NaiveDate) -> impl IntoView {
    let (collapsed, set_collapsed) = signal(false);
    let kind = section.kind;
    let count = section.tasks.len();
    let empty = kind.empty_state();

    let content = if section.tasks.is_empty() {
        view! {
            <div class="empty-state">
                <span class="empty-icon">{empty.icon}</span>
                <div class="empty-title">{empty.title}</div>
                <div class="empty-desc">{empty.desc}</div>
            </div>
        }
        .into_any()
    } else {
        section
            .tasks
            .into_iter()
            .map(|task| view! { <TaskCard task=task today=today /> })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="section">
            <div
                class=move || if collapsed.get() { "section-header collapsed" } else { "section-header" }
                on:click=move |_| set_collapsed.update(|c| *c = !*c)
            >
                <span class="section-icon">{kind.icon()}</span>
                <span class="section-title">{kind.title()}</span>
                <span class=format!("section-count {}", kind.count_class())>{count}</span>
                <span class="section-chevron">"▼"</span>
            </div>
            <div class=move || if collapsed.get() { "section-content hidden" } else { "section-content" }>
                {content}
            </div>
        </div>
    }
}
