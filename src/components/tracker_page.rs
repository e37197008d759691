//! Tracker Page
//!
//! Header date, today's progress and the task sections.

use leptos::prelude::*;
use studyflow_core::views::header_date;

use crate::components::{AddTaskModal, ProgressCard, TaskSection};
use crate::context::use_app;
use crate::store::UiStateStoreFields;

#[component]
pub fn TrackerPage() -> impl IntoView {
    let ctx = use_app();
    let (modal_open, set_modal_open) = signal(false);

    let sections = move || {
        let views = ctx.ui.tracker().get();
        let today = views.today;
        views
            .sections()
            .into_iter()
            .cloned()
            .map(|section| view! { <TaskSection section=section today=today /> })
            .collect_view()
    };

    view! {
        <div class="tracker-page">
            <header class="page-header">
                <h1>"StudyFlow"</h1>
                <div class="header-date">{move || header_date(ctx.ui.tracker().read().today)}</div>
            </header>

            <ProgressCard />

            <button class="add-task-btn" on:click=move |_| set_modal_open.set(true)>
                <span class="icon">"＋"</span>
                " Add Study Task"
            </button>

            {sections}

            <AddTaskModal open=modal_open set_open=set_modal_open />
        </div>
    }
}
