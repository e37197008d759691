//! Study Hub Page

use leptos::prelude::*;

use crate::components::{LibraryPanel, PlannerPanel, SearchPanel, TimerPanel};

#[component]
pub fn HubPage() -> impl IntoView {
    view! {
        <div class="hub-page">
            <header class="page-header">
                <h1>"Study Hub"</h1>
            </header>
            <div class="hub-grid">
                <SearchPanel />
                <TimerPanel />
                <PlannerPanel />
                <LibraryPanel />
            </div>
        </div>
    }
}
