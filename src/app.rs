//! StudyFlow Frontend App
//!
//! Two tabs: the task tracker and the study hub.

use leptos::prelude::*;
use leptos_ticker::use_ticker;
use studyflow_core::AppConfig;

use crate::components::{HubPage, Toast, TrackerPage};
use crate::context::AppContext;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Tracker,
    Hub,
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(config, use_ticker());
    provide_context(ctx);

    let (tab, set_tab) = signal(Tab::Tracker);
    let tab_class = move |t: Tab| if tab.get() == t { "tab-btn active" } else { "tab-btn" };

    view! {
        <div class="app-layout">
            <nav class="tab-bar">
                <button class=move || tab_class(Tab::Tracker) on:click=move |_| set_tab.set(Tab::Tracker)>
                    "📋 Tracker"
                </button>
                <button class=move || tab_class(Tab::Hub) on:click=move |_| set_tab.set(Tab::Hub)>
                    "🎓 Study Hub"
                </button>
            </nav>

            <main class="main-content">
                {move || match tab.get() {
                    Tab::Tracker => view! { <TrackerPage /> }.into_any(),
                    Tab::Hub => view! { <HubPage /> }.into_any(),
                }}
            </main>

            <Toast />
        </div>
    }
}
