//! Library Panel Component
//!
//! Saved resources, newest last, each removable.

use leptos::prelude::*;
use studyflow_core::commands::HubCommand;

use crate::context::use_app;
use crate::store::UiStateStoreFields;

#[component]
pub fn LibraryPanel() -> impl IntoView {
    let ctx = use_app();
    let saved = move || ctx.ui.hub().read().saved.clone();

    view! {
        <section class="panel library-panel">
            <h2>{move || format!("📚 My Library ({})", saved().len())}</h2>
            <Show
                when=move || !saved().is_empty()
                fallback=|| view! { <div class="empty-desc">"Save resources from a search to find them here."</div> }
            >
                <For
                    each=saved
                    key=|item| item.link.clone()
                    children=move |item| {
                        let link = item.link.clone();
                        view! {
                            <div class="library-row">
                                <span class="result-icon">{item.icon.icon()}</span>
                                <a href=item.link target="_blank" rel="noopener noreferrer">{item.title}</a>
                                <button
                                    class="library-remove"
                                    title="Remove from library"
                                    on:click=move |_| {
                                        ctx.dispatch_hub(HubCommand::Unsave(link.clone()));
                                    }
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    }
                />
            </Show>
        </section>
    }
}
