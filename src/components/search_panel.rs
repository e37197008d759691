//! Search Panel Component
//!
//! Topic + level form, recent searches and the generated resource list.

use leptos::prelude::*;
use studyflow_core::commands::HubCommand;
use studyflow_core::search::{Level, SearchResult};

use crate::context::use_app;
use crate::store::UiStateStoreFields;

#[component]
pub fn SearchPanel() -> impl IntoView {
    let ctx = use_app();
    let (query, set_query) = signal(String::new());
    let (level, set_level) = signal(Level::default());

    let run = move |text: String| {
        ctx.dispatch_hub(HubCommand::Search { query: text, level: level.get_untracked() });
    };

    let history = move || ctx.ui.hub().read().history.entries().to_vec();

    view! {
        <section class="panel search-panel">
            <h2>"🔍 Find Resources"</h2>
            <form
                class="search-form"
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    run(query.get_untracked());
                }
            >
                <input
                    type="text"
                    placeholder="What are you studying?"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <select on:change=move |ev| set_level.set(Level::from_label(&event_target_value(&ev)))>
                    {Level::ALL.into_iter().map(|l| view! {
                        <option value=l.as_str() selected=move || level.get() == l>{l.label()}</option>
                    }).collect_view()}
                </select>
                <button type="submit">"Search"</button>
            </form>

            <Show when=move || !history().is_empty()>
                <div class="search-history">
                    {move || history().into_iter().map(|past| {
                        let label = past.clone();
                        view! {
                            <button
                                type="button"
                                class="history-chip"
                                on:click=move |_| {
                                    set_query.set(past.clone());
                                    run(past.clone());
                                }
                            >
                                {label}
                            </button>
                        }
                    }).collect_view()}
                    <button
                        type="button"
                        class="history-clear"
                        on:click=move |_| {
                            ctx.dispatch_hub(HubCommand::ClearHistory);
                        }
                    >
                        "Clear"
                    </button>
                </div>
            </Show>

            <div class="search-results">
                {move || {
                    let state = ctx.ui.search().get();
                    if state.loading {
                        view! { <div class="search-loading">{format!("Finding resources for \"{}\"...", state.query)}</div> }
                            .into_any()
                    } else {
                        state.results.into_iter().map(|result| view! { <ResultRow result=result /> }).collect_view().into_any()
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn ResultRow(result: SearchResult) -> impl IntoView {
    let ctx = use_app();
    let link = result.link.clone();
    let saved = move || ctx.ui.hub().read().is_saved(&link);
    let saved_label = saved.clone();
    let to_save = result.clone();

    view! {
        <div class="result-row">
            <span class="result-icon">{result.kind.icon()}</span>
            <div class="result-body">
                <a class="result-title" href=result.link target="_blank" rel="noopener noreferrer">
                    {result.title}
                </a>
                <div class="result-desc">{result.desc}</div>
            </div>
            <button
                class="save-btn"
                disabled=saved.clone()
                on:click=move |_| {
                    ctx.dispatch_hub(HubCommand::Save(to_save.clone()));
                }
            >
                {move || if saved_label() { "Saved" } else { "Save" }}
            </button>
        </div>
    }
}
