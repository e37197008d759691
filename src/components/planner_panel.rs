//! Planner Panel Component
//!
//! Goal form, stats and per-goal progress sliders.

use chrono::NaiveDate;
use leptos::prelude::*;
use studyflow_core::commands::{HubCommand, NewGoal};
use studyflow_core::domain::Goal;

use crate::context::use_app;
use crate::store::UiStateStoreFields;

#[component]
pub fn PlannerPanel() -> impl IntoView {
    let ctx = use_app();
    let (title, set_title) = signal(String::new());
    let (date, set_date) = signal(String::new());

    let add_goal = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = NewGoal {
            title: title.get_untracked(),
            date: NaiveDate::parse_from_str(&date.get_untracked(), "%Y-%m-%d").ok(),
        };
        if ctx.dispatch_hub(HubCommand::AddGoal(input)) {
            set_title.set(String::new());
            set_date.set(String::new());
        }
    };

    let planner = move || ctx.ui.planner().get();

    view! {
        <section class="panel planner-panel">
            <h2>"🎯 Goals"</h2>
            <form class="goal-form" on:submit=add_goal>
                <input
                    type="text"
                    placeholder="New goal..."
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </form>

            <div class="planner-stats">
                <span>{move || format!("{} goals", planner().total)}</span>
                <span>{move || format!("✅ {} done", planner().completed)}</span>
                <span>{move || format!("🔥 {} streak", planner().streak)}</span>
                <span>{move || format!("📈 {}% avg", planner().average_progress)}</span>
            </div>

            <div class="goal-list">
                {move || planner().goals.into_iter().map(|goal| view! { <GoalRow goal=goal /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn GoalRow(goal: Goal) -> impl IntoView {
    let ctx = use_app();
    let id = goal.id;
    let progress = goal.progress;

    view! {
        <div class=if goal.completed { "goal-row completed" } else { "goal-row" }>
            <div class="goal-head">
                <span class="goal-title">{goal.title}</span>
                <span class="goal-date">{goal.date.format("%b %-d").to_string()}</span>
                <button
                    class="goal-remove"
                    title="Remove goal"
                    on:click=move |_| {
                        ctx.dispatch_hub(HubCommand::RemoveGoal(id));
                    }
                >
                    "🗑️"
                </button>
            </div>
            <input
                type="range"
                min="0"
                max="100"
                prop:value=progress.to_string()
                on:change=move |ev| {
                    let value = event_target_value(&ev).parse::<i32>().unwrap_or(i32::from(progress));
                    ctx.dispatch_hub(HubCommand::UpdateProgress { id, progress: value });
                }
            />
            <span class="goal-progress">{format!("{}%", progress)}</span>
        </div>
    }
}
