//! Add Task Modal Component
//!
//! Form for creating a task: subject chips or a custom subject, title, date
//! and a time-estimate chip.

use chrono::{NaiveDate, Utc};
use leptos::prelude::*;
use studyflow_core::commands::{NewTask, TrackerCommand};
use studyflow_core::domain::{TimeEstimate, SUBJECTS};

use crate::context::use_app;

fn today_value() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[component]
pub fn AddTaskModal(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_app();

    let (subject, set_subject) = signal(String::new());
    let (custom_subject, set_custom_subject) = signal(String::new());
    let (title, set_title) = signal(String::new());
    let (date, set_date) = signal(today_value());
    let (time, set_time) = signal(TimeEstimate::default());

    // Fresh form every time the modal opens
    Effect::new(move |_| {
        if open.get() {
            set_subject.set(String::new());
            set_custom_subject.set(String::new());
            set_title.set(String::new());
            set_date.set(today_value());
            set_time.set(TimeEstimate::default());
        }
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = NewTask {
            selected_subject: subject.get(),
            custom_subject: custom_subject.get(),
            title: title.get(),
            date: NaiveDate::parse_from_str(&date.get(), "%Y-%m-%d").ok(),
            time: Some(time.get()),
        };
        if ctx.dispatch_tracker(TrackerCommand::Add(input)) {
            set_open.set(false);
        }
    };

    view! {
        <div
            class=move || if open.get() { "modal-overlay active" } else { "modal-overlay" }
            on:click=move |_| set_open.set(false)
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Escape" {
                    set_open.set(false);
                }
            }
        >
            <form class="modal" on:submit=save on:click=|ev| ev.stop_propagation()>
                <h2>"New Study Task"</h2>

                <label>"Subject"</label>
                <div class="subject-options">
                    {SUBJECTS.iter().map(|s| {
                        let name = s.name;
                        let class = move || {
                            if subject.get() == name {
                                format!("subject-chip {} selected", s.class)
                            } else {
                                format!("subject-chip {}", s.class)
                            }
                        };
                        view! {
                            <button
                                type="button"
                                class=class
                                on:click=move |_| {
                                    set_subject.set(name.to_string());
                                    set_custom_subject.set(String::new());
                                }
                            >
                                {name}
                            </button>
                        }
                    }).collect_view()}
                </div>
                <input
                    type="text"
                    placeholder="Or type a subject..."
                    prop:value=move || custom_subject.get()
                    on:input=move |ev| set_custom_subject.set(event_target_value(&ev))
                />

                <label>"Task"</label>
                <input
                    type="text"
                    placeholder="What do you need to study?"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />

                <label>"Date"</label>
                <input
                    type="date"
                    min="2020-01-01"
                    prop:value=move || date.get()
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                />

                <label>"Time"</label>
                <div class="time-options">
                    {TimeEstimate::ALL.into_iter().map(|estimate| {
                        let label = estimate.as_str().to_string();
                        let chip = estimate.clone();
                        let class = move || {
                            if time.get() == estimate { "time-chip selected" } else { "time-chip" }
                        };
                        view! {
                            <button type="button" class=class on:click=move |_| set_time.set(chip.clone())>
                                {label}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="modal-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| set_open.set(false)>
                        "Cancel"
                    </button>
                    <button type="submit" class="save-btn">"Add Task"</button>
                </div>
            </form>
        </div>
    }
}
