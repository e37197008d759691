//! Timer Panel Component
//!
//! Focus countdown with preset chips, start/pause and reset.

use leptos::prelude::*;

use crate::context::use_app;

#[component]
pub fn TimerPanel() -> impl IntoView {
    let ctx = use_app();
    let presets = ctx.config.with_value(|c| c.timer_presets.clone());
    let timer = ctx.timer;

    view! {
        <section class="panel timer-panel">
            <h2>"⏳ Focus Timer"</h2>
            <div class="timer-display">{move || timer.read().display()}</div>
            <div class="timer-bar-bg">
                <div
                    class="timer-bar-fill"
                    style=move || format!("width: {:.0}%", timer.read().elapsed_fraction() * 100.0)
                ></div>
            </div>

            <div class="timer-presets">
                {presets.into_iter().map(|minutes| view! {
                    <button
                        type="button"
                        class=move || {
                            if timer.read().preset_minutes() == minutes { "time-chip selected" } else { "time-chip" }
                        }
                        on:click=move |_| ctx.set_timer_preset(minutes)
                    >
                        {format!("{}m", minutes)}
                    </button>
                }).collect_view()}
            </div>

            <div class="timer-actions">
                <button class="timer-toggle" on:click=move |_| ctx.toggle_timer()>
                    {move || if timer.read().is_running() { "Pause" } else { "Start" }}
                </button>
                <button class="timer-reset" on:click=move |_| ctx.reset_timer()>"Reset"</button>
            </div>
        </section>
    }
}
