//! Progress Card Component
//!
//! Today's completion banner, bar and study-time totals.

use leptos::prelude::*;
use studyflow_core::views::format_minutes;

use crate::context::use_app;
use crate::store::UiStateStoreFields;

#[component]
pub fn ProgressCard() -> impl IntoView {
    let ctx = use_app();
    let progress = Memo::new(move |_| ctx.ui.tracker().read().progress.clone());
    let pending = move || ctx.ui.tracker().read().pending_total;

    view! {
        <div class="progress-card">
            <div class="progress-header">
                <div>
                    <div class="progress-title">"Today's Progress"</div>
                    <div class="progress-stats">
                        {move || progress.get().done}
                        <span>{move || format!(" / {} tasks", progress.get().total)}</span>
                    </div>
                </div>
                <div class="progress-emoji">{move || progress.get().banner.emoji}</div>
            </div>
            <div class="progress-bar-container">
                <div class="progress-bar-bg">
                    <div
                        class="progress-bar-fill"
                        style=move || format!("width: {}%", progress.get().percent)
                    ></div>
                </div>
                <div class="progress-label">
                    <span>{move || progress.get().banner.message}</span>
                    <span>{move || format!("{}%", progress.get().percent)}</span>
                </div>
            </div>
            <div class="progress-detail-row">
                <div class="progress-detail">
                    {move || {
                        let p = progress.get();
                        format!(
                            "⏱️ {} / {} studied",
                            format_minutes(p.studied_minutes),
                            format_minutes(p.planned_minutes),
                        )
                    }}
                </div>
                <div class="progress-detail">{move || format!("📋 {} pending total", pending())}</div>
            </div>
        </div>
    }
}
