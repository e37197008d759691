//! Toast
//!
//! The single transient notice line.

use leptos::prelude::*;
use studyflow_core::commands::NoticeKind;

use crate::context::use_app;
use crate::store::UiStateStoreFields;

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_app();

    let class = move || match ctx.ui.toast().get() {
        Some(notice) => match notice.kind {
            NoticeKind::Warning => "toast show warning",
            NoticeKind::Success | NoticeKind::Info => "toast show",
        },
        None => "toast",
    };

    view! {
        <div class=class role="status">
            {move || ctx.ui.toast().get().map(|notice| notice.message).unwrap_or_default()}
        </div>
    }
}
