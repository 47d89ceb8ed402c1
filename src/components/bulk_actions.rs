//! Bulk Actions Component
//!
//! Toggle-all and clear-completed buttons.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn BulkActions() -> impl IntoView {
    let ctx = use_app_context();

    let toggle_all_label = move || {
        if ctx.with(|list| list.has_incomplete()) {
            "一键完成全部"
        } else {
            "一键重置全部"
        }
    };

    view! {
        <div class="actions">
            <button
                type="button"
                disabled=move || ctx.with(|list| list.items().is_empty())
                on:click=move |_| {
                    ctx.mutate("toggle all", |list| list.toggle_all());
                }
            >
                {toggle_all_label}
            </button>
            <button
                type="button"
                disabled=move || ctx.with(|list| list.completed_count() == 0)
                on:click=move |_| {
                    if let Some(removed) = ctx.mutate("clear completed", |list| list.clear_completed()) {
                        log::info!("[APP] Cleared {} completed items", removed);
                    }
                }
            >
                "清除已完成"
            </button>
        </div>
    }
}
