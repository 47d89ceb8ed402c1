//! New Item Form Component
//!
//! Text input plus priority selector for adding a todo.

use leptos::prelude::*;
use todo_core::Priority;

use crate::components::PrioritySelector;
use crate::context::use_app_context;

/// Form bound to the draft text and draft priority
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.mutate("add", |list| list.submit_draft());
    };

    let draft_priority = Signal::derive(move || ctx.with(|list| list.draft_priority()));

    view! {
        <form class="add-form" on:submit=create_item>
            <input
                type="text"
                placeholder="输入一个待办事项…"
                aria-label="Todo text"
                prop:value=move || ctx.with(|list| list.draft_text().to_string())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    ctx.session(|list| list.set_draft_text(text));
                }
            />

            <PrioritySelector
                current=draft_priority
                on_change=move |priority: Priority| ctx.session(|list| list.set_draft_priority(priority))
            />

            <button type="submit">"添加"</button>
        </form>
    }
}
