//! Todo List Component
//!
//! Renders the derived view, or the empty-state message.

use leptos::prelude::*;
use todo_core::Item;

use crate::components::TodoItemRow;
use crate::context::use_app_context;

#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_app_context();

    let visible = move || {
        ctx.with(|list| list.visible_items().into_iter().cloned().collect::<Vec<Item>>())
    };
    let is_empty = move || ctx.with(|list| list.visible_items().is_empty());

    view! {
        <ul class="todo-list">
            <Show
                when=move || !is_empty()
                fallback=|| view! {
                    <li class="empty">"没有匹配的任务，开始创建你的第一条待办吧 ✨"</li>
                }
            >
                <For
                    each=visible
                    key=|item| {
                        // Any change to a rendered field must produce a new key
                        (item.id.clone(), item.text.clone(), item.completed, item.priority)
                    }
                    children=move |item| view! { <TodoItemRow item=item /> }
                />
            </Show>
        </ul>
    }
}
