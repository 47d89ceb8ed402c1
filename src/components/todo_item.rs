//! Todo Item Component
//!
//! One row of the list: checkbox, text (or the edit input), priority badge
//! and delete button.

use leptos::html;
use leptos::prelude::*;
use todo_core::Item;

use crate::context::use_app_context;

/// A single todo row
#[component]
pub fn TodoItemRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();

    let Item { id, text, completed, priority, .. } = item;
    let toggle_id = id.clone();
    let delete_id = id.clone();

    // Memo so typing in the edit input does not rebuild it
    let editing_id = id.clone();
    let is_editing = Memo::new(move |_| ctx.with(|list| list.is_editing(&editing_id)));

    let commit = move || {
        ctx.mutate("edit", |list| list.commit_edit());
    };

    view! {
        <li class=if completed { "todo-item done" } else { "todo-item" }>
            <label>
                <input
                    type="checkbox"
                    prop:checked=completed
                    on:change=move |_| {
                        ctx.mutate("toggle", |list| list.toggle(&toggle_id));
                    }
                />
            </label>

            <div class="todo-content">
                {move || {
                    if is_editing.get() {
                        // `autofocus` is ignored on inputs inserted after load
                        let input_ref = NodeRef::<html::Input>::new();
                        Effect::new(move |_| {
                            if let Some(input) = input_ref.get() {
                                if input.focus().is_err() {
                                    log::debug!("[APP] Could not focus edit input");
                                }
                            }
                        });

                        view! {
                            <input
                                node_ref=input_ref
                                prop:value=move || ctx.with(|list| list.editing_text().to_string())
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    ctx.session(|list| list.set_editing_text(text));
                                }
                                on:blur=move |_| commit()
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    match ev.key().as_str() {
                                        "Enter" => commit(),
                                        "Escape" => ctx.session(|list| list.cancel_edit()),
                                        _ => {}
                                    }
                                }
                            />
                        }.into_any()
                    } else {
                        let edit_id = id.clone();
                        view! {
                            <button
                                class="text-btn"
                                type="button"
                                on:dblclick=move |_| ctx.session(|list| {
                                    list.start_edit(&edit_id);
                                })
                            >
                                {text.clone()}
                            </button>
                        }.into_any()
                    }
                }}

                <span class=format!("priority {}", priority.as_str())>{priority.as_str()}</span>
            </div>

            <button
                class="danger"
                type="button"
                on:click=move |_| {
                    ctx.mutate("delete", |list| list.delete(&delete_id));
                }
            >
                "删除"
            </button>
        </li>
    }
}
