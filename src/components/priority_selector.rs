//! Priority Selector Component
//!
//! `<select>` over the three priorities.

use leptos::prelude::*;
use todo_core::Priority;

/// Priority dropdown
#[component]
pub fn PrioritySelector(
    #[prop(into)] current: Signal<Priority>,
    on_change: impl Fn(Priority) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            aria-label="Priority"
            on:change=move |ev| {
                if let Some(priority) = Priority::parse(&event_target_value(&ev)) {
                    on_change(priority);
                }
            }
        >
            {Priority::ALL.iter().map(|priority| {
                let priority = *priority;
                view! {
                    <option
                        value=priority.as_str()
                        prop:selected=move || current.get() == priority
                    >
                        {priority.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
