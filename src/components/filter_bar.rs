//! Filter Bar Component
//!
//! Search box and the all / active / completed tabs.

use leptos::prelude::*;
use todo_core::Filter;

use crate::context::use_app_context;

/// Toolbar with search input and filter tabs
#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toolbar">
            <input
                class="search"
                placeholder="搜索任务"
                aria-label="Search todos"
                prop:value=move || ctx.with(|list| list.search_query().to_string())
                on:input=move |ev| {
                    let query = event_target_value(&ev);
                    ctx.session(|list| list.set_search(query));
                }
            />

            <div class="filters" role="tablist" aria-label="Todo filter tabs">
                {Filter::ALL.iter().map(|filter| {
                    let filter = *filter;
                    let is_active = move || ctx.with(|list| list.filter() == filter);
                    let tab_class = move || if is_active() { "active" } else { "" };

                    view! {
                        <button
                            type="button"
                            class=tab_class
                            on:click=move |_| ctx.session(|list| list.set_filter(filter))
                        >
                            {filter.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
