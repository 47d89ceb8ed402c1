//! Modern Todo App
//!
//! Single-card layout: header, add form, toolbar, bulk actions, list, stats.

use leptos::prelude::*;

use crate::components::{BulkActions, FilterBar, NewItemForm, TodoListView};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    // Seed the model from local storage once, then share it with every component
    let ctx = AppContext::load();
    provide_context(ctx);

    let summary = move || ctx.with(|list| list.summary());

    view! {
        <main class="app-shell">
            <section class="todo-card">
                <header class="header">
                    <h1>"Modern Todo"</h1>
                    <p>"聚焦当下任务，把复杂事情拆成可执行的小步。"</p>
                </header>

                <NewItemForm />
                <FilterBar />
                <BulkActions />
                <TodoListView />

                <footer class="stats">
                    <span>{move || format!("总计：{}", summary().total)}</span>
                    <span>{move || format!("进行中：{}", summary().remaining)}</span>
                    <span>{move || format!("已完成：{}", summary().completed)}</span>
                </footer>
            </section>
        </main>
    }
}
