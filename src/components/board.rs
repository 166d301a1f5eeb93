use leptos::prelude::*;

#[component]
pub fn Board(children: Children) -> impl IntoView {
    view! { <div class="kanban-board">{children()}</div> }
}
