use std::rc::Rc;

use leptos::prelude::*;

use crate::board::{decide_drop, ColumnAssignment, DragPayload, DropAction};
use crate::components::TaskCard;
use crate::models::{TaskId, TaskStatus};

#[component]
pub fn Column(
    status: TaskStatus,
    columns: Memo<ColumnAssignment>,
    drag_slot: RwSignal<Option<DragPayload>>,
    on_move: Rc<dyn Fn(TaskId, TaskStatus) + 'static>,
) -> impl IntoView {
    // Reactive task count - updates automatically when the snapshot changes
    let count = move || columns.with(|c| c.tasks_for(status).len());

    let cards = move || {
        columns.with(|c| {
            c.tasks_for(status)
                .iter()
                .cloned()
                .map(|task| view! { <TaskCard task=task drag_slot=drag_slot /> })
                .collect::<Vec<_>>()
        })
    };

    let handle_drop = move |e: leptos::ev::DragEvent| {
        // Without this the browser treats the drop as a navigation.
        e.prevent_default();
        let payload = drag_slot.get_untracked();
        drag_slot.set(None);
        match decide_drop(payload.as_ref(), status) {
            DropAction::Move { task_id, target } => on_move(task_id, target),
            DropAction::Ignore => {}
        }
    };

    view! {
        <div
            class="kanban-column"
            id=format!("{}-column", status.as_str())
            on:dragover=move |e: leptos::ev::DragEvent| e.prevent_default()
            on:drop=handle_drop
        >
            <div class="column-header">
                <h3>{status.label()}</h3>
                <span class="task-count">{count}</span>
            </div>
            <ul class="column-content" id=format!("{}-tasks", status.as_str())>
                {cards}
            </ul>
        </div>
    }
}
