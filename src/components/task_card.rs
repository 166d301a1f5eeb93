use leptos::prelude::*;

use crate::board::DragPayload;
use crate::models::Task;

#[component]
pub fn TaskCard(task: Task, drag_slot: RwSignal<Option<DragPayload>>) -> impl IntoView {
    // Captured once at drag-start and immutable for the whole gesture.
    let payload = DragPayload {
        task_id: task.id.clone(),
        source: task.status,
    };

    let handle_dragstart = {
        let payload = payload.clone();
        move |e: leptos::ev::DragEvent| {
            // Mirror the id into the native transfer so the browser treats
            // this as a real drag; the drop handler reads the typed slot.
            if let Some(transfer) = e.data_transfer() {
                let _ = transfer.set_data("text/plain", payload.task_id.as_str());
            }
            drag_slot.set(Some(payload.clone()));
        }
    };

    view! {
        <li
            class="task-card"
            draggable="true"
            on:dragstart=handle_dragstart
            on:dragend=move |_| drag_slot.set(None)
        >
            {task.title.clone()}
        </li>
    }
}
