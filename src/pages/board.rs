use leptos::prelude::*;

use crate::board::{ColumnAssignment, DragPayload};
use crate::components::{Board, Column, Notification};
use crate::hooks::use_board;
use crate::models::TaskStatus;

#[component]
pub fn BoardPage() -> impl IntoView {
    // Get the notification signal from context - the expect() will panic if
    // the context wasn't provided, which helps catch setup errors
    let notify =
        use_context::<RwSignal<Option<String>>>().expect("notification context");

    let hook = use_board(notify);
    let tasks = hook.tasks;

    // One pure partition per snapshot; every column reads from it.
    let columns = Memo::new(move |_| tasks.with(|t| ColumnAssignment::from_tasks(t)));

    // One payload slot shared by every card and every drop target.
    let drag_slot = RwSignal::new(None::<DragPayload>);

    let refresh = hook.refresh.clone();
    // `Rc` handles are not `Send`, but component children must be; park the
    // handle in a thread-local slot and take it back out inside the view.
    let move_task = StoredValue::new_local(hook.move_task.clone());

    view! {
        <div class="kanban-page">
            <header class="kanban-header">
                <h1>"Task Board"</h1>
                <div class="kanban-actions">
                    <button class="btn-secondary" on:click=move |_| refresh()>"↻"</button>
                </div>
            </header>
            <Notification message=notify />
            <Board>
                {TaskStatus::all()
                    .into_iter()
                    .map(|status| {
                        let on_move = move_task.get_value();
                        view! {
                            <Column
                                status=status
                                columns=columns
                                drag_slot=drag_slot
                                on_move=on_move
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </Board>
        </div>
    }
}
