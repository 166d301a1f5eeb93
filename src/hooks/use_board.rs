use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board::RefreshSequence;
use crate::models::{Task, TaskId, TaskStatus};
use crate::store::{self};

/// Handle to the board synchronizer: the task snapshot plus the two
/// operations the UI may trigger.
pub struct BoardHook {
    pub tasks: ReadSignal<Vec<Task>>,
    pub refresh: Rc<dyn Fn() + 'static>,
    pub move_task: Rc<dyn Fn(TaskId, TaskStatus) + 'static>,
}

/// Owns the client-side view of the task store and keeps it in sync.
///
/// `notify` receives user-facing messages for failures the board survives
/// (the previous columns stay on screen either way).
pub fn use_board(notify: RwSignal<Option<String>>) -> BoardHook {
    let tasks = RwSignal::new(Vec::<Task>::new());
    let sequence = Rc::new(RefCell::new(RefreshSequence::default()));

    // Initial load on mount.
    refresh_board(tasks, sequence.clone(), notify);

    let refresh = {
        let sequence = sequence.clone();
        Rc::new(move || refresh_board(tasks, sequence.clone(), notify)) as Rc<dyn Fn() + 'static>
    };

    let move_task = {
        let sequence = sequence.clone();
        Rc::new(move |task_id: TaskId, target: TaskStatus| {
            submit_move(task_id, target, tasks, sequence.clone(), notify);
        }) as Rc<dyn Fn(TaskId, TaskStatus) + 'static>
    };

    BoardHook {
        tasks: tasks.read_only(),
        refresh,
        move_task,
    }
}

// LoadTasks: fetch a fresh snapshot and replace the columns with it.
// Responses belonging to a superseded refresh are discarded, so the
// newest request always wins regardless of arrival order.
fn refresh_board(
    tasks: RwSignal<Vec<Task>>,
    sequence: Rc<RefCell<RefreshSequence>>,
    notify: RwSignal<Option<String>>,
) {
    let token = sequence.borrow_mut().begin();
    spawn_local(async move {
        match store::fetch_tasks().await {
            Ok(snapshot) => {
                if sequence.borrow().is_current(token) {
                    tasks.set(snapshot);
                } else {
                    web_sys::console::log_1(
                        &"Discarding stale task snapshot (newer refresh in flight)".into(),
                    );
                }
            }
            Err(e) if e.is_malformed() => {
                web_sys::console::error_1(&format!("Failed to load tasks: {}", e).into());
            }
            Err(e) => {
                notify.set(Some(format!("Could not load tasks: {}", e)));
            }
        }
    });
}

// MoveTask: ask the store to change one task's status, then re-render from
// authoritative state. No optimistic update; the UI only ever shows what
// the store confirmed.
fn submit_move(
    task_id: TaskId,
    target: TaskStatus,
    tasks: RwSignal<Vec<Task>>,
    sequence: Rc<RefCell<RefreshSequence>>,
    notify: RwSignal<Option<String>>,
) {
    spawn_local(async move {
        match store::update_task_status(&task_id, target).await {
            Ok(()) => refresh_board(tasks, sequence, notify),
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Failed to move task {}: {}", task_id, e).into(),
                );
                notify.set(Some(format!("Could not move task: {}", e)));
            }
        }
    });
}
