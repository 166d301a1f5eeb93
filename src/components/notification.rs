use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_AFTER_MS: u32 = 4_000;

/// Non-blocking banner for failures the board survives. Dismissable by
/// hand, and auto-clears a few seconds after the latest message appears.
#[component]
pub fn Notification(message: RwSignal<Option<String>>) -> impl IntoView {
    // Each shown message gets its own generation; a timer started for an
    // earlier message must not dismiss a newer one.
    let generation = Rc::new(Cell::new(0u64));

    Effect::new({
        let generation = generation.clone();
        move |_| {
            if message.get().is_some() {
                let started = generation.get() + 1;
                generation.set(started);
                let generation = generation.clone();
                spawn_local(async move {
                    TimeoutFuture::new(DISMISS_AFTER_MS).await;
                    if timer_owns_banner(started, generation.get()) {
                        message.set(None);
                    }
                });
            }
        }
    });

    view! {
        {move || {
            message.get().map(|text| view! {
                <div class="notification" role="alert">
                    <span>{text}</span>
                    <button
                        class="notification-dismiss"
                        on:click=move |_| message.set(None)
                    >"×"</button>
                </div>
            })
        }}
    }
}

// A dismiss timer only fires for the message it was started for.
fn timer_owns_banner(started: u64, current: u64) -> bool {
    started == current
}
