use leptos::prelude::*;

use crate::pages::BoardPage;

#[component]
pub fn App() -> impl IntoView {
    // User-facing failure messages; provided as context so any page can
    // raise a notification.
    let notify = RwSignal::new(None::<String>);
    provide_context(notify);

    view! {
        <main class="app">
            <BoardPage />
        </main>
    }
}
