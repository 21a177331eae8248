//! Toast stack rendered from the notice context.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

#[component]
pub fn Toasts() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="toasts" role="status" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.kind.class()>
                            <span class="toast__text">{notice.text}</span>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| notices.update(|state| state.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
