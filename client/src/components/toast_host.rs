//! Fixed-position stack rendering the toast queue.

use leptos::prelude::*;

use crate::state::toast::ToastService;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<ToastService>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For each=move || toasts.entries() key=|toast| toast.id let:toast>
                <div class=toast.kind.class()>
                    <span class="toast__icon" aria-hidden="true">{toast.kind.icon()}</span>
                    <p class="toast__message">{toast.message.clone()}</p>
                    <button
                        class="toast__close"
                        title="Dismiss"
                        on:click=move |_| toasts.dismiss(toast.id)
                    >
                        "×"
                    </button>
                </div>
            </For>
        </div>
    }
}
