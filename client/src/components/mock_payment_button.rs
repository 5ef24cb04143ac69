//! Prototype upgrade button that simulates a checkout.
//!
//! DESIGN
//! ======
//! No payment provider is contacted. A click moves the button to
//! `Processing`, waits [`PAYMENT_DELAY_MS`], then reports success through a
//! toast. Clicks while processing are ignored. If the button unmounts before
//! the delay ends, the completion is dropped.

#[cfg(test)]
#[path = "mock_payment_button_test.rs"]
mod mock_payment_button_test;

use leptos::prelude::*;

use crate::state::toast::ToastService;

pub const PAYMENT_DELAY_MS: u32 = 2000;
pub const SUCCESS_MESSAGE: &str = "Payment Successful! (Prototype Mode)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaymentState {
    #[default]
    Idle,
    Processing,
}

pub fn button_label(state: PaymentState, amount: u32) -> String {
    match state {
        PaymentState::Idle => format!("Upgrade for ₹{amount}"),
        PaymentState::Processing => "Processing...".to_owned(),
    }
}

#[component]
pub fn MockPaymentButton(amount: u32, #[prop(into)] description: String) -> impl IntoView {
    let toasts = expect_context::<ToastService>();
    let state = RwSignal::new(PaymentState::Idle);

    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    let alive_cleanup = alive.clone();
    on_cleanup(move || alive_cleanup.store(false, std::sync::atomic::Ordering::Relaxed));

    let on_click = move |_| {
        if state.get_untracked() == PaymentState::Processing {
            return;
        }
        state.set(PaymentState::Processing);

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(PAYMENT_DELAY_MS).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                state.set(PaymentState::Idle);
                toasts.success(SUCCESS_MESSAGE);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&alive, toasts);
    };

    view! {
        <button
            class="btn btn--primary payment-button"
            title=description
            disabled=move || state.get() == PaymentState::Processing
            on:click=on_click
        >
            {move || button_label(state.get(), amount)}
        </button>
    }
}
