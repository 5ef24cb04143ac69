//! Email and password sign-in page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::identity::SessionService;

/// Trim the email and require both fields.
///
/// # Errors
///
/// Returns the inline message when either field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionService>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: skip the form.
    let auth = session.auth();
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if auth.get().is_signed_in() && !busy.get_untracked() {
            navigate_home("/dashboard", leptos_router::NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.sign_in(&email_value, &password_value).await {
                    Ok(_) => navigate("/dashboard", leptos_router::NavigateOptions::default()),
                    Err(e) => {
                        log::warn!("sign-in failed: {e}");
                        info.set(e.user_message());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, email_value, password_value);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <a class="brand" href="/">"BalanceBite"</a>
                <h1>"Welcome back"</h1>
                <p class="login-card__subtitle">"Log in to see your plan"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Log In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message login-message--error">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">"New here? " <a href="/signup">"Create an account"</a></p>
            </div>
        </div>
    }
}
