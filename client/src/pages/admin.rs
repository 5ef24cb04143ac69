//! Admin panel: registered users and submitted suggestions.
//!
//! Authorization is enforced by the backend; this page only reflects a 403
//! as the access-denied panel.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use schema::{AdminUser, Suggestion, display_date};

use crate::net::api::ApiClient;
use crate::net::identity::SessionService;
use crate::state::admin::AdminState;
use crate::state::toast::ToastService;
use crate::util::auth::ready_for_authed_fetch;

/// Table cells for one user row.
pub fn user_cells(user: &AdminUser) -> [String; 4] {
    [
        user.name.clone(),
        user.email.clone(),
        user.goal.clone().filter(|g| !g.trim().is_empty()).unwrap_or_else(|| "—".to_owned()),
        display_date(user.created_at.as_deref()),
    ]
}

/// Table cells for one suggestion row.
pub fn suggestion_cells(entry: &Suggestion) -> [String; 3] {
    [entry.user_id.clone(), entry.suggestion.clone(), display_date(entry.created_at.as_deref())]
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionService>();
    let toasts = expect_context::<ToastService>();
    let state = RwSignal::new(AdminState::default());

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if !session.auth().with(|auth| ready_for_authed_fetch(requested.get_untracked(), auth)) {
            return;
        }
        requested.set(true);

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let (users, suggestions) = futures::join!(api.admin_users(), api.admin_suggestions());
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                if let Some(Some(message)) = state.try_update(|s| s.resolve(users, suggestions)) {
                    log::warn!("admin load failed: {message}");
                    toasts.error(message);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&alive, api, toasts);
    });

    view! {
        <div class="admin-page">
            <header class="dashboard-header">
                <a class="brand" href="/">"BalanceBite"</a>
                <a class="btn" href="/dashboard">"Back to dashboard"</a>
            </header>
            <Show
                when=move || !state.get().loading
                fallback=|| view! { <div class="dashboard-loading">"Loading admin data..."</div> }
            >
                <Show
                    when=move || !state.get().denied
                    fallback=|| {
                        view! {
                            <div class="admin-denied">
                                <h2>"Access denied"</h2>
                                <p>"You need administrator rights to view this page."</p>
                                <a class="btn" href="/dashboard">"Return to dashboard"</a>
                            </div>
                        }
                    }
                >
                    <Show
                        when=move || state.get().error.is_none()
                        fallback=move || {
                            view! {
                                <div class="dashboard-error">
                                    <h2>"Could not load admin data"</h2>
                                    <p>{move || state.get().error.unwrap_or_default()}</p>
                                </div>
                            }
                        }
                    >
                        <main class="admin-main">
                            <section class="dash-card">
                                <h2>{move || format!("Users ({})", state.get().users.len())}</h2>
                                <table class="admin-table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Email"</th>
                                            <th>"Goal"</th>
                                            <th>"Joined"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <For each=move || state.get().users key=|u| u.id.clone() let:user>
                                            <tr>
                                                {user_cells(&user).into_iter().map(|c| view! { <td>{c}</td> }).collect_view()}
                                            </tr>
                                        </For>
                                    </tbody>
                                </table>
                            </section>
                            <section class="dash-card">
                                <h2>{move || format!("Suggestions ({})", state.get().suggestions.len())}</h2>
                                <table class="admin-table">
                                    <thead>
                                        <tr>
                                            <th>"User"</th>
                                            <th>"Suggestion"</th>
                                            <th>"Submitted"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <For each=move || state.get().suggestions key=|s| s.id.clone() let:entry>
                                            <tr>
                                                {suggestion_cells(&entry)
                                                    .into_iter()
                                                    .map(|c| view! { <td>{c}</td> })
                                                    .collect_view()}
                                            </tr>
                                        </For>
                                    </tbody>
                                </table>
                            </section>
                        </main>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}
