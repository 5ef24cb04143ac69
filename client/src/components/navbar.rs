//! Top navigation for the public landing page.
//!
//! Section links scroll in-page; the call-to-action depends on whether a
//! session is present.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// In-page anchors shown in the navbar.
pub const SECTION_LINKS: [(&str, &str); 2] = [("Features", "#features"), ("Pricing", "#pricing")];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CtaLink {
    pub label: &'static str,
    pub href: &'static str,
    pub primary: bool,
}

/// Calls-to-action for the current auth state, in display order.
pub fn cta_links(signed_in: bool) -> Vec<CtaLink> {
    if signed_in {
        vec![CtaLink { label: "Go to Dashboard", href: "/dashboard", primary: true }]
    } else {
        vec![
            CtaLink { label: "Login", href: "/login", primary: false },
            CtaLink { label: "Get Started", href: "/signup", primary: true },
        ]
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let menu_open = RwSignal::new(false);

    let links = move || {
        cta_links(auth.get().is_signed_in())
            .into_iter()
            .map(|link| {
                let class = if link.primary { "btn btn--primary" } else { "btn" };
                view! {
                    <a class=class href=link.href on:click=move |_| menu_open.set(false)>
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand brand" href="/">"BalanceBite"</a>
            <button
                class="navbar__toggle"
                title="Menu"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <nav class="navbar__menu" class:navbar__menu--open=move || menu_open.get()>
                {SECTION_LINKS
                    .into_iter()
                    .map(|(label, href)| {
                        view! {
                            <a class="navbar__link" href=href on:click=move |_| menu_open.set(false)>
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
                <div class="navbar__cta">{links}</div>
            </nav>
        </header>
    }
}
