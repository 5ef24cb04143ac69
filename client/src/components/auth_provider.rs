//! Session gate wrapping the routed page tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once inside the router. Restores the persisted session, follows
//! other tabs through the `storage` event, and installs the unauthenticated
//! redirect guard. Children stay suspended behind a loading panel until the
//! first session event resolves, so pages never observe `loading = true`.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::identity::SessionService;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionService>();
    let auth = session.auth();

    // Effects run only in the browser, so SSR and the first hydrated frame
    // both render the loading panel.
    Effect::new(move || session.restore());
    session.install_storage_listener();

    install_unauth_redirect(auth, use_location().pathname, use_navigate());

    view! {
        <Show
            when=move || !auth.get().loading
            fallback=|| view! { <div class="auth-loading">"Loading..."</div> }
        >
            {children()}
        </Show>
    }
}
