//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_provider::AuthProvider;
use crate::components::toast_host::ToastHost;
use crate::config;
use crate::net::api::ApiClient;
use crate::net::identity::SessionService;
use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, landing::LandingPage, login::LoginPage, signup::SignupPage,
};
use crate::state::auth::AuthState;
use crate::state::toast::ToastService;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session, toast and API services once and provides them to
/// every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let session = SessionService::new(auth, config::identity_config());
    let toasts = ToastService::new();
    let api = ApiClient::new(config::api_base_url(), session);

    provide_context(auth);
    provide_context(session);
    provide_context(toasts);
    provide_context(api);

    view! {
        <Stylesheet id="leptos" href="/pkg/balancebite.css"/>
        <Title text="BalanceBite"/>

        <Router>
            <AuthProvider>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </Routes>
            </AuthProvider>
        </Router>
        <ToastHost/>
    }
}
