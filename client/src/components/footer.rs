//! Static site footer for the landing page.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__brand">
                <span class="brand">"BalanceBite"</span>
                <p>"Personalised meal plans, macro tracking and workout logging in one place."</p>
            </div>
            <nav class="site-footer__links">
                <a href="#features">"Features"</a>
                <a href="#pricing">"Pricing"</a>
                <a href="/login">"Login"</a>
                <a href="/signup">"Sign up"</a>
            </nav>
            <p class="site-footer__copy">"© BalanceBite. Built as a prototype."</p>
        </footer>
    }
}
