//! Public marketing page: hero, features, pricing.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::mock_payment_button::MockPaymentButton;
use crate::components::navbar::Navbar;

const FEATURES: [(&str, &str); 4] = [
    ("Personalised meal plans", "Daily meals sized to your calorie target and split across your preferred number of meals."),
    ("Macro tracking", "Protein, carbs and fat rings show how your plan lines up with your goal."),
    ("AI recipes", "Turn any meal in your plan into a full recipe with ingredients and steps."),
    ("Workout logging", "Log a week of steps, rides, runs, yoga or lifting and download a PDF summary."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <Navbar/>
            <section class="hero">
                <h1 class="hero__title">"Eat for your goal, not against it."</h1>
                <p class="hero__subtitle">
                    "BalanceBite builds a meal plan around your body, activity and goal, then keeps your macros on track."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/signup">"Get Started"</a>
                    <a class="btn" href="#features">"Learn more"</a>
                </div>
            </section>

            <section id="features" class="features">
                <h2>"Features"</h2>
                <div class="features__grid">
                    {FEATURES
                        .into_iter()
                        .map(|(title, body)| {
                            view! {
                                <article class="feature-card">
                                    <h3>{title}</h3>
                                    <p>{body}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="pricing" class="pricing">
                <h2>"Pricing"</h2>
                <div class="pricing__grid">
                    <article class="pricing-card">
                        <h3>"Free"</h3>
                        <p class="pricing-card__price">"₹0"</p>
                        <ul>
                            <li>"Meal plan and macro rings"</li>
                            <li>"Workout logging"</li>
                        </ul>
                        <a class="btn" href="/signup">"Start free"</a>
                    </article>
                    <article class="pricing-card pricing-card--featured">
                        <h3>"Pro"</h3>
                        <p class="pricing-card__price">"₹499 / month"</p>
                        <ul>
                            <li>"Unlimited AI recipes"</li>
                            <li>"PDF progress reports"</li>
                            <li>"Priority support"</li>
                        </ul>
                        <MockPaymentButton amount=499 description="BalanceBite Pro, monthly"/>
                    </article>
                </div>
            </section>

            <Footer/>
        </div>
    }
}
