//! Account creation: identity sign-up followed by profile creation.
//!
//! ERROR HANDLING
//! ==============
//! Every field is validated before the identity provider is contacted. If
//! the identity account is created but `POST /api/signup` fails, the user is
//! left signed in without a profile; the inline message says so and the
//! dashboard load will surface the missing profile.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use schema::identity::MIN_PASSWORD_LEN;
use schema::profile::DEFAULT_DIET_TYPE;
use schema::{ActivityLevel, Goal, Sex, SignupRequest};

use crate::net::api::ApiClient;
use crate::net::identity::SessionService;
use crate::state::dashboard::{parse_meals, parse_positive};

#[derive(Clone, Debug, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: String,
    pub height: String,
    pub weight: String,
    pub meals: String,
    pub sex: Sex,
    pub a_level: ActivityLevel,
    pub goal: Goal,
    pub diet_type: String,
    /// Comma separated.
    pub disliked: String,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            age: String::new(),
            height: String::new(),
            weight: String::new(),
            meals: "3".to_owned(),
            sex: Sex::default(),
            a_level: ActivityLevel::default(),
            goal: Goal::default(),
            diet_type: DEFAULT_DIET_TYPE.to_owned(),
            disliked: String::new(),
        }
    }
}

/// Split a comma-separated list, dropping blanks.
pub fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned).collect()
}

impl SignupForm {
    /// Returns `(email, password, profile request)`.
    ///
    /// # Errors
    ///
    /// Returns the inline message for the first invalid field.
    pub fn validate(&self) -> Result<(String, String, SignupRequest), &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Enter your name.");
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Enter your email.");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err("Password should be at least 6 characters.");
        }
        let age = self
            .age
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|a| (1..=120).contains(a))
            .ok_or("Age must be a whole number from 1 to 120.")?;
        let height = parse_positive(&self.height).ok_or("Height must be a positive number.")?;
        let weight = parse_positive(&self.weight).ok_or("Weight must be a positive number.")?;
        let meals = parse_meals(&self.meals)?;
        let diet_type = self.diet_type.trim();
        let request = SignupRequest {
            name: name.to_owned(),
            age,
            height,
            weight,
            meals,
            sex: self.sex,
            a_level: self.a_level,
            goal: self.goal,
            diet_type: if diet_type.is_empty() { DEFAULT_DIET_TYPE.to_owned() } else { diet_type.to_owned() },
            disliked_ingredients: split_ingredients(&self.disliked),
        };
        Ok((email.to_owned(), self.password.clone(), request))
    }
}

fn text_input(
    form: RwSignal<SignupForm>,
    kind: &'static str,
    placeholder: &'static str,
    get: fn(&SignupForm) -> String,
    set: fn(&mut SignupForm, String),
) -> impl IntoView {
    view! {
        <input
            class="login-input"
            type=kind
            placeholder=placeholder
            prop:value=move || form.with(get)
            on:input=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| set(f, value));
            }
        />
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<SessionService>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let form = RwSignal::new(SignupForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email, password, request) = match form.with(SignupForm::validate) {
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
                match session.sign_up(&email, &password).await {
                    Ok(_) => match api.signup(&request).await {
                        Ok(_) => navigate("/dashboard", leptos_router::NavigateOptions::default()),
                        Err(e) => {
                            log::error!("profile creation failed: {e}");
                            info.set(format!("Account created, but saving your profile failed: {}", e.user_message()));
                        }
                    },
                    Err(e) => {
                        log::warn!("sign-up failed: {e}");
                        info.set(e.user_message());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, session, api, email, password, request);
    };

    view! {
        <div class="login-page">
            <div class="login-card login-card--wide">
                <a class="brand" href="/">"BalanceBite"</a>
                <h1>"Create your account"</h1>
                <form class="login-form signup-form" on:submit=on_submit>
                    {text_input(form, "text", "Full name", |f| f.name.clone(), |f, v| f.name = v)}
                    {text_input(form, "email", "you@example.com", |f| f.email.clone(), |f, v| f.email = v)}
                    {text_input(form, "password", "Password", |f| f.password.clone(), |f, v| f.password = v)}
                    <div class="signup-form__row">
                        {text_input(form, "number", "Age", |f| f.age.clone(), |f, v| f.age = v)}
                        {text_input(form, "number", "Height (cm)", |f| f.height.clone(), |f, v| f.height = v)}
                        {text_input(form, "number", "Weight (kg)", |f| f.weight.clone(), |f, v| f.weight = v)}
                        {text_input(form, "number", "Meals per day", |f| f.meals.clone(), |f, v| f.meals = v)}
                    </div>
                    <div class="signup-form__row">
                        <select
                            class="login-input"
                            on:change=move |ev| {
                                if let Ok(sex) = event_target_value(&ev).parse::<Sex>() {
                                    form.update(|f| f.sex = sex);
                                }
                            }
                        >
                            {Sex::ALL
                                .into_iter()
                                .map(|s| {
                                    view! {
                                        <option value=s.as_str() selected=move || form.get().sex == s>
                                            {s.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                        <select
                            class="login-input"
                            on:change=move |ev| {
                                if let Ok(level) = event_target_value(&ev).parse::<ActivityLevel>() {
                                    form.update(|f| f.a_level = level);
                                }
                            }
                        >
                            {ActivityLevel::ALL
                                .into_iter()
                                .map(|l| {
                                    view! {
                                        <option value=l.as_str() selected=move || form.get().a_level == l>
                                            {l.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                        <select
                            class="login-input"
                            on:change=move |ev| {
                                if let Ok(goal) = event_target_value(&ev).parse::<Goal>() {
                                    form.update(|f| f.goal = goal);
                                }
                            }
                        >
                            {Goal::ALL
                                .into_iter()
                                .map(|g| {
                                    view! {
                                        <option value=g.as_str() selected=move || form.get().goal == g>
                                            {g.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    {text_input(form, "text", "Diet type (e.g. vegetarian)", |f| f.diet_type.clone(), |f, v| f.diet_type = v)}
                    {text_input(
                        form,
                        "text",
                        "Disliked ingredients, comma separated",
                        |f| f.disliked.clone(),
                        |f, v| f.disliked = v,
                    )}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message login-message--error">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">"Already have an account? " <a href="/login">"Log in"</a></p>
            </div>
        </div>
    }
}
