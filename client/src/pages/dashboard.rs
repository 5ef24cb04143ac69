//! Dashboard page: profile stats, macro rings, meal plan, and the
//! profile/workout/suggestion/report actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Profile and meal plan are fetched in parallel once per mount. Each panel
//! below reads the shared `RwSignal<DashboardState>` and owns its own form
//! and busy flag, so one slow submission never blocks another.
//!
//! ERROR HANDLING
//! ==============
//! Load failures render an inline panel and raise a toast. Submission
//! failures raise a toast and leave view state untouched. Responses arriving
//! after unmount are dropped via the alive flag.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use schema::{ActivityLevel, Goal, ReportKind, UserProfile, WeekData, WorkoutType};

use crate::components::macro_ring::MacroRing;
use crate::components::meal_plan_chart::MealPlanChart;
use crate::components::recipe_card::RecipeCard;
use crate::net::api::ApiClient;
use crate::net::identity::SessionService;
use crate::state::dashboard::{DashboardState, ProfileForm, WorkoutForm, validate_suggestion};
use crate::state::toast::ToastService;
use crate::util::auth::ready_for_authed_fetch;

/// Label/value pairs for the stats panel, in display order.
pub fn stat_rows(profile: &UserProfile) -> Vec<(&'static str, String)> {
    vec![
        ("Age", profile.age.to_string()),
        ("BMI", profile.bmi_display()),
        ("Weight", format!("{} kg", profile.weight)),
        ("TDEE", format!("{:.0} kcal", profile.tdee)),
        ("Target calories", format!("{:.0} kcal", profile.target_calories())),
        ("Activity level", profile.a_level.label().to_owned()),
        ("Goal", profile.goal.label().to_owned()),
    ]
}

/// Placeholder for a day input, e.g. `"Monday (km)"`.
pub fn day_placeholder(day: &str, workout_type: WorkoutType) -> String {
    let mut chars = day.chars();
    let title = chars.next().map(|c| c.to_uppercase().chain(chars).collect::<String>()).unwrap_or_default();
    format!("{title} ({})", workout_type.unit())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionService>();
    let toasts = expect_context::<ToastService>();
    let navigate = use_navigate();

    let state = RwSignal::new(DashboardState { loading: true, ..DashboardState::default() });
    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let requested = RwSignal::new(false);
    {
        let alive = alive.clone();
        Effect::new(move || {
            if !session.auth().with(|auth| ready_for_authed_fetch(requested.get_untracked(), auth)) {
                return;
            }
            requested.set(true);

            #[cfg(feature = "hydrate")]
            {
                let alive = alive.clone();
                leptos::task::spawn_local(async move {
                    let (profile, meal_plan) = futures::join!(api.profile(), api.meal_plan());
                    if !alive.load(Ordering::Relaxed) {
                        return;
                    }
                    if let Some(Some(message)) = state.try_update(|s| s.apply_load(profile, meal_plan)) {
                        log::warn!("dashboard load failed: {message}");
                        toasts.error(message);
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&alive, api, toasts);
        });
    }

    let on_logout = move |_| {
        session.sign_out();
        navigate("/login", leptos_router::NavigateOptions::default());
    };

    let close_recipe = Callback::new(move |()| state.update(|s| s.recipe = None));
    let alive = StoredValue::new(alive);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <a class="brand" href="/">"BalanceBite"</a>
                <div class="dashboard-header__actions">
                    <Show when=move || state.with(|s| s.profile.as_ref().is_some_and(|p| p.is_admin))>
                        <a class="btn" href="/admin">"Admin"</a>
                    </Show>
                    <button class="btn" on:click=on_logout>"Log out"</button>
                </div>
            </header>

            <Show
                when=move || !state.get().loading
                fallback=|| view! { <div class="dashboard-loading">"Loading your dashboard..."</div> }
            >
                <Show
                    when=move || state.with(|s| s.profile.is_some())
                    fallback=move || {
                        view! {
                            <div class="dashboard-error">
                                <h2>"We couldn't load your profile"</h2>
                                <p>{move || state.get().error.unwrap_or_default()}</p>
                            </div>
                        }
                    }
                >
                    <main class="dashboard-main">
                        <StatsPanel state=state/>
                        <MacroPanel state=state/>
                        <ProfilePanel state=state alive=alive/>
                        <MealsPanel state=state alive=alive/>
                        <WorkoutPanel state=state alive=alive/>
                        <SuggestionPanel state=state alive=alive/>
                        <ReportsPanel state=state alive=alive/>
                    </main>
                </Show>
            </Show>

            {move || {
                state
                    .get()
                    .recipe
                    .map(|recipe| view! { <RecipeCard recipe=recipe on_close=close_recipe/> })
            }}
        </div>
    }
}

#[component]
fn StatsPanel(state: RwSignal<DashboardState>) -> impl IntoView {
    let rows = move || state.with(|s| s.profile.as_ref().map(stat_rows).unwrap_or_default());

    view! {
        <section class="dash-card dash-stats">
            <h2>
                "Hello, "
                {move || state.with(|s| s.profile.as_ref().map(|p| p.name.clone()).unwrap_or_default())}
            </h2>
            <dl class="dash-stats__grid">
                <For each=rows key=Clone::clone let:row>
                    <div class="dash-stats__item">
                        <dt>{row.0}</dt>
                        <dd>{row.1}</dd>
                    </div>
                </For>
            </dl>
        </section>
    }
}

#[component]
fn MacroPanel(state: RwSignal<DashboardState>) -> impl IntoView {
    let ring = move |idx: usize, color: &'static str| {
        let progress = Memo::new(move |_| state.with(|s| s.macro_progress().map(|p| p[idx])));
        let label = progress.get_untracked().map(|p| p.label).unwrap_or_default();
        view! {
            <MacroRing
                label=label
                current=Signal::derive(move || progress.get().map_or(0.0, |p| p.current))
                target=Signal::derive(move || progress.get().map(|p| p.target))
                color=color
            />
        }
    };

    view! {
        <section class="dash-card dash-macros">
            <h2>"Daily macros"</h2>
            <div class="dash-macros__rings">
                {ring(0, "var(--macro-protein)")}
                {ring(1, "var(--macro-carbs)")}
                {ring(2, "var(--macro-fat)")}
            </div>
        </section>
    }
}

#[component]
fn ProfilePanel(state: RwSignal<DashboardState>, alive: StoredValue<Arc<AtomicBool>>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<ToastService>();
    let form = RwSignal::new(state.with_untracked(|s| s.profile.as_ref().map(ProfileForm::from_profile).unwrap_or_default()));
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get().updating_profile {
            return;
        }
        let request = match form.with(ProfileForm::validate) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        info.set(String::new());
        state.update(|s| s.updating_profile = true);

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.get_value();
            leptos::task::spawn_local(async move {
                let result = api.update_profile(&request).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(resp) => {
                        form.set(ProfileForm::from_profile(&resp.user));
                        state.update(|s| s.apply_update(resp));
                        toasts.success("Profile updated.");
                    }
                    Err(e) => {
                        log::warn!("profile update failed: {e}");
                        toasts.error(e.user_message());
                    }
                }
                state.update(|s| s.updating_profile = false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (alive, api, toasts, request);
    };

    view! {
        <section class="dash-card dash-profile">
            <h2>"Update profile"</h2>
            <form class="dash-form" on:submit=on_submit>
                <label>
                    "Weight (kg)"
                    <input
                        type="text"
                        inputmode="decimal"
                        prop:value=move || form.get().weight
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.weight = value);
                        }
                    />
                </label>
                <label>
                    "Meals per day"
                    <input
                        type="text"
                        inputmode="numeric"
                        prop:value=move || form.get().meals
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.meals = value);
                        }
                    />
                </label>
                <label>
                    "Activity level"
                    <select on:change=move |ev| {
                        if let Ok(level) = event_target_value(&ev).parse::<ActivityLevel>() {
                            form.update(|f| f.a_level = level);
                        }
                    }>
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
                </label>
                <label>
                    "Goal"
                    <select on:change=move |ev| {
                        if let Ok(goal) = event_target_value(&ev).parse::<Goal>() {
                            form.update(|f| f.goal = goal);
                        }
                    }>
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
                </label>
                <label>
                    "Diet type"
                    <input
                        type="text"
                        prop:value=move || form.get().diet_type
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.diet_type = value);
                        }
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || state.get().updating_profile>
                    {move || if state.get().updating_profile { "Saving..." } else { "Save changes" }}
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="dash-form__error">{move || info.get()}</p>
            </Show>
        </section>
    }
}

#[component]
fn MealsPanel(state: RwSignal<DashboardState>, alive: StoredValue<Arc<AtomicBool>>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<ToastService>();
    let meals = Signal::derive(move || state.get().meal_plan);

    let generate = move |meal_name: String| {
        if state.get_untracked().recipe_pending.is_some() {
            return;
        }
        state.update(|s| s.recipe_pending = Some(meal_name.clone()));

        #[cfg(feature = "hydrate")]
        {
            toasts.info(format!("Generating a recipe for {meal_name}..."));
            let alive = alive.get_value();
            leptos::task::spawn_local(async move {
                let result = api.generate_recipe(&meal_name).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(recipe) => state.update(|s| s.recipe = Some(recipe)),
                    Err(e) => {
                        log::warn!("recipe generation for {meal_name} failed: {e}");
                        toasts.error(e.user_message());
                    }
                }
                state.update(|s| s.recipe_pending = None);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (alive, api, toasts, meal_name);
    };

    view! {
        <section class="dash-card dash-meals">
            <h2>"Today's meal plan"</h2>
            <Show
                when=move || !meals.get().is_empty()
                fallback=|| view! { <p class="dash-empty">"No meals planned yet."</p> }
            >
                <MealPlanChart meals=meals/>
            </Show>
            <div class="meal-cards">
                {move || {
                    meals
                        .get()
                        .into_iter()
                        .map(|meal| {
                            let name = meal.name.clone();
                            let pending_name = meal.name.clone();
                            let is_pending =
                                move || state.get().recipe_pending.as_deref() == Some(pending_name.as_str());
                            view! {
                                <article class="meal-card">
                                    <h3>{meal.name}</h3>
                                    <p class="meal-card__calories">{format!("{:.0} kcal", meal.calories)}</p>
                                    <ul class="meal-card__macros">
                                        <li>{format!("Protein {:.0}g", meal.protein)}</li>
                                        <li>{format!("Carbs {:.0}g", meal.carbs)}</li>
                                        <li>{format!("Fat {:.0}g", meal.fat)}</li>
                                    </ul>
                                    <button
                                        class="btn meal-card__recipe"
                                        disabled=move || state.get().recipe_pending.is_some()
                                        on:click=move |_| generate(name.clone())
                                    >
                                        {move || if is_pending() { "Generating..." } else { "Generate recipe" }}
                                    </button>
                                </article>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn WorkoutPanel(state: RwSignal<DashboardState>, alive: StoredValue<Arc<AtomicBool>>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<ToastService>();
    let form = RwSignal::new(WorkoutForm::default());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get().logging_workout {
            return;
        }
        let request = match form.with(WorkoutForm::validate) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        info.set(String::new());
        state.update(|s| s.logging_workout = true);

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.get_value();
            leptos::task::spawn_local(async move {
                let result = api.log_workout(&request).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(resp) => {
                        form.update(|f| f.days = Default::default());
                        let message = if resp.message.is_empty() { "Workout logged.".to_owned() } else { resp.message };
                        toasts.success(message);
                    }
                    Err(e) => {
                        log::warn!("workout log failed: {e}");
                        toasts.error(e.user_message());
                    }
                }
                state.update(|s| s.logging_workout = false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (alive, api, toasts, request);
    };

    let day_inputs = move || {
        let workout_type = form.get().workout_type;
        WeekData::DAYS
            .into_iter()
            .enumerate()
            .map(|(idx, day)| {
                view! {
                    <input
                        type="text"
                        inputmode="decimal"
                        placeholder=day_placeholder(day, workout_type)
                        prop:value=move || form.get().days[idx].clone()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.days[idx] = value);
                        }
                    />
                }
            })
            .collect_view()
    };

    view! {
        <section class="dash-card dash-workout">
            <h2>"Log this week's workouts"</h2>
            <form class="dash-form" on:submit=on_submit>
                <label>
                    "Workout"
                    <select on:change=move |ev| {
                        if let Ok(kind) = event_target_value(&ev).parse::<WorkoutType>() {
                            form.update(|f| f.workout_type = kind);
                        }
                    }>
                        {WorkoutType::ALL
                            .into_iter()
                            .map(|w| {
                                view! {
                                    <option value=w.as_str() selected=move || form.get().workout_type == w>
                                        {w.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Week starting"
                    <input
                        type="date"
                        prop:value=move || form.get().week_start
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.week_start = value);
                        }
                    />
                </label>
                <div class="dash-workout__days">{day_inputs}</div>
                <button class="btn btn--primary" type="submit" disabled=move || state.get().logging_workout>
                    {move || if state.get().logging_workout { "Logging..." } else { "Log workout" }}
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="dash-form__error">{move || info.get()}</p>
            </Show>
        </section>
    }
}

#[component]
fn SuggestionPanel(state: RwSignal<DashboardState>, alive: StoredValue<Arc<AtomicBool>>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<ToastService>();
    let text = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get().sending_suggestion {
            return;
        }
        let request = match text.with(|t| validate_suggestion(t)) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        info.set(String::new());
        state.update(|s| s.sending_suggestion = true);

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.get_value();
            leptos::task::spawn_local(async move {
                let result = api.submit_suggestion(&request).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(_) => {
                        text.set(String::new());
                        toasts.success("Thanks for the suggestion!");
                    }
                    Err(e) => {
                        log::warn!("suggestion submit failed: {e}");
                        toasts.error(e.user_message());
                    }
                }
                state.update(|s| s.sending_suggestion = false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (alive, api, toasts, request);
    };

    view! {
        <section class="dash-card dash-suggestion">
            <h2>"Suggest an improvement"</h2>
            <form class="dash-form" on:submit=on_submit>
                <textarea
                    rows="4"
                    placeholder="What would make BalanceBite better for you?"
                    prop:value=move || text.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || state.get().sending_suggestion>
                    {move || if state.get().sending_suggestion { "Sending..." } else { "Send" }}
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="dash-form__error">{move || info.get()}</p>
            </Show>
        </section>
    }
}

#[component]
fn ReportsPanel(state: RwSignal<DashboardState>, alive: StoredValue<Arc<AtomicBool>>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<ToastService>();

    let download = move |kind: ReportKind| {
        if state.get_untracked().downloading.is_some() {
            return;
        }
        state.update(|s| s.downloading = Some(kind));

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.get_value();
            leptos::task::spawn_local(async move {
                let result = api.download_report(kind).await.and_then(|bytes| {
                    crate::util::download::save_bytes(&bytes, kind.file_name(), schema::report::PDF_MIME)
                });
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                if let Err(e) = result {
                    log::warn!("{} report download failed: {e}", kind.slug());
                    toasts.error(e.user_message());
                }
                state.update(|s| s.downloading = None);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (alive, api, toasts);
    };

    view! {
        <section class="dash-card dash-reports">
            <h2>"Reports"</h2>
            <div class="dash-reports__actions">
                {ReportKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <button
                                class="btn"
                                disabled=move || state.get().downloading.is_some()
                                on:click=move |_| download(kind)
                            >
                                {move || {
                                    if state.get().downloading == Some(kind) { "Preparing..." } else { kind.label() }
                                }}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
