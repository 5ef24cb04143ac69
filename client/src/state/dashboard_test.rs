use super::*;

fn profile() -> UserProfile {
    serde_json::from_value(serde_json::json!({
        "_id": "u1", "name": "Asha", "email": "a@b.com", "age": 29,
        "height": 160.0, "weight": 80.0, "meals": 3, "sex": "female",
        "a_level": "sedentary", "goal": "cutting", "diet_type": "vegetarian",
        "bmr": 1500.0, "tdee": 1800.0, "target_calories": 1530.0,
        "total_protein": 150.0, "total_carbs": 120.0, "total_fat": 50.0
    }))
    .expect("profile")
}

fn meal(name: &str, protein: f64) -> MealPlanEntry {
    MealPlanEntry { name: name.to_owned(), calories: 500.0, protein, carbs: 40.0, fat: 10.0 }
}

#[test]
fn load_merges_both_slices() {
    let mut state = DashboardState { loading: true, ..DashboardState::default() };
    let toast = state.apply_load(Ok(profile()), Ok(vec![meal("Breakfast", 30.0)]));
    assert_eq!(toast, None);
    assert!(!state.loading);
    assert!(state.profile.is_some());
    assert_eq!(state.meal_plan.len(), 1);
}

#[test]
fn plan_failure_keeps_profile_and_reports_once() {
    let mut state = DashboardState { loading: true, ..DashboardState::default() };
    let toast = state.apply_load(Ok(profile()), Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(toast.as_deref(), Some("Could not reach the server. Check your connection."));
    assert!(state.profile.is_some());
    assert!(state.error.is_none());
    assert!(state.meal_plan.is_empty());
}

#[test]
fn profile_failure_sets_error_panel() {
    let mut state = DashboardState::default();
    let toast = state.apply_load(
        Err(ApiError::Status { status: 404, message: "User not found".to_owned() }),
        Ok(vec![]),
    );
    assert_eq!(toast.as_deref(), Some("User not found"));
    assert_eq!(state.error.as_deref(), Some("User not found"));
}

#[test]
fn update_replaces_profile_and_plan_wholesale() {
    let mut state = DashboardState::default();
    state.apply_load(Ok(profile()), Ok(vec![meal("Old", 10.0)]));
    let mut updated = profile();
    updated.weight = 78.0;
    state.apply_update(UpdateProfileResponse {
        message: "Profile updated".to_owned(),
        user: updated,
        meal_plan: vec![meal("New A", 20.0), meal("New B", 25.0)],
    });
    assert!((state.profile.as_ref().expect("profile").weight - 78.0).abs() < f64::EPSILON);
    let names: Vec<_> = state.meal_plan.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["New A", "New B"]);
}

#[test]
fn macro_progress_compares_plan_totals_to_targets() {
    let mut state = DashboardState::default();
    state.apply_load(Ok(profile()), Ok(vec![meal("A", 30.0), meal("B", 45.0)]));
    let [protein, carbs, fat] = state.macro_progress().expect("progress");
    assert_eq!(protein, MacroProgress { label: "Protein", current: 75.0, target: 150.0 });
    assert!((carbs.current - 80.0).abs() < f64::EPSILON);
    assert!((fat.target - 50.0).abs() < f64::EPSILON);
}

#[test]
fn macro_progress_needs_profile() {
    assert_eq!(DashboardState::default().macro_progress(), None);
}

#[test]
fn profile_form_rejects_non_numeric_weight() {
    let mut form = ProfileForm::from_profile(&profile());
    form.weight = "eighty".to_owned();
    assert_eq!(form.validate(), Err("Weight must be a positive number."));
    form.weight = "-5".to_owned();
    assert_eq!(form.validate(), Err("Weight must be a positive number."));
}

#[test]
fn profile_form_rejects_out_of_range_meals() {
    let mut form = ProfileForm::from_profile(&profile());
    form.meals = "0".to_owned();
    assert!(form.validate().is_err());
    form.meals = "2.5".to_owned();
    assert!(form.validate().is_err());
}

#[test]
fn profile_form_round_trips_current_values() {
    let form = ProfileForm::from_profile(&profile());
    assert_eq!(form.weight, "80");
    let req = form.validate().expect("valid");
    assert!((req.weight - 80.0).abs() < f64::EPSILON);
    assert_eq!(req.meals, 3);
    assert_eq!(req.goal, Goal::Cutting);
    assert_eq!(req.diet_type, "vegetarian");
}

#[test]
fn profile_form_defaults_blank_diet_type() {
    let mut form = ProfileForm::from_profile(&profile());
    form.diet_type = "  ".to_owned();
    assert_eq!(form.validate().expect("valid").diet_type, DEFAULT_DIET_TYPE);
}

#[test]
fn workout_form_treats_blank_days_as_zero() {
    let mut form = WorkoutForm { week_start: "2025-01-06".to_owned(), ..WorkoutForm::default() };
    form.days[0] = "8000".to_owned();
    form.days[6] = " 1200 ".to_owned();
    let req = form.validate().expect("valid");
    assert!((req.week_data.monday - 8000.0).abs() < f64::EPSILON);
    assert!((req.week_data.sunday - 1200.0).abs() < f64::EPSILON);
    assert!(req.week_data.wednesday.abs() < f64::EPSILON);
}

#[test]
fn workout_form_requires_date_and_numbers() {
    let mut form = WorkoutForm::default();
    assert_eq!(form.validate(), Err("Pick the week start date."));
    form.week_start = "2025-01-06".to_owned();
    form.days[2] = "lots".to_owned();
    assert_eq!(form.validate(), Err("Daily values must be non-negative numbers."));
    form.days[2] = "3".to_owned();
    form.week_start = "next monday".to_owned();
    assert_eq!(form.validate(), Err("Week start must be a date (YYYY-MM-DD)."));
}

#[test]
fn suggestion_requires_text() {
    assert_eq!(validate_suggestion("   "), Err("Write a suggestion first."));
    assert_eq!(validate_suggestion(" more curries ").expect("valid").suggestion, "more curries");
}
