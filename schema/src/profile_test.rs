use super::*;

fn profile_json() -> serde_json::Value {
    serde_json::json!({
        "_id": "uid-1",
        "email": "a@b.com",
        "name": "Asha",
        "age": 29,
        "height": 160.0,
        "weight": 80.0,
        "meals": 3,
        "sex": "female",
        "a_level": "moderately active",
        "goal": "cutting",
        "diet_type": "vegetarian",
        "disliked_ingredients": ["olives"],
        "bmr": 1500.5,
        "tdee": 2325.8,
        "target_calories": 1976.9,
        "total_carbs": 197.7,
        "total_protein": 197.7,
        "total_fat": 43.9,
        "is_admin": false,
        "created_at": "Tue, 07 Jan 2025 10:00:00 GMT"
    })
}

#[test]
fn profile_decodes_backend_document() {
    let profile: UserProfile = serde_json::from_value(profile_json()).expect("decode");
    assert_eq!(profile.id, "uid-1");
    assert_eq!(profile.a_level, ActivityLevel::ModeratelyActive);
    assert_eq!(profile.goal, Goal::Cutting);
    assert_eq!(profile.sex, Sex::Female);
    assert_eq!(profile.disliked_ingredients, vec!["olives".to_owned()]);
    assert!((profile.target_calories() - 1976.9).abs() < f64::EPSILON);
}

#[test]
fn legacy_profile_falls_back_to_tdee_and_defaults() {
    let mut raw = profile_json();
    let map = raw.as_object_mut().expect("object");
    map.remove("target_calories");
    map.remove("goal");
    map.remove("diet_type");
    map.insert("meals".to_owned(), serde_json::json!(4.0));

    let profile: UserProfile = serde_json::from_value(raw).expect("decode");
    assert_eq!(profile.goal, Goal::Maintenance);
    assert_eq!(profile.diet_type, DEFAULT_DIET_TYPE);
    assert_eq!(profile.meals, 4);
    assert!((profile.target_calories() - 2325.8).abs() < f64::EPSILON);
}

#[test]
fn profile_rejects_fractional_meal_count() {
    let mut raw = profile_json();
    raw["meals"] = serde_json::json!(2.5);
    assert!(serde_json::from_value::<UserProfile>(raw).is_err());
}

#[test]
fn activity_level_parses_case_insensitively() {
    assert_eq!("Very Active".parse::<ActivityLevel>(), Ok(ActivityLevel::VeryActive));
    assert_eq!(" sedentary ".parse::<ActivityLevel>(), Ok(ActivityLevel::Sedentary));
    assert!("couch".parse::<ActivityLevel>().is_err());
}

#[test]
fn activity_level_serializes_as_wire_phrase() {
    let json = serde_json::to_string(&ActivityLevel::LightlyActive).expect("encode");
    assert_eq!(json, "\"lightly active\"");
}

#[test]
fn bmi_matches_worked_example() {
    let value = bmi(80.0, 160.0).expect("bmi");
    assert!((value - 31.25).abs() < 1e-9);
    assert_eq!(format_bmi(value), "31.3");
}

#[test]
fn bmi_ties_stay_exact_for_decimal_heights() {
    assert_eq!(bmi(80.0, 160.0), Some(31.25));
    assert_eq!(bmi(45.0, 120.0), Some(31.25));
    assert_eq!(format_bmi(bmi(45.0, 120.0).expect("bmi")), "31.3");
}

#[test]
fn bmi_is_none_for_unusable_height() {
    assert_eq!(bmi(80.0, 0.0), None);
    assert_eq!(bmi(80.0, -170.0), None);
    assert_eq!(bmi(f64::NAN, 170.0), None);
}

#[test]
fn bmi_display_uses_placeholder_without_height() {
    let mut profile: UserProfile = serde_json::from_value(profile_json()).expect("decode");
    assert_eq!(profile.bmi_display(), "31.3");
    profile.height = 0.0;
    assert_eq!(profile.bmi_display(), "—");
}

#[test]
fn macro_totals_sum_each_column() {
    let plan = vec![
        MealPlanEntry { name: "Breakfast".to_owned(), calories: 500.0, protein: 30.0, carbs: 60.0, fat: 10.0 },
        MealPlanEntry { name: "Lunch".to_owned(), calories: 700.0, protein: 45.0, carbs: 80.0, fat: 20.0 },
    ];
    let totals = MacroTotals::of(&plan);
    assert_eq!(totals, MacroTotals { calories: 1200.0, protein: 75.0, carbs: 140.0, fat: 30.0 });
    assert_eq!(MacroTotals::of(&[]), MacroTotals::default());
}

#[test]
fn update_response_carries_profile_and_plan() {
    let raw = serde_json::json!({
        "message": "Profile updated",
        "user": profile_json(),
        "meal_plan": [{"name": "Breakfast", "calories": 593.1, "protein": 59.3, "carbs": 59.3, "fat": 13.2}]
    });
    let resp: UpdateProfileResponse = serde_json::from_value(raw).expect("decode");
    assert_eq!(resp.meal_plan.len(), 1);
    assert_eq!(resp.user.name, "Asha");
}

#[test]
fn signup_request_uses_backend_field_names() {
    let req = SignupRequest {
        name: "Asha".to_owned(),
        age: 29,
        height: 160.0,
        weight: 80.0,
        meals: 3,
        sex: Sex::Female,
        a_level: ActivityLevel::Sedentary,
        goal: Goal::Bulking,
        diet_type: "standard".to_owned(),
        disliked_ingredients: vec![],
    };
    let json = serde_json::to_value(&req).expect("encode");
    assert_eq!(json["a_level"], "sedentary");
    assert_eq!(json["goal"], "bulking");
    assert_eq!(json["sex"], "female");
}
