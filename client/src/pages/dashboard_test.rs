use super::*;

fn profile() -> UserProfile {
    serde_json::from_value(serde_json::json!({
        "_id": "uid-1",
        "name": "Asha",
        "age": 29,
        "height": 160,
        "weight": 80,
        "meals": 3,
        "a_level": "moderately active",
        "goal": "cutting",
        "tdee": 2412.4,
        "target_calories": 1912.4,
    }))
    .expect("profile decodes")
}

#[test]
fn stat_rows_list_every_stat_in_order() {
    let labels: Vec<_> = stat_rows(&profile()).into_iter().map(|(label, _)| label).collect();
    assert_eq!(labels, vec!["Age", "BMI", "Weight", "TDEE", "Target calories", "Activity level", "Goal"]);
}

#[test]
fn stat_rows_format_values() {
    let rows = stat_rows(&profile());
    assert_eq!(rows[0].1, "29");
    assert_eq!(rows[1].1, "31.3");
    assert_eq!(rows[2].1, "80 kg");
    assert_eq!(rows[3].1, "2412 kcal");
    assert_eq!(rows[4].1, "1912 kcal");
    assert_eq!(rows[6].1, "Cutting");
}

#[test]
fn day_placeholder_capitalizes_and_adds_unit() {
    assert_eq!(day_placeholder("monday", WorkoutType::Cycling), "Monday (km)");
    assert_eq!(day_placeholder("sunday", WorkoutType::Steps), "Sunday (steps)");
}
