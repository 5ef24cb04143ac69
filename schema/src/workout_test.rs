use super::*;

#[test]
fn request_serializes_with_camel_case_keys() {
    let req = WorkoutLogRequest::new(
        WorkoutType::Cycling,
        "2025-01-06",
        WeekData::from_days([1.0, 2.0, 0.0, 0.0, 5.5, 0.0, 0.0]),
    )
    .expect("valid");
    let json = serde_json::to_value(&req).expect("encode");
    assert_eq!(json["workoutType"], "cycling");
    assert_eq!(json["weekStart"], "2025-01-06");
    assert_eq!(json["weekData"]["friday"], 5.5);
}

#[test]
fn request_rejects_malformed_date() {
    let err = WorkoutLogRequest::new(WorkoutType::Steps, "06/01/2025", WeekData::default()).expect_err("bad date");
    assert!(matches!(err, ApiError::Validation(msg) if msg.contains("YYYY-MM-DD")));
}

#[test]
fn request_rejects_impossible_date() {
    assert!(parse_week_start("2025-02-30").is_err());
}

#[test]
fn request_rejects_negative_day_value() {
    let mut week = WeekData::default();
    week.wednesday = -1.0;
    let err = WorkoutLogRequest::new(WorkoutType::Running, "2025-01-06", week).expect_err("negative");
    assert_eq!(err, ApiError::Validation("wednesday must be a non-negative number".to_owned()));
}

#[test]
fn week_start_is_trimmed() {
    assert_eq!(parse_week_start(" 2025-01-06 ").expect("date"), "2025-01-06");
}

#[test]
fn labels_carry_units() {
    assert_eq!(WorkoutType::Steps.label(), "Steps");
    assert_eq!(WorkoutType::Running.label(), "Running (km)");
    assert_eq!(WorkoutType::Yoga.label(), "Yoga (min)");
    assert_eq!(WorkoutType::Weightlifting.unit(), "kg");
}

#[test]
fn week_days_keep_monday_first_order() {
    let week = WeekData::from_days([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    assert!((week.monday - 1.0).abs() < f64::EPSILON);
    assert!((week.sunday - 7.0).abs() < f64::EPSILON);
    assert_eq!(WeekData::from_days(week.to_days()), week);
}
