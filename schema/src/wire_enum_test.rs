use crate::{ActivityLevel, WorkoutType};

#[test]
fn workout_type_parses_case_insensitively() {
    assert_eq!(" Cycling ".parse::<WorkoutType>(), Ok(WorkoutType::Cycling));
    assert_eq!("weightlifting".parse::<WorkoutType>(), Ok(WorkoutType::Weightlifting));
}

#[test]
fn unknown_value_names_the_enum() {
    assert_eq!("swimming".parse::<WorkoutType>(), Err("unknown workout type: swimming".to_owned()));
    assert_eq!("lazy".parse::<ActivityLevel>(), Err("unknown activity level: lazy".to_owned()));
}

#[test]
fn wire_string_round_trips_through_serde() {
    let json = serde_json::to_string(&WorkoutType::Yoga).expect("encode");
    assert_eq!(json, "\"yoga\"");
    assert_eq!(WorkoutType::Yoga.to_string(), "yoga");
    assert!(serde_json::from_str::<WorkoutType>("\"rowing\"").is_err());
}
