use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn parse_days_reads_seven_values() {
    let days = parse_days("1000, 2000,,3000,4000,5000,6000").unwrap();
    assert_eq!(days, [1000.0, 2000.0, 0.0, 3000.0, 4000.0, 5000.0, 6000.0]);
}

#[test]
fn parse_days_rejects_wrong_count() {
    let err = parse_days("1,2,3").unwrap_err();
    assert_eq!(err.to_string(), "invalid argument: expected 7 daily values, got 3");
}

#[test]
fn parse_days_rejects_non_numbers() {
    let err = parse_days("1,2,3,4,5,6,x").unwrap_err();
    assert_eq!(err.to_string(), "invalid argument: not a number: x");
}

#[test]
fn parse_report_kind_accepts_slugs() {
    assert_eq!(parse_report_kind("user-updates"), Ok(ReportKind::UserUpdates));
    assert_eq!(parse_report_kind("weekly-workout"), Ok(ReportKind::WeeklyWorkout));
    assert!(parse_report_kind("monthly").is_err());
}

fn stored_profile() -> UserProfile {
    serde_json::from_value(serde_json::json!({
        "_id": "uid-1",
        "name": "Asha",
        "age": 30,
        "height": 170.0,
        "weight": 75.0,
        "meals": 4,
        "a_level": "very active",
        "goal": "bulking",
        "diet_type": "vegan",
        "tdee": 2900.0
    }))
    .unwrap()
}

#[test]
fn update_request_defaults_blank_diet_type() {
    let args = UpdateArgs {
        weight: 72.5,
        meals: 4,
        activity: Some(ActivityLevel::VeryActive),
        goal: Some(Goal::Bulking),
        diet_type: Some("  ".to_owned()),
    };
    let body = update_request(&args, None).unwrap();
    assert_eq!(body.diet_type, "standard");
    assert_eq!(body.a_level, ActivityLevel::VeryActive);
}

#[test]
fn update_request_rejects_bad_numbers() {
    let base = UpdateArgs {
        weight: -1.0,
        meals: 3,
        activity: Some(ActivityLevel::Sedentary),
        goal: Some(Goal::Maintenance),
        diet_type: None,
    };
    assert!(update_request(&base, None).is_err());
    let zero_meals = UpdateArgs { weight: 70.0, meals: 0, ..base };
    assert!(update_request(&zero_meals, None).is_err());
}

#[test]
fn update_omitted_flags_keep_stored_profile() {
    let cli = Cli::try_parse_from(["balancebite", "--id-token", "t", "update", "--weight", "80", "--meals", "3"]).unwrap();
    let Command::Update(args) = cli.command else {
        panic!("expected update");
    };
    assert!(args.is_partial());

    let body = update_request(&args, Some(&stored_profile())).unwrap();
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "weight": 80.0,
            "meals": 3,
            "a_level": "very active",
            "goal": "bulking",
            "diet_type": "vegan"
        })
    );
}

#[test]
fn update_explicit_flags_override_stored_profile() {
    let cli = Cli::try_parse_from([
        "balancebite", "--id-token", "t", "update", "--weight", "80", "--meals", "3", "--goal", "cutting",
    ])
    .unwrap();
    let Command::Update(args) = cli.command else {
        panic!("expected update");
    };
    let body = update_request(&args, Some(&stored_profile())).unwrap();
    assert_eq!(body.goal, Goal::Cutting);
    assert_eq!(body.a_level, ActivityLevel::VeryActive);
}

#[test]
fn update_omitted_flags_without_profile_is_rejected() {
    let args = UpdateArgs { weight: 80.0, meals: 3, activity: None, goal: None, diet_type: None };
    assert!(update_request(&args, None).is_err());
}

#[test]
fn parses_workout_subcommand() {
    let cli = Cli::try_parse_from([
        "balancebite",
        "--id-token",
        "tok",
        "workout",
        "--type",
        "cycling",
        "--week-start",
        "2024-03-04",
        "--days",
        "1,2,3,4,5,6,7",
    ])
    .unwrap();
    let Command::Workout(args) = cli.command else {
        panic!("expected workout command");
    };
    assert_eq!(args.workout_type, WorkoutType::Cycling);
    assert_eq!(args.week_start, "2024-03-04");
}

#[test]
fn parses_report_subcommand_with_output() {
    let cli = Cli::try_parse_from(["balancebite", "report", "weekly-workout", "--out", "w.pdf"]).unwrap();
    let Command::Report(args) = cli.command else {
        panic!("expected report command");
    };
    assert_eq!(args.kind, ReportKind::WeeklyWorkout);
    assert_eq!(args.out, Some(PathBuf::from("w.pdf")));
}

#[tokio::test]
async fn bearer_token_prefers_explicit_token() {
    let ctx = CliContext {
        api_url: schema::DEFAULT_API_BASE_URL.to_owned(),
        host_url: "http://127.0.0.1:3000".to_owned(),
        id_token: Some(" tok-123 ".to_owned()),
        email: None,
        password: None,
        identity: IdentityConfig::new(""),
    };
    assert_eq!(bearer_token(&ctx).await.unwrap(), "tok-123");
}

#[tokio::test]
async fn sign_in_requires_credentials() {
    let ctx = CliContext {
        api_url: schema::DEFAULT_API_BASE_URL.to_owned(),
        host_url: "http://127.0.0.1:3000".to_owned(),
        id_token: None,
        email: Some("a@b.com".to_owned()),
        password: None,
        identity: IdentityConfig::new("key"),
    };
    assert!(matches!(sign_in(&ctx).await, Err(CliError::MissingCredentials)));
}
