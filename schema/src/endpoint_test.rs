use super::*;

#[test]
fn url_joins_base_without_double_slash() {
    assert_eq!(Endpoint::Profile.url("http://api.test/"), "http://api.test/api/user/profile");
    assert_eq!(Endpoint::Profile.url("http://api.test"), "http://api.test/api/user/profile");
}

#[test]
fn write_endpoints_use_post() {
    for endpoint in [
        Endpoint::Signup,
        Endpoint::UpdateProfile,
        Endpoint::Workout,
        Endpoint::Suggestion,
        Endpoint::GenerateRecipe,
    ] {
        assert_eq!(endpoint.method(), HttpMethod::Post, "{endpoint:?}");
    }
}

#[test]
fn report_and_listing_endpoints_use_get() {
    assert_eq!(Endpoint::UserUpdatesReport.method(), HttpMethod::Get);
    assert_eq!(Endpoint::WeeklyWorkoutReport.method(), HttpMethod::Get);
    assert_eq!(Endpoint::AdminUsers.method().as_str(), "GET");
}

#[test]
fn every_path_lives_under_api_prefix() {
    for endpoint in Endpoint::ALL {
        assert!(endpoint.path().starts_with("/api/"), "{endpoint:?}");
    }
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("tok-1"), "Bearer tok-1");
}
