use super::*;

#[test]
fn signed_in_users_get_dashboard_link_only() {
    let links = cta_links(true);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].href, "/dashboard");
    assert_eq!(links[0].label, "Go to Dashboard");
}

#[test]
fn visitors_get_login_then_signup() {
    let hrefs: Vec<_> = cta_links(false).into_iter().map(|l| l.href).collect();
    assert_eq!(hrefs, vec!["/login", "/signup"]);
}

#[test]
fn section_links_target_landing_anchors() {
    assert_eq!(SECTION_LINKS.map(|(_, href)| href), ["#features", "#pricing"]);
}
