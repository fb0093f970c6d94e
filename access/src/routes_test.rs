use super::*;

#[test]
fn login_route_encodes_return_path() {
    assert_eq!(login_route("/billing"), "/login?redirect=%2Fbilling");
    assert_eq!(
        login_route("/services?category=plumbing"),
        "/login?redirect=%2Fservices%3Fcategory%3Dplumbing"
    );
}

#[test]
fn login_route_defaults_empty_path_to_landing() {
    assert_eq!(login_route(""), "/login?redirect=%2F");
}

/// The router hands pages the query value decoded exactly once.
fn router_decoded_param(route: &str) -> String {
    let (_, param) = route.split_once("redirect=").expect("redirect param");
    urlencoding::decode(param).expect("utf-8 param").into_owned()
}

#[test]
fn redirect_parameter_round_trips_to_original_path() {
    let original = "/customer-dashboard?tab=usage";
    let param = router_decoded_param(&login_route(original));
    assert_eq!(safe_redirect(Some(&param)), original);
}

#[test]
fn redirect_round_trip_keeps_escapes_in_the_return_path() {
    for original in ["/services?q=50%25off", "/billing?note=a%2Bb", "/services?category=lawn%20care"] {
        let param = router_decoded_param(&login_route(original));
        assert_eq!(safe_redirect(Some(&param)), original);
    }
}

#[test]
fn role_home_maps_each_role() {
    assert_eq!(role_home(Role::Admin), ADMIN);
    assert_eq!(role_home(Role::Customer), GENERAL_DASHBOARD);
}

#[test]
fn path_only_strips_query_and_fragment() {
    assert_eq!(path_only("/billing?x=1"), "/billing");
    assert_eq!(path_only("/billing#plans"), "/billing");
    assert_eq!(path_only(""), "/");
}

#[test]
fn safe_redirect_rejects_foreign_targets() {
    assert_eq!(safe_redirect(None), "/");
    assert_eq!(safe_redirect(Some("https://evil.example")), "/");
    assert_eq!(safe_redirect(Some("//evil.example")), "/");
    assert_eq!(safe_redirect(Some("/\\evil.example")), "/");
    assert_eq!(safe_redirect(Some("billing")), "/");
}

#[test]
fn safe_redirect_refuses_login_loop() {
    assert_eq!(safe_redirect(Some("/login?redirect=%2F")), "/");
    assert_eq!(safe_redirect(Some("/login")), "/");
}

#[test]
fn safe_redirect_keeps_local_paths() {
    assert_eq!(safe_redirect(Some("/billing")), "/billing");
    assert_eq!(safe_redirect(Some(" /services ")), "/services");
}

#[test]
fn route_with_redirect_encodes_return_path() {
    assert_eq!(route_with_redirect(REGISTER, "/billing?x=1"), "/register?redirect=%2Fbilling%3Fx%3D1");
    assert_eq!(route_with_redirect(REGISTER, ""), "/register?redirect=%2F");
}
