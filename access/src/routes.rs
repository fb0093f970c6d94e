//! Route paths shared by the resolver and the router.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::session::Role;

pub const LANDING: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const ADMIN: &str = "/admin";
pub const CUSTOMER_DASHBOARD: &str = "/customer-dashboard";
pub const GENERAL_DASHBOARD: &str = "/dashboard";
pub const BILLING: &str = "/billing";
pub const SERVICES: &str = "/services";
pub const NOTIFICATIONS: &str = "/notifications";

/// Query parameter carrying the return path on the login route.
pub const REDIRECT_PARAM: &str = "redirect";

/// Login route that returns the viewer to `return_path` after sign-in.
#[must_use]
pub fn login_route(return_path: &str) -> String {
    route_with_redirect(LOGIN, return_path)
}

/// `base` with `return_path` carried in the `redirect` parameter.
#[must_use]
pub fn route_with_redirect(base: &str, return_path: &str) -> String {
    let return_path = if return_path.is_empty() { LANDING } else { return_path };
    format!("{base}?{REDIRECT_PARAM}={}", urlencoding::encode(return_path))
}

/// Home route for a role. Customers land on the general dashboard, which
/// resolves further by subscription.
#[must_use]
pub fn role_home(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN,
        Role::Customer => GENERAL_DASHBOARD,
    }
}

/// Path component of `location`, without query string or fragment.
#[must_use]
pub fn path_only(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = &location[..end];
    if path.is_empty() { LANDING } else { path }
}

/// Same-origin path for a `redirect` parameter the router has already
/// decoded.
///
/// Anything that is not an absolute in-app path (other origins,
/// protocol-relative URLs, the login page itself) falls back to `/`.
#[must_use]
pub fn safe_redirect(param: Option<&str>) -> String {
    let Some(param) = param else {
        return LANDING.to_owned();
    };
    let candidate = param.trim();
    let is_local = candidate.starts_with('/')
        && !candidate.starts_with("//")
        && !candidate.contains('\\')
        && !candidate.contains("://");
    if !is_local || path_only(candidate) == LOGIN {
        return LANDING.to_owned();
    }
    candidate.to_owned()
}
