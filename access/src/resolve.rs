//! Dashboard route resolver.
//!
//! DESIGN
//! ======
//! The decision order is a first-match table:
//!
//! 1. session loading or not hydrated  -> loading, no redirect
//! 2. not authenticated                -> login route with return path
//! 3. required role mismatch           -> the actual role's home
//! 4. admin                            -> admin route
//! 5. subscription loading             -> loading
//! 6. subscription error               -> retryable error, then terminal
//! 7. customer dashboard eligible      -> customer dashboard
//! 8. otherwise                        -> general dashboard
//!
//! At most one destination flag is ever set, and none while loading. When the
//! decision is neither loading nor an error, exactly one is set.

#[cfg(test)]
#[path = "resolve_test.rs"]
mod resolve_test;

use serde::{Deserialize, Serialize};

use crate::retry::{RetryPolicy, RetryState};
use crate::routes::{self, ADMIN, CUSTOMER_DASHBOARD, GENERAL_DASHBOARD};
use crate::session::{Role, Session};
use crate::subscription::{FailureKind, SubscriptionStatus};

/// Position of the guard in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolverState {
    Initializing,
    AuthChecking,
    SubscriptionChecking,
    Resolved,
    Error,
    TerminalError,
}

impl ResolverState {
    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Initializing | Self::AuthChecking | Self::SubscriptionChecking)
    }
}

/// Why the resolver could not pick a normal destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionError {
    #[error("sign-in required")]
    Authentication,
    #[error("network unavailable")]
    Network,
    #[error("subscription data unavailable")]
    DataUnavailable,
}

impl From<FailureKind> for DecisionError {
    fn from(kind: FailureKind) -> Self {
        match kind {
            FailureKind::Network => Self::Network,
            FailureKind::DataUnavailable => Self::DataUnavailable,
        }
    }
}

/// Everything the resolver reads.
#[derive(Clone, Copy, Debug)]
pub struct ResolverInput<'a> {
    pub session: &'a Session,
    pub subscription: &'a SubscriptionStatus,
    pub current_path: &'a str,
    pub required_role: Option<Role>,
    pub retry: RetryState,
    pub policy: RetryPolicy,
}

impl<'a> ResolverInput<'a> {
    #[must_use]
    pub fn new(session: &'a Session, subscription: &'a SubscriptionStatus, current_path: &'a str) -> Self {
        Self {
            session,
            subscription,
            current_path,
            required_role: None,
            retry: RetryState::default(),
            policy: RetryPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_required_role(mut self, role: Option<Role>) -> Self {
        self.required_role = role;
        self
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryState) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Computed routing outcome. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingDecision {
    pub target_route: Option<String>,
    pub should_redirect_to_admin: bool,
    pub should_redirect_to_customer_dashboard: bool,
    pub should_show_general_dashboard: bool,
    pub is_loading: bool,
    pub error: Option<DecisionError>,
    pub state: ResolverState,
    /// Always-available destination offered alongside error screens.
    pub fallback_route: Option<String>,
    pub can_retry: bool,
    pub show_contact_support: bool,
    pub retries_remaining: u32,
}

#[derive(Clone, Copy)]
enum Destination {
    Admin,
    CustomerDashboard,
    GeneralDashboard,
}

impl Destination {
    fn route(self) -> &'static str {
        match self {
            Self::Admin => ADMIN,
            Self::CustomerDashboard => CUSTOMER_DASHBOARD,
            Self::GeneralDashboard => GENERAL_DASHBOARD,
        }
    }

    /// Mirrors `routes::role_home`.
    fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Self::Admin,
            Role::Customer => Self::GeneralDashboard,
        }
    }
}

impl RoutingDecision {
    fn blank(state: ResolverState) -> Self {
        Self {
            target_route: None,
            should_redirect_to_admin: false,
            should_redirect_to_customer_dashboard: false,
            should_show_general_dashboard: false,
            is_loading: state.is_loading(),
            error: None,
            state,
            fallback_route: None,
            can_retry: false,
            show_contact_support: false,
            retries_remaining: 0,
        }
    }

    fn loading(state: ResolverState) -> Self {
        Self::blank(state)
    }

    fn to_destination(destination: Destination) -> Self {
        let mut decision = Self::blank(ResolverState::Resolved);
        decision.target_route = Some(destination.route().to_owned());
        match destination {
            Destination::Admin => decision.should_redirect_to_admin = true,
            Destination::CustomerDashboard => decision.should_redirect_to_customer_dashboard = true,
            Destination::GeneralDashboard => decision.should_show_general_dashboard = true,
        }
        decision
    }

    fn to_login(current_path: &str) -> Self {
        let mut decision = Self::blank(ResolverState::Resolved);
        decision.target_route = Some(routes::login_route(current_path));
        decision.error = Some(DecisionError::Authentication);
        decision
    }

    fn subscription_error(error: DecisionError, retry: RetryState, policy: &RetryPolicy) -> Self {
        // A reported error counts as at least one failure even if the caller
        // has not recorded it yet.
        let failures = retry.failures().max(1);
        let retry = RetryState::with_failures(failures, policy);
        let exhausted = retry.exhausted(policy);

        let mut decision =
            Self::blank(if exhausted { ResolverState::TerminalError } else { ResolverState::Error });
        decision.error = Some(error);
        decision.fallback_route = Some(CUSTOMER_DASHBOARD.to_owned());
        decision.can_retry = !exhausted;
        decision.show_contact_support = exhausted;
        decision.retries_remaining = retry.remaining(policy);
        decision
    }

    /// Number of destination flags set; 0 or 1 by construction.
    #[must_use]
    pub fn destination_flag_count(&self) -> usize {
        [
            self.should_redirect_to_admin,
            self.should_redirect_to_customer_dashboard,
            self.should_show_general_dashboard,
        ]
        .into_iter()
        .filter(|flag| *flag)
        .count()
    }

    /// Route to navigate to from `current_path`, or `None` when already there
    /// or when there is nothing to navigate to.
    #[must_use]
    pub fn navigation_target(&self, current_path: &str) -> Option<&str> {
        let target = self.target_route.as_deref()?;
        if routes::path_only(target) == routes::path_only(current_path) {
            return None;
        }
        Some(target)
    }
}

/// Decide where the viewer belongs.
#[must_use]
pub fn resolve(input: &ResolverInput<'_>) -> RoutingDecision {
    let session = input.session;

    if !session.is_hydrated {
        return RoutingDecision::loading(ResolverState::Initializing);
    }
    if session.is_loading {
        return RoutingDecision::loading(ResolverState::AuthChecking);
    }

    let Some(user) = session.active_user() else {
        return RoutingDecision::to_login(input.current_path);
    };

    if let Some(required) = input.required_role
        && user.role != required
    {
        return RoutingDecision::to_destination(Destination::for_role(user.role));
    }

    if user.role == Role::Admin {
        return RoutingDecision::to_destination(Destination::Admin);
    }

    let subscription = input.subscription;
    if subscription.is_loading {
        return RoutingDecision::loading(ResolverState::SubscriptionChecking);
    }
    if subscription.is_error {
        let error = subscription.failure.map_or(DecisionError::DataUnavailable, DecisionError::from);
        return RoutingDecision::subscription_error(error, input.retry, &input.policy);
    }
    if subscription.should_show_customer_dashboard {
        return RoutingDecision::to_destination(Destination::CustomerDashboard);
    }
    RoutingDecision::to_destination(Destination::GeneralDashboard)
}
