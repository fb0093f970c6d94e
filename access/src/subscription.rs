//! Subscription status snapshot consumed by the resolver.
//!
//! SYSTEM CONTEXT
//! ==============
//! Derived from `GET /api/customer/subscription` and cached client-side. A
//! manual refresh or a realtime push replaces the snapshot.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use serde::{Deserialize, Serialize};

/// Billing state of the customer's current subscription.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CurrentStatus {
    #[default]
    None,
    Active,
    PastDue,
    Cancelled,
}

impl CurrentStatus {
    /// True while the customer still holds a running subscription.
    #[must_use]
    pub fn is_current(self) -> bool {
        matches!(self, Self::Active | Self::PastDue)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Active => "ACTIVE",
            Self::PastDue => "PAST_DUE",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Parse a status name; accepts `past-due`, `past_due` and `PAST_DUE`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "NONE" => Some(Self::None),
            "ACTIVE" => Some(Self::Active),
            "PAST_DUE" => Some(Self::PastDue),
            "CANCELLED" | "CANCELED" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// Named service level controlling which services and perks are included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Starter,
    Homecare,
    Priority,
}

impl Tier {
    pub const ALL: [Self; 3] = [Self::Starter, Self::Homecare, Self::Priority];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Starter => "STARTER",
            Self::Homecare => "HOMECARE",
            Self::Priority => "PRIORITY",
        }
    }

    /// Customer-facing plan name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Homecare => "HomeCare",
            Self::Priority => "Priority",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

/// Why the last subscription fetch failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureKind {
    /// Request never reached the backend.
    Network,
    /// Backend answered with an error or an unreadable body.
    DataUnavailable,
}

/// Cached subscription status for the signed-in customer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStatus {
    pub has_subscription_history: bool,
    pub current_status: CurrentStatus,
    pub should_show_customer_dashboard: bool,
    pub is_loading: bool,
    pub is_error: bool,
    pub failure: Option<FailureKind>,
}

impl Default for SubscriptionStatus {
    fn default() -> Self {
        Self::loading()
    }
}

impl SubscriptionStatus {
    /// Fetch in flight.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            has_subscription_history: false,
            current_status: CurrentStatus::None,
            should_show_customer_dashboard: false,
            is_loading: true,
            is_error: false,
            failure: None,
        }
    }

    /// Snapshot from a successful fetch.
    #[must_use]
    pub fn loaded(current_status: CurrentStatus, has_history: bool) -> Self {
        let has_subscription_history = has_history || current_status != CurrentStatus::None;
        Self {
            has_subscription_history,
            current_status,
            should_show_customer_dashboard: customer_dashboard_eligible(current_status, has_subscription_history),
            is_loading: false,
            is_error: false,
            failure: None,
        }
    }

    /// Snapshot after a failed fetch.
    #[must_use]
    pub fn failed(kind: FailureKind) -> Self {
        Self { is_loading: false, is_error: true, failure: Some(kind), ..Self::loading() }
    }

    /// Replace the billing status after a push update, keeping history.
    #[must_use]
    pub fn with_status(&self, current_status: CurrentStatus) -> Self {
        Self::loaded(current_status, self.has_subscription_history)
    }
}

/// Customers with a running subscription, or any past one, get the customer
/// dashboard; everyone else lands on the general dashboard.
#[must_use]
pub fn customer_dashboard_eligible(current_status: CurrentStatus, has_history: bool) -> bool {
    current_status.is_current() || has_history
}
