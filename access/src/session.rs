//! Session and user identity as seen by route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authentication collaborator populates `Session` asynchronously on app
//! load. Guards only read it; they never mutate it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Portal role attached to an authenticated user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    Admin,
}

impl Role {
    /// Wire name of the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "CUSTOMER",
            Self::Admin => "ADMIN",
        }
    }

    /// Parse a role name case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "CUSTOMER" => Some(Self::Customer),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// An authenticated portal user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub role: Role,
    pub name: String,
    pub email: String,
}

/// Authentication session snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub is_authenticated: bool,
    /// False until the client has hydrated and read the session at least once.
    pub is_hydrated: bool,
    pub user: Option<User>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::initializing()
    }
}

impl Session {
    /// Session before hydration; nothing is known yet.
    #[must_use]
    pub fn initializing() -> Self {
        Self { is_authenticated: false, is_hydrated: false, user: None, is_loading: true, error: None }
    }

    /// Hydrated session with a signed-in user.
    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self { is_authenticated: true, is_hydrated: true, user: Some(user), is_loading: false, error: None }
    }

    /// Hydrated session without a user.
    #[must_use]
    pub fn anonymous() -> Self {
        Self { is_authenticated: false, is_hydrated: true, user: None, is_loading: false, error: None }
    }

    /// Hydrated session whose lookup failed. Treated as signed out.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self { error: Some(message.into()), ..Self::anonymous() }
    }

    /// The signed-in user, only when the session is authenticated.
    #[must_use]
    pub fn active_user(&self) -> Option<&User> {
        if self.is_authenticated { self.user.as_ref() } else { None }
    }

    /// Role of the signed-in user, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.active_user().map(|user| user.role)
    }
}
