//! Access decisions for the customer portal.
//!
//! This crate owns the pure routing resolver used by every guarded page in
//! `client`, plus the session/subscription inputs it reads. It has no UI or
//! browser dependencies so the decision table can be exercised natively by
//! tests and by the operator CLI.
//!
//! DESIGN
//! ======
//! `resolve` is a pure function of its inputs: calling it twice with the same
//! session, subscription snapshot, path and retry counter yields the same
//! `RoutingDecision`. Side effects (navigation, refetching) belong to callers.

pub mod resolve;
pub mod retry;
pub mod routes;
pub mod session;
pub mod subscription;

pub use resolve::{DecisionError, ResolverInput, ResolverState, RoutingDecision, resolve};
pub use retry::{RetryPolicy, RetryState};
pub use session::{Role, Session, User};
pub use subscription::{CurrentStatus, FailureKind, SubscriptionStatus, Tier};
