//! Bounded retry bookkeeping for the subscription fetch.

#[cfg(test)]
#[path = "retry_test.rs"]
mod retry_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Failed subscription fetches allowed before the terminal support screen.
pub const MAX_SUBSCRIPTION_ATTEMPTS: u32 = 3;

/// Retry limits and cool-down curve for user-triggered retries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_SUBSCRIPTION_ATTEMPTS,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(4),
        }
    }
}

impl RetryPolicy {
    /// Cool-down before the retry that follows `failures` failed attempts.
    ///
    /// Doubles from `base_delay` and saturates at `max_delay`.
    #[must_use]
    pub fn delay_for(&self, failures: u32) -> Duration {
        if failures == 0 {
            return Duration::ZERO;
        }
        let exponent = (failures - 1).min(16);
        self.base_delay.saturating_mul(1 << exponent).min(self.max_delay)
    }
}

/// Failure counter carried alongside the subscription snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryState {
    failures: u32,
}

impl RetryState {
    /// Counter pre-set to `failures`, clamped to the policy bound.
    #[must_use]
    pub fn with_failures(failures: u32, policy: &RetryPolicy) -> Self {
        Self { failures: failures.min(policy.max_attempts) }
    }

    #[must_use]
    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Count one more failed fetch. Never exceeds `policy.max_attempts`.
    pub fn record_failure(&mut self, policy: &RetryPolicy) -> u32 {
        self.failures = (self.failures + 1).min(policy.max_attempts);
        self.failures
    }

    pub fn record_success(&mut self) {
        self.failures = 0;
    }

    #[must_use]
    pub fn exhausted(&self, policy: &RetryPolicy) -> bool {
        self.failures >= policy.max_attempts
    }

    #[must_use]
    pub fn remaining(&self, policy: &RetryPolicy) -> u32 {
        policy.max_attempts.saturating_sub(self.failures)
    }
}
