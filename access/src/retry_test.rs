use super::*;

#[test]
fn default_policy_allows_three_attempts() {
    assert_eq!(RetryPolicy::default().max_attempts, 3);
}

#[test]
fn delay_doubles_and_saturates() {
    let policy = RetryPolicy::default();
    assert_eq!(policy.delay_for(0), Duration::ZERO);
    assert_eq!(policy.delay_for(1), Duration::from_millis(500));
    assert_eq!(policy.delay_for(2), Duration::from_secs(1));
    assert_eq!(policy.delay_for(3), Duration::from_secs(2));
    assert_eq!(policy.delay_for(4), Duration::from_secs(4));
    assert_eq!(policy.delay_for(40), Duration::from_secs(4));
}

#[test]
fn failure_counter_never_exceeds_bound() {
    let policy = RetryPolicy::default();
    let mut state = RetryState::default();
    for _ in 0..10 {
        state.record_failure(&policy);
        assert!(state.failures() <= policy.max_attempts);
    }
    assert_eq!(state.failures(), 3);
    assert!(state.exhausted(&policy));
    assert_eq!(state.remaining(&policy), 0);
}

#[test]
fn success_resets_counter() {
    let policy = RetryPolicy::default();
    let mut state = RetryState::default();
    state.record_failure(&policy);
    state.record_failure(&policy);
    state.record_success();
    assert_eq!(state.failures(), 0);
    assert_eq!(state.remaining(&policy), 3);
}

#[test]
fn with_failures_clamps_to_policy() {
    let policy = RetryPolicy::default();
    assert_eq!(RetryState::with_failures(7, &policy).failures(), 3);
    assert_eq!(RetryState::with_failures(1, &policy).failures(), 1);
}
