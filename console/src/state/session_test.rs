use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_starts_uninitialized_and_unauthenticated() {
    let s = SessionState::new();
    assert_eq!(s.phase(), SessionPhase::Uninitialized);
    assert!(!s.is_authenticated());
    assert_eq!(s.login_reason(), None);
}

// =============================================================
// Probe path
// =============================================================

#[test]
fn successful_probe_authenticates() {
    let mut s = SessionState::new();
    s.begin_probe().unwrap();
    assert_eq!(s.phase(), SessionPhase::PendingProbe);
    assert!(!s.is_authenticated());
    s.probe_succeeded().unwrap();
    assert!(s.is_authenticated());
}

#[test]
fn probe_can_only_be_issued_once() {
    let mut s = SessionState::new();
    s.begin_probe().unwrap();
    assert_eq!(s.begin_probe(), Err(SessionError::ProbeAlreadyIssued));
    s.probe_succeeded().unwrap();
    assert_eq!(s.begin_probe(), Err(SessionError::ProbeAlreadyIssued));
}

#[test]
fn probe_result_without_probe_is_rejected() {
    let mut s = SessionState::new();
    assert_eq!(s.probe_succeeded(), Err(SessionError::NoProbeInFlight));
    assert_eq!(s.probe_failed(LoginReason::Rejected), Err(SessionError::NoProbeInFlight));
    assert_eq!(s.phase(), SessionPhase::Uninitialized);
}

// =============================================================
// Login path
// =============================================================

#[test]
fn failed_probe_requires_login_with_reason() {
    let mut s = SessionState::new();
    s.begin_probe().unwrap();
    s.probe_failed(LoginReason::Unreachable).unwrap();
    assert!(!s.is_authenticated());
    assert_eq!(s.login_reason(), Some(LoginReason::Unreachable));
}

#[test]
fn login_success_authenticates_after_failed_probe() {
    let mut s = SessionState::new();
    s.begin_probe().unwrap();
    s.probe_failed(LoginReason::Rejected).unwrap();
    s.login_succeeded().unwrap();
    assert!(s.is_authenticated());
    assert_eq!(s.login_reason(), None);
}

#[test]
fn login_success_is_rejected_when_not_pending() {
    let mut s = SessionState::new();
    assert_eq!(s.login_succeeded(), Err(SessionError::LoginNotPending));

    s.begin_probe().unwrap();
    assert_eq!(s.login_succeeded(), Err(SessionError::LoginNotPending));

    s.probe_succeeded().unwrap();
    assert_eq!(s.login_succeeded(), Err(SessionError::LoginNotPending));
    assert!(s.is_authenticated());
}

#[test]
fn authenticated_session_never_reverts() {
    let mut s = SessionState::new();
    s.begin_probe().unwrap();
    s.probe_succeeded().unwrap();
    assert!(s.probe_failed(LoginReason::Rejected).is_err());
    assert!(s.is_authenticated());
}
