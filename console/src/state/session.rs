//! Authentication session for the running console.
//!
//! DESIGN
//! ======
//! The session only moves forward:
//! `Uninitialized -> PendingProbe -> (LoginRequired ->) Authenticated`.
//! There is no logout path, so `Authenticated` is terminal for the lifetime
//! of the page. Transitions that would skip or rewind a phase are rejected
//! instead of silently applied.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Why the login surface is being shown.
///
/// Control flow treats both the same; the reason only changes the hint the
/// login surface displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginReason {
    /// The identity endpoint answered with a non-success status.
    Rejected,
    /// The identity endpoint could not be reached at all.
    Unreachable,
}

/// Lifecycle phase of the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Uninitialized,
    /// The one-shot authentication probe is in flight.
    PendingProbe,
    /// The probe failed; waiting for the login flow to succeed.
    LoginRequired(LoginReason),
    Authenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("authentication probe was already issued")]
    ProbeAlreadyIssued,
    #[error("no authentication probe is in flight")]
    NoProbeInFlight,
    #[error("login is not pending")]
    LoginNotPending,
}

/// Single session instance shared by the gate, the menu and the registry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    phase: SessionPhase,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    /// Reason the login surface is required, if it is.
    #[must_use]
    pub fn login_reason(&self) -> Option<LoginReason> {
        match self.phase {
            SessionPhase::LoginRequired(reason) => Some(reason),
            _ => None,
        }
    }

    /// Mark the probe as issued. Only valid once, from `Uninitialized`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::ProbeAlreadyIssued`] on any later call.
    pub fn begin_probe(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Uninitialized {
            return Err(SessionError::ProbeAlreadyIssued);
        }
        self.phase = SessionPhase::PendingProbe;
        Ok(())
    }

    /// Record a successful probe.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoProbeInFlight`] unless the probe is pending.
    pub fn probe_succeeded(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::PendingProbe {
            return Err(SessionError::NoProbeInFlight);
        }
        self.phase = SessionPhase::Authenticated;
        Ok(())
    }

    /// Record a failed probe; the session now waits for the login flow.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoProbeInFlight`] unless the probe is pending.
    pub fn probe_failed(&mut self, reason: LoginReason) -> Result<(), SessionError> {
        if self.phase != SessionPhase::PendingProbe {
            return Err(SessionError::NoProbeInFlight);
        }
        self.phase = SessionPhase::LoginRequired(reason);
        Ok(())
    }

    /// Record a successful login.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::LoginNotPending`] unless a login is required.
    pub fn login_succeeded(&mut self) -> Result<(), SessionError> {
        if !matches!(self.phase, SessionPhase::LoginRequired(_)) {
            return Err(SessionError::LoginNotPending);
        }
        self.phase = SessionPhase::Authenticated;
        Ok(())
    }
}
