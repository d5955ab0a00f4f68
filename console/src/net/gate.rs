//! Session gate: the one-shot startup authentication check.
//!
//! ARCHITECTURE
//! ============
//! The gate is a small async driver over two collaborators:
//!
//! - [`AuthProbe`] issues the single authentication round trip.
//! - [`LoginFlow`] resolves once the user has logged in (or gave up).
//!
//! It reports progress as [`GateEvent`]s through a callback instead of
//! touching UI state directly; `ShellState::apply` turns those events into
//! session, menu and login-surface changes. Each event is emitted in the same
//! task turn that delivered the result, so the menu is built synchronously
//! with the success it depends on.
//!
//! TRADE-OFFS
//! ==========
//! Transport failures and rejections take the same path (login required).
//! Only the [`LoginReason`] carried by the event tells them apart. The probe
//! is never retried; the login flow is the only way forward.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use std::cell::RefCell;

use futures::channel::oneshot;

use crate::state::session::LoginReason;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    #[error("identity endpoint unreachable: {0}")]
    Transport(String),
    #[error("identity endpoint rejected the session: status {status}")]
    Rejected { status: u16 },
}

impl ProbeError {
    #[must_use]
    pub fn login_reason(&self) -> LoginReason {
        match self {
            Self::Transport(_) => LoginReason::Unreachable,
            Self::Rejected { .. } => LoginReason::Rejected,
        }
    }
}

/// Issues the authentication round trip.
#[async_trait::async_trait(?Send)]
pub trait AuthProbe {
    /// # Errors
    ///
    /// Returns a [`ProbeError`] when the session is not authenticated or the
    /// endpoint cannot be reached.
    async fn probe(&self) -> Result<(), ProbeError>;
}

/// How a login interaction ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Succeeded,
    /// The login surface went away without a successful login.
    Abandoned,
}

/// Resolves once the credential-entry surface reports a successful login.
#[async_trait::async_trait(?Send)]
pub trait LoginFlow {
    async fn await_login(&self) -> LoginOutcome;
}

/// Progress reported by [`run_session_gate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateEvent {
    ProbeStarted,
    ProbeSucceeded,
    /// The probe failed; the login surface should be constructed now.
    LoginRequired(LoginReason),
    LoginSucceeded,
    LoginAbandoned,
}

/// Final state of the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// The initial probe succeeded.
    Authenticated,
    /// The probe failed and the user logged in afterwards.
    LoggedIn,
    /// The probe failed and the login surface was torn down.
    Abandoned,
}

/// Run the gate to completion, reporting every step through `emit`.
pub async fn run_session_gate<P, L, F>(probe: &P, login: &L, mut emit: F) -> GateOutcome
where
    P: AuthProbe + ?Sized,
    L: LoginFlow + ?Sized,
    F: FnMut(GateEvent),
{
    emit(GateEvent::ProbeStarted);
    match probe.probe().await {
        Ok(()) => {
            log::info!("authentication probe succeeded");
            emit(GateEvent::ProbeSucceeded);
            GateOutcome::Authenticated
        }
        Err(e) => {
            log::info!("authentication probe failed, login required: {e}");
            emit(GateEvent::LoginRequired(e.login_reason()));
            match login.await_login().await {
                LoginOutcome::Succeeded => {
                    log::info!("login succeeded");
                    emit(GateEvent::LoginSucceeded);
                    GateOutcome::LoggedIn
                }
                LoginOutcome::Abandoned => {
                    log::warn!("login abandoned; navigation stays unavailable");
                    emit(GateEvent::LoginAbandoned);
                    GateOutcome::Abandoned
                }
            }
        }
    }
}

/// Create the single-fire login continuation.
///
/// The trigger is handed to the login surface; the signal is awaited by the
/// gate. Dropping the trigger without firing resolves the signal as
/// [`LoginOutcome::Abandoned`].
#[must_use]
pub fn login_channel() -> (LoginTrigger, LoginSignal) {
    let (tx, rx) = oneshot::channel();
    (LoginTrigger(tx), LoginSignal { rx: RefCell::new(Some(rx)) })
}

/// Fires the login success event exactly once.
#[derive(Debug)]
pub struct LoginTrigger(oneshot::Sender<()>);

impl LoginTrigger {
    /// Notify the gate. Returns `false` if nobody is waiting any more.
    pub fn fire(self) -> bool {
        self.0.send(()).is_ok()
    }
}

/// Receiving half of [`login_channel`].
#[derive(Debug)]
pub struct LoginSignal {
    rx: RefCell<Option<oneshot::Receiver<()>>>,
}

#[async_trait::async_trait(?Send)]
impl LoginFlow for LoginSignal {
    async fn await_login(&self) -> LoginOutcome {
        let Some(rx) = self.rx.borrow_mut().take() else {
            return LoginOutcome::Abandoned;
        };
        match rx.await {
            Ok(()) => LoginOutcome::Succeeded,
            Err(oneshot::Canceled) => LoginOutcome::Abandoned,
        }
    }
}
