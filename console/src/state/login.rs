//! State of the credential-entry surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form only exists while the session requires a login; `ShellState`
//! holds it as an `Option` so it is never built for a user who is already
//! authenticated.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::state::session::LoginReason;

pub const MISSING_CREDENTIALS: &str = "Enter both username and password.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    /// A login request is in flight.
    pub busy: bool,
    pub message: Option<String>,
    pub reason: LoginReason,
}

impl LoginForm {
    #[must_use]
    pub fn new(reason: LoginReason) -> Self {
        Self { username: String::new(), password: String::new(), busy: false, message: None, reason }
    }

    /// Hint shown above the form.
    #[must_use]
    pub fn hint(&self) -> &'static str {
        match self.reason {
            LoginReason::Rejected => "Please log in to continue.",
            LoginReason::Unreachable => "The server could not be reached. Check the connection and log in again.",
        }
    }

    /// Validate the current fields and mark the form busy.
    ///
    /// # Errors
    ///
    /// Returns the message to show when the form is incomplete or a request
    /// is already running.
    pub fn begin_submit(&mut self) -> Result<(String, String), &'static str> {
        if self.busy {
            return Err("Login already in progress.");
        }
        let credentials = validate_credentials(&self.username, &self.password).inspect_err(|msg| {
            self.message = Some((*msg).to_owned());
        })?;
        self.busy = true;
        self.message = Some("Logging in...".to_owned());
        Ok(credentials)
    }

    /// The login request failed; keep the surface open for another attempt.
    pub fn submit_failed(&mut self, error: &str) {
        self.busy = false;
        self.password.clear();
        self.message = Some(format!("Login failed: {error}"));
    }
}

/// Trim the username and require both fields. The password is kept verbatim.
///
/// # Errors
///
/// Returns [`MISSING_CREDENTIALS`] if either field is blank.
pub fn validate_credentials(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.trim().is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((username.to_owned(), password.to_owned()))
}
