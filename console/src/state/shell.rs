//! Console shell state: layout, session, menu and login surface together.
//!
//! DESIGN
//! ======
//! One `ShellState` lives in an `RwSignal` provided as context. The session
//! gate never mutates it directly; it emits [`GateEvent`]s that
//! [`ShellState::apply`] folds in. Both completion paths (probe success and
//! post-login) therefore converge through the same code to the same end
//! state: authenticated session, one built menu, no login surface.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use crate::config::ConsoleSettings;
use crate::net::gate::GateEvent;
use crate::state::layout::RegionLayout;
use crate::state::login::LoginForm;
use crate::state::menu::{MainMenu, MenuAction, MenuError};
use crate::state::panels::{Ensured, PanelError};
use crate::state::session::{SessionError, SessionState};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Menu(#[from] MenuError),
    #[error(transparent)]
    Panel(#[from] PanelError),
}

#[derive(Clone, Debug)]
pub struct ShellState {
    pub settings: ConsoleSettings,
    pub layout: RegionLayout,
    pub session: SessionState,
    pub menu: MainMenu,
    /// Credential-entry surface; `None` until a login is actually required.
    pub login: Option<LoginForm>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(ConsoleSettings::default())
    }
}

impl ShellState {
    /// Compose the layout. The session gate has not run yet.
    #[must_use]
    pub fn new(settings: ConsoleSettings) -> Self {
        Self {
            settings,
            layout: RegionLayout::new(),
            session: SessionState::new(),
            menu: MainMenu::new(),
            login: None,
        }
    }

    /// Fold one session gate event into the shell.
    ///
    /// # Errors
    ///
    /// Returns a [`ShellError`] for events that arrive out of order; the
    /// state is left as it was before the rejected step.
    pub fn apply(&mut self, event: GateEvent) -> Result<(), ShellError> {
        match event {
            GateEvent::ProbeStarted => self.session.begin_probe()?,
            GateEvent::ProbeSucceeded => {
                self.session.probe_succeeded()?;
                self.menu.build(&self.session, &self.settings.rest_url)?;
            }
            GateEvent::LoginRequired(reason) => {
                self.session.probe_failed(reason)?;
                self.login = Some(LoginForm::new(reason));
            }
            GateEvent::LoginSucceeded => {
                self.session.login_succeeded()?;
                self.login = None;
                self.menu.build(&self.session, &self.settings.rest_url)?;
            }
            GateEvent::LoginAbandoned => {
                self.login = None;
            }
        }
        Ok(())
    }

    /// Navigation entries exist and can be activated.
    #[must_use]
    pub fn navigation_available(&self) -> bool {
        self.session.is_authenticated() && self.menu.is_built()
    }

    #[must_use]
    pub fn login_visible(&self) -> bool {
        self.login.is_some()
    }

    /// Run the action bound to the menu entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Unauthenticated`] before the session is live,
    /// [`MenuError::UnknownEntry`] for a bad index, or the registry's
    /// [`PanelError`].
    pub fn activate_menu_entry(&mut self, index: usize) -> Result<Ensured, ShellError> {
        if !self.session.is_authenticated() {
            return Err(MenuError::Unauthenticated.into());
        }
        let MenuAction::EnsurePanel(descriptor) = self.menu.action(index)?.clone();
        let outcome = self.layout.center.ensure_panel(descriptor)?;
        Ok(outcome)
    }
}
