//! Main navigation menu built once the session is authenticated.
//!
//! INVARIANTS
//! ==========
//! - Entries exist only after the session is authenticated.
//! - Building is idempotent: a second build leaves the entries untouched, so
//!   the direct-success and post-login paths can never duplicate navigation.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::state::panels::PanelDescriptor;
use crate::state::session::SessionState;

/// What activating a menu entry does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// Ensure the described panel exists and focus it.
    EnsurePanel(PanelDescriptor),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub action: MenuAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    #[error("navigation requires an authenticated session")]
    Unauthenticated,
    #[error("menu entry {0} does not exist")]
    UnknownEntry(usize),
}

/// Result of [`MainMenu::build`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuBuild {
    Built,
    AlreadyBuilt,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MainMenu {
    entries: Vec<MenuEntry>,
    built: bool,
}

impl MainMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the navigation entries for an authenticated session.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Unauthenticated`] if the session has not been
    /// established yet.
    pub fn build(&mut self, session: &SessionState, rest_url: &str) -> Result<MenuBuild, MenuError> {
        if !session.is_authenticated() {
            return Err(MenuError::Unauthenticated);
        }
        if self.built {
            log::warn!("main menu already built; ignoring repeated build");
            return Ok(MenuBuild::AlreadyBuilt);
        }
        self.entries = default_entries(rest_url);
        self.built = true;
        log::info!("main menu built with {} entries", self.entries.len());
        Ok(MenuBuild::Built)
    }

    #[must_use]
    pub fn is_built(&self) -> bool {
        self.built
    }

    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Action bound to the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::UnknownEntry`] for an out-of-range index.
    pub fn action(&self, index: usize) -> Result<&MenuAction, MenuError> {
        self.entries
            .get(index)
            .map(|e| &e.action)
            .ok_or(MenuError::UnknownEntry(index))
    }
}

fn default_entries(rest_url: &str) -> Vec<MenuEntry> {
    vec![MenuEntry {
        label: "Groups".to_owned(),
        action: MenuAction::EnsurePanel(PanelDescriptor::groups(rest_url)),
    }]
}
