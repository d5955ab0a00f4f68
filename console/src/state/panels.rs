//! Panel registry backing the center tab container.
//!
//! ARCHITECTURE
//! ============
//! Panels are addressed by a stable identity string. The registry owns every
//! attached panel; callers only ever hold identities, never panel handles, so
//! "is it open?" is a registry lookup instead of a DOM query.
//!
//! INVARIANTS
//! ==========
//! - At most one attached panel per identity.
//! - `active` is either `None` (no panels) or the identity of an attached panel.

#[cfg(test)]
#[path = "panels_test.rs"]
mod panels_test;

use crate::state::grid::{GridError, RestGridConfig};

/// Identity of the seeded welcome panel.
pub const WELCOME_PANEL_ID: &str = "welcome";
/// Identity of the groups grid panel opened from the main menu.
pub const GROUPS_PANEL_ID: &str = "t_group";

/// What a panel renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelKind {
    /// Host for static markup supplied outside the shell.
    Static,
    /// REST-backed grid; the config doubles as the panel's data source.
    RestGrid(RestGridConfig),
}

/// Declarative description of a panel to instantiate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelDescriptor {
    pub id: String,
    pub kind: PanelKind,
    pub title: String,
    pub closable: bool,
}

impl PanelDescriptor {
    /// The non-closable landing panel present from layout construction.
    #[must_use]
    pub fn welcome() -> Self {
        Self { id: WELCOME_PANEL_ID.to_owned(), kind: PanelKind::Static, title: "Welcome".to_owned(), closable: false }
    }

    /// The groups grid reachable from the "Groups" menu entry.
    #[must_use]
    pub fn groups(rest_url: &str) -> Self {
        Self {
            id: GROUPS_PANEL_ID.to_owned(),
            kind: PanelKind::RestGrid(RestGridConfig::groups(rest_url)),
            title: "Groups".to_owned(),
            closable: true,
        }
    }

    /// Reject descriptors that would attach a broken panel.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::EmptyIdentity`], [`PanelError::MalformedIdentity`],
    /// [`PanelError::EmptyTitle`] or [`PanelError::InvalidGrid`].
    pub fn validate(&self) -> Result<(), PanelError> {
        if self.id.trim().is_empty() {
            return Err(PanelError::EmptyIdentity);
        }
        // Identities double as DOM ids; `" t_group "` must not alias `t_group`.
        if self.id.chars().any(char::is_whitespace) {
            return Err(PanelError::MalformedIdentity(self.id.clone()));
        }
        if self.title.trim().is_empty() {
            return Err(PanelError::EmptyTitle(self.id.clone()));
        }
        if let PanelKind::RestGrid(grid) = &self.kind {
            grid.validate()
                .map_err(|source| PanelError::InvalidGrid { id: self.id.clone(), source })?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
    #[error("panel identity is empty")]
    EmptyIdentity,
    #[error("panel identity `{0}` contains whitespace")]
    MalformedIdentity(String),
    #[error("panel `{0}` has an empty title")]
    EmptyTitle(String),
    #[error("panel `{id}` has an invalid grid: {source}")]
    InvalidGrid { id: String, source: GridError },
    #[error("panel `{0}` is not attached")]
    NotFound(String),
    #[error("panel `{0}` cannot be closed")]
    NotClosable(String),
}

/// Result of [`PanelRegistry::ensure_panel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ensured {
    /// A new panel was instantiated and attached.
    Created,
    /// The panel already existed and was only focused.
    Focused,
}

/// A live panel instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Panel {
    descriptor: PanelDescriptor,
    /// Distinguishes instances of the same identity across close/reopen.
    instance: u64,
}

impl Panel {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.descriptor.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.descriptor.title
    }

    #[must_use]
    pub fn closable(&self) -> bool {
        self.descriptor.closable
    }

    #[must_use]
    pub fn kind(&self) -> &PanelKind {
        &self.descriptor.kind
    }

    #[must_use]
    pub fn instance(&self) -> u64 {
        self.instance
    }
}

/// Ordered set of attached panels plus the active one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PanelRegistry {
    panels: Vec<Panel>,
    active: Option<String>,
    next_instance: u64,
}

impl PanelRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the described panel unless one with its identity exists, then
    /// focus it either way.
    ///
    /// # Errors
    ///
    /// Returns the validation error of a malformed descriptor; nothing is
    /// attached or focused in that case.
    pub fn ensure_panel(&mut self, descriptor: PanelDescriptor) -> Result<Ensured, PanelError> {
        descriptor.validate()?;
        let outcome = if self.contains(&descriptor.id) {
            Ensured::Focused
        } else {
            self.next_instance += 1;
            log::debug!("attaching panel `{}`", descriptor.id);
            self.panels.push(Panel { descriptor: descriptor.clone(), instance: self.next_instance });
            Ensured::Created
        };
        self.active = Some(descriptor.id);
        Ok(outcome)
    }

    /// Focus an attached panel.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::NotFound`] if no panel has that identity.
    pub fn activate(&mut self, id: &str) -> Result<(), PanelError> {
        if !self.contains(id) {
            return Err(PanelError::NotFound(id.to_owned()));
        }
        self.active = Some(id.to_owned());
        Ok(())
    }

    /// Detach a closable panel. Closing the active panel focuses its left
    /// neighbour, or the new first panel when it was leftmost.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::NotFound`] or [`PanelError::NotClosable`].
    pub fn close(&mut self, id: &str) -> Result<(), PanelError> {
        let index = self.position(id).ok_or_else(|| PanelError::NotFound(id.to_owned()))?;
        if !self.panels[index].closable() {
            return Err(PanelError::NotClosable(id.to_owned()));
        }
        self.panels.remove(index);
        log::debug!("closed panel `{id}`");

        if self.active.as_deref() == Some(id) {
            self.active = self
                .panels
                .get(index.saturating_sub(1))
                .map(|p| p.id().to_owned());
        }
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    pub fn active(&self) -> Option<&Panel> {
        self.active_id().and_then(|id| self.get(id))
    }

    /// Panels in tab-bar order.
    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.panels.iter().position(|p| p.id() == id)
    }
}
