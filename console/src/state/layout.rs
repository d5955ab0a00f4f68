//! Fixed-region screen composition.
//!
//! ARCHITECTURE
//! ============
//! The layout is built exactly once, before the session gate runs:
//!
//! ```text
//! +---------------------------------------------+
//! | north: header (static)                      |
//! +------------+--------------------------------+
//! | west:      | center: tab container          |
//! | navigation |   (panel registry)             |
//! | accordion  |                                |
//! +------------+--------------------------------+
//! | south: footer (static)                      |
//! +---------------------------------------------+
//! ```
//!
//! Only the navigation region has user-adjustable state (collapsed, width,
//! expanded section). That state is handed to a [`StateStore`] keyed by the
//! region's stable identity; the store decides the storage format.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::state::panels::{PanelDescriptor, PanelRegistry};

pub const NORTH_PANEL_ID: &str = "north-panel";
pub const WEST_PANEL_ID: &str = "west-panel";
pub const SOUTH_PANEL_ID: &str = "south-panel";

pub const NAVIGATION_SECTION_ID: &str = "navigation";
pub const SETTINGS_SECTION_ID: &str = "settings";

pub const NAV_DEFAULT_WIDTH: u32 = 200;
pub const NAV_MIN_WIDTH: u32 = 175;
pub const NAV_MAX_WIDTH: u32 = 400;

/// Keyed storage for component state that should survive reloads.
pub trait StateStore {
    fn load(&self, key: &str) -> Option<serde_json::Value>;
    fn save(&mut self, key: &str, value: serde_json::Value);
}

/// In-memory store used during server rendering and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, serde_json::Value>,
}

impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> Option<serde_json::Value> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: serde_json::Value) {
        self.values.insert(key.to_owned(), value);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("navigation section `{0}` does not exist")]
    UnknownSection(String),
}

/// Header or footer: a host for markup supplied by the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaticRegion {
    pub id: &'static str,
    /// Identity of the element whose content the region hosts.
    pub content_el: &'static str,
    pub height: u32,
}

/// One accordion section of the navigation region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub id: &'static str,
    pub title: &'static str,
    pub icon_cls: &'static str,
    /// Identity of the element whose content the section hosts.
    pub content_el: &'static str,
}

static NAV_SECTIONS: [NavSection; 2] = [
    NavSection { id: NAVIGATION_SECTION_ID, title: "Navigation", icon_cls: "nav", content_el: "west" },
    NavSection { id: SETTINGS_SECTION_ID, title: "Settings", icon_cls: "settings", content_el: "settings" },
];

/// Persisted part of the navigation region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub collapsed: bool,
    pub width: u32,
    pub expanded_section: String,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self { collapsed: false, width: NAV_DEFAULT_WIDTH, expanded_section: NAVIGATION_SECTION_ID.to_owned() }
    }
}

/// Collapsible, resizable accordion on the west side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRegion {
    pub id: &'static str,
    pub title: &'static str,
    state: NavigationState,
}

impl NavigationRegion {
    fn new() -> Self {
        Self { id: WEST_PANEL_ID, title: "West", state: NavigationState::default() }
    }

    #[must_use]
    pub fn sections(&self) -> &'static [NavSection] {
        &NAV_SECTIONS
    }

    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    #[must_use]
    pub fn collapsed(&self) -> bool {
        self.state.collapsed
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.state.width
    }

    #[must_use]
    pub fn expanded_section(&self) -> &str {
        &self.state.expanded_section
    }

    pub fn toggle_collapsed(&mut self) {
        self.state.collapsed = !self.state.collapsed;
    }

    /// Resize via the split bar; the width is clamped to the allowed range.
    pub fn set_width(&mut self, width: u32) {
        self.state.width = width.clamp(NAV_MIN_WIDTH, NAV_MAX_WIDTH);
    }

    /// Expand one accordion section, collapsing the others.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownSection`] for an unknown identity.
    pub fn expand_section(&mut self, id: &str) -> Result<(), LayoutError> {
        if !NAV_SECTIONS.iter().any(|s| s.id == id) {
            return Err(LayoutError::UnknownSection(id.to_owned()));
        }
        id.clone_into(&mut self.state.expanded_section);
        Ok(())
    }

    /// Apply stored state, sanitising anything out of range.
    fn restore(&mut self, stored: NavigationState) {
        self.state.collapsed = stored.collapsed;
        self.set_width(stored.width);
        if self.expand_section(&stored.expanded_section).is_err() {
            log::warn!("ignoring stored unknown navigation section `{}`", stored.expanded_section);
        }
    }
}

/// The full-viewport composition of all regions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionLayout {
    pub header: StaticRegion,
    pub navigation: NavigationRegion,
    pub footer: StaticRegion,
    /// Tab container; owned exclusively by the layout.
    pub center: PanelRegistry,
}

impl Default for RegionLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionLayout {
    /// Compose every region and seed the center with the welcome panel.
    #[must_use]
    pub fn new() -> Self {
        let mut center = PanelRegistry::new();
        if let Err(e) = center.ensure_panel(PanelDescriptor::welcome()) {
            log::error!("welcome panel rejected: {e}");
        }
        Self {
            header: StaticRegion { id: NORTH_PANEL_ID, content_el: "north", height: 75 },
            navigation: NavigationRegion::new(),
            footer: StaticRegion { id: SOUTH_PANEL_ID, content_el: "south", height: 16 },
            center,
        }
    }

    /// Restore the navigation region from `store`. Missing or unreadable
    /// state leaves the defaults in place.
    pub fn restore(&mut self, store: &dyn StateStore) {
        let Some(raw) = store.load(self.navigation.id) else {
            return;
        };
        match serde_json::from_value::<NavigationState>(raw) {
            Ok(stored) => self.navigation.restore(stored),
            Err(e) => log::warn!("discarding unreadable `{}` state: {e}", self.navigation.id),
        }
    }

    /// Hand the navigation region's state to `store`.
    pub fn persist(&self, store: &mut dyn StateStore) {
        match serde_json::to_value(self.navigation.state()) {
            Ok(value) => store.save(self.navigation.id, value),
            Err(e) => log::warn!("could not serialise `{}` state: {e}", self.navigation.id),
        }
    }
}
