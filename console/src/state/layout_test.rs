use super::*;
use crate::state::panels::WELCOME_PANEL_ID;

// =============================================================
// Composition
// =============================================================

#[test]
fn new_layout_composes_fixed_regions() {
    let layout = RegionLayout::new();
    assert_eq!(layout.header.id, NORTH_PANEL_ID);
    assert_eq!(layout.header.height, 75);
    assert_eq!(layout.footer.id, SOUTH_PANEL_ID);
    assert_eq!(layout.footer.height, 16);
    assert_eq!(layout.navigation.id, WEST_PANEL_ID);
}

#[test]
fn new_layout_seeds_active_welcome_panel() {
    let layout = RegionLayout::new();
    assert_eq!(layout.center.len(), 1);
    assert_eq!(layout.center.active_id(), Some(WELCOME_PANEL_ID));
    assert!(!layout.center.active().unwrap().closable());
}

#[test]
fn navigation_has_navigation_and_settings_sections() {
    let layout = RegionLayout::new();
    let titles: Vec<_> = layout.navigation.sections().iter().map(|s| s.title).collect();
    assert_eq!(titles, vec!["Navigation", "Settings"]);
    assert_eq!(layout.navigation.expanded_section(), NAVIGATION_SECTION_ID);
}

#[test]
fn sections_host_static_content_elements() {
    let layout = RegionLayout::new();
    let hosts: Vec<_> = layout.navigation.sections().iter().map(|s| (s.id, s.content_el)).collect();
    assert_eq!(hosts, vec![(NAVIGATION_SECTION_ID, "west"), (SETTINGS_SECTION_ID, "settings")]);
}

// =============================================================
// Navigation region
// =============================================================

#[test]
fn width_is_clamped_to_split_range() {
    let mut layout = RegionLayout::new();
    layout.navigation.set_width(10);
    assert_eq!(layout.navigation.width(), NAV_MIN_WIDTH);
    layout.navigation.set_width(1000);
    assert_eq!(layout.navigation.width(), NAV_MAX_WIDTH);
    layout.navigation.set_width(250);
    assert_eq!(layout.navigation.width(), 250);
}

#[test]
fn accordion_expands_exactly_one_known_section() {
    let mut layout = RegionLayout::new();
    layout.navigation.expand_section(SETTINGS_SECTION_ID).unwrap();
    assert_eq!(layout.navigation.expanded_section(), SETTINGS_SECTION_ID);
    assert_eq!(
        layout.navigation.expand_section("bogus"),
        Err(LayoutError::UnknownSection("bogus".to_owned()))
    );
    assert_eq!(layout.navigation.expanded_section(), SETTINGS_SECTION_ID);
}

#[test]
fn toggle_collapsed_flips() {
    let mut layout = RegionLayout::new();
    assert!(!layout.navigation.collapsed());
    layout.navigation.toggle_collapsed();
    assert!(layout.navigation.collapsed());
}

// =============================================================
// State persistence
// =============================================================

#[test]
fn persist_then_restore_round_trips_navigation_state() {
    let mut store = MemoryStore::default();
    let mut layout = RegionLayout::new();
    layout.navigation.toggle_collapsed();
    layout.navigation.set_width(300);
    layout.navigation.expand_section(SETTINGS_SECTION_ID).unwrap();
    layout.persist(&mut store);

    let mut fresh = RegionLayout::new();
    fresh.restore(&store);
    assert_eq!(fresh.navigation.state(), layout.navigation.state());
}

#[test]
fn restore_without_stored_state_keeps_defaults() {
    let mut layout = RegionLayout::new();
    layout.restore(&MemoryStore::default());
    assert_eq!(layout.navigation.state(), &NavigationState::default());
}

#[test]
fn restore_sanitises_out_of_range_state() {
    let mut store = MemoryStore::default();
    store.save(
        WEST_PANEL_ID,
        serde_json::json!({"collapsed": true, "width": 9000, "expanded_section": "gone"}),
    );
    let mut layout = RegionLayout::new();
    layout.restore(&store);
    assert!(layout.navigation.collapsed());
    assert_eq!(layout.navigation.width(), NAV_MAX_WIDTH);
    assert_eq!(layout.navigation.expanded_section(), NAVIGATION_SECTION_ID);
}

#[test]
fn restore_ignores_unreadable_state() {
    let mut store = MemoryStore::default();
    store.save(WEST_PANEL_ID, serde_json::json!("not an object"));
    let mut layout = RegionLayout::new();
    layout.restore(&store);
    assert_eq!(layout.navigation.state(), &NavigationState::default());
}

#[test]
fn restore_never_touches_panels() {
    let mut store = MemoryStore::default();
    RegionLayout::new().persist(&mut store);
    let mut layout = RegionLayout::new();
    layout.restore(&store);
    assert_eq!(layout.center.len(), 1);
    assert_eq!(layout.center.active_id(), Some(WELCOME_PANEL_ID));
}
