//! Browser helpers shared by pages and components.

pub mod ui_persistence;
