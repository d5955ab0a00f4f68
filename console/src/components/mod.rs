//! Region and panel components.

pub mod footer;
pub mod header;
pub mod login_window;
pub mod navigation;
pub mod rest_grid;
pub mod tab_panel;
