//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Plain data models with their own transition rules. None of them touch the
//! DOM or the network, so every rule is unit-testable natively; components
//! hold them in `RwSignal`s and `net` feeds them results.

pub mod grid;
pub mod layout;
pub mod login;
pub mod menu;
pub mod panels;
pub mod session;
pub mod shell;
