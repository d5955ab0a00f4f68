//! Networking: the session gate driver and REST calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gate` sequences the startup authentication check, `api` performs the
//! HTTP requests against the SCM server's REST interface.

pub mod api;
pub mod gate;
