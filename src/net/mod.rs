//! Networking modules for the maintenance API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the wire schema shared with
//! the server.

pub mod api;
pub mod types;
