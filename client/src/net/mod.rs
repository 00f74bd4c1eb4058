//! Networking modules for the assistant's HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls and `types` defines the shared wire schema
//! that the host server forwards unchanged.

pub mod api;
pub mod types;
