//! Route-level page components.

pub mod chat;
pub mod connect;
