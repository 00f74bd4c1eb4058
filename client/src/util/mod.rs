//! Utility modules shared across components.

pub mod markdown;
