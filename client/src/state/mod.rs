//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page region (`indicator`, `alert`, `transcript`, etc.)
//! so each component depends on one small model and the controller can be
//! handed exactly the regions it writes to.

pub mod alert;
pub mod connection;
pub mod indicator;
pub mod panes;
pub mod transcript;
