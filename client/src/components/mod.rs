//! Reusable UI components for the assistant pages.
//!
//! Each component renders one page region from its reactive state; the ones
//! that accept user input take the page's [`ControllerHandle`].
//!
//! [`ControllerHandle`]: crate::controller::browser::ControllerHandle

pub mod alert_banner;
pub mod chat_window;
pub mod connect_forms;
pub mod database_nav;
pub mod loading_indicator;
pub mod logs_pane;
pub mod results_pane;
