#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

/// The single alert slot above the page content.
///
/// Showing an alert replaces whatever was there; there is no stacking and no
/// auto-dismiss.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertState {
    pub current: Option<Alert>,
}

impl AlertState {
    pub fn show(&mut self, alert: Alert) {
        self.current = Some(alert);
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

/// A dismissible banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub severity: AlertSeverity,
}

impl Alert {
    /// Alert with the default (error) styling.
    #[must_use]
    pub fn error(title: &str, message: &str) -> Self {
        Self { title: title.to_owned(), message: message.to_owned(), severity: AlertSeverity::Danger }
    }

    /// Alert for input the user can correct.
    #[must_use]
    pub fn warning(title: &str, message: &str) -> Self {
        Self { title: title.to_owned(), message: message.to_owned(), severity: AlertSeverity::Warning }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertSeverity {
    #[default]
    Danger,
    Warning,
}

impl AlertSeverity {
    /// Modifier class appended to `alert`.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Danger => "alert--danger",
            Self::Warning => "alert--warning",
        }
    }
}
