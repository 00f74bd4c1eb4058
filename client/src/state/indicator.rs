#[cfg(test)]
#[path = "indicator_test.rs"]
mod indicator_test;

/// Loading spinner plus its status line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndicatorState {
    pub visible: bool,
    pub message: String,
}

impl IndicatorState {
    pub fn show(&mut self, message: &str) {
        self.visible = true;
        message.clone_into(&mut self.message);
    }

    /// Replace the status line without changing visibility.
    pub fn set_message(&mut self, message: &str) {
        message.clone_into(&mut self.message);
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.message.clear();
    }
}
