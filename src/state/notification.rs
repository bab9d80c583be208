/// A dismissible, optionally self-closing notification popup.
pub struct NotificationState {
    current: Option<(String, Option<u64>)>,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self { current: None }
    }
}

impl NotificationState {
    pub fn set(&mut self, message: impl Into<String>, close_tick: Option<u64>) {
        self.current = Some((message.into(), close_tick));
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_ref().map(|(msg, _)| msg.as_str())
    }

    pub fn should_close(&self, tick_count: u64) -> bool {
        matches!(self.current, Some((_, Some(close_tick))) if tick_count >= close_tick)
    }
}
