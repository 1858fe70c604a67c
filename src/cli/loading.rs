//! Loading indicator for in-flight requests

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a request is in flight.
///
/// The spinner is cleared when the guard is dropped, whatever the outcome of
/// the request. Nothing is drawn when stderr is not a terminal.
pub struct Loading {
    bar: ProgressBar,
}

impl Loading {
    /// Start a spinner with the given message
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }
}

impl Drop for Loading {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
