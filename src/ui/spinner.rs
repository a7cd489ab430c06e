//! Terminal spinner built on indicatif.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::theme::ConvoyTheme;
use super::SpinnerHandle;

/// A spinner for long-running operations.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: ConvoyTheme,
}

impl ProgressSpinner {
    /// Create and start a spinner with the given message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar,
            theme: ConvoyTheme::new(),
        }
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.bar.finish_and_clear();
        println!("{}", self.theme.format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        self.bar.finish_and_clear();
        println!("{}", self.theme.format_error(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_message_can_be_updated() {
        let mut spinner = ProgressSpinner::new("starting");
        spinner.set_message("still going");
        spinner.finish_success("done");
    }
}
