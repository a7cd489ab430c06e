//! Non-interactive UI for CI and headless environments.
//!
//! Renders plain lines without spinners or cursor movement, so output stays
//! readable in log collectors.

use super::theme::ConvoyTheme;
use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive sessions.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: ConvoyTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI with the given output mode.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: ConvoyTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("=== {} ===", title);
        }
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        if self.mode.shows_status() {
            println!("Step {} of {}", current, total);
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_status() {
            println!("... {}", message);
        }
        Box::new(LineSpinner {
            quiet: !self.mode.shows_status(),
        })
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner stand-in that prints one line per state change.
struct LineSpinner {
    quiet: bool,
}

impl SpinnerHandle for LineSpinner {
    fn set_message(&mut self, msg: &str) {
        if !self.quiet {
            println!("... {}", msg);
        }
    }

    fn finish_success(&mut self, msg: &str) {
        if !self.quiet {
            println!("✓ {}", msg);
        }
    }

    fn finish_error(&mut self, msg: &str) {
        if !self.quiet {
            println!("✗ {}", msg);
        }
    }
}
