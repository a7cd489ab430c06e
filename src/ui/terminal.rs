//! Interactive terminal UI.

use super::non_interactive::NonInteractiveUI;
use super::spinner::ProgressSpinner;
use super::theme::ConvoyTheme;
use super::{OutputMode, SpinnerHandle, UserInterface};

/// Create the appropriate UI for the current environment.
pub fn create_ui(is_interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if is_interactive {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

/// UI implementation for interactive terminal sessions.
pub struct TerminalUI {
    mode: OutputMode,
    theme: ConvoyTheme,
}

impl TerminalUI {
    /// Create a new terminal UI with the given output mode.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: ConvoyTheme::new(),
        }
    }
}

impl UserInterface for TerminalUI {
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
            println!();
            println!("{}", self.theme.header.apply_to(title));
        }
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        if self.mode.shows_status() {
            println!(
                "{}",
                self.theme
                    .dim
                    .apply_to(format!("Step {} of {}", current, total))
            );
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(SilentSpinner)
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Spinner that renders nothing (quiet/silent modes).
struct SilentSpinner;

impl SpinnerHandle for SilentSpinner {
    fn set_message(&mut self, _msg: &str) {}
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_error(&mut self, _msg: &str) {}
}
