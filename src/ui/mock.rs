//! Recording UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use convoy::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Starting workflow");
//! ui.success("Done!");
//!
//! assert!(ui.has_message("Starting workflow"));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use std::sync::{Arc, Mutex};

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Recording UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    progress: Vec<(usize, usize)>,
    spinner_log: Arc<Mutex<Vec<String>>>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured progress updates.
    pub fn progress(&self) -> &[(usize, usize)] {
        &self.progress
    }

    /// Get spinner events ("start:", "success:", "error:" prefixed).
    pub fn spinner_events(&self) -> Vec<String> {
        self.spinner_log.lock().unwrap().clone()
    }

    /// Check if a specific message was shown (substring match).
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown (substring match).
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        self.progress.push((current, total));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinner_log
            .lock()
            .unwrap()
            .push(format!("start:{}", message));
        Box::new(RecordedSpinner {
            log: Arc::clone(&self.spinner_log),
        })
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Spinner handle that records its lifecycle into the owning MockUI.
pub struct RecordedSpinner {
    log: Arc<Mutex<Vec<String>>>,
}

impl SpinnerHandle for RecordedSpinner {
    fn set_message(&mut self, msg: &str) {
        self.log.lock().unwrap().push(format!("message:{}", msg));
    }

    fn finish_success(&mut self, msg: &str) {
        self.log.lock().unwrap().push(format!("success:{}", msg));
    }

    fn finish_error(&mut self, msg: &str) {
        self.log.lock().unwrap().push(format!("error:{}", msg));
    }
}
