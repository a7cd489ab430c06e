//! Console user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait so command code never touches global console
//!   state directly (headless and test execution use a recording UI)
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - Spinners, tables, and duration formatting
//!
//! # Example
//!
//! ```
//! use convoy::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Release pipeline");
//! ui.success("Workflow completed");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod progress;
pub mod spinner;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::{MockUI, RecordedSpinner};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use progress::{format_chrono_duration, format_duration};
pub use spinner::ProgressSpinner;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::ConvoyTheme;

/// Trait for user interface interactions.
///
/// This trait allows recording the UI in tests and swapping rendering
/// strategies between interactive and headless runs.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show progress (e.g., "Step 3 of 7").
    fn show_progress(&mut self, current: usize, total: usize);

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}
