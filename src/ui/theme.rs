//! Visual theme and styling.

use console::Style;

use crate::engine::StepStatus;

/// Convoy's visual theme.
#[derive(Debug, Clone)]
pub struct ConvoyTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational/running elements (cyan).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for durations and timestamps (dim).
    pub duration: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
}

impl Default for ConvoyTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ConvoyTheme {
    /// Create the default Convoy theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            duration: Style::new().dim(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            duration: Style::new(),
            key: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Style for a step status cell.
    pub fn status_style(&self, status: StepStatus) -> &Style {
        match status {
            StepStatus::Pending | StepStatus::Skipped => &self.dim,
            StepStatus::Running => &self.info,
            StepStatus::Completed => &self.success,
            StepStatus::Failed => &self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_success_includes_icon_and_text() {
        let theme = ConvoyTheme::plain();
        assert_eq!(theme.format_success("done"), "✓ done");
    }

    #[test]
    fn format_error_includes_icon_and_text() {
        let theme = ConvoyTheme::plain();
        assert_eq!(theme.format_error("broke"), "✗ broke");
    }

    #[test]
    fn status_styles_cover_all_variants() {
        let theme = ConvoyTheme::new();
        // Just verify lookup works for every status.
        for status in [
            StepStatus::Pending,
            StepStatus::Running,
            StepStatus::Completed,
            StepStatus::Failed,
            StepStatus::Skipped,
        ] {
            let _ = theme.status_style(status);
        }
    }
}
