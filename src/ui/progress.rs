//! Duration formatting helpers.

use std::time::Duration;

/// Format a duration for display (e.g., "1.2s", "2m 5s", "1h 3m").
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();

    if total_secs < 60 {
        let secs = duration.as_secs_f64();
        if secs < 10.0 {
            return format!("{:.1}s", secs);
        }
        return format!("{}s", total_secs);
    }

    let minutes = total_secs / 60;
    let secs = total_secs % 60;
    if minutes < 60 {
        return format!("{}m {}s", minutes, secs);
    }

    let hours = minutes / 60;
    let mins = minutes % 60;
    format!("{}h {}m", hours, mins)
}

/// Format a chrono duration, clamping negatives to zero.
pub fn format_chrono_duration(duration: chrono::Duration) -> String {
    let std = duration.to_std().unwrap_or(Duration::ZERO);
    format_duration(std)
}
