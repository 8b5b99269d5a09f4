//! Formatting utilities for terminal output

/// Format whole seconds as `MM:SS`
#[must_use]
pub fn format_clock(total_secs: u64) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining time as a bar of the given width
#[must_use]
pub fn time_bar(remaining_secs: u64, budget_secs: u64, width: usize) -> String {
    create_progress_bar(remaining_secs as f64, budget_secs as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_full_budget() {
        assert_eq!(format_clock(150), "02:30");
    }

    #[test]
    fn clock_pads_seconds() {
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(0), "00:00");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn time_bar_tracks_remaining() {
        assert_eq!(time_bar(75, 150, 6), "███░░░");
    }
}
