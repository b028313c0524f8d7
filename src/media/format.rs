use std::time::Duration;

/// Format a `Duration` as `MM:SS` using total minutes.
pub fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Format a `Duration` as `HH:MM:SS` using total hours.
pub fn format_hhmmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}
