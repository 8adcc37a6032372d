//! Table formatting helpers for terminal output.

/// Truncate a string to a maximum number of characters, marking the cut
/// with an ellipsis.
///
/// # Examples
///
/// ```
/// use wares_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("short", 10), "short");
/// assert_eq!(truncate_string("a very long item name", 10), "a very lo…");
/// ```
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Print a horizontal separator line of the given width.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}
