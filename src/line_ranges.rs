//! Compact notation for uncovered line numbers
//!
//! Turns `[14, 11, 13]` into `"11,13-14"` and cuts the result to a column
//! budget when the terminal is too narrow.

/// Format line numbers as comma-separated runs.
///
/// # Arguments
/// * `lines` - Line numbers in any order; duplicates collapse
/// * `max_width` - Maximum output length in characters (0 = unlimited)
pub fn format_line_ranges(lines: &[u32], max_width: usize) -> String {
    if lines.is_empty() {
        return String::new();
    }

    let mut sorted = lines.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut ranges = Vec::new();
    let mut start = sorted[0];
    let mut end = start;

    for &line in &sorted[1..] {
        if line == end + 1 {
            end = line;
        } else {
            ranges.push(format_run(start, end));
            start = line;
            end = line;
        }
    }
    ranges.push(format_run(start, end));

    truncate_ranges(ranges.join(","), max_width)
}

fn format_run(start: u32, end: u32) -> String {
    if start == end { start.to_string() } else { format!("{}-{}", start, end) }
}

/// Hard cut to `max_width` characters with a trailing "...".
///
/// The cut ignores range boundaries, so the last visible number may be partial.
fn truncate_ranges(text: String, max_width: usize) -> String {
    if max_width == 0 || text.len() <= max_width {
        return text;
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    // Range text is ASCII, byte slicing is safe
    let mut cut = text[..max_width - 3].to_string();
    cut.push_str("...");
    cut
}
