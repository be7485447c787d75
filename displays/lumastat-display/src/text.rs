//! Row text helpers

use heapless::String;

/// Longest row the layout ever builds, in bytes
pub const LINE_CAPACITY: usize = 48;

/// Appended to text cut short to fit a row
pub const CONTINUATION_MARKER: char = '~';

/// Fit `text` into `budget` characters
///
/// Text that fits is copied unchanged. Longer text keeps its first
/// `budget - 1` characters and ends in [`CONTINUATION_MARKER`], so the
/// result is exactly `budget` characters long. The budget is clamped to what
/// a row buffer can hold.
pub fn truncate(text: &str, budget: u8) -> String<LINE_CAPACITY> {
    let mut out = String::new();
    let budget = (budget as usize).max(1);

    if text.chars().count() <= budget && text.len() <= LINE_CAPACITY {
        // Cannot fail: length checked above
        let _ = out.push_str(text);
        return out;
    }

    let marker_len = CONTINUATION_MARKER.len_utf8();
    for ch in text.chars().take(budget - 1) {
        if out.len() + ch.len_utf8() + marker_len > LINE_CAPACITY {
            break;
        }
        let _ = out.push(ch);
    }
    let _ = out.push(CONTINUATION_MARKER);
    out
}
