//! Grapheme-safe truncation to a cell budget.

use unicode_segmentation::UnicodeSegmentation;

use super::width::{grapheme_width, string_width};

/// Truncate `text` to a prefix of at most `max_cells` visible cells.
///
/// Never splits a grapheme cluster: when the next cluster would cross the
/// budget (a wide character straddling the boundary included), truncation
/// backs off to the previous cluster boundary. Idempotent - truncating an
/// already-fitting string returns it unchanged.
///
/// A budget of zero is treated as "no budget" and returns the input
/// unmodified.
pub fn truncate(text: &str, max_cells: usize) -> String {
    if max_cells == 0 || string_width(text) <= max_cells {
        return text.to_string();
    }
    prefix_within(text, max_cells)
}

/// Truncate with a suffix (`…` or `...`) marking the cut.
///
/// The suffix's own width counts against the budget. When even the suffix
/// does not fit, the suffix itself is cut to the budget; a zero budget yields
/// the empty string.
pub fn truncate_suffixed(text: &str, max_cells: usize, suffix: &str) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if string_width(text) <= max_cells {
        return text.to_string();
    }

    let suffix_width = string_width(suffix);
    if suffix_width >= max_cells {
        return prefix_within(suffix, max_cells);
    }

    let mut result = prefix_within(text, max_cells - suffix_width);
    result.push_str(suffix);
    result
}

/// Longest prefix of `text` whose cell width does not exceed `max_cells`,
/// cut at a grapheme boundary.
fn prefix_within(text: &str, max_cells: usize) -> String {
    let mut result = String::with_capacity(text.len().min(max_cells.saturating_mul(4)));
    let mut used = 0;

    for grapheme in text.graphemes(true) {
        let gw = grapheme_width(grapheme);
        if used + gw > max_cells {
            break;
        }
        result.push_str(grapheme);
        used += gw;
    }

    result
}
