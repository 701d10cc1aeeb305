//! Line splitting for wrapped text settings.
//!
//! Two modes: character-break (any grapheme boundary) and word-break (UAX #29
//! word boundaries, falling back to grapheme-break for oversized words).
//! Explicit `\n` in the input is always a hard break.

use unicode_segmentation::UnicodeSegmentation;

use super::width::grapheme_width;

/// Wrap by breaking at any grapheme boundary.
///
/// Returns an empty `Vec` for empty input. A zero width disables wrapping.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        let mut current = String::new();
        let mut used = 0;

        for grapheme in raw_line.graphemes(true) {
            let gw = grapheme_width(grapheme);
            if used + gw > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                used = 0;
            }
            current.push_str(grapheme);
            used += gw;
        }

        lines.push(current);
    }

    lines
}

/// Wrap by breaking at word boundaries.
///
/// Words wider than the budget are force-broken by grapheme. Whitespace at a
/// wrap point is dropped rather than carried onto the next line.
pub fn wrap_text_word(text: &str, max_width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        let mut current = String::new();
        let mut used = 0;

        for word in raw_line.split_word_bounds() {
            let word_width: usize = word.graphemes(true).map(grapheme_width).sum();

            if used + word_width > max_width {
                if used > 0 {
                    lines.push(current.trim_end().to_string());
                    current = String::new();
                    used = 0;
                }

                if word_width > max_width {
                    // Oversized word: spill across lines at grapheme bounds.
                    for grapheme in word.graphemes(true) {
                        let gw = grapheme_width(grapheme);
                        if used + gw > max_width && !current.is_empty() {
                            lines.push(std::mem::take(&mut current));
                            used = 0;
                        }
                        current.push_str(grapheme);
                        used += gw;
                    }
                    continue;
                }

                if word.chars().all(char::is_whitespace) {
                    continue;
                }
            }

            current.push_str(word);
            used += word_width;
        }

        lines.push(current);
    }

    lines
}
