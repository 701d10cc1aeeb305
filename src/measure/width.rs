//! Terminal cell width of characters, grapheme clusters, and strings.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use super::strip::strip_ansi;

/// Cell width of a single codepoint.
///
/// - `0` for control characters, combining marks, zero-width characters
/// - `1` for ordinary narrow characters
/// - `2` for wide characters (CJK ideographs, fullwidth forms) and emoji
#[inline]
pub fn char_width(c: char) -> usize {
    // Terminal emulators render these symbol/emoji ranges double-width even
    // where the East Asian Width tables say otherwise.
    match c as u32 {
        0x2600..=0x27BF => 2,
        0x1F300..=0x1F5FF => 2,
        0x1F600..=0x1F64F => 2,
        0x1F680..=0x1F6FF => 2,
        0x1F900..=0x1F9FF => 2,
        0x1FA70..=0x1FAFF => 2,
        _ => c.width().unwrap_or(0),
    }
}

/// Cell width of a grapheme cluster.
///
/// Multi-codepoint clusters collapse to the width a terminal actually paints:
/// ZWJ families, skin-tone variants, keycaps, and flag pairs take two cells;
/// a base character with combining marks takes the base character's width.
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };

    if grapheme.len() == first.len_utf8() {
        return char_width(first);
    }

    // Regional indicator pair - a flag.
    if (0x1F1E6..=0x1F1FF).contains(&(first as u32)) {
        return 2;
    }

    for c in chars {
        match c as u32 {
            0x200D => return 2,            // ZWJ sequence
            0xFE0F => return 2,            // VS16 emoji presentation
            0x1F3FB..=0x1F3FF => return 2, // skin tone modifier
            0x20E3 => return 2,            // enclosing keycap
            _ => {}
        }
    }

    first.width().unwrap_or(0)
}

/// Visible cell width of a string.
///
/// Escape sequences count zero cells; everything else is measured per
/// grapheme cluster. Pure-ASCII input takes a counting fast path with no
/// allocation.
pub fn string_width(s: &str) -> usize {
    if s.is_empty() {
        return 0;
    }

    if s.is_ascii() && !s.as_bytes().contains(&0x1B) {
        return s.bytes().filter(|&b| (0x20..0x7F).contains(&b)).count();
    }

    let stripped = strip_ansi(s);
    stripped.graphemes(true).map(grapheme_width).sum()
}
