//! ANSI escape sequences for cursor positioning and color transitions.
//!
//! Every emitter writes into any `fmt::Write` sink, so composition code can
//! append directly to the output string it is building. Emission never fails
//! for a valid value; the `fmt::Result` only propagates sink errors.
//!
//! Positioning takes 1-based coordinates matching the terminal convention.
//! No bounds checking happens here - callers clamp to their region first.

use std::fmt::{self, Write};

use crate::color::{Attr, Color};

/// Escape character.
pub const ESC: &str = "\x1b";

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

// =============================================================================
// Cursor Positioning
// =============================================================================

/// Move the cursor to an absolute position. Column and row are 1-based.
#[inline]
pub fn move_to<W: Write>(w: &mut W, column: u16, row: u16) -> fmt::Result {
    write!(w, "\x1b[{row};{column}H")
}

// =============================================================================
// Color Transitions
// =============================================================================

/// Switch the foreground color.
#[inline]
pub fn fg<W: Write>(w: &mut W, color: Color) -> fmt::Result {
    match color {
        Color::Default => w.write_str("\x1b[39m"),
        Color::Ansi(i) if i < 8 => write!(w, "\x1b[{}m", 30 + i),
        Color::Ansi(i) if i < 16 => write!(w, "\x1b[{}m", 90 + i - 8),
        Color::Ansi(i) => write!(w, "\x1b[38;5;{i}m"),
        Color::Rgb { r, g, b } => write!(w, "\x1b[38;2;{r};{g};{b}m"),
    }
}

/// Switch the background color.
#[inline]
pub fn bg<W: Write>(w: &mut W, color: Color) -> fmt::Result {
    match color {
        Color::Default => w.write_str("\x1b[49m"),
        Color::Ansi(i) if i < 8 => write!(w, "\x1b[{}m", 40 + i),
        Color::Ansi(i) if i < 16 => write!(w, "\x1b[{}m", 100 + i - 8),
        Color::Ansi(i) => write!(w, "\x1b[48;5;{i}m"),
        Color::Rgb { r, g, b } => write!(w, "\x1b[48;2;{r};{g};{b}m"),
    }
}

/// Reset all attributes and colors to the terminal defaults.
#[inline]
pub fn reset<W: Write>(w: &mut W) -> fmt::Result {
    w.write_str("\x1b[0m")
}

// =============================================================================
// Text Attributes
// =============================================================================

/// Apply text attributes as one combined SGR sequence.
///
/// Emits nothing for an empty set. Attributes accumulate in the terminal;
/// reverting them requires [`reset`] followed by re-applying colors.
pub fn attrs<W: Write>(w: &mut W, attr: Attr) -> fmt::Result {
    if attr.is_empty() {
        return Ok(());
    }

    let mut first = true;
    w.write_str(CSI)?;

    macro_rules! emit {
        ($flag:expr, $code:expr) => {
            if attr.contains($flag) {
                if !first {
                    w.write_char(';')?;
                }
                write!(w, "{}", $code)?;
                first = false;
            }
        };
    }

    emit!(Attr::BOLD, 1);
    emit!(Attr::DIM, 2);
    emit!(Attr::ITALIC, 3);
    emit!(Attr::UNDERLINE, 4);
    emit!(Attr::BLINK, 5);
    emit!(Attr::INVERSE, 7);
    emit!(Attr::HIDDEN, 8);
    emit!(Attr::STRIKETHROUGH, 9);

    w.write_char('m')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string<F: FnOnce(&mut String) -> fmt::Result>(f: F) -> String {
        let mut buf = String::new();
        f(&mut buf).unwrap();
        buf
    }

    #[test]
    fn move_to_is_one_based() {
        assert_eq!(to_string(|w| move_to(w, 1, 1)), "\x1b[1;1H");
        assert_eq!(to_string(|w| move_to(w, 6, 11)), "\x1b[11;6H");
    }

    #[test]
    fn fg_default() {
        assert_eq!(to_string(|w| fg(w, Color::Default)), "\x1b[39m");
    }

    #[test]
    fn fg_palette() {
        assert_eq!(to_string(|w| fg(w, Color::Ansi(0))), "\x1b[30m");
        assert_eq!(to_string(|w| fg(w, Color::Ansi(7))), "\x1b[37m");
        assert_eq!(to_string(|w| fg(w, Color::Ansi(8))), "\x1b[90m");
        assert_eq!(to_string(|w| fg(w, Color::Ansi(15))), "\x1b[97m");
        assert_eq!(to_string(|w| fg(w, Color::Ansi(196))), "\x1b[38;5;196m");
    }

    #[test]
    fn fg_truecolor() {
        assert_eq!(
            to_string(|w| fg(w, Color::rgb(255, 128, 64))),
            "\x1b[38;2;255;128;64m"
        );
    }

    #[test]
    fn bg_default() {
        assert_eq!(to_string(|w| bg(w, Color::Default)), "\x1b[49m");
    }

    #[test]
    fn bg_palette() {
        assert_eq!(to_string(|w| bg(w, Color::Ansi(1))), "\x1b[41m");
        assert_eq!(to_string(|w| bg(w, Color::Ansi(9))), "\x1b[101m");
        assert_eq!(to_string(|w| bg(w, Color::Ansi(200))), "\x1b[48;5;200m");
    }

    #[test]
    fn bg_truecolor() {
        assert_eq!(
            to_string(|w| bg(w, Color::rgb(0, 128, 255))),
            "\x1b[48;2;0;128;255m"
        );
    }

    #[test]
    fn attrs_single_and_combined() {
        assert_eq!(to_string(|w| attrs(w, Attr::BOLD)), "\x1b[1m");
        assert_eq!(
            to_string(|w| attrs(w, Attr::BOLD | Attr::UNDERLINE)),
            "\x1b[1;4m"
        );
        assert_eq!(to_string(|w| attrs(w, Attr::NONE)), "");
    }

    #[test]
    fn reset_sequence() {
        assert_eq!(to_string(reset), "\x1b[0m");
    }

    #[test]
    fn round_trip_restores_ambient() {
        // Switching away and back to a given pair must produce exactly the
        // ambient sequences again - nothing accumulates besides SGR codes.
        let mut out = String::new();
        fg(&mut out, Color::RED).unwrap();
        bg(&mut out, Color::Ansi(4)).unwrap();
        fg(&mut out, Color::Default).unwrap();
        bg(&mut out, Color::Default).unwrap();
        assert_eq!(out, "\x1b[31m\x1b[44m\x1b[39m\x1b[49m");
    }
}
