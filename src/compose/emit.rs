//! Escape-string emission with state tracking.
//!
//! The [`Emitter`] is the composer's transition core. It tracks the color and
//! attribute state the output string leaves the terminal in, and emits
//! transitions only on change. Composing a grid through it yields the
//! run-coalescing guarantees: one cursor move per row, one color switch per
//! contiguous same-style run, one revert to ambient at the very end.

use crate::ansi;
use crate::color::{Ambient, Attr, Color};

use super::grid::{CONTINUATION, FrameChars, Grid};
use super::Region;

// =============================================================================
// Emitter
// =============================================================================

/// Accumulates escape fragments while deduplicating state transitions.
///
/// Created in the ambient state; [`finish`](Emitter::finish) reverts to it,
/// so the terminal is left exactly as found regardless of what was emitted
/// in between. A plain emitter (`use_color = false`) drops every color and
/// attribute transition while keeping text and positioning.
#[derive(Debug)]
pub struct Emitter {
    out: String,
    ambient: Ambient,
    fg: Color,
    bg: Color,
    attrs: Attr,
    use_color: bool,
}

impl Emitter {
    pub fn new(ambient: Ambient) -> Self {
        Self {
            out: String::new(),
            ambient,
            fg: ambient.fg,
            bg: ambient.bg,
            attrs: Attr::NONE,
            use_color: true,
        }
    }

    /// An emitter that suppresses all color and attribute output.
    pub fn plain(ambient: Ambient) -> Self {
        Self {
            use_color: false,
            ..Self::new(ambient)
        }
    }

    /// Move the cursor to 0-based terminal cell coordinates.
    pub fn move_to(&mut self, x: u16, y: u16) {
        ansi::move_to(&mut self.out, x + 1, y + 1).ok();
    }

    /// Switch to a style, emitting only what differs from the current state.
    ///
    /// `Color::Default` resolves to the ambient pair - the ambient IS the
    /// baseline everything composes against. Attribute changes force a full
    /// reset first (SGR attributes only accumulate), after which colors are
    /// re-established as needed.
    pub fn set_style(&mut self, fg: Color, bg: Color, attrs: Attr) {
        if !self.use_color {
            return;
        }

        let fg = if fg == Color::Default {
            self.ambient.fg
        } else {
            fg
        };
        let bg = if bg == Color::Default {
            self.ambient.bg
        } else {
            bg
        };

        if attrs != self.attrs {
            // Clearing active attributes needs a full reset, which also
            // drops colors back to the terminal defaults.
            if !self.attrs.is_empty() {
                ansi::reset(&mut self.out).ok();
                self.fg = Color::Default;
                self.bg = Color::Default;
            }
            if !attrs.is_empty() {
                ansi::attrs(&mut self.out, attrs).ok();
            }
            self.attrs = attrs;
        }

        if fg != self.fg {
            ansi::fg(&mut self.out, fg).ok();
            self.fg = fg;
        }
        if bg != self.bg {
            ansi::bg(&mut self.out, bg).ok();
            self.bg = bg;
        }
    }

    /// Append literal text in the current style.
    pub fn text(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Append one character in the current style.
    pub fn ch(&mut self, c: char) {
        self.out.push(c);
    }

    /// Append a newline (flow composition row break).
    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Revert to the ambient pair and return the composed string.
    ///
    /// Nothing is emitted when the state already matches ambient, so a
    /// render that never switched colors adds no trailing sequences.
    pub fn finish(mut self) -> String {
        if self.use_color {
            let ambient = self.ambient;
            self.set_style(ambient.fg, ambient.bg, Attr::NONE);
        }
        self.out
    }
}

// =============================================================================
// Grid composition
// =============================================================================

/// Emit a grid's rows through an emitter.
///
/// With a region, each row starts with one cursor move to the row's origin
/// inside the region (absolute mode). Without one, rows are joined by
/// newlines and trailing untouched cells are dropped (flow mode).
/// Continuation cells of wide characters are skipped so each wide glyph is
/// written exactly once.
pub fn emit_grid(em: &mut Emitter, grid: &Grid, region: Option<Region>) {
    let height = match region {
        Some(r) => grid.height().min(r.height),
        None => grid.height(),
    };
    let width = match region {
        Some(r) => grid.width().min(r.width),
        None => grid.width(),
    };

    for y in 0..height {
        match region {
            Some(r) => em.move_to(r.left, r.top + y),
            None => {
                if y > 0 {
                    em.newline();
                }
            }
        }

        let row_end = if region.is_some() {
            width
        } else {
            trailing_content_end(grid, y, width)
        };

        for x in 0..row_end {
            let Some(cell) = grid.get(x, y) else { break };
            if cell.ch == CONTINUATION {
                continue;
            }
            em.set_style(cell.fg, cell.bg, cell.attrs);
            em.ch(cell.ch);
        }
    }
}

/// Column just past the last cell in a row that differs from the default
/// (untouched) cell. Flow rows stop there instead of padding with spaces.
fn trailing_content_end(grid: &Grid, y: u16, width: u16) -> u16 {
    let default = super::grid::Cell::default();
    let mut end = width;
    while end > 0 {
        match grid.get(end - 1, y) {
            Some(cell) if *cell == default => end -= 1,
            _ => break,
        }
    }
    end
}

/// Emit the border frame around a region's interior.
///
/// The frame occupies the one-cell ring outside the interior; the region
/// itself is untouched. One color switch covers the whole frame. Callers
/// place framed regions at `left >= 1, top >= 1`.
pub fn emit_frame(em: &mut Emitter, region: Region, chars: FrameChars, fg: Color, bg: Color) {
    let fx = region.left.saturating_sub(1);
    let fy = region.top.saturating_sub(1);

    em.set_style(fg, bg, Attr::NONE);

    // Top edge.
    em.move_to(fx, fy);
    em.ch(chars.top_left);
    for _ in 0..region.width {
        em.ch(chars.horizontal);
    }
    em.ch(chars.top_right);

    // Sides.
    for y in 0..region.height {
        em.move_to(fx, region.top + y);
        em.ch(chars.vertical);
        em.move_to(region.left + region.width, region.top + y);
        em.ch(chars.vertical);
    }

    // Bottom edge.
    em.move_to(fx, region.top + region.height);
    em.ch(chars.bottom_left);
    for _ in 0..region.width {
        em.ch(chars.horizontal);
    }
    em.ch(chars.bottom_right);
}

/// Compose a grid as a cursor-positioned string inside a region.
pub fn compose_absolute(grid: &Grid, region: Region, ambient: Ambient) -> String {
    let mut em = Emitter::new(ambient);
    emit_grid(&mut em, grid, Some(region));
    em.finish()
}

/// Compose a grid as newline-joined rows at the current cursor position.
pub fn compose_flow(grid: &Grid, ambient: Ambient) -> String {
    let mut em = Emitter::new(ambient);
    emit_grid(&mut em, grid, None);
    em.finish()
}
