//! Powerline segment writer.
//!
//! An ordered sequence of colored spans. Each segment paints its text over
//! its own background; between adjacent segments a transition glyph is drawn
//! with the previous background as foreground over the next background, and
//! the final cap fades into the ambient background.

use crate::color::{Attr, Color};
use crate::error::{RenderError, degrade};
use crate::terminal::Context;

use super::emitter;

/// The default transition glyph (Powerline "right hard divider",
/// private-use U+E0B0).
pub const SEGMENT_CAP: char = '\u{E0B0}';

/// One colored span.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerlineSegment {
    pub text: String,
    pub fg: Color,
    pub bg: Color,
    /// Hidden segments are skipped entirely, transitions included.
    pub hidden: bool,
}

impl PowerlineSegment {
    pub fn new(text: impl Into<String>, fg: Color, bg: Color) -> Self {
        Self {
            text: text.into(),
            fg,
            bg,
            hidden: false,
        }
    }
}

/// A powerline: colored spans joined by transition glyphs.
#[derive(Debug, Clone)]
pub struct Powerline {
    pub segments: Vec<PowerlineSegment>,
    /// Transition glyph between segments and at the tail.
    pub cap: char,
    pub settings: crate::compose::TextSettings,
}

impl Powerline {
    pub fn new(segments: Vec<PowerlineSegment>) -> Self {
        Self {
            segments,
            cap: SEGMENT_CAP,
            settings: crate::compose::TextSettings::default(),
        }
    }

    pub fn try_render(&self, ctx: &Context) -> Result<String, RenderError> {
        let shown: Vec<&PowerlineSegment> =
            self.segments.iter().filter(|s| !s.hidden).collect();
        if shown.is_empty() {
            return Err(RenderError::EmptyInput("powerline segments"));
        }

        let mut em = emitter(ctx, self.settings);

        for (i, segment) in shown.iter().enumerate() {
            em.set_style(segment.fg, segment.bg, Attr::NONE);
            em.ch(' ');
            em.text(&segment.text);
            em.ch(' ');

            // Transition: previous background over the next one, or over the
            // ambient background at the tail.
            let next_bg = shown
                .get(i + 1)
                .map(|s| s.bg)
                .unwrap_or(ctx.ambient.bg);
            em.set_style(segment.bg, next_bg, Attr::NONE);
            em.ch(self.cap);
        }

        Ok(em.finish())
    }

    /// Render, degrading to an empty string on failure.
    pub fn render(&self, ctx: &Context) -> String {
        degrade("powerline", self.try_render(ctx))
    }
}
