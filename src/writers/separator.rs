//! Separator writer.
//!
//! A separator is one line of `-` characters with optional inline text:
//! `- text ------------...`. A run of leading `-` characters inside the
//! supplied text is detected and colored as part of the suffix before the
//! remainder takes the configured foreground, and the line is padded with
//! `-` out to the window width.
//!
//! Flow output: the caller writes it at the current cursor. On terminals
//! without positioning support the text is neither truncated nor padded.

use crate::color::{Attr, Color};
use crate::error::{RenderError, degrade};
use crate::measure::{string_width, truncate};
use crate::terminal::Context;

use super::emitter;

/// Cells reserved when truncating separator text against the window width.
pub const TEXT_MARGIN: u16 = 6;

/// A titled horizontal rule spanning the window.
#[derive(Debug, Clone)]
pub struct Separator {
    /// Inline text. Empty renders a full line of `-`.
    pub text: String,
    /// Lead with `"- "` before the text.
    pub print_suffix: bool,
    /// Foreground. Defaults to the ambient foreground.
    pub fg: Option<Color>,
    /// Background. Defaults to the ambient background.
    pub bg: Option<Color>,
    pub settings: crate::compose::TextSettings,
}

impl Default for Separator {
    fn default() -> Self {
        Self {
            text: String::new(),
            print_suffix: true,
            fg: None,
            bg: None,
            settings: crate::compose::TextSettings::default(),
        }
    }
}

impl Separator {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn try_render(&self, ctx: &Context) -> Result<String, RenderError> {
        let width = ctx.width;
        if width == 0 {
            return Err(RenderError::InvalidGeometry { width, height: 1 });
        }

        let fg = self.fg.unwrap_or(ctx.ambient.fg);
        let bg = self.bg.unwrap_or(ctx.ambient.bg);

        let mut em = emitter(ctx, self.settings);
        let mut emitted: usize = 0;

        if !self.text.trim().is_empty() {
            if self.print_suffix {
                em.set_style(fg, bg, Attr::NONE);
                em.text("- ");
                emitted += 2;
            }

            let mut body = self.text.clone();
            if !body.ends_with('-') {
                body.push(' ');
            }

            // A leading run of dashes belongs to the suffix, not the title.
            let dashes = body.chars().take_while(|c| *c == '-').count();
            if dashes > 0 {
                em.set_style(fg, bg, Attr::NONE);
                for _ in 0..dashes {
                    em.ch('-');
                }
                emitted += dashes;
                body = body[dashes..].to_string();
            }

            if ctx.positioning {
                body = truncate(&body, usize::from(width.saturating_sub(TEXT_MARGIN)));
            }
            em.set_style(fg, bg, Attr::NONE);
            em.text(&body);
            emitted += string_width(&body);
        }

        // Close the line with dashes out to the window width. Dumb terminals
        // get no padding - the wrap command may be re-measuring the output.
        if ctx.positioning {
            let repeat = usize::from(width).saturating_sub(emitted);
            em.set_style(fg, bg, Attr::NONE);
            for _ in 0..repeat {
                em.ch('-');
            }
        }

        Ok(em.finish())
    }

    /// Render, degrading to an empty string on failure.
    pub fn render(&self, ctx: &Context) -> String {
        degrade("separator", self.try_render(ctx))
    }
}
