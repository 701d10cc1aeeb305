//! Banner text writer.
//!
//! Renders large stylized text through a glyph source - the figlet-style
//! font collaborator - and aligns each glyph row within the window width.
//! Without a glyph source the text renders as plain aligned lines, which
//! also covers centered and right-aligned ordinary text.

use crate::color::{Attr, Color};
use crate::compose::{Grid, TextSettings, align_offset, emit_grid};
use crate::error::{RenderError, degrade};
use crate::measure::{string_width, truncate};
use crate::terminal::Context;

use super::emitter;

// =============================================================================
// Glyph source seam
// =============================================================================

/// The font collaborator: turns a text into glyph rows of equal height.
///
/// Font parsing and glyph databases live behind this seam; the writer only
/// lays the returned rows out.
pub trait GlyphSource {
    fn rows(&self, text: &str) -> Vec<String>;
}

/// The degenerate glyph source: every text is its own single row.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainGlyphs;

impl GlyphSource for PlainGlyphs {
    fn rows(&self, text: &str) -> Vec<String> {
        vec![text.to_string()]
    }
}

// =============================================================================
// Banner
// =============================================================================

/// Aligned banner text spanning the window width.
#[derive(Debug, Clone)]
pub struct Banner {
    pub text: String,
    /// Foreground. Defaults to the ambient foreground.
    pub fg: Option<Color>,
    /// Background. Defaults to the ambient background.
    pub bg: Option<Color>,
    /// Alignment, wrap mode, and color toggle.
    pub settings: TextSettings,
}

impl Banner {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: None,
            bg: None,
            settings: TextSettings::default(),
        }
    }

    /// Render through a glyph source.
    pub fn try_render_with(
        &self,
        source: &dyn GlyphSource,
        ctx: &Context,
    ) -> Result<String, RenderError> {
        let width = ctx.width;
        if width == 0 {
            return Err(RenderError::InvalidGeometry { width, height: 1 });
        }

        let fg = self.fg.unwrap_or(ctx.ambient.fg);
        let bg = self.bg.unwrap_or(ctx.ambient.bg);

        // Wrap settings split the input into logical lines first; each line
        // then expands to glyph rows.
        let mut rows: Vec<String> = Vec::new();
        for line in self.settings.split(&self.text, usize::from(width)) {
            rows.extend(source.rows(&line));
        }
        if rows.is_empty() {
            return Err(RenderError::EmptyInput("banner rows"));
        }

        let height = u16::try_from(rows.len()).unwrap_or(u16::MAX);
        let mut grid = Grid::new(width, height);
        for (y, row) in rows.iter().enumerate().take(usize::from(height)) {
            let row = truncate(row, usize::from(width));
            let offset = align_offset(usize::from(width), string_width(&row), self.settings.align);
            grid.draw_text(offset as u16, y as u16, &row, fg, bg, Attr::NONE);
        }

        let mut em = emitter(ctx, self.settings);
        emit_grid(&mut em, &grid, None);
        Ok(em.finish())
    }

    /// Render through a glyph source, degrading to an empty string on
    /// failure.
    pub fn render_with(&self, source: &dyn GlyphSource, ctx: &Context) -> String {
        degrade("banner", self.try_render_with(source, ctx))
    }

    /// Render as plain aligned text.
    pub fn try_render(&self, ctx: &Context) -> Result<String, RenderError> {
        self.try_render_with(&PlainGlyphs, ctx)
    }

    /// Render as plain aligned text, degrading to an empty string on
    /// failure.
    pub fn render(&self, ctx: &Context) -> String {
        degrade("banner", self.try_render(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{Align, WrapMode};
    use crate::measure::strip_ansi;

    fn ctx() -> Context {
        Context::sized(20, 24)
    }

    /// A fake font: every character becomes a 2-row block of itself doubled.
    struct Doubler;

    impl GlyphSource for Doubler {
        fn rows(&self, text: &str) -> Vec<String> {
            let wide: String = text.chars().flat_map(|c| [c, c]).collect();
            vec![wide.clone(), wide]
        }
    }

    #[test]
    fn plain_left_aligned() {
        let banner = Banner::new("hi");
        let out = banner.try_render(&ctx()).unwrap();
        assert_eq!(strip_ansi(&out), "hi");
    }

    #[test]
    fn centered_text_is_offset() {
        let banner = Banner {
            settings: TextSettings {
                align: Align::Center,
                ..TextSettings::default()
            },
            ..Banner::new("hi")
        };
        let out = banner.try_render(&ctx()).unwrap();
        // (20 - 2) / 2 = 9 leading cells.
        assert_eq!(strip_ansi(&out), format!("{}hi", " ".repeat(9)));
    }

    #[test]
    fn right_aligned_text_touches_the_edge() {
        let banner = Banner {
            settings: TextSettings {
                align: Align::Right,
                ..TextSettings::default()
            },
            ..Banner::new("end")
        };
        let out = banner.try_render(&ctx()).unwrap();
        assert_eq!(strip_ansi(&out), format!("{}end", " ".repeat(17)));
    }

    #[test]
    fn glyph_source_rows_stack() {
        let banner = Banner::new("ab");
        let out = banner.try_render_with(&Doubler, &ctx()).unwrap();
        assert_eq!(strip_ansi(&out), "aabb\naabb");
    }

    #[test]
    fn glyph_rows_align_independently() {
        let banner = Banner {
            settings: TextSettings {
                align: Align::Center,
                ..TextSettings::default()
            },
            ..Banner::new("ab")
        };
        let out = banner.try_render_with(&Doubler, &ctx()).unwrap();
        let pad = " ".repeat(8);
        assert_eq!(strip_ansi(&out), format!("{pad}aabb\n{pad}aabb"));
    }

    #[test]
    fn wrap_splits_before_glyph_expansion() {
        let banner = Banner {
            settings: TextSettings {
                wrap: WrapMode::Word,
                ..TextSettings::default()
            },
            ..Banner::new("alpha beta gamma delta")
        };
        let out = banner.try_render(&ctx()).unwrap();
        let visible = strip_ansi(&out);
        let lines: Vec<&str> = visible.split('\n').collect();
        assert!(lines.len() >= 2);
        assert!(lines.iter().all(|l| string_width(l) <= 20));
    }

    #[test]
    fn overlong_row_truncates_to_width() {
        let banner = Banner::new("x".repeat(50));
        let out = banner.try_render(&ctx()).unwrap();
        assert_eq!(strip_ansi(&out), "x".repeat(20));
    }

    #[test]
    fn colored_banner_reverts() {
        let banner = Banner {
            fg: Some(Color::MAGENTA),
            ..Banner::new("hi")
        };
        let out = banner.try_render(&ctx()).unwrap();
        assert!(out.contains("\x1b[35mhi"));
        assert!(out.ends_with("\x1b[39m"));
    }

    #[test]
    fn zero_width_is_invalid_geometry() {
        let banner = Banner::new("hi");
        assert!(banner.try_render(&Context::sized(0, 24)).is_err());
        assert_eq!(banner.render(&Context::sized(0, 24)), "");
    }
}
