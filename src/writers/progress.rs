//! Horizontal and vertical progress bars.
//!
//! A progress value is a percentage, clamped into `[0, 100]` before any fill
//! computation - out-of-range input is never an error. The filled portion is
//! a single background-colored run, so a bar costs one color switch no
//! matter how long it is.

use crate::color::{Attr, Color};
use crate::compose::{
    FrameChars, Grid, Region, TextSettings, clamp_percent, emit_frame, emit_grid, fill_cells,
};
use crate::error::{RenderError, degrade};
use crate::terminal::Context;

use super::emitter;

/// Cells reserved beside a horizontal bar when the width is defaulted from
/// the window.
pub const WIDTH_MARGIN: u16 = 10;

/// Rows reserved above a vertical bar when the height is defaulted from the
/// window.
pub const HEIGHT_MARGIN: u16 = 2;

// =============================================================================
// Horizontal
// =============================================================================

/// A horizontal progress bar at an absolute position.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    /// Progress percentage, clamped to `[0, 100]`.
    pub progress: f64,
    /// Column of the widget's top-left corner (frame included when drawn).
    pub left: u16,
    /// Row of the widget's top-left corner.
    pub top: u16,
    /// Interior width in cells. Defaults to window width minus
    /// [`WIDTH_MARGIN`].
    pub width: Option<u16>,
    /// Fill color. Defaults to [`Color::OLIVE`].
    pub fill: Option<Color>,
    /// Frame color. Defaults to [`Color::GREY`].
    pub frame: Option<Color>,
    /// Whether to draw the border frame.
    pub border: bool,
    pub settings: TextSettings,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            progress: 0.0,
            left: 0,
            top: 0,
            width: None,
            fill: None,
            frame: None,
            border: true,
            settings: TextSettings::default(),
        }
    }
}

impl ProgressBar {
    pub fn try_render(&self, ctx: &Context) -> Result<String, RenderError> {
        let width = self
            .width
            .unwrap_or_else(|| ctx.width.saturating_sub(WIDTH_MARGIN));
        if width == 0 {
            return Err(RenderError::InvalidGeometry { width, height: 1 });
        }

        let filled = fill_cells(clamp_percent(self.progress), 100.0, width);
        let fill = self.fill.unwrap_or(Color::OLIVE);

        let mut grid = Grid::new(width, 1);
        grid.fill_row(0, 0, filled, ' ', ctx.ambient.fg, fill, Attr::NONE);

        let region = interior(self.left, self.top, width, 1, self.border);
        let mut em = emitter(ctx, self.settings);
        if self.border {
            let frame = self.frame.unwrap_or(Color::GREY);
            emit_frame(&mut em, region, FrameChars::DOUBLE, frame, ctx.ambient.bg);
        }
        emit_grid(&mut em, &grid, Some(region));
        Ok(em.finish())
    }

    /// Render, degrading to an empty string on failure.
    pub fn render(&self, ctx: &Context) -> String {
        degrade("progress_bar", self.try_render(ctx))
    }
}

// =============================================================================
// Vertical
// =============================================================================

/// A vertical progress bar, one column wide, filling from the bottom.
#[derive(Debug, Clone)]
pub struct VerticalProgressBar {
    /// Progress percentage, clamped to `[0, 100]`.
    pub progress: f64,
    pub left: u16,
    pub top: u16,
    /// Interior height in cells. Defaults to window height minus
    /// [`HEIGHT_MARGIN`].
    pub height: Option<u16>,
    /// Fill color. Defaults to [`Color::OLIVE`].
    pub fill: Option<Color>,
    /// Frame color. Defaults to [`Color::GREY`].
    pub frame: Option<Color>,
    pub border: bool,
    pub settings: TextSettings,
}

impl Default for VerticalProgressBar {
    fn default() -> Self {
        Self {
            progress: 0.0,
            left: 0,
            top: 0,
            height: None,
            fill: None,
            frame: None,
            border: true,
            settings: TextSettings::default(),
        }
    }
}

impl VerticalProgressBar {
    pub fn try_render(&self, ctx: &Context) -> Result<String, RenderError> {
        let height = self
            .height
            .unwrap_or_else(|| ctx.height.saturating_sub(HEIGHT_MARGIN));
        if height == 0 {
            return Err(RenderError::InvalidGeometry { width: 1, height });
        }

        let filled = fill_cells(clamp_percent(self.progress), 100.0, height);
        let fill = self.fill.unwrap_or(Color::OLIVE);

        // Filled cells sit at the bottom; rows above stay ambient.
        let mut grid = Grid::new(1, height);
        for y in (height - filled)..height {
            grid.set(0, y, ' ', ctx.ambient.fg, fill, Attr::NONE);
        }

        let region = interior(self.left, self.top, 1, height, self.border);
        let mut em = emitter(ctx, self.settings);
        if self.border {
            let frame = self.frame.unwrap_or(Color::GREY);
            emit_frame(&mut em, region, FrameChars::DOUBLE, frame, ctx.ambient.bg);
        }
        emit_grid(&mut em, &grid, Some(region));
        Ok(em.finish())
    }

    /// Render, degrading to an empty string on failure.
    pub fn render(&self, ctx: &Context) -> String {
        degrade("vertical_progress_bar", self.try_render(ctx))
    }
}

// =============================================================================
// Shared helpers
// =============================================================================

/// Interior region for a widget anchored at `(left, top)`: shifted inside
/// the frame ring when a border is drawn.
fn interior(left: u16, top: u16, width: u16, height: u16, border: bool) -> Region {
    if border {
        Region::new(left + 1, top + 1, width, height)
    } else {
        Region::new(left, top, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Ambient;

    fn ctx() -> Context {
        Context::sized(80, 24)
    }

    #[test]
    fn horizontal_defaults_width_from_window() {
        let bar = ProgressBar {
            progress: 100.0,
            border: false,
            ..ProgressBar::default()
        };
        let out = bar.try_render(&ctx()).unwrap();
        // 70 filled cells in one background run.
        assert_eq!(out.matches("\x1b[43m").count(), 1);
        assert!(out.contains(&" ".repeat(70)));
    }

    #[test]
    fn horizontal_clamps_progress() {
        let over = ProgressBar {
            progress: 250.0,
            width: Some(10),
            border: false,
            ..ProgressBar::default()
        };
        let under = ProgressBar {
            progress: -40.0,
            width: Some(10),
            border: false,
            ..ProgressBar::default()
        };
        assert!(over.try_render(&ctx()).unwrap().contains(&" ".repeat(10)));
        // Negative clamps to zero fill: no fill color at all.
        assert!(!under.try_render(&ctx()).unwrap().contains("\x1b[43m"));
    }

    #[test]
    fn horizontal_zero_width_is_invalid_geometry() {
        let bar = ProgressBar {
            width: Some(0),
            ..ProgressBar::default()
        };
        assert_eq!(
            bar.try_render(&ctx()),
            Err(RenderError::InvalidGeometry { width: 0, height: 1 })
        );
        assert_eq!(bar.render(&ctx()), "");
    }

    #[test]
    fn vertical_half_fill_ten_rows() {
        let bar = VerticalProgressBar {
            progress: 50.0,
            left: 1,
            top: 1,
            height: Some(10),
            ..VerticalProgressBar::default()
        };
        let out = bar.try_render(&ctx()).unwrap();

        // One frame, one color switch for the fill region.
        assert_eq!(out.matches('╔').count(), 1);
        assert_eq!(out.matches('╚').count(), 1);
        assert_eq!(out.matches("\x1b[43m").count(), 1);

        // Interior is at (2, 2) 0-based -> rows 3..=12, column 3, 1-based.
        // Five empty rows come first; the fill switch lands between the
        // move to row 8 (first filled row) and the move to row 9.
        let fill_start = out.find("\x1b[43m").unwrap();
        assert!(out.find("\x1b[8;3H").unwrap() < fill_start);
        assert!(fill_start < out.find("\x1b[9;3H").unwrap());
    }

    #[test]
    fn vertical_fill_is_one_switch_regardless_of_height() {
        for (progress, filled) in [(0.0, 0), (50.0, 5), (100.0, 10)] {
            let bar = VerticalProgressBar {
                progress,
                height: Some(10),
                border: false,
                ..VerticalProgressBar::default()
            };
            let out = bar.try_render(&ctx()).unwrap();
            let switches = out.matches("\x1b[43m").count();
            assert_eq!(switches, usize::from(filled > 0));
        }
    }

    #[test]
    fn ambient_is_restored() {
        let ambient = Ambient::new(Color::SILVER, Color::BLACK);
        let ctx = Context {
            ambient,
            ..Context::sized(80, 24)
        };
        // Full fill, no border: the string ends right after the fill run, so
        // the trailing revert to the ambient background is the last thing out.
        let bar = ProgressBar {
            progress: 100.0,
            width: Some(10),
            border: false,
            ..ProgressBar::default()
        };
        let out = bar.try_render(&ctx).unwrap();
        assert!(out.ends_with("\x1b[40m"));
    }

    #[test]
    fn plain_settings_emit_no_color() {
        let bar = ProgressBar {
            progress: 80.0,
            width: Some(10),
            settings: TextSettings {
                use_color: false,
                ..TextSettings::default()
            },
            ..ProgressBar::default()
        };
        let out = bar.try_render(&ctx()).unwrap();
        // Cursor moves end in 'H'; with color suppressed there is no SGR
        // sequence, hence no 'm' anywhere in the output.
        assert!(!out.contains('m'));
        assert!(out.contains('╔'));
    }
}
