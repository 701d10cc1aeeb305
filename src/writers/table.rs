//! Table writer.
//!
//! A table draws a border frame, divides the interior evenly into columns,
//! and writes header and row cells truncated per column. Column separators
//! and the header separator line meet the frame at junction characters, and
//! every separator line spans exactly the interior extent - both ends stay
//! flush with the frame.

use crate::color::{Attr, Color};
use crate::compose::{Emitter, FrameChars, Grid, Region, TextSettings, emit_frame, emit_grid};
use crate::error::{RenderError, degrade};
use crate::measure::truncate_suffixed;
use crate::terminal::Context;

use super::emitter;

/// Cells a column reserves for its separator and padding; cell text is
/// truncated to the column width minus this margin.
pub const CELL_MARGIN: usize = 3;

/// Suffix marking truncated cell text.
const TRUNCATION_SUFFIX: &str = "...";

/// A per-cell color override. `column` and `row` index into the data matrix
/// (the header is row 0 when enabled).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub column: usize,
    pub row: usize,
    pub fg: Color,
    pub bg: Option<Color>,
}

/// A bordered table at an absolute position.
#[derive(Debug, Clone)]
pub struct Table {
    /// The data matrix, row-major. Row 0 is the header when `header` is set.
    pub rows: Vec<Vec<String>>,
    /// Column of the frame's top-left corner.
    pub left: u16,
    /// Row of the frame's top-left corner.
    pub top: u16,
    /// Interior width in cells.
    pub width: u16,
    /// Interior height in cells.
    pub height: u16,
    /// Treat row 0 as a header with a separator line under it.
    pub header: bool,
    /// Frame and separator color. Defaults to [`Color::GREY`].
    pub separator_color: Option<Color>,
    /// Header text color. Defaults to [`Color::SILVER`].
    pub header_color: Option<Color>,
    /// Cell text color. Defaults to the ambient foreground.
    pub value_color: Option<Color>,
    /// Background behind the whole table. Defaults to the ambient background.
    pub back: Option<Color>,
    pub cell_styles: Vec<CellStyle>,
    pub settings: TextSettings,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>, left: u16, top: u16, width: u16, height: u16) -> Self {
        Self {
            rows,
            left,
            top,
            width,
            height,
            header: true,
            separator_color: None,
            header_color: None,
            value_color: None,
            back: None,
            cell_styles: Vec::new(),
            settings: TextSettings::default(),
        }
    }

    pub fn try_render(&self, ctx: &Context) -> Result<String, RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidGeometry {
                width: self.width,
                height: self.height,
            });
        }
        let columns = self.rows.first().map(Vec::len).unwrap_or(0);
        if columns == 0 {
            return Err(RenderError::EmptyInput("table rows"));
        }
        let column_width = self.width / columns as u16;
        if column_width == 0 {
            return Err(RenderError::InvalidGeometry {
                width: self.width,
                height: self.height,
            });
        }

        let sep = self.separator_color.unwrap_or(Color::GREY);
        let header_fg = self.header_color.unwrap_or(Color::SILVER);
        let value_fg = self.value_color.unwrap_or(ctx.ambient.fg);
        let back = self.back.unwrap_or(ctx.ambient.bg);

        let mut grid = Grid::new(self.width, self.height);
        paint_background(&mut grid, back);

        // Header separator occupies interior row 1, spanning the width.
        if self.header {
            grid.fill_row(0, 1, self.width, '═', sep, back, Attr::NONE);
        }

        // Column separators: one vertical line before each column after the
        // first, crossing the header separator at a junction.
        for c in 1..columns {
            let x = column_width * c as u16 - 1;
            grid.fill_column(x, 0, self.height, '║', sep, back, Attr::NONE);
            if self.header {
                grid.set(x, 1, '╬', sep, back, Attr::NONE);
            }
        }

        // Cells, truncated per column independently.
        let text_budget = usize::from(column_width).saturating_sub(CELL_MARGIN);
        for (r, row) in self.rows.iter().enumerate() {
            let Some(y) = self.row_position(r) else {
                break;
            };
            for (c, cell) in row.iter().take(columns).enumerate() {
                let x = if c == 0 {
                    0
                } else {
                    column_width * c as u16
                };
                let is_header = self.header && r == 0;
                let mut fg = if is_header { header_fg } else { value_fg };
                let mut bg = back;
                if let Some(style) = self
                    .cell_styles
                    .iter()
                    .find(|s| s.column == c && s.row == r)
                {
                    fg = style.fg;
                    if let Some(over) = style.bg {
                        bg = over;
                    }
                }
                let text = truncate_suffixed(cell, text_budget, TRUNCATION_SUFFIX);
                grid.draw_text(x, y, &text, fg, bg, Attr::NONE);
            }
        }

        let region = Region::new(self.left + 1, self.top + 1, self.width, self.height);
        let mut em = emitter(ctx, self.settings);
        emit_frame(&mut em, region, FrameChars::DOUBLE, sep, back);
        self.draw_junctions(&mut em, columns, column_width, sep, back);
        emit_grid(&mut em, &grid, Some(region));
        Ok(em.finish())
    }

    /// Render, degrading to an empty string on failure.
    pub fn render(&self, ctx: &Context) -> String {
        degrade("table", self.try_render(ctx))
    }

    /// Interior row a data row lands on: the header separator pushes data
    /// rows down by one. `None` once past the interior.
    fn row_position(&self, r: usize) -> Option<u16> {
        let y = if self.header && r > 0 { r + 1 } else { r };
        u16::try_from(y).ok().filter(|y| *y < self.height)
    }

    /// Junction characters where separators meet the frame ring.
    fn draw_junctions(
        &self,
        em: &mut Emitter,
        columns: usize,
        column_width: u16,
        sep: Color,
        back: Color,
    ) {
        em.set_style(sep, back, Attr::NONE);

        if self.header {
            em.move_to(self.left, self.top + 2);
            em.ch('╠');
            em.move_to(self.left + self.width + 1, self.top + 2);
            em.ch('╣');
        }
        for c in 1..columns {
            let x = self.left + column_width * c as u16;
            em.move_to(x, self.top);
            em.ch('╦');
            em.move_to(x, self.top + self.height + 1);
            em.ch('╩');
        }
    }
}

/// Paint the whole interior in the table background so cells between texts
/// carry it too.
fn paint_background(grid: &mut Grid, back: Color) {
    if back == Color::Default {
        return;
    }
    for y in 0..grid.height() {
        grid.fill_row(0, y, grid.width(), ' ', Color::Default, back, Attr::NONE);
    }
}
