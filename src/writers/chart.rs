//! Stick and breakdown charts.
//!
//! Both charts share one element model and one proportional-fill policy.
//! A stick chart scales every bar against the largest visible value; a
//! breakdown chart divides one bar (or one column) proportionally against
//! the sum of all values. Hidden elements keep their place in the data but
//! never reach layout.

use crate::color::{Attr, Color};
use crate::compose::{Grid, TextSettings, emit_grid, fill_cells};
use crate::error::{RenderError, degrade};
use crate::measure::{string_width, truncate_suffixed};
use crate::terminal::Context;

use super::{emitter, format_value};

/// Bullet prefix of a legend line.
const LEGEND_MARKER: &str = " ■ ";
/// Cell width of the bullet prefix.
const LEGEND_MARKER_WIDTH: usize = 3;
/// Divider between the legend column and the chart body.
const LEGEND_DIVIDER: &str = " ┃ ";
/// Cells between an element name and its value in a legend line.
const LEGEND_VALUE_GAP: usize = 2;
/// Cells between legend items flowing below a horizontal breakdown bar.
const LEGEND_ITEM_GAP: usize = 4;
/// Suffix marking a truncated legend name.
const TRUNCATION_SUFFIX: &str = "...";

// =============================================================================
// ChartElement
// =============================================================================

/// A named quantity with a color and a visibility flag.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartElement {
    pub name: String,
    pub value: f64,
    pub color: Color,
    /// Hidden elements are excluded from layout and aggregates that scale
    /// bars, but still count toward a breakdown's total.
    pub hidden: bool,
}

impl ChartElement {
    pub fn new(name: impl Into<String>, value: f64, color: Color) -> Self {
        Self {
            name: name.into(),
            value,
            color,
            hidden: false,
        }
    }
}

// =============================================================================
// StickChart
// =============================================================================

/// Vertical bars scaled against the largest visible value.
#[derive(Debug, Clone)]
pub struct StickChart {
    pub elements: Vec<ChartElement>,
    /// Interior width in cells.
    pub width: u16,
    /// Interior height in cells.
    pub height: u16,
    /// Show the legend column beside the chart.
    pub showcase: bool,
    pub settings: TextSettings,
}

impl StickChart {
    pub fn new(elements: Vec<ChartElement>, width: u16, height: u16) -> Self {
        Self {
            elements,
            width,
            height,
            showcase: false,
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
        let shown: Vec<&ChartElement> = self.elements.iter().filter(|e| !e.hidden).collect();
        if shown.is_empty() {
            return Err(RenderError::EmptyInput("chart elements"));
        }

        let max_value = shown.iter().fold(0.0f64, |acc, e| acc.max(e.value));
        // The top interior row always stays clear, so bars scale to one row
        // less than the interior height.
        let whole = self.height - 1;
        let heights: Vec<u16> = shown
            .iter()
            .map(|e| fill_cells(e.value, max_value, whole))
            .collect();

        let legend_w = if self.showcase {
            legend_width(&shown, usize::from(self.width) / 4)
        } else {
            0
        };

        let mut grid = Grid::new(self.width, self.height);
        for i in 0..self.height {
            let mut x = 0u16;
            if self.showcase {
                if let Some(element) = shown.get(usize::from(i)) {
                    draw_legend_line(&mut grid, i, legend_w, element);
                }
                x += legend_w as u16;
            }
            x += grid.draw_text(x, i, LEGEND_DIVIDER, Color::Default, Color::Default, Attr::NONE);

            // Each element owns a two-cell column; fill when the bottom-up
            // row index falls within the bar height.
            let inverse = self.height - i;
            for (e, element) in shown.iter().enumerate() {
                if x >= self.width {
                    break;
                }
                if inverse <= heights[e] {
                    grid.fill_row(x, i, 2, ' ', Color::Default, element.color, Attr::NONE);
                }
                x += 2;
            }
        }

        let mut em = emitter(ctx, self.settings);
        emit_grid(&mut em, &grid, None);
        Ok(em.finish())
    }

    /// Render, degrading to an empty string on failure.
    pub fn render(&self, ctx: &Context) -> String {
        degrade("stick_chart", self.try_render(ctx))
    }
}

// =============================================================================
// BreakdownChart
// =============================================================================

/// One bar divided proportionally among the elements.
///
/// Horizontal mode renders a single row of colored spans with an optional
/// legend flowing below; vertical mode stacks the spans in a two-cell
/// column with the legend beside it.
#[derive(Debug, Clone)]
pub struct BreakdownChart {
    pub elements: Vec<ChartElement>,
    /// Interior width in cells.
    pub width: u16,
    /// Interior height in cells; only vertical mode consumes it.
    pub height: u16,
    pub showcase: bool,
    pub vertical: bool,
    pub settings: TextSettings,
}

impl BreakdownChart {
    pub fn new(elements: Vec<ChartElement>, width: u16, height: u16) -> Self {
        Self {
            elements,
            width,
            height,
            showcase: false,
            vertical: false,
            settings: TextSettings::default(),
        }
    }

    pub fn try_render(&self, ctx: &Context) -> Result<String, RenderError> {
        if self.width == 0 || (self.vertical && self.height == 0) {
            return Err(RenderError::InvalidGeometry {
                width: self.width,
                height: self.height,
            });
        }
        let shown: Vec<&ChartElement> = self.elements.iter().filter(|e| !e.hidden).collect();
        if shown.is_empty() {
            return Err(RenderError::EmptyInput("chart elements"));
        }

        // Hidden elements keep their share of the total, shrinking the
        // visible spans rather than redistributing.
        let total: f64 = self.elements.iter().map(|e| e.value).sum();

        let grid = if self.vertical {
            self.layout_vertical(&shown, total)
        } else {
            self.layout_horizontal(&shown, total)
        };

        let mut em = emitter(ctx, self.settings);
        emit_grid(&mut em, &grid, None);
        Ok(em.finish())
    }

    /// Render, degrading to an empty string on failure.
    pub fn render(&self, ctx: &Context) -> String {
        degrade("breakdown_chart", self.try_render(ctx))
    }

    fn layout_horizontal(&self, shown: &[&ChartElement], total: f64) -> Grid {
        let width = self.width;

        // Legend items flow in rows below the bar; measure the flow first so
        // the grid height is known.
        let mut items: Vec<(usize, String, String)> = Vec::new();
        if self.showcase {
            let name_cap = usize::from(width) / 4;
            for (i, element) in shown.iter().enumerate() {
                let value = format_value(element.value);
                let budget = name_cap
                    .saturating_sub(LEGEND_MARKER_WIDTH + LEGEND_VALUE_GAP + value.len());
                let name = truncate_suffixed(&element.name, budget, TRUNCATION_SUFFIX);
                items.push((i, name, value));
            }
        }

        let mut rows = 1u16;
        let mut x = 0usize;
        let mut placed: Vec<(u16, u16, usize)> = Vec::new(); // (x, y, item index)
        for (idx, (_, name, value)) in items.iter().enumerate() {
            let item_w =
                LEGEND_MARKER_WIDTH + string_width(name) + LEGEND_VALUE_GAP + value.len();
            if x + item_w > usize::from(width) && x > 0 {
                rows += 1;
                x = 0;
            }
            placed.push((x as u16, rows, idx));
            x += item_w + LEGEND_ITEM_GAP;
        }
        let legend_rows = if items.is_empty() { 0 } else { rows };

        let mut grid = Grid::new(width, 1 + legend_rows);

        // The bar: one span per element against the total.
        let mut bar_x = 0u16;
        for element in shown {
            let len = fill_cells(element.value, total, width);
            grid.fill_row(bar_x, 0, len, ' ', Color::Default, element.color, Attr::NONE);
            bar_x = bar_x.saturating_add(len);
        }

        // The legend flow.
        for (x, y, idx) in placed {
            let element = shown[items[idx].0];
            let (_, name, value) = &items[idx];
            let mut col = x;
            col += grid.draw_text(col, y, LEGEND_MARKER, element.color, Color::Default, Attr::NONE);
            col += grid.draw_text(col, y, name, Color::GREY, Color::Default, Attr::NONE);
            col += grid.draw_text(col, y, "  ", Color::Default, Color::Default, Attr::NONE);
            grid.draw_text(col, y, value, Color::SILVER, Color::Default, Attr::NONE);
        }

        grid
    }

    fn layout_vertical(&self, shown: &[&ChartElement], total: f64) -> Grid {
        let whole = self.height - 1;
        let heights: Vec<u16> = shown
            .iter()
            .map(|e| fill_cells(e.value, total, whole))
            .collect();

        // Stacking boundaries: element e covers rows up to the cumulative
        // fill through e.
        let mut boundaries = Vec::with_capacity(heights.len());
        let mut sum = 0u16;
        for h in &heights {
            sum = sum.saturating_add(*h);
            boundaries.push(sum);
        }

        let legend_w = if self.showcase {
            legend_width(shown, usize::from(self.width) / 4)
        } else {
            0
        };

        let mut grid = Grid::new(self.width, self.height);
        for i in 0..self.height {
            let mut x = 0u16;
            if self.showcase {
                if let Some(element) = shown.get(usize::from(i)) {
                    draw_legend_line(&mut grid, i, legend_w, element);
                }
                x += legend_w as u16;
            }
            x += grid.draw_text(x, i, LEGEND_DIVIDER, Color::Default, Color::Default, Attr::NONE);

            // First element whose boundary reaches this row owns it.
            let owner = boundaries
                .iter()
                .position(|&b| i < b)
                .map(|e| shown[e]);
            if let Some(element) = owner {
                grid.fill_row(x, i, 2, ' ', Color::Default, element.color, Attr::NONE);
            }
        }

        grid
    }
}

// =============================================================================
// Legend helpers
// =============================================================================

/// Legend column width: the widest `marker + name + gap + value` line,
/// capped to the given limit (a quarter of the interior width).
fn legend_width(shown: &[&ChartElement], cap: usize) -> usize {
    let widest = shown
        .iter()
        .map(|e| {
            LEGEND_MARKER_WIDTH
                + string_width(&e.name)
                + LEGEND_VALUE_GAP
                + format_value(e.value).len()
        })
        .max()
        .unwrap_or(0);
    widest.min(cap)
}

/// One legend line: colored marker, grey name, silver value, each line
/// truncated independently to the legend width.
fn draw_legend_line(grid: &mut Grid, y: u16, legend_w: usize, element: &ChartElement) {
    let value = format_value(element.value);
    let budget = legend_w.saturating_sub(LEGEND_MARKER_WIDTH + LEGEND_VALUE_GAP + value.len());
    let name = truncate_suffixed(&element.name, budget, TRUNCATION_SUFFIX);

    let mut x = 0u16;
    x += grid.draw_text(x, y, LEGEND_MARKER, element.color, Color::Default, Attr::NONE);
    x += grid.draw_text(x, y, &name, Color::GREY, Color::Default, Attr::NONE);
    x += grid.draw_text(x, y, "  ", Color::Default, Color::Default, Attr::NONE);
    grid.draw_text(x, y, &value, Color::SILVER, Color::Default, Attr::NONE);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> Context {
        Context::sized(80, 24)
    }

    fn elements() -> Vec<ChartElement> {
        vec![
            ChartElement::new("A", 10.0, Color::RED),
            ChartElement::new("B", 0.0, Color::GREEN),
        ]
    }

    #[test]
    fn stick_empty_elements_is_empty_input() {
        let chart = StickChart::new(vec![], 40, 10);
        assert_eq!(
            chart.try_render(&ctx()),
            Err(RenderError::EmptyInput("chart elements"))
        );
        assert_eq!(chart.render(&ctx()), "");
    }

    #[test]
    fn stick_all_hidden_is_empty_input() {
        let mut elems = elements();
        for e in &mut elems {
            e.hidden = true;
        }
        let chart = StickChart::new(elems, 40, 10);
        assert!(chart.try_render(&ctx()).is_err());
    }

    #[test]
    fn stick_zero_max_renders_no_bars() {
        let elems = vec![
            ChartElement::new("A", 0.0, Color::RED),
            ChartElement::new("B", 0.0, Color::GREEN),
        ];
        let chart = StickChart::new(elems, 40, 10);
        let out = chart.try_render(&ctx()).unwrap();
        assert!(!out.contains("\x1b[41m"));
        assert!(!out.contains("\x1b[42m"));
    }

    #[test]
    fn stick_showcase_scenario() {
        let chart = StickChart {
            showcase: true,
            ..StickChart::new(elements(), 40, 10)
        };
        let out = chart.try_render(&ctx()).unwrap();

        // Legend width: " ■ " + "A" + gap + "10" = 8, under the cap of 10.
        // First line carries A's legend; the divider follows the legend pad.
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].contains("■"));
        assert!(lines[0].contains("A"));
        assert!(lines[0].contains("10"));
        assert!(lines[0].contains("┃"));

        // Element B is zero-valued: its bar never fills a single cell.
        assert!(!out.contains("\x1b[42m"));
        // Element A fills rows below the top row.
        assert!(out.contains("\x1b[41m"));
        assert!(!lines[0].contains("\x1b[41m"));
    }

    #[test]
    fn stick_full_bar_spares_top_row() {
        let elems = vec![ChartElement::new("A", 5.0, Color::RED)];
        let chart = StickChart::new(elems, 10, 4);
        let out = chart.try_render(&ctx()).unwrap();
        let lines: Vec<&str> = out.split('\n').collect();
        // Bars scale to height - 1: the top row stays clear even at max.
        assert!(!lines[0].contains("\x1b[41m"));
        for line in &lines[1..] {
            assert!(line.contains("\x1b[41m"));
        }
    }

    #[test]
    fn breakdown_horizontal_spans() {
        let elems = vec![
            ChartElement::new("used", 30.0, Color::RED),
            ChartElement::new("free", 10.0, Color::GREEN),
        ];
        let chart = BreakdownChart::new(elems, 40, 1);
        let out = chart.try_render(&ctx()).unwrap();

        // 30/40 of 40 cells = 30 red, 10/40 = 10 green.
        let red_at = out.find("\x1b[41m").unwrap();
        let green_at = out.find("\x1b[42m").unwrap();
        assert!(red_at < green_at);
        assert!(out.contains(&" ".repeat(30)));
    }

    #[test]
    fn breakdown_zero_total_renders_no_spans() {
        let elems = vec![
            ChartElement::new("a", 0.0, Color::RED),
            ChartElement::new("b", 0.0, Color::GREEN),
        ];
        let chart = BreakdownChart::new(elems, 40, 1);
        let out = chart.try_render(&ctx()).unwrap();
        assert!(!out.contains("\x1b[41m"));
        assert!(!out.contains("\x1b[42m"));
    }

    #[test]
    fn breakdown_hidden_element_shrinks_visible_spans() {
        let elems = vec![
            ChartElement::new("shown", 10.0, Color::RED),
            ChartElement {
                hidden: true,
                ..ChartElement::new("ghost", 10.0, Color::GREEN)
            },
        ];
        let chart = BreakdownChart::new(elems, 40, 1);
        let out = chart.try_render(&ctx()).unwrap();
        // The visible span is half the bar, not all of it.
        assert!(out.contains(&" ".repeat(20)));
        assert!(!out.contains(&" ".repeat(21)));
        assert!(!out.contains("\x1b[42m"));
    }

    #[test]
    fn breakdown_showcase_flows_below_bar() {
        let elems = vec![
            ChartElement::new("used", 30.0, Color::RED),
            ChartElement::new("free", 10.0, Color::GREEN),
        ];
        let chart = BreakdownChart {
            showcase: true,
            ..BreakdownChart::new(elems, 60, 1)
        };
        let out = chart.try_render(&ctx()).unwrap();
        let lines: Vec<&str> = out.split('\n').collect();
        assert!(lines.len() >= 2);
        assert!(lines[1].contains("used"));
        assert!(lines[1].contains("30"));
    }

    #[test]
    fn breakdown_vertical_stacks_from_top() {
        let elems = vec![
            ChartElement::new("a", 3.0, Color::RED),
            ChartElement::new("b", 1.0, Color::GREEN),
        ];
        let chart = BreakdownChart {
            vertical: true,
            ..BreakdownChart::new(elems, 20, 5)
        };
        let out = chart.try_render(&ctx()).unwrap();
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 5);
        // 3/4 of whole=4 -> 3 red rows, then 1 green row, then empty.
        assert!(lines[0].contains("\x1b[41m"));
        assert!(lines[2].contains("\x1b[41m"));
        assert!(lines[3].contains("\x1b[42m"));
        // The last row is past the stack: no element color fills it.
        assert!(!lines[4].contains("\x1b[41m"));
        assert!(!lines[4].contains("\x1b[42m"));
    }

    #[test]
    fn legend_width_caps_at_quarter() {
        let long = vec![ChartElement::new(
            "an element with a very long descriptive name",
            5.0,
            Color::RED,
        )];
        let shown: Vec<&ChartElement> = long.iter().collect();
        assert_eq!(legend_width(&shown, 10), 10);
    }

    #[test]
    fn legend_lines_truncate_independently() {
        let elems = vec![
            ChartElement::new("averylongnamethatwillnotfit", 1.0, Color::RED),
            ChartElement::new("x", 2.0, Color::GREEN),
        ];
        let chart = StickChart {
            showcase: true,
            ..StickChart::new(elems, 40, 6)
        };
        let out = chart.try_render(&ctx()).unwrap();
        let lines: Vec<&str> = out.split('\n').collect();
        // Cap is 40/4 = 10: marker(3) + gap(2) + value(1) leaves 4 name cells.
        assert!(lines[0].contains("a..."));
        assert!(lines[1].contains("x"));
    }
}
