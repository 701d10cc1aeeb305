//! The specialized writers.
//!
//! Each writer is one configuration struct with documented defaults and two
//! entry points:
//!
//! - `try_render(&Context) -> Result<String, RenderError>` - the structured
//!   result, for hosts and tests that want the diagnostic
//! - `render(&Context) -> String` - the forgiving path: failures are logged
//!   and degrade to an empty string, never a panic or a propagated fault
//!
//! Writers are pure mappings from their domain model onto the composition
//! engine. None of them deduplicate cursor moves or manage color reverts
//! themselves - that is the composer's job.

pub mod banner;
pub mod chart;
pub mod powerline;
pub mod progress;
pub mod separator;
pub mod table;

pub use banner::{Banner, GlyphSource, PlainGlyphs};
pub use chart::{BreakdownChart, ChartElement, StickChart};
pub use powerline::{Powerline, PowerlineSegment};
pub use progress::{ProgressBar, VerticalProgressBar};
pub use separator::Separator;
pub use table::{CellStyle, Table};

/// Format a chart value the way legends display it: whole numbers without a
/// trailing fraction.
pub(crate) fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// The emitter a writer's settings ask for: color-suppressing when
/// `use_color` is off.
pub(crate) fn emitter(
    ctx: &crate::terminal::Context,
    settings: crate::compose::TextSettings,
) -> crate::compose::Emitter {
    if settings.use_color {
        crate::compose::Emitter::new(ctx.ambient)
    } else {
        crate::compose::Emitter::plain(ctx.ambient)
    }
}

#[cfg(test)]
mod tests {
    use super::format_value;

    #[test]
    fn whole_values_have_no_fraction() {
        assert_eq!(format_value(10.0), "10");
        assert_eq!(format_value(0.0), "0");
    }

    #[test]
    fn fractional_values_keep_fraction() {
        assert_eq!(format_value(2.5), "2.5");
    }
}
