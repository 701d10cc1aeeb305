//! inkcell - terminal rendering toolkit.
//!
//! A library of writers that turn structured inputs - progress values, chart
//! elements, table matrices, separator titles, banner text, powerline
//! segments - into ANSI/VT escape-sequence strings. The caller decides what
//! to do with the string: write it through the terminal seam, buffer it, or
//! inspect it in tests.
//!
//! # Architecture
//!
//! ```text
//! domain model                 composition engine            output
//! ─────────────                ──────────────────            ──────
//! ProgressBar │
//! StickChart  │  draws cells   Grid ──> Emitter      one escape string
//! Table       ├──────────────> (run-coalescing:  ──> cursor moves + color
//! Separator   │                 one move per row,     runs + one ambient
//! Banner      │                 one switch per run)   revert at the tail
//! Powerline   │
//! ```
//!
//! Rendering is pure and lock-free; [`terminal::Terminal::write_raw`] is the
//! only operation that takes a lock. Writers never fail toward the caller:
//! `render` degrades to an empty string (logging the diagnostic), while
//! `try_render` exposes the structured [`error::RenderError`] for hosts and
//! tests that want it.
//!
//! # Example
//!
//! ```
//! use inkcell::{Context, ProgressBar};
//!
//! let ctx = Context::sized(80, 24);
//! let bar = ProgressBar {
//!     progress: 62.0,
//!     width: Some(40),
//!     ..ProgressBar::default()
//! };
//! let rendered = bar.render(&ctx);
//! assert!(!rendered.is_empty());
//! ```

pub mod ansi;
pub mod color;
pub mod compose;
pub mod error;
pub mod measure;
pub mod terminal;
pub mod writers;

pub use color::{Ambient, Attr, Color};
pub use compose::{Align, Region, TextSettings, WrapMode};
pub use error::RenderError;
pub use terminal::{AnsiTerminal, Context, FixedTerminal, Terminal};
pub use writers::{
    Banner, BreakdownChart, ChartElement, GlyphSource, PlainGlyphs, Powerline,
    PowerlineSegment, ProgressBar, Separator, StickChart, Table, VerticalProgressBar,
};
