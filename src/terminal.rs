//! The terminal seam: capability queries and the locked raw write.
//!
//! Rendering is pure - writers compute strings from a [`Context`] snapshot
//! and never touch the terminal. Writing is the only operation requiring
//! mutual exclusion, and the only one that does I/O.
//!
//! Hosts construct a backend explicitly once, before any writer runs; there
//! is no implicit first-use detection.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::color::Ambient;

/// Fallback dimensions when the backend cannot report a size.
const FALLBACK_WIDTH: u16 = 80;
const FALLBACK_HEIGHT: u16 = 24;

// =============================================================================
// Terminal trait
// =============================================================================

/// The console collaborator consumed by the toolkit.
///
/// Implementations supply dimensions, say whether cursor positioning is
/// usable (dumb terminals are not addressable), and perform the exclusive
/// raw write.
pub trait Terminal {
    fn width(&self) -> u16;
    fn height(&self) -> u16;
    fn supports_positioning(&self) -> bool;

    /// Write a rendered string. Implementations serialize concurrent callers
    /// for the duration of one write.
    fn write_raw(&self, text: &str) -> io::Result<()>;
}

// =============================================================================
// AnsiTerminal
// =============================================================================

/// Default backend: crossterm size queries over a locked stdout writer.
pub struct AnsiTerminal {
    sink: Mutex<Box<dyn Write + Send>>,
    positioning: bool,
}

impl AnsiTerminal {
    /// Construct the stdout-backed terminal. Call once from the host before
    /// rendering; positioning support is decided here, not on first use.
    pub fn stdout() -> Self {
        Self {
            sink: Mutex::new(Box::new(io::stdout())),
            positioning: !is_dumb(),
        }
    }

    /// Construct over an arbitrary sink, e.g. a pipe or a capture buffer.
    pub fn with_sink(sink: Box<dyn Write + Send>, positioning: bool) -> Self {
        Self {
            sink: Mutex::new(sink),
            positioning,
        }
    }
}

/// A terminal that advertises itself as `dumb` cannot interpret cursor
/// positioning sequences.
fn is_dumb() -> bool {
    std::env::var("TERM").is_ok_and(|term| term == "dumb")
}

impl Terminal for AnsiTerminal {
    fn width(&self) -> u16 {
        crossterm::terminal::size()
            .map(|(w, _)| w)
            .unwrap_or(FALLBACK_WIDTH)
    }

    fn height(&self) -> u16 {
        crossterm::terminal::size()
            .map(|(_, h)| h)
            .unwrap_or(FALLBACK_HEIGHT)
    }

    fn supports_positioning(&self) -> bool {
        self.positioning
    }

    fn write_raw(&self, text: &str) -> io::Result<()> {
        let mut sink = self
            .sink
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        sink.write_all(text.as_bytes())?;
        sink.flush()
    }
}

// =============================================================================
// FixedTerminal
// =============================================================================

/// Deterministic backend for tests: fixed dimensions, captured output.
pub struct FixedTerminal {
    width: u16,
    height: u16,
    positioning: bool,
    captured: Mutex<String>,
}

impl FixedTerminal {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            positioning: true,
            captured: Mutex::new(String::new()),
        }
    }

    /// A fixed terminal that reports no positioning support.
    pub fn dumb(width: u16, height: u16) -> Self {
        Self {
            positioning: false,
            ..Self::new(width, height)
        }
    }

    /// Everything written so far.
    pub fn captured(&self) -> String {
        self.captured
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Terminal for FixedTerminal {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn supports_positioning(&self) -> bool {
        self.positioning
    }

    fn write_raw(&self, text: &str) -> io::Result<()> {
        self.captured
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_str(text);
        Ok(())
    }
}

// =============================================================================
// Context
// =============================================================================

/// Immutable per-call snapshot consumed by every writer.
///
/// Captures dimensions, positioning support, and the ambient color pair once,
/// so a render call sees one consistent view even if the window resizes
/// mid-computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub width: u16,
    pub height: u16,
    pub positioning: bool,
    pub ambient: Ambient,
}

impl Context {
    /// Snapshot a terminal with the default ambient pair.
    pub fn of(terminal: &dyn Terminal) -> Self {
        Self::with_ambient(terminal, Ambient::default())
    }

    /// Snapshot a terminal with an explicit ambient pair.
    pub fn with_ambient(terminal: &dyn Terminal, ambient: Ambient) -> Self {
        Self {
            width: terminal.width(),
            height: terminal.height(),
            positioning: terminal.supports_positioning(),
            ambient,
        }
    }

    /// A context with fixed dimensions and no terminal behind it.
    pub fn sized(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            positioning: true,
            ambient: Ambient::default(),
        }
    }
}
