//! Color values, text attributes, and the ambient style pair.
//!
//! Colors arrive here already resolved - named-color and HSL parsing belong to
//! the host's color model. A [`Color`] is one of three things a terminal can
//! actually be told to display: its own default, a palette index, or a
//! truecolor triple.

// =============================================================================
// Color
// =============================================================================

/// A resolved terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// The terminal's own default foreground or background.
    #[default]
    Default,
    /// ANSI palette index. 0-7 standard, 8-15 bright, 16-255 extended.
    Ansi(u8),
    /// 24-bit truecolor.
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Create an opaque truecolor value.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    // Palette entries the writers reach for by default.
    pub const BLACK: Self = Self::Ansi(0);
    pub const RED: Self = Self::Ansi(1);
    pub const GREEN: Self = Self::Ansi(2);
    pub const OLIVE: Self = Self::Ansi(3);
    pub const BLUE: Self = Self::Ansi(4);
    pub const MAGENTA: Self = Self::Ansi(5);
    pub const CYAN: Self = Self::Ansi(6);
    pub const SILVER: Self = Self::Ansi(7);
    pub const GREY: Self = Self::Ansi(8);
    pub const WHITE: Self = Self::Ansi(15);
}

// =============================================================================
// Attributes
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for cheap storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const INVERSE = 1 << 5;
        const HIDDEN = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

// =============================================================================
// Ambient
// =============================================================================

/// The foreground/background pair considered "current" absent an override.
///
/// Writers read this as the default when no explicit color is configured and
/// append a revert to it at the tail of every composed string. The pair is an
/// explicit value carried by the render context - there is no hidden global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ambient {
    pub fg: Color,
    pub bg: Color,
}

impl Ambient {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }
}
