//! Colours used by the drafting canvas.

use serde::{Deserialize, Serialize};
use std::fmt;

/// sRGB colour with straight alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const GRID_MAJOR: Color = Color::rgb(0xe0, 0xe0, 0xe0);
    pub const GRID_MINOR: Color = Color::rgb(0xf0, 0xf0, 0xf0);
    pub const GRID_MAJOR_DOT: Color = Color::rgb(0xc0, 0xc0, 0xc0);
    pub const AXIS_HORIZONTAL: Color = Color::rgba(255, 150, 150, 0.8);
    pub const AXIS_VERTICAL: Color = Color::rgba(150, 255, 150, 0.8);
    pub const RULER_BACKGROUND: Color = Color::rgb(0xf0, 0xf0, 0xf0);
    pub const RULER_BORDER: Color = Color::rgb(0xd0, 0xd0, 0xd0);
    pub const RULER_TEXT: Color = Color::rgb(0x33, 0x33, 0x33);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Alpha scaled to a byte.
    pub fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

/// CSS form: `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<Color> for tiny_skia::Color {
    fn from(c: Color) -> Self {
        tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.alpha_u8())
    }
}
