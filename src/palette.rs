use raylib::prelude::*;

pub const BACKGROUND: Color = Color { r: 15, g: 23, b: 42, a: 255 };
pub const BACKDROP_GLOW: Color = Color { r: 56, g: 189, b: 248, a: 18 };
pub const CARD_FILL: Color = Color { r: 30, g: 41, b: 59, a: 255 };
pub const ACCENT: Color = Color { r: 56, g: 189, b: 248, a: 255 };
pub const TEXT_PRIMARY: Color = Color { r: 241, g: 245, b: 249, a: 255 };
pub const TEXT_SECONDARY: Color = Color { r: 148, g: 163, b: 184, a: 255 };
pub const TRACK: Color = Color { r: 51, g: 65, b: 85, a: 255 };
pub const DISABLED: Color = Color { r: 71, g: 85, b: 105, a: 255 };
pub const OVERLAY: Color = Color { r: 2, g: 6, b: 23, a: 220 };

/// `color` with its alpha scaled by `opacity` (0..=1).
pub fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: (color.a as f32 * opacity.clamp(0.0, 1.0)) as u8,
        ..color
    }
}
