//! Distinct segment colors
//!
//! Hues are spread evenly around the color circle; saturation cycles through three
//! steps and value through two, so neighbours differ even when hues are close.

use std::fmt;

use palette::{FromColor, Hsv, RgbHue, Srgb, encoding};

use crate::consts::*;

/// An 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional)
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceived brightness as the plain mean of the three channels (0-255)
    pub fn brightness(&self) -> f64 {
        (self.r as f64 + self.g as f64 + self.b as f64) / 3.0
    }

    /// Build from HSV with hue as a fraction of a full turn (0-1)
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let hsv = Hsv::<encoding::Srgb, f64>::new(
            RgbHue::from_degrees(hue * FULL_TURN),
            saturation,
            value,
        );
        let rgb = Srgb::<f64>::from_color(hsv);
        Self::new(
            to_channel(rgb.red),
            to_channel(rgb.green),
            to_channel(rgb.blue),
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Truncate a 0-1 component to 0-255
///
/// Plain `trunc(c * 255)`. A component that lands exactly on a step in theory can come
/// out of the conversion a hair low and drop one step, e.g. 0.2 * 255 gives 50.
fn to_channel(component: f64) -> u8 {
    (component * 255.0).trunc().clamp(0.0, 255.0) as u8
}

/// Color for option `index` out of `count`
pub fn color_for(index: usize, count: usize) -> Color {
    let hue = index as f64 / count as f64;
    let saturation = SATURATION_BASE + SATURATION_STEP * (index % 3) as f64;
    let value = VALUE_BASE + VALUE_STEP * (index % 2) as f64;
    Color::from_hsv(hue, saturation, value)
}

/// Generate `count` distinct colors (deterministic in `count` only)
pub fn generate_colors(count: usize) -> Vec<Color> {
    (0..count).map(|i| color_for(i, count)).collect()
}
