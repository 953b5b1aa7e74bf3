//! Listing color palette
//!
//! Five named colors shared read-only by every renderer, stored as plain
//! RGB triples so they round-trip through the settings file.

use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::constants::ACCENT_GREEN;

/// RGB color (0-255)
pub type Rgb = [u8; 3];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub tertiary: Rgb,
    pub background: Rgb,
    pub text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: [66, 133, 244],    // Blue
            secondary: [234, 67, 53],   // Red
            tertiary: [251, 188, 5],    // Yellow
            background: [250, 250, 250], // Light grey
            text: [32, 33, 36],         // Near black
        }
    }
}

impl Palette {
    /// Colors cycled through by index for task cards and mockup rows
    pub fn card_colors(&self) -> [Rgb; 4] {
        [self.primary, self.secondary, self.tertiary, ACCENT_GREEN]
    }

    /// Card color for slot `index`, wrapping around the four-color cycle
    pub fn card_color(&self, index: usize) -> Rgb {
        let colors = self.card_colors();
        colors[index % colors.len()]
    }
}

/// Fully opaque pixel from an RGB triple
pub fn opaque(color: Rgb) -> Rgba<u8> {
    translucent(color, 255)
}

pub fn translucent(color: Rgb, alpha: u8) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], alpha])
}

/// Linear blend between two colors at `t` in [0, 1], rounded per channel
pub fn lerp(from: Rgb, to: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t).round() as u8;
    [mix(from[0], to[0]), mix(from[1], to[1]), mix(from[2], to[2])]
}
