// src/colors.rs

use crate::config::Theme;
use crate::model::{ChangeRecord, ColorToken, Timestamp, NO_COLOR};
use palette::{FromColor, Lch, LinSrgb, Srgb};
use std::collections::HashMap;

/// Number of colors in the built-in scales
pub const DEFAULT_SCALE_LEN: usize = 10;

/// Maps revision timestamps to colors by recency: the newest distinct
/// timestamp gets the first color of the scale, the next one the second, and
/// so on. Timestamps past the end of the scale have no color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorIndex {
    colors: HashMap<Timestamp, ColorToken>,
}

impl ColorIndex {
    pub fn build(records: &[ChangeRecord], scale: &[ColorToken]) -> Self {
        let mut timestamps: Vec<Timestamp> = records.iter().map(|r| r.timestamp).collect();
        timestamps.sort_unstable_by(|a, b| b.cmp(a));
        timestamps.dedup();

        let colors = timestamps.into_iter().zip(scale.iter().cloned()).collect();
        Self { colors }
    }

    /// Falls back to [`NO_COLOR`] for timestamps without a color.
    pub fn color_for(&self, timestamp: Timestamp) -> &str {
        self.colors.get(&timestamp).map_or(NO_COLOR, String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// The built-in scale for a theme, from a warm highlight for the newest
/// revision fading towards the background.
pub fn default_scale(theme: Theme) -> Vec<ColorToken> {
    match theme {
        Theme::Dark => gradient(
            Lch::new(48.0f32, 50.0f32, 55.0f32),
            Lch::new(16.0f32, 12.0f32, 260.0f32),
            DEFAULT_SCALE_LEN,
        ),
        Theme::Light => gradient(
            Lch::new(86.0f32, 45.0f32, 75.0f32),
            Lch::new(97.0f32, 6.0f32, 240.0f32),
            DEFAULT_SCALE_LEN,
        ),
    }
}

fn gradient(start: Lch, end: Lch, steps: usize) -> Vec<ColorToken> {
    let start = LinSrgb::from_color(start);
    let end = LinSrgb::from_color(end);

    (0..steps)
        .map(|i| {
            let t = if steps > 1 { i as f32 / (steps - 1) as f32 } else { 0.0f32 };
            let mixed = LinSrgb::new(
                start.red + (end.red - start.red) * t,
                start.green + (end.green - start.green) * t,
                start.blue + (end.blue - start.blue) * t,
            );
            to_token(Srgb::from_linear(mixed))
        })
        .collect()
}

fn to_token(color: Srgb<f32>) -> ColorToken {
    let (r, g, b) = color.into_components();
    let r_u8 = (r.clamp(0.0, 1.0) * 255.0f32).round() as u8;
    let g_u8 = (g.clamp(0.0, 1.0) * 255.0f32).round() as u8;
    let b_u8 = (b.clamp(0.0, 1.0) * 255.0f32).round() as u8;
    format!("#{:02x}{:02x}{:02x}", r_u8, g_u8, b_u8)
}

/// Reads a `#rrggbb` or `#rgb` token. Anything else, including
/// [`NO_COLOR`], is not a paintable color.
pub fn parse_token(token: &str) -> Option<Srgb<u8>> {
    // palette slices hex digits by byte
    if !token.is_ascii() {
        return None;
    }
    token.parse::<Srgb<u8>>().ok()
}
