//! Height/morph driven color gradient for the point cloud, plus palette helpers.

use crate::constants::*;
use crate::error::{Result, SceneError};
use crate::morph::smoothstep;
use glam::Vec3;

/// Parameters of the height gradient.
///
/// Heights are normalized over `[height_low, height_high]` of the *assembled*
/// position, then pushed through `smoothstep(edge_low, edge_high, ..)`.
#[derive(Clone, Debug)]
pub struct GradientParams {
    pub low_color: Vec3,
    pub high_color: Vec3,
    pub height_low: f32,
    pub height_high: f32,
    pub edge_low: f32,
    pub edge_high: f32,
    pub jitter: f32,
}

impl Default for GradientParams {
    fn default() -> Self {
        Self {
            low_color: emerald(),
            high_color: gold(),
            height_low: GRADIENT_HEIGHT_LOW,
            height_high: GRADIENT_HEIGHT_HIGH,
            edge_low: GRADIENT_EDGE_LOW,
            edge_high: GRADIENT_EDGE_HIGH,
            jitter: GRADIENT_JITTER,
        }
    }
}

impl GradientParams {
    /// Normalized height of `y` over the gradient extent, clamped to `[0, 1]`.
    #[inline]
    pub fn normalized_height(&self, y: f32) -> f32 {
        let span = self.height_high - self.height_low;
        if span.abs() <= f32::EPSILON {
            return 0.0;
        }
        ((y - self.height_low) / span).clamp(0.0, 1.0)
    }

    /// Color of an element whose assembled height is `assembled_y`.
    ///
    /// The highlight color only shows up as `ease` approaches 1, and mostly
    /// near the top of the assembled shape.
    pub fn color_at(&self, assembled_y: f32, phase: f32, ease: f32, elapsed: f32) -> Vec3 {
        let h = self.normalized_height(assembled_y);
        let jitter = (elapsed + phase).sin() * self.jitter;
        let highlight = smoothstep(self.edge_low, self.edge_high, h + jitter);
        self.low_color.lerp(self.high_color, highlight * ease)
    }
}

/// Cosmetic alpha shimmer, bounded in `[0.6, 1.0]`.
#[inline]
pub fn shimmer_alpha(phase: f32, elapsed: f32) -> f32 {
    ALPHA_BASE + ALPHA_PULSE * (2.0 * elapsed + phase * POINT_PHASE_SPREAD).sin()
}

/// Parse `#RRGGBB` (or `RRGGBB`) into linear 0..1 components.
pub fn parse_hex(hex: &str) -> Result<Vec3> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SceneError::HexColor(hex.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map(|c| c as f32 / 255.0)
            .map_err(|_| SceneError::HexColor(hex.to_string()))
    };
    Ok(Vec3::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Parse a whole palette, failing on the first malformed entry.
pub fn parse_palette<S: AsRef<str>>(hexes: &[S]) -> Result<Vec<Vec3>> {
    hexes.iter().map(|h| parse_hex(h.as_ref())).collect()
}
