use crate::constants::*;
use glam::{Mat4, Quat, Vec2, Vec3};

/// Projection calibration applied to the whole composed group, independent of
/// the per-element morph math.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub scale: f32,
    pub offset: Vec2,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl Placement {
    /// Build a placement with every component clamped to the calibration range.
    pub fn new(scale: f32, x: f32, y: f32) -> Self {
        let finite_or = |v: f32, d: f32| if v.is_finite() { v } else { d };
        Self {
            scale: finite_or(scale, 1.0).clamp(PLACEMENT_SCALE_MIN, PLACEMENT_SCALE_MAX),
            offset: Vec2::new(
                finite_or(x, 0.0).clamp(-PLACEMENT_OFFSET_LIMIT, PLACEMENT_OFFSET_LIMIT),
                finite_or(y, 0.0).clamp(-PLACEMENT_OFFSET_LIMIT, PLACEMENT_OFFSET_LIMIT),
            ),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// World matrix of the group: lifted to its base height plus offset,
    /// slowly spinning about +Y, uniformly scaled.
    pub fn group_matrix(&self, elapsed: f32) -> Mat4 {
        let translation = Vec3::new(self.offset.x, GROUP_BASE_HEIGHT + self.offset.y, 0.0);
        let spin = Quat::from_rotation_y(elapsed * GROUP_SPIN_RATE);
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), spin, translation)
    }
}
