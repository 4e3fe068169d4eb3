//! Diffuse point cloud: per-vertex position, size and gradient color.

use crate::color::{shimmer_alpha, GradientParams};
use crate::constants::*;
use crate::registry::{Element, ElementRegistry};
use glam::{Vec3, Vec4};

/// GPU-ready point record (32 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

/// Breathing motion of the cloud. Unlike instances the points keep a little
/// float (`1 - assembled_damping`) even when fully assembled.
#[derive(Clone, Debug)]
pub struct PointMotion {
    pub amplitude: f32,
    pub assembled_damping: f32,
    pub phase_spread: f32,
}

impl Default for PointMotion {
    fn default() -> Self {
        Self {
            amplitude: POINT_FLOAT_AMPLITUDE,
            assembled_damping: POINT_FLOAT_ASSEMBLED_DAMPING,
            phase_spread: POINT_PHASE_SPREAD,
        }
    }
}

pub fn point_position(element: &Element, ease: f32, elapsed: f32, motion: &PointMotion) -> Vec3 {
    let base = element.scattered.lerp(element.assembled, ease);
    let speed = 1.0 + element.phase;
    let amp = motion.amplitude * (1.0 - ease * motion.assembled_damping);
    let offset = element.phase * motion.phase_spread;
    let t = elapsed * speed;
    base + Vec3::new(
        (t + offset).sin(),
        (t * 0.8 + offset).cos(),
        (t * 1.2 + offset).sin(),
    ) * amp
}

pub fn compose_point(
    element: &Element,
    ease: f32,
    elapsed: f32,
    motion: &PointMotion,
    gradient: &GradientParams,
) -> PointVertex {
    let position = point_position(element, ease, elapsed, motion);
    let rgb = gradient.color_at(element.assembled.y, element.phase, ease, elapsed);
    let alpha = shimmer_alpha(element.phase, elapsed);
    PointVertex {
        position: position.to_array(),
        size: element.scale,
        color: Vec4::from((rgb, alpha)).to_array(),
    }
}

/// Rewrite `out` with one vertex per registry element.
pub fn compose_points(
    registry: &ElementRegistry,
    ease: f32,
    elapsed: f32,
    motion: &PointMotion,
    gradient: &GradientParams,
    out: &mut Vec<PointVertex>,
) {
    out.resize(registry.len(), PointVertex::default());
    for (slot, element) in out.iter_mut().zip(registry.elements()) {
        *slot = compose_point(element, ease, elapsed, motion, gradient);
    }
}
