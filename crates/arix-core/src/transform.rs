//! Per-frame instance transform synthesis for the instanced-mesh groups.

use crate::constants::*;
use crate::registry::{Element, ElementRegistry};
use glam::{EulerRot, Mat4, Quat, Vec3, Vec4};

/// Position, Euler XYZ rotation and uniform scale of one instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InstanceTransform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl InstanceTransform {
    pub fn to_matrix(&self) -> Mat4 {
        let q = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), q, self.position)
    }
}

/// GPU-ready per-instance record: column-major model matrix + RGBA color.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

/// Minimal capability the composer needs from a render target.
pub trait InstanceSink {
    fn set_transform(&mut self, index: usize, transform: &InstanceTransform);
    fn set_color(&mut self, index: usize, color: Vec3);
}

/// CPU-side instance buffer, ready for `queue.write_buffer`-style uploads.
#[derive(Clone, Debug, Default)]
pub struct InstanceBuffer {
    instances: Vec<InstanceRaw>,
}

impl InstanceBuffer {
    pub fn with_len(len: usize) -> Self {
        let mut buffer = Self::default();
        buffer.resize(len);
        buffer
    }

    pub fn resize(&mut self, len: usize) {
        self.instances.resize(
            len,
            InstanceRaw {
                model: Mat4::IDENTITY.to_cols_array_2d(),
                color: [1.0; 4],
            },
        );
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[InstanceRaw] {
        &self.instances
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl InstanceSink for InstanceBuffer {
    fn set_transform(&mut self, index: usize, transform: &InstanceTransform) {
        if let Some(slot) = self.instances.get_mut(index) {
            slot.model = transform.to_matrix().to_cols_array_2d();
        }
    }

    fn set_color(&mut self, index: usize, color: Vec3) {
        if let Some(slot) = self.instances.get_mut(index) {
            slot.color = Vec4::from((color, 1.0)).to_array();
        }
    }
}

/// Secondary motion while an instance is not fully assembled.
///
/// - `float_amplitude`: vertical bob amplitude at `ease == 0`
/// - `drift_rate_x`, `drift_rate_y`: rotation drift in rad/s at `ease == 0`
#[derive(Clone, Debug)]
pub struct MotionParams {
    pub float_amplitude: f32,
    pub drift_rate_x: f32,
    pub drift_rate_y: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            float_amplitude: INSTANCE_FLOAT_AMPLITUDE,
            drift_rate_x: INSTANCE_DRIFT_RATE_X,
            drift_rate_y: INSTANCE_DRIFT_RATE_Y,
        }
    }
}

/// Transform of `element` at eased morph value `ease` and elapsed time `t`.
///
/// Depends only on its arguments; the bob phase comes from the element's own
/// `phase` so neighbours don't move in lockstep.
pub fn compose_instance(
    element: &Element,
    ease: f32,
    elapsed: f32,
    motion: &MotionParams,
) -> InstanceTransform {
    let loose = 1.0 - ease;
    let mut position = element.scattered.lerp(element.assembled, ease);
    position.y += (elapsed + element.phase).sin() * motion.float_amplitude * loose;
    let rotation = Vec3::new(
        element.base_rotation.x + elapsed * motion.drift_rate_x * loose,
        element.base_rotation.y + elapsed * motion.drift_rate_y * loose,
        element.base_rotation.z,
    );
    InstanceTransform {
        position,
        rotation,
        scale: element.scale,
    }
}

/// Write every element's transform into its own slot of `sink`.
pub fn compose_instances<S: InstanceSink + ?Sized>(
    registry: &ElementRegistry,
    ease: f32,
    elapsed: f32,
    motion: &MotionParams,
    sink: &mut S,
) {
    for (i, element) in registry.elements().iter().enumerate() {
        sink.set_transform(i, &compose_instance(element, ease, elapsed, motion));
    }
}

/// Write the static per-instance colors. Must run right after a registry
/// (re)build and before the first frame update reads the sink.
pub fn write_static_colors<S: InstanceSink + ?Sized>(registry: &ElementRegistry, sink: &mut S) {
    for (i, element) in registry.elements().iter().enumerate() {
        sink.set_color(i, element.color);
    }
}
