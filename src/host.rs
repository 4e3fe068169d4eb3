use arix_core::{parse_palette, GroupParams, InstanceRaw, Placement, PointVertex, Result};
use glam::Mat4;

// Layout of the flat arrays handed to JavaScript.
pub const POINT_STRIDE: usize = 8; // xyz, size, rgba
pub const INSTANCE_STRIDE: usize = 20; // 4x4 column-major model, rgba

#[inline]
pub fn points_f32(verts: &[PointVertex]) -> &[f32] {
    bytemuck::cast_slice(verts)
}

#[inline]
pub fn instances_f32(instances: &[InstanceRaw]) -> &[f32] {
    bytemuck::cast_slice(instances)
}

#[inline]
pub fn matrix_f32(m: &Mat4) -> [f32; 16] {
    m.to_cols_array()
}

/// JS numbers arrive as f64; anything that is not a non-negative integer
/// falls back to a random seed.
pub fn seed_from_js(seed: Option<f64>) -> u64 {
    match seed {
        Some(s) if s.is_finite() && s >= 0.0 && s <= u64::MAX as f64 => s as u64,
        _ => rand::random(),
    }
}

#[inline]
pub fn placement_from_js(scale: f32, x: f32, y: f32) -> Placement {
    Placement::new(scale, x, y)
}

/// Copy of `params` with its palette replaced by parsed CSS hex colors.
pub fn with_hex_palette<S: AsRef<str>>(params: &GroupParams, hexes: &[S]) -> Result<GroupParams> {
    let palette = parse_palette(hexes)?;
    Ok(params.clone().with_palette(palette))
}
