//! Volumetric point sampling for the two target configurations.
//!
//! Every generator comes in two forms: a pure `*_point` function taking its
//! uniforms explicitly, and a `sample_*` wrapper that draws them from any
//! `rand::Rng`. The pure forms are what the tests pin down.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Map three uniforms in `[0, 1)` to a point inside a sphere of `radius`.
///
/// The radius uses a cube root so density is uniform by volume.
#[inline]
pub fn sphere_point(radius: f32, u: f32, v: f32, w: f32) -> Vec3 {
    let theta = TAU * u;
    let phi = (2.0 * v - 1.0).clamp(-1.0, 1.0).acos();
    let r = radius * w.cbrt();
    let sin_phi = phi.sin();
    Vec3::new(
        r * sin_phi * theta.cos(),
        r * sin_phi * theta.sin(),
        r * phi.cos(),
    )
}

/// Map three uniforms in `[0, 1)` to a point inside an upright cone.
///
/// - `u` picks the height, the radius tapers linearly to zero at the apex
/// - `v` picks the angle around the axis
/// - `w` picks the radial position; the square root keeps each slice uniform by area
///
/// The result is centered vertically: `y` lies in `[-height/2, height/2)`.
#[inline]
pub fn cone_point(height: f32, base_radius: f32, u: f32, v: f32, w: f32) -> Vec3 {
    let y = u * height;
    let radius_at = base_radius * (1.0 - y / height);
    let angle = TAU * v;
    let r = radius_at * w.sqrt();
    Vec3::new(r * angle.cos(), y - height / 2.0, r * angle.sin())
}

pub fn sample_sphere<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let u = rng.gen::<f32>();
    let v = rng.gen::<f32>();
    let w = rng.gen::<f32>();
    sphere_point(radius, u, v, w)
}

pub fn sample_cone<R: Rng + ?Sized>(rng: &mut R, height: f32, base_radius: f32) -> Vec3 {
    let u = rng.gen::<f32>();
    let v = rng.gen::<f32>();
    let w = rng.gen::<f32>();
    cone_point(height, base_radius, u, v, w)
}

/// Distance from the vertical (Y) axis.
#[inline]
pub fn horizontal_radius(p: Vec3) -> f32 {
    (p.x * p.x + p.z * p.z).sqrt()
}

/// Push a point outward along its horizontal radius so it sits on the cone
/// surface instead of inside the volume.
///
/// Points closer than `min_radius` to the axis are returned unchanged; the
/// direction is meaningless there and scaling would only amplify noise.
#[inline]
pub fn push_to_surface(p: Vec3, factor: f32, min_radius: f32) -> Vec3 {
    if horizontal_radius(p) > min_radius {
        Vec3::new(p.x * factor, p.y, p.z * factor)
    } else {
        p
    }
}
