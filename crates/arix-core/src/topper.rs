//! The star on top: a singleton whose components are smoothed individually,
//! straight from raw progress rather than through a group morph value.

use crate::constants::*;
use crate::morph::{approach, lerp, sanitize_dt};
use crate::registry::ElementKind;
use crate::transform::InstanceTransform;
use glam::Vec3;

#[derive(Clone, Debug)]
pub struct TopperParams {
    pub scattered_altitude: f32,
    pub assembled_altitude: f32,
    pub scatter_spread: f32,
    pub rate: f32,
    pub spin_rate: f32,
    pub pulse_amplitude: f32,
    pub pulse_frequency: f32,
}

impl Default for TopperParams {
    fn default() -> Self {
        Self {
            scattered_altitude: TOPPER_SCATTERED_ALTITUDE,
            assembled_altitude: TOPPER_ASSEMBLED_ALTITUDE,
            scatter_spread: TOPPER_SCATTER_SPREAD,
            rate: TOPPER_RATE,
            spin_rate: TOPPER_SPIN_RATE,
            pulse_amplitude: TOPPER_PULSE_AMPLITUDE,
            pulse_frequency: TOPPER_PULSE_FREQUENCY,
        }
    }
}

/// Applied topper scale: the converging base modulated by a bounded sine
/// pulse, never negative.
#[inline]
pub fn pulsed_scale(base: f32, elapsed: f32, amplitude: f32, frequency: f32) -> f32 {
    let s = base * (1.0 + (elapsed * frequency).sin() * amplitude);
    if s.is_finite() {
        s.max(0.0)
    } else {
        0.0
    }
}

#[derive(Clone, Debug)]
pub struct Topper {
    pub params: TopperParams,
    position_y: f32,
    position_x: f32,
    rotation_z: f32,
    scale_factor: f32,
    applied_scale: f32,
}

impl Topper {
    pub const KIND: ElementKind = ElementKind::Topper;

    /// Starts hidden (scale 0) at the scattered altitude.
    pub fn new(params: TopperParams) -> Self {
        Self {
            position_y: params.scattered_altitude,
            position_x: 0.0,
            rotation_z: 0.0,
            scale_factor: 0.0,
            applied_scale: 0.0,
            params,
        }
    }

    pub fn update(&mut self, progress: f32, dt: f32, elapsed: f32) {
        let dt = sanitize_dt(dt);
        let p = progress.clamp(0.0, 1.0);
        let rate = self.params.rate;

        let target_y = lerp(self.params.scattered_altitude, self.params.assembled_altitude, p);
        self.position_y = approach(self.position_y, target_y, rate, dt);

        let target_x = (1.0 - p) * self.params.scatter_spread;
        self.position_x = approach(self.position_x, target_x, rate, dt);

        self.rotation_z = approach(self.rotation_z, 0.0, rate, dt);
        if p < 1.0 {
            self.rotation_z += dt * self.params.spin_rate * (1.0 - p);
        }

        self.scale_factor = approach(self.scale_factor, p, rate, dt).clamp(0.0, 1.0);
        self.applied_scale = pulsed_scale(
            self.scale_factor,
            elapsed,
            self.params.pulse_amplitude,
            self.params.pulse_frequency,
        );
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.position_x, self.position_y, 0.0)
    }

    #[inline]
    pub fn rotation_z(&self) -> f32 {
        self.rotation_z
    }

    #[inline]
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    #[inline]
    pub fn applied_scale(&self) -> f32 {
        self.applied_scale
    }

    pub fn transform(&self) -> InstanceTransform {
        InstanceTransform {
            position: self.position(),
            rotation: Vec3::new(0.0, 0.0, self.rotation_z),
            scale: self.applied_scale,
        }
    }
}

impl Default for Topper {
    fn default() -> Self {
        Self::new(TopperParams::default())
    }
}
