//! Time-decoupled smoothing of the discretely stepped progress signal.

use crate::constants::MAX_FRAME_DT;

/// Cubic smoothstep easing, `t²(3 - 2t)`. Input is clamped to `[0, 1]`.
#[inline]
pub fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// GLSL-style `smoothstep(edge0, edge1, x)`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 == edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    ease((x - edge0) / (edge1 - edge0))
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Make a host-provided frame delta safe for the exponential filters.
///
/// Non-finite and negative deltas become 0; anything above `MAX_FRAME_DT`
/// (a paused tab, a debugger break) is clamped down.
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt.min(MAX_FRAME_DT)
    } else {
        0.0
    }
}

/// Move `current` toward `target` by `rate * dt` of the remaining distance.
///
/// The step fraction is capped at 1 so the result never passes the target.
#[inline]
pub fn approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let k = (rate * sanitize_dt(dt)).clamp(0.0, 1.0);
    current + (target - current) * k
}

/// First-order filter converging a group's morph value toward the target
/// progress. One instance per animated group.
#[derive(Clone, Debug)]
pub struct MorphFilter {
    value: f32,
    rate: f32,
}

impl MorphFilter {
    pub fn new(rate: f32) -> Self {
        Self { value: 0.0, rate }
    }

    pub fn with_value(rate: f32, value: f32) -> Self {
        Self {
            value: value.clamp(0.0, 1.0),
            rate,
        }
    }

    /// Advance one frame toward `target` and return the new value.
    ///
    /// The step fraction `rate * dt` is capped at 1 so a fast group settles
    /// on the target instead of oscillating; the result stays in `[0, 1]`.
    pub fn update(&mut self, target: f32, dt: f32) -> f32 {
        let k = (self.rate * sanitize_dt(dt)).clamp(0.0, 1.0);
        let next = self.value + (target - self.value) * k;
        self.value = if next.is_finite() {
            next.clamp(0.0, 1.0)
        } else {
            target.clamp(0.0, 1.0)
        };
        self.value
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Eased morph value; this, never raw progress, drives interpolation.
    #[inline]
    pub fn eased(&self) -> f32 {
        ease(self.value)
    }
}
