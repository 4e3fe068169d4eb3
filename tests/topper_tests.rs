// Host-side tests for the topper's per-component smoothing.

use arix_core::*;
use proptest::prelude::*;

const DT: f32 = 1.0 / 60.0;

fn run(topper: &mut Topper, progress: f32, frames: usize) {
    for i in 0..frames {
        topper.update(progress, DT, i as f32 * DT);
    }
}

#[test]
fn topper_starts_hidden_at_scattered_altitude() {
    let t = Topper::default();
    assert_eq!(t.position().y, TOPPER_SCATTERED_ALTITUDE);
    assert_eq!(t.position().x, 0.0);
    assert_eq!(t.applied_scale(), 0.0);
    assert_eq!(t.transform().scale, 0.0);
    assert_eq!(Topper::KIND, ElementKind::Topper);
}

#[test]
fn topper_settles_on_assembled_form() {
    let mut t = Topper::default();
    run(&mut t, 1.0, 600);
    let p = t.position();
    assert!((p.y - TOPPER_ASSEMBLED_ALTITUDE).abs() < 1e-3, "y={}", p.y);
    assert!(p.x.abs() < 1e-3, "x={}", p.x);
    assert!(t.rotation_z().abs() < 1e-3);
    assert!((t.scale_factor() - 1.0).abs() < 1e-3);
    let s = t.applied_scale();
    assert!((0.9 - 1e-3..=1.1 + 1e-3).contains(&s), "scale={s}");
}

#[test]
fn scattered_topper_drifts_aside_and_spins() {
    let mut t = Topper::default();
    run(&mut t, 0.0, 600);
    let p = t.position();
    assert!((p.x - TOPPER_SCATTER_SPREAD).abs() < 1e-3);
    assert!((p.y - TOPPER_SCATTERED_ALTITUDE).abs() < 1e-3);
    assert_eq!(t.applied_scale(), 0.0);
    // steady state where spin balances the pull back: spin_rate / rate = 0.5
    assert!(t.rotation_z() > 0.4, "rotation={}", t.rotation_z());
}

#[test]
fn topper_moves_gradually_not_instantly() {
    let mut t = Topper::default();
    t.update(1.0, DT, 0.0);
    let y = t.position().y;
    assert!(y < TOPPER_SCATTERED_ALTITUDE && y > TOPPER_ASSEMBLED_ALTITUDE);
    assert!(t.scale_factor() > 0.0 && t.scale_factor() < 0.1);
}

#[test]
fn huge_dt_does_not_overshoot() {
    let mut t = Topper::default();
    t.update(1.0, 1000.0, 0.0);
    assert!(t.position().y >= TOPPER_ASSEMBLED_ALTITUDE);
    assert!(t.scale_factor() <= 1.0);
    t.update(1.0, f32::NAN, 0.0);
    assert!(t.position().y.is_finite());
}

#[test]
fn pulsed_scale_is_clamped_at_zero() {
    assert_eq!(pulsed_scale(0.0, 1.0, 0.1, 3.0), 0.0);
    // an oversized pulse would go negative without the clamp
    let s = pulsed_scale(0.5, std::f32::consts::FRAC_PI_2, 3.0, 3.0);
    assert_eq!(s, 0.0);
    assert_eq!(pulsed_scale(f32::NAN, 1.0, 0.1, 3.0), 0.0);
}

proptest! {
    #[test]
    fn applied_scale_is_never_negative(
        base in 0.0f32..=1.0,
        elapsed in -1.0e4f32..1.0e4,
        amplitude in 0.0f32..5.0,
    ) {
        prop_assert!(pulsed_scale(base, elapsed, amplitude, TOPPER_PULSE_FREQUENCY) >= 0.0);
    }

    #[test]
    fn topper_scale_non_negative_through_any_schedule(
        progresses in proptest::collection::vec(0.0f32..=1.0, 1..50),
        dt in 0.0f32..0.5,
    ) {
        let mut t = Topper::default();
        let mut elapsed = 0.0;
        for p in progresses {
            elapsed += dt;
            t.update(p, dt, elapsed);
            prop_assert!(t.applied_scale() >= 0.0);
            prop_assert!((0.0..=1.0).contains(&t.scale_factor()));
        }
    }
}
