// Host-side tests for easing, frame-delta sanitation and the morph filter.

use arix_core::*;
use proptest::prelude::*;

#[test]
fn ease_fixed_points() {
    assert_eq!(ease(0.0), 0.0);
    assert_eq!(ease(1.0), 1.0);
    assert!((ease(0.5) - 0.5).abs() < 1e-7);
}

#[test]
fn ease_is_monotonic_and_symmetric() {
    let mut prev = ease(0.0);
    for i in 1..=1000 {
        let t = i as f32 / 1000.0;
        let v = ease(t);
        assert!(v >= prev, "ease decreased at t={t}");
        assert!(
            (v + ease(1.0 - t) - 1.0).abs() < 1e-5,
            "ease not symmetric at t={t}"
        );
        prev = v;
    }
}

#[test]
fn ease_clamps_out_of_range_input() {
    assert_eq!(ease(-0.5), 0.0);
    assert_eq!(ease(1.7), 1.0);
}

#[test]
fn smoothstep_matches_glsl_shape() {
    assert_eq!(smoothstep(0.6, 1.0, 0.2), 0.0);
    assert_eq!(smoothstep(0.6, 1.0, 1.4), 1.0);
    assert!((smoothstep(0.6, 1.0, 0.8) - 0.5).abs() < 1e-6);
    // degenerate edges behave like a step
    assert_eq!(smoothstep(0.5, 0.5, 0.4), 0.0);
    assert_eq!(smoothstep(0.5, 0.5, 0.6), 1.0);
}

#[test]
fn sanitize_dt_handles_pathological_values() {
    assert_eq!(sanitize_dt(f32::NAN), 0.0);
    assert_eq!(sanitize_dt(f32::INFINITY), 0.0);
    assert_eq!(sanitize_dt(-0.5), 0.0);
    assert_eq!(sanitize_dt(0.0), 0.0);
    assert_eq!(sanitize_dt(30.0), MAX_FRAME_DT);
    assert!((sanitize_dt(0.016) - 0.016).abs() < 1e-9);
}

#[test]
fn morph_first_step_matches_rate() {
    let mut f = MorphFilter::new(2.0);
    let v = f.update(1.0, 0.1);
    assert!((v - 0.2).abs() < 1e-6, "got {v}");
    assert_eq!(f.value(), v);
}

#[test]
fn morph_converges_monotonically() {
    let mut f = MorphFilter::new(2.0);
    let mut prev = f.value();
    let mut steps = 0;
    while (1.0 - f.value()) > 1e-3 {
        let v = f.update(1.0, 0.1);
        assert!(v > prev, "not increasing at step {steps}");
        assert!(v <= 1.0);
        prev = v;
        steps += 1;
        assert!(steps <= 40, "did not converge in 40 steps");
    }
    // (1 - 0.2)^n < 1e-3 first holds at n = 31
    assert!((29..=33).contains(&steps), "converged after {steps} steps");
}

#[test]
fn morph_clamps_overshoot_in_both_directions() {
    let mut up = MorphFilter::new(50.0);
    assert_eq!(up.update(1.0, 0.1), 1.0);

    let mut down = MorphFilter::with_value(50.0, 1.0);
    assert_eq!(down.update(0.0, 0.1), 0.0);
}

#[test]
fn fast_morph_settles_on_intermediate_target() {
    // rate * dt = 2.5 would overshoot past the target every frame
    let mut f = MorphFilter::new(25.0);
    let values: Vec<f32> = (0..200).map(|_| f.update(0.5, 0.1)).collect();
    for v in &values[values.len() - 10..] {
        assert!((v - 0.5).abs() < 1e-6, "settled at {v}");
    }
    for pair in values.windows(2) {
        assert!(pair[1] >= pair[0], "moved away from target: {pair:?}");
    }
}

#[test]
fn morph_ignores_nan_and_zero_dt() {
    let mut f = MorphFilter::with_value(2.0, 0.4);
    assert_eq!(f.update(1.0, 0.0), 0.4);
    assert_eq!(f.update(1.0, f32::NAN), 0.4);
    assert_eq!(f.update(1.0, -1.0), 0.4);
}

#[test]
fn morph_eased_value_uses_smoothstep() {
    let f = MorphFilter::with_value(1.5, 0.25);
    assert!((f.eased() - ease(0.25)).abs() < 1e-7);
    assert_eq!(f.rate(), 1.5);
}

#[test]
fn approach_never_passes_target() {
    // rate * dt would be 10x the distance without the cap
    let v = approach(0.0, 5.0, 100.0, 0.1);
    assert_eq!(v, 5.0);
    let v = approach(10.0, 6.5, 2.0, 0.05);
    assert!(v < 10.0 && v > 6.5);
}

proptest! {
    #[test]
    fn ease_stays_in_unit_interval(t in -10.0f32..10.0) {
        let v = ease(t);
        prop_assert!((0.0..=1.0).contains(&v));
    }

    #[test]
    fn morph_value_always_in_unit_interval(
        start in 0.0f32..=1.0,
        target in 0.0f32..=1.0,
        rate in 0.0f32..100.0,
        dt in -1.0f32..10.0,
    ) {
        let mut f = MorphFilter::with_value(rate, start);
        for _ in 0..8 {
            let v = f.update(target, dt);
            prop_assert!(v.is_finite());
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn morph_never_moves_away_from_target(
        start in 0.0f32..=1.0,
        target in 0.0f32..=1.0,
        rate in 0.0f32..100.0,
        dt in 0.0f32..1.0,
    ) {
        let mut f = MorphFilter::with_value(rate, start);
        let mut gap = (target - f.value()).abs();
        for _ in 0..16 {
            f.update(target, dt);
            let next = (target - f.value()).abs();
            prop_assert!(next <= gap + 1e-6, "gap grew from {} to {}", gap, next);
            gap = next;
        }
    }

    #[test]
    fn sanitized_dt_is_bounded(dt in proptest::num::f32::ANY) {
        let s = sanitize_dt(dt);
        prop_assert!((0.0..=MAX_FRAME_DT).contains(&s));
    }
}
