// Host-side tests for constants and their relationships.

use arix_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Rates and timing should be positive
    assert!(DEFAULT_MAX_STEPS >= 1);
    assert!(MAX_FRAME_DT > 0.0);
    assert!(POINT_MORPH_RATE > 0.0);
    assert!(INSTANCE_MORPH_RATE > 0.0);
    assert!(TOPPER_RATE > 0.0);

    // Sampling volumes
    assert!(FOLIAGE_CONE_HEIGHT > 0.0 && FOLIAGE_CONE_RADIUS > 0.0);
    assert!(ORNAMENT_CONE_HEIGHT > 0.0 && ORNAMENT_CONE_RADIUS > 0.0);
    assert!(FOLIAGE_SPHERE_RADIUS > 0.0 && ORNAMENT_SPHERE_RADIUS > 0.0);

    // Ranges should be ordered
    assert!(POINT_SIZE_MIN <= POINT_SIZE_MAX);
    assert!(ORNAMENT_SCALE_MIN <= ORNAMENT_SCALE_MAX);
    assert!(GRADIENT_HEIGHT_LOW < GRADIENT_HEIGHT_HIGH);
    assert!(GRADIENT_EDGE_LOW < GRADIENT_EDGE_HIGH);
    assert!(PLACEMENT_SCALE_MIN < 1.0 && 1.0 < PLACEMENT_SCALE_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn alpha_shimmer_stays_opaque_enough() {
    assert!((ALPHA_BASE - ALPHA_PULSE - 0.6).abs() < 1e-6);
    assert!(ALPHA_BASE + ALPHA_PULSE <= 1.0 + 1e-6);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn damping_and_push_factors() {
    // Damping is a fraction of the float amplitude
    assert!((0.0..=1.0).contains(&POINT_FLOAT_ASSEMBLED_DAMPING));
    // Ornaments are pushed outward, never inward
    assert!(SURFACE_PUSH_FACTOR >= 1.0);
    assert!(SURFACE_PUSH_MIN_RADIUS > 0.0);
    // A pulse larger than 1 would flip the topper inside out before clamping
    assert!(TOPPER_PULSE_AMPLITUDE < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn topper_lands_above_the_ornament_cone() {
    assert!(TOPPER_SCATTERED_ALTITUDE > TOPPER_ASSEMBLED_ALTITUDE);
    assert!(TOPPER_ASSEMBLED_ALTITUDE > FOLIAGE_CONE_HEIGHT / 2.0);
    assert!(TOPPER_ASSEMBLED_ALTITUDE > ORNAMENT_CONE_HEIGHT / 2.0);
}

#[test]
fn palettes_are_unit_colors() {
    for c in BAUBLE_PALETTE.iter().chain(BOX_PALETTE.iter()).chain([&EMERALD, &GOLD]) {
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)), "{c:?}");
    }
    assert_eq!(emerald().to_array(), EMERALD);
    assert_eq!(gold().to_array(), GOLD);
}

#[test]
fn default_groups_use_default_counts() {
    assert_eq!(GroupParams::foliage().count, FOLIAGE_COUNT);
    assert_eq!(GroupParams::baubles().count, BAUBLE_COUNT);
    assert_eq!(GroupParams::boxes().count, BOX_COUNT);
    assert_eq!(GroupParams::baubles().palette.len(), BAUBLE_PALETTE.len());
    assert_eq!(GroupParams::boxes().palette.len(), BOX_PALETTE.len());
}
