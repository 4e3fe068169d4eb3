use glam::Vec3;

// Shared tuning constants used by the core engine and both frontends.

// Progress
pub const DEFAULT_MAX_STEPS: u32 = 4; // interaction clicks from scattered to assembled

// Frame timing
pub const MAX_FRAME_DT: f32 = 0.1; // seconds; larger deltas are clamped before filtering

// Morph rates (per second)
pub const POINT_MORPH_RATE: f32 = 2.0;
pub const INSTANCE_MORPH_RATE: f32 = 1.5;
pub const TOPPER_RATE: f32 = 2.0;

// Foliage (diffuse point cloud)
pub const FOLIAGE_COUNT: usize = 4000;
pub const FOLIAGE_CONE_HEIGHT: f32 = 12.0;
pub const FOLIAGE_CONE_RADIUS: f32 = 4.5;
pub const FOLIAGE_SPHERE_RADIUS: f32 = 15.0;
pub const POINT_SIZE_MIN: f32 = 4.0;
pub const POINT_SIZE_MAX: f32 = 10.0;

// Ornaments (instanced meshes)
pub const BAUBLE_COUNT: usize = 150;
pub const BOX_COUNT: usize = 50;
pub const ORNAMENT_CONE_HEIGHT: f32 = 11.0;
pub const ORNAMENT_CONE_RADIUS: f32 = 4.2;
pub const ORNAMENT_SPHERE_RADIUS: f32 = 12.0;
pub const ORNAMENT_SCALE_MIN: f32 = 0.2;
pub const ORNAMENT_SCALE_MAX: f32 = 0.45;
pub const SURFACE_PUSH_FACTOR: f32 = 1.1; // ornaments sit on the cone surface
pub const SURFACE_PUSH_MIN_RADIUS: f32 = 0.1; // skip the push near the trunk axis

// Secondary motion
pub const POINT_FLOAT_AMPLITUDE: f32 = 0.2;
pub const POINT_FLOAT_ASSEMBLED_DAMPING: f32 = 0.8; // assembled points keep 20% of their float
pub const POINT_PHASE_SPREAD: f32 = 10.0;
pub const INSTANCE_FLOAT_AMPLITUDE: f32 = 0.5;
pub const INSTANCE_DRIFT_RATE_X: f32 = 0.2; // rad/s while scattered
pub const INSTANCE_DRIFT_RATE_Y: f32 = 0.1;

// Color gradient
pub const GRADIENT_HEIGHT_LOW: f32 = -5.0;
pub const GRADIENT_HEIGHT_HIGH: f32 = 5.0;
pub const GRADIENT_EDGE_LOW: f32 = 0.6;
pub const GRADIENT_EDGE_HIGH: f32 = 1.0;
pub const GRADIENT_JITTER: f32 = 0.1;
pub const ALPHA_BASE: f32 = 0.8;
pub const ALPHA_PULSE: f32 = 0.2;

pub const EMERALD: [f32; 3] = [0.02, 0.39, 0.03];
pub const GOLD: [f32; 3] = [1.0, 0.84, 0.0];

// Ornament palettes (#D4AF37 #F3E5AB #B8860B #FFFFFF and #046307 #024204 #D4AF37)
pub const BAUBLE_PALETTE: [[f32; 3]; 4] = [
    [0.831, 0.686, 0.216], // metallic gold
    [0.953, 0.898, 0.671], // champagne
    [0.722, 0.525, 0.043], // dark goldenrod
    [1.0, 1.0, 1.0],
];
pub const BOX_PALETTE: [[f32; 3]; 3] = [
    [0.016, 0.388, 0.027], // emerald
    [0.008, 0.259, 0.016], // deep emerald
    [0.831, 0.686, 0.216], // metallic gold
];

// Topper
pub const TOPPER_SCATTERED_ALTITUDE: f32 = 10.0;
pub const TOPPER_ASSEMBLED_ALTITUDE: f32 = 6.5;
pub const TOPPER_SCATTER_SPREAD: f32 = 5.0;
pub const TOPPER_SPIN_RATE: f32 = 1.0; // rad/s at progress 0
pub const TOPPER_PULSE_AMPLITUDE: f32 = 0.1;
pub const TOPPER_PULSE_FREQUENCY: f32 = 3.0;

// Placement calibration
pub const GROUP_BASE_HEIGHT: f32 = -4.0;
pub const GROUP_SPIN_RATE: f32 = 0.05; // rad/s around +Y
pub const PLACEMENT_SCALE_MIN: f32 = 0.1;
pub const PLACEMENT_SCALE_MAX: f32 = 3.0;
pub const PLACEMENT_OFFSET_LIMIT: f32 = 10.0;

#[inline]
pub fn emerald() -> Vec3 {
    Vec3::from(EMERALD)
}

#[inline]
pub fn gold() -> Vec3 {
    Vec3::from(GOLD)
}
