use glam::Vec3;

// Shared particle-cloud tuning constants used by both web and native frontends.

// Geometry
pub const BOUNDING_RADIUS_SCALE: f32 = 1.15; // padding applied to the max vertex distance
pub const RADIUS_EPSILON: f32 = 1e-4; // floor for any radius used as a divisor
pub const DISTANCE_EPSILON: f32 = 1e-3; // below this the pointer direction is undefined

// Dispersal targets
pub const EXPAND_MIN: f32 = 3.0;
pub const EXPAND_MAX: f32 = 7.0;
pub const EXPAND_JITTER_XY: f32 = 1.0; // half-width of the uniform jitter on x/y
pub const EXPAND_JITTER_Z: f32 = 0.5; // half-width of the uniform jitter on z
pub const ORIGIN_EPSILON: f32 = 1e-3; // particles this close to the centroid do not disperse

// Per-particle randomness
pub const STRENGTH_MIN: f32 = 0.5;
pub const STRENGTH_MAX: f32 = 1.0;
pub const ACCENT_PROBABILITY: f64 = 0.08;
pub const WHITE_PROBABILITY: f64 = 0.3;

// Displacement shaping
pub const TANGENT_STRENGTH: f32 = 0.3; // tangential push relative to radial
pub const NOISE_POSITION_SCALE: f32 = 2.0;
pub const NOISE_TIME_SCALE: f32 = 0.5;

// Pointer
pub const FAR_SENTINEL: Vec3 = Vec3::splat(9999.0);

// Ambient motion
pub const ROTATION_SPEED: f32 = 0.03; // radians per second at scroll 0
pub const ROTATION_SCROLL_SLOWDOWN: f32 = 0.5;
pub const HIT_PROXY_SCROLL_GROWTH: f32 = 4.0;

// Point sprites
pub const POINT_SIZE_BASE: f32 = 0.015;
pub const POINT_SIZE_SCROLL: f32 = 0.02;
pub const CLOUD_OPACITY: f32 = 0.9;

// Starfield
pub const STAR_COUNT: usize = 2000;
pub const STAR_RADIUS: f32 = 15.0;
pub const STAR_POINT_SIZE: f32 = 0.02;
pub const STAR_OPACITY: f32 = 0.4;
pub const STARFIELD_SEED: u64 = 7; // same sky on every load
pub const STAR_SPIN_X: f32 = 0.005;
pub const STAR_SPIN_Y: f32 = 0.01;

// Frame pacing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // longest step fed to the engine per frame

// Camera
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Background clear colour, hsl(220, 20%, 4%)
pub const CLEAR_RGB: [f64; 3] = [0.032, 0.038, 0.048];
