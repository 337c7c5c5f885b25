use crate::color::Rgb;
use crate::config::Span;

// Shared tuning constants for the particle field. The values are visual
// tuning only; `FieldConfig` exposes them as overridable fields.

// Population
pub const PARTICLE_COUNT_COMPACT: usize = 30;
pub const PARTICLE_COUNT_FULL: usize = 150;
pub const COMPACT_VIEWPORT_MAX_WIDTH: f64 = 768.0; // viewports narrower than this are "mobile"

// Palette: indigo, purple, violet
pub const PALETTE: [Rgb; 3] = [
    Rgb::new(99, 102, 241),
    Rgb::new(139, 92, 246),
    Rgb::new(168, 85, 247),
];
pub const POOL_ACCENT: Rgb = PALETTE[0];

// Spawn ranges (half-open)
pub const SPAWN_VELOCITY_X: Span = Span::new(-1.0, 1.0);
pub const SPAWN_VELOCITY_Y: Span = Span::new(1.0, 3.0);
pub const SPAWN_RADIUS: Span = Span::new(1.0, 4.0);
pub const SPAWN_ALPHA: Span = Span::new(0.3, 0.8);
pub const INITIAL_SPAWN_DEPTH: f32 = 500.0; // first batch starts in [-depth, 0)
pub const RESPAWN_Y: f32 = -20.0; // recycled particles re-enter just above the top edge

// Pooling
pub const POOL_BAND_HEIGHT: f32 = 100.0;
pub const DAMPING_VY: f32 = 0.95;
pub const DAMPING_VX: f32 = 0.98;
pub const REST_OFFSET: f32 = 50.0; // resting band starts this far above the bottom edge
pub const REST_BAND_JITTER: f32 = 50.0;
pub const RECYCLE_MARGIN: f32 = 20.0;

// Sway once settled
pub const SETTLE_SPEED: f32 = 0.5;
pub const SWAY_AMPLITUDE: f32 = 0.5;
pub const SWAY_TIME_FREQ: f64 = 0.001; // per millisecond
pub const SWAY_SPACE_FREQ: f64 = 0.01; // per logical px

// Halo drawn over each particle
pub const HALO_RADIUS_SCALE: f32 = 3.0;
pub const HALO_ALPHA_SCALE: f32 = 0.5;

// Liquid-pool overlay
pub const POOL_WAVE_STEP: f32 = 20.0;
pub const POOL_WAVE_AMPLITUDE: f32 = 8.0;
pub const POOL_WAVE_SPACE_FREQ: f64 = 0.02;
pub const POOL_WAVE_TIME_FREQ: f64 = 0.001;
pub const POOL_GRADIENT_OVERHANG: f32 = 50.0; // gradient starts this far above the band's crest
pub const POOL_GRADIENT_STOPS: [(f32, f32); 3] = [(0.0, 0.0), (0.3, 0.05), (1.0, 0.15)]; // (offset, alpha)
