// Web front-end constants. Simulation tuning lives in `liquid_core::constants`.

// Log a debug summary of the field every this many frames (~10 s at 60 Hz)
pub const STATS_LOG_INTERVAL_FRAMES: u64 = 600;

// Canvas compositing used for the pool overlay
pub const POOL_COMPOSITE_OP: &str = "source-over";

// Used when the window reports no usable device pixel ratio
pub const FALLBACK_PIXEL_RATIO: f64 = 1.0;
