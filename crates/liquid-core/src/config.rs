//! Tunables for the particle field.
//!
//! `FieldConfig::default()` reproduces the stock look; every value is a plain
//! field so front-ends can retune without touching the update rule.

use crate::color::Rgb;
use crate::constants::*;
use rand::Rng;
use thiserror::Error;

/// Half-open range `[min, max)` sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Uniform sample; collapses to `min` when the span is empty.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max > self.min {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v < self.max
    }

    fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.max > self.min
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("particle count must be at least 1")]
    NoParticles,
    #[error("{name} range is empty or inverted: [{min}, {max})")]
    BadSpan {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("spawn alpha must lie in (0, 1], got [{min}, {max})")]
    AlphaOutOfRange { min: f32, max: f32 },
    #[error("{name} must be in (0, 1], got {value}")]
    BadDamping { name: &'static str, value: f32 },
    #[error("{name} must be non-negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("spawn radius must be positive, got a minimum of {0}")]
    NonPositiveRadius(f32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub palette: [Rgb; 3],
    pub spawn_velocity_x: Span,
    pub spawn_velocity_y: Span,
    pub spawn_radius: Span,
    pub spawn_alpha: Span,
    pub initial_spawn_depth: f32,
    pub respawn_y: f32,
    pub pool_band_height: f32,
    pub damping_vy: f32,
    pub damping_vx: f32,
    pub rest_offset: f32,
    pub rest_band_jitter: f32,
    pub recycle_margin: f32,
    pub settle_speed: f32,
    pub sway_amplitude: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT_FULL,
            palette: PALETTE,
            spawn_velocity_x: SPAWN_VELOCITY_X,
            spawn_velocity_y: SPAWN_VELOCITY_Y,
            spawn_radius: SPAWN_RADIUS,
            spawn_alpha: SPAWN_ALPHA,
            initial_spawn_depth: INITIAL_SPAWN_DEPTH,
            respawn_y: RESPAWN_Y,
            pool_band_height: POOL_BAND_HEIGHT,
            damping_vy: DAMPING_VY,
            damping_vx: DAMPING_VX,
            rest_offset: REST_OFFSET,
            rest_band_jitter: REST_BAND_JITTER,
            recycle_margin: RECYCLE_MARGIN,
            settle_speed: SETTLE_SPEED,
            sway_amplitude: SWAY_AMPLITUDE,
        }
    }
}

/// Particle count for a viewport of the given logical width.
#[inline]
pub fn particle_count_for_viewport(viewport_width: f64) -> usize {
    if viewport_width < COMPACT_VIEWPORT_MAX_WIDTH {
        PARTICLE_COUNT_COMPACT
    } else {
        PARTICLE_COUNT_FULL
    }
}

impl FieldConfig {
    /// Stock configuration with the particle count picked by viewport width.
    pub fn for_viewport(viewport_width: f64) -> Self {
        Self {
            particle_count: particle_count_for_viewport(viewport_width),
            ..Self::default()
        }
    }

    pub fn with_particle_count(mut self, particle_count: usize) -> Self {
        self.particle_count = particle_count;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::NoParticles);
        }
        for (name, span) in [
            ("spawn_velocity_x", self.spawn_velocity_x),
            ("spawn_velocity_y", self.spawn_velocity_y),
            ("spawn_radius", self.spawn_radius),
            ("spawn_alpha", self.spawn_alpha),
        ] {
            if !span.is_valid() {
                return Err(ConfigError::BadSpan {
                    name,
                    min: span.min,
                    max: span.max,
                });
            }
        }
        let alpha = self.spawn_alpha;
        if alpha.min <= 0.0 || alpha.max > 1.0 {
            return Err(ConfigError::AlphaOutOfRange {
                min: alpha.min,
                max: alpha.max,
            });
        }
        if self.spawn_radius.min <= 0.0 {
            return Err(ConfigError::NonPositiveRadius(self.spawn_radius.min));
        }
        for (name, value) in [("damping_vy", self.damping_vy), ("damping_vx", self.damping_vx)] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::BadDamping { name, value });
            }
        }
        for (name, value) in [
            ("initial_spawn_depth", self.initial_spawn_depth),
            ("pool_band_height", self.pool_band_height),
            ("rest_offset", self.rest_offset),
            ("rest_band_jitter", self.rest_band_jitter),
            ("recycle_margin", self.recycle_margin),
            ("sway_amplitude", self.sway_amplitude),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { name, value });
            }
        }
        Ok(())
    }
}
