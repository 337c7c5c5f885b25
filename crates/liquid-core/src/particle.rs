use crate::color::Rgb;
use crate::config::FieldConfig;
use crate::constants::{HALO_ALPHA_SCALE, HALO_RADIUS_SCALE, SWAY_SPACE_FREQ, SWAY_TIME_FREQ};
use crate::surface::Surface;
use glam::Vec2;
use rand::prelude::*;

/// One falling/settling point. Owned and mutated only by its field.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    position: Vec2,
    velocity: Vec2,
    radius: f32,
    alpha: f32,
    color: Rgb,
}

impl Particle {
    /// Spawn for the initial batch, staggered above the top edge.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &FieldConfig, width: f32) -> Self {
        let mut p = Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            radius: 0.0,
            alpha: 0.0,
            color: config.palette[0],
        };
        p.reset(rng, config, width, true);
        p
    }

    /// Place a particle with explicit motion state, for tests and tooling
    /// that need a known starting point.
    #[doc(hidden)]
    pub fn with_motion(mut self, position: Vec2, velocity: Vec2) -> Self {
        self.position = position;
        self.velocity = velocity;
        self
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Redraw every attribute. `initial` places the particle somewhere in
    /// `[-initial_spawn_depth, 0)`; recycled particles re-enter at `respawn_y`.
    pub fn reset<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        config: &FieldConfig,
        width: f32,
        initial: bool,
    ) {
        let x = if width > 0.0 {
            rng.gen_range(0.0..width)
        } else {
            0.0
        };
        let y = if initial && config.initial_spawn_depth > 0.0 {
            rng.gen_range(-config.initial_spawn_depth..0.0)
        } else if initial {
            0.0
        } else {
            config.respawn_y
        };
        self.position = Vec2::new(x, y);
        self.velocity = Vec2::new(
            config.spawn_velocity_x.sample(rng),
            config.spawn_velocity_y.sample(rng),
        );
        self.radius = config.spawn_radius.sample(rng);
        self.alpha = config.spawn_alpha.sample(rng);
        self.color = *config.palette.choose(rng).unwrap_or(&config.palette[0]);
    }

    /// Advance one frame. Returns true when the particle left the bounds and
    /// was recycled.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        config: &FieldConfig,
        width: f32,
        height: f32,
        now_ms: f64,
    ) -> bool {
        self.position += self.velocity;

        if self.position.y > height - config.pool_band_height {
            self.velocity.y *= config.damping_vy;
            self.velocity.x *= config.damping_vx;
            let jitter = if config.rest_band_jitter > 0.0 {
                rng.gen_range(0.0..config.rest_band_jitter)
            } else {
                0.0
            };
            let rest = height - config.rest_offset + jitter;
            self.position.y = self.position.y.min(rest);
        }

        if self.velocity.y < config.settle_speed {
            self.velocity.x = sway(now_ms, self.position.x) * config.sway_amplitude;
        }

        let margin = config.recycle_margin;
        if self.position.y > height + margin
            || self.position.x < -margin
            || self.position.x > width + margin
        {
            self.reset(rng, config, width, false);
            return true;
        }
        false
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.position, self.radius, self.color.with_alpha(self.alpha));
        surface.fill_circle_gradient(
            self.position,
            self.radius,
            self.radius * HALO_RADIUS_SCALE,
            self.color.with_alpha(self.alpha * HALO_ALPHA_SCALE),
            self.color.transparent(),
        );
    }
}

/// Shared wave for settled particles; neighbouring x values sway in phase.
#[inline]
pub fn sway(now_ms: f64, x: f32) -> f32 {
    (now_ms * SWAY_TIME_FREQ + x as f64 * SWAY_SPACE_FREQ).sin() as f32
}
