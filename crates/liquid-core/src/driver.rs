//! Host-facing lifecycle around a `ParticleField`.
//!
//! The host (a `requestAnimationFrame` loop on the web, a fixed-rate loop
//! natively) calls `frame` once per display refresh and reschedules only
//! while it returns true. After `stop`, `frame` neither draws nor mutates.

use crate::config::{ConfigError, FieldConfig};
use crate::field::ParticleField;
use crate::surface::{Surface, SurfaceSize};
use rand::rngs::StdRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Stopped,
}

pub struct FieldDriver<S: Surface> {
    surface: S,
    field: Option<ParticleField>,
    state: RunState,
    frames: u64,
}

impl<S: Surface> FieldDriver<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            field: None,
            state: RunState::Idle,
            frames: 0,
        }
    }

    /// Size the surface, spawn the initial batch and enter the running state.
    /// Calling it on a running or stopped driver does nothing.
    pub fn start(
        &mut self,
        size: SurfaceSize,
        config: FieldConfig,
        rng: StdRng,
    ) -> Result<(), ConfigError> {
        if self.state != RunState::Idle {
            return Ok(());
        }
        let field = ParticleField::new(config, size, rng)?;
        self.surface.configure(size);
        log::info!(
            "[field] started: particles={} size={}x{} dpr={}",
            field.len(),
            size.width,
            size.height,
            size.pixel_ratio
        );
        self.field = Some(field);
        self.state = RunState::Running;
        Ok(())
    }

    /// Run one tick. Returns whether the host should schedule another.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if self.state != RunState::Running {
            return false;
        }
        let Some(field) = self.field.as_mut() else {
            return false;
        };
        let recycled = field.tick(now_ms, &mut self.surface);
        self.frames += 1;
        if recycled > 0 {
            log::trace!("[field] frame {} recycled {}", self.frames, recycled);
        }
        true
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        if self.state != RunState::Running {
            return;
        }
        if let Some(field) = self.field.as_mut() {
            field.set_size(size);
            self.surface.configure(size);
            log::debug!(
                "[field] resized to {}x{} dpr={}",
                size.width,
                size.height,
                size.pixel_ratio
            );
        }
    }

    /// Leave the running state. Returns true only on the first call after
    /// a successful start.
    pub fn stop(&mut self) -> bool {
        if self.state != RunState::Running {
            return false;
        }
        self.state = RunState::Stopped;
        log::info!("[field] stopped after {} frames", self.frames);
        true
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
