use crate::config::{ConfigError, FieldConfig};
use crate::particle::Particle;
use crate::pool::{pool_fill, pool_outline};
use crate::surface::{Surface, SurfaceSize};
use glam::Vec2;
use rand::rngs::StdRng;

/// Fixed-size set of particles plus the surface size they simulate against.
///
/// Particles are never added or removed after construction; leaving the
/// bounds recycles a particle in place.
pub struct ParticleField {
    pub config: FieldConfig,
    particles: Vec<Particle>,
    size: SurfaceSize,
    rng: StdRng,
    outline: Vec<Vec2>,
    recycled_total: u64,
}

impl ParticleField {
    pub fn new(
        config: FieldConfig,
        size: SurfaceSize,
        mut rng: StdRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let particles = (0..config.particle_count)
            .map(|_| Particle::spawn(&mut rng, &config, size.width))
            .collect::<Vec<_>>();
        Ok(Self {
            config,
            particles,
            size,
            rng,
            outline: Vec::new(),
            recycled_total: 0,
        })
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Number of particles recycled since construction.
    #[inline]
    pub fn recycled_total(&self) -> u64 {
        self.recycled_total
    }

    /// Particles that have slowed below the settle speed.
    pub fn settled_count(&self) -> usize {
        self.particles
            .iter()
            .filter(|p| p.velocity().y < self.config.settle_speed)
            .count()
    }

    /// Adopt a new surface size. Particle state is left untouched.
    pub fn set_size(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    /// One full tick: clear, update and draw each particle in storage order,
    /// then lay the pool overlay on top.
    pub fn tick<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> usize {
        let (w, h) = (self.size.width, self.size.height);
        surface.clear(w, h);
        let mut recycled = 0;
        for p in &mut self.particles {
            if p.update(&mut self.rng, &self.config, w, h, now_ms) {
                recycled += 1;
            }
            p.draw(surface);
        }
        self.recycled_total += recycled as u64;

        let band = self.config.pool_band_height;
        pool_outline(w, h, band, now_ms, &mut self.outline);
        surface.fill_pool(&self.outline, &pool_fill(h, band));
        recycled
    }
}
