//! Particle state and volumetric generation.
//!
//! A [`ParticleSet`] owns every per-particle record of the orb. Records are
//! created in bulk by [`ParticleSet::regenerate`], which samples resting
//! positions uniformly by volume inside a sphere and draws each particle's
//! repulsion/damping coefficient near a configured base value. The set is
//! replaced wholesale: a regeneration either completes and swaps in the new
//! array, or leaves the old one untouched.

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Smallest radius a caller can effectively request; non-positive radii clamp
/// to this instead of producing NaNs or a degenerate distribution.
pub const MIN_RADIUS: f32 = 1e-4;

// base + (rand - 0.5) * JITTER_SPREAD * base gives a +/-10% band
const JITTER_SPREAD: f32 = 0.2;

/// One body of the orb.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Equilibrium point, fixed at generation.
    pub resting_position: Vec3,
    /// Animated position; converges toward a per-frame target.
    pub current_position: Vec3,
    /// Scales how strongly the pointer pushes this particle.
    pub repulsion: f32,
    /// Fraction of the remaining distance to the target closed each frame.
    pub damping: f32,
}

/// The orb's particle records plus the RNG that jitters their coefficients.
#[derive(Debug)]
pub struct ParticleSet {
    particles: Vec<Particle>,
    particle_radius: f32,
    generation: u64,
    rng: SmallRng,
}

impl ParticleSet {
    /// Create an empty set with an entropy-seeded RNG.
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            particle_radius: MIN_RADIUS,
            generation: 0,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create an empty set with a fixed RNG seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            ..Self::new()
        }
    }

    /// Replace the whole set: `count` particles uniformly distributed by
    /// volume inside a sphere of `arrangement_radius`, each starting at rest
    /// with coefficients jittered +/-10% around the given bases.
    ///
    /// `count == 0` yields a valid empty set. Non-positive radii are treated
    /// as [`MIN_RADIUS`]. The previous array is dropped only after the new one
    /// is fully built.
    pub fn regenerate(
        &mut self,
        count: u32,
        arrangement_radius: f32,
        particle_radius: f32,
        base_repulsion: f32,
        base_damping: f32,
    ) {
        let radius = arrangement_radius.max(MIN_RADIUS);

        let mut fresh = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let theta = self.rng.gen::<f32>() * TAU;
            let phi = (self.rng.gen::<f32>() * 2.0 - 1.0).acos();
            // Cube root for uniform volume distribution
            let r = radius * self.rng.gen::<f32>().cbrt();

            let resting = Vec3::new(
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
            );

            fresh.push(Particle {
                resting_position: resting,
                current_position: resting,
                repulsion: jitter(&mut self.rng, base_repulsion),
                damping: jitter(&mut self.rng, base_damping),
            });
        }

        self.particles = fresh;
        self.particle_radius = particle_radius.max(MIN_RADIUS);
        self.generation += 1;
    }

    /// Re-draw every particle's repulsion coefficient around a new base,
    /// leaving positions untouched.
    pub fn rejitter_repulsion(&mut self, base: f32) {
        for p in &mut self.particles {
            p.repulsion = jitter(&mut self.rng, base);
        }
    }

    /// Re-draw every particle's damping coefficient around a new base,
    /// leaving positions untouched.
    pub fn rejitter_damping(&mut self, base: f32) {
        for p in &mut self.particles {
            p.damping = jitter(&mut self.rng, base);
        }
    }

    /// Body radius the set was generated for (clamped).
    #[inline]
    pub fn particle_radius(&self) -> f32 {
        self.particle_radius
    }

    /// How many times [`regenerate`](Self::regenerate) has completed.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
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
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

impl Default for ParticleSet {
    fn default() -> Self {
        Self::new()
    }
}

fn jitter(rng: &mut SmallRng, base: f32) -> f32 {
    base + (rng.gen::<f32>() - 0.5) * JITTER_SPREAD * base
}
