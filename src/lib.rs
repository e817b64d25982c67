//! # dustorb - interactive celestial dust orb
//!
//! A dense cloud of instanced bodies arranged in a spherical volume, deformed
//! and colored by procedural noise on the GPU and repelled from the pointer by
//! a CPU-side update every frame.
//!
//! ## Quick Start
//!
//! ```ignore
//! use dustorb::prelude::*;
//!
//! fn main() -> Result<(), OrbError> {
//!     let config = preset("fireball")
//!         .map(|p| (p.config)())
//!         .unwrap_or_default();
//!     dustorb::app::run(config)
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Particles
//!
//! Each body is a [`particles::Particle`]: a fixed resting position sampled
//! uniformly by volume inside the arrangement sphere, an animated current
//! position, and per-particle repulsion/damping coefficients jittered around
//! the configured bases. [`particles::ParticleSet`] owns the array and
//! replaces it wholesale on regeneration.
//!
//! ### Interaction
//!
//! [`interaction::update`] runs once per frame: each particle is projected to
//! screen space, pushed away from the pointer within the interaction radius,
//! and eased toward its target by its damping coefficient. The pass emits one
//! instance transform per particle for the renderer.
//!
//! ### Shading
//!
//! [`shading::render_shader`] composes the render WGSL from one shared
//! simplex-noise source ([`noise::NOISE_WGSL`]): vertices deform along their
//! normals, fragments blend the two configured colors by a low-frequency
//! noise sample, darken by a high-frequency one, and pick up an additive
//! fresnel rim.
//!
//! ### Configuration
//!
//! [`config::OrbConfig`] is a plain record; [`config::PRESETS`] holds the
//! named bundles (galaxy, fireball, oceanic). Applying a bundle through
//! [`orb::Orb::apply_config`] regenerates the particle set exactly once iff a
//! size-affecting field changed.

pub mod app;
pub mod camera;
pub mod config;
pub mod error;
pub mod gpu;
pub mod input;
pub mod interaction;
pub mod mesh;
pub mod noise;
pub mod orb;
pub mod particles;
pub mod shading;
pub mod time;

pub use glam::{Mat4, Vec2, Vec3, Vec4};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use dustorb::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{preset, OrbConfig, Preset, PRESETS};
    pub use crate::error::{CapacityError, GpuError, OrbError};
    pub use crate::interaction::Instance;
    pub use crate::orb::Orb;
    pub use crate::particles::{Particle, ParticleSet};
    pub use crate::time::FrameClock;
    pub use crate::{Mat4, Vec2, Vec3, Vec4};
}
