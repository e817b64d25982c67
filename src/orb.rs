//! The orb: configuration, particle set and pointer state under one owner.
//!
//! [`Orb`] is the surface the windowing shell and any configuration UI talk
//! to. Size-affecting changes (count, body radius, arrangement radius) go
//! through [`Orb::regenerate`] or [`Orb::apply_config`] and rebuild the
//! particle set; everything else is a field write that the next frame picks
//! up. The per-frame [`Orb::update`] runs the interaction pass and leaves the
//! instance transforms ready for the renderer.

use glam::{Mat4, Vec2, Vec3};
use tracing::{info, warn};

use crate::config::{OrbConfig, Preset};
use crate::error::CapacityError;
use crate::interaction::{self, Instance};
use crate::particles::ParticleSet;

pub struct Orb {
    config: OrbConfig,
    particles: ParticleSet,
    pointer: Vec2,
    instances: Vec<Instance>,
    max_instances: u32,
}

impl Orb {
    /// Build an orb and generate its initial particle set.
    ///
    /// `max_instances` is the rendering backend's instancing capacity; a
    /// configuration asking for more is rejected up front.
    pub fn new(config: OrbConfig, max_instances: u32) -> Result<Self, CapacityError> {
        let mut orb = Self {
            config,
            particles: ParticleSet::new(),
            pointer: Vec2::ZERO,
            instances: Vec::new(),
            max_instances,
        };
        orb.regenerate(
            config.particle_count,
            config.arrangement_radius,
            config.particle_radius,
        )?;
        Ok(orb)
    }

    /// Replace the particle set with a freshly generated one.
    ///
    /// On a capacity rejection the existing set (and its generation counter)
    /// is left untouched.
    pub fn regenerate(
        &mut self,
        count: u32,
        arrangement_radius: f32,
        particle_radius: f32,
    ) -> Result<(), CapacityError> {
        if count > self.max_instances {
            let err = CapacityError {
                requested: count,
                available: self.max_instances,
            };
            warn!(%err, "regeneration rejected");
            return Err(err);
        }

        self.particles.regenerate(
            count,
            arrangement_radius,
            particle_radius,
            self.config.base_repulsion,
            self.config.base_damping,
        );
        self.config.particle_count = count;
        self.config.arrangement_radius = arrangement_radius;
        self.config.particle_radius = particle_radius;
        info!(
            count,
            arrangement_radius,
            particle_radius,
            generation = self.particles.generation(),
            "particle set regenerated"
        );
        Ok(())
    }

    /// Apply a whole configuration atomically.
    ///
    /// Regenerates the particle set exactly once iff a size-affecting field
    /// changed; base-coefficient changes rejitter the existing particles;
    /// everything else is a plain field update.
    pub fn apply_config(&mut self, new: OrbConfig) -> Result<(), CapacityError> {
        let needs_regen = self.config.requires_regeneration(&new);
        if needs_regen && new.particle_count > self.max_instances {
            let err = CapacityError {
                requested: new.particle_count,
                available: self.max_instances,
            };
            warn!(%err, "configuration rejected");
            return Err(err);
        }

        let rejitter_repulsion = self.config.base_repulsion != new.base_repulsion;
        let rejitter_damping = self.config.base_damping != new.base_damping;
        self.config = new;

        if needs_regen {
            self.particles.regenerate(
                new.particle_count,
                new.arrangement_radius,
                new.particle_radius,
                new.base_repulsion,
                new.base_damping,
            );
            info!(
                count = new.particle_count,
                generation = self.particles.generation(),
                "particle set regenerated"
            );
        } else {
            if rejitter_repulsion {
                self.particles.rejitter_repulsion(new.base_repulsion);
            }
            if rejitter_damping {
                self.particles.rejitter_damping(new.base_damping);
            }
        }
        Ok(())
    }

    /// Apply a named preset bundle.
    pub fn apply_preset(&mut self, preset: &Preset) -> Result<(), CapacityError> {
        info!(preset = preset.name, "applying preset");
        self.apply_config((preset.config)())
    }

    /// Run one frame of the interaction model.
    ///
    /// `view_proj` must be the same world -> clip transform the renderer uses
    /// this frame, so the screen-space distance test matches what is on
    /// screen.
    pub fn update(&mut self, elapsed: f32, view_proj: &Mat4) {
        interaction::update(
            elapsed,
            self.pointer,
            self.config.interaction_radius,
            view_proj,
            self.particles.particles_mut(),
            &mut self.instances,
        );
    }

    // ========== Pointer ==========

    /// Pointer position in normalized device coordinates.
    pub fn set_pointer(&mut self, ndc: Vec2) {
        self.pointer = ndc;
    }

    /// Pointer left the window: relax toward rest.
    pub fn clear_pointer(&mut self) {
        self.pointer = Vec2::ZERO;
    }

    // ========== Setters (take effect next frame) ==========

    /// New repulsion base; existing particles rejitter around it.
    pub fn set_base_repulsion(&mut self, value: f32) {
        self.config.base_repulsion = value;
        self.particles.rejitter_repulsion(value);
    }

    /// New damping base; existing particles rejitter around it.
    pub fn set_base_damping(&mut self, value: f32) {
        self.config.base_damping = value;
        self.particles.rejitter_damping(value);
    }

    pub fn set_interaction_radius(&mut self, value: f32) {
        self.config.interaction_radius = value;
    }

    pub fn set_animation_speed(&mut self, value: f32) {
        self.config.animation_speed = value;
    }

    pub fn set_deformation_amount(&mut self, value: f32) {
        self.config.deformation_amount = value;
    }

    pub fn set_glow_intensity(&mut self, value: f32) {
        self.config.glow_intensity = value;
    }

    pub fn set_color1(&mut self, color: Vec3) {
        self.config.color1 = color;
    }

    pub fn set_color2(&mut self, color: Vec3) {
        self.config.color2 = color;
    }

    pub fn set_background(&mut self, color: Vec3) {
        self.config.background = color;
    }

    // ========== Accessors ==========

    pub fn config(&self) -> &OrbConfig {
        &self.config
    }

    /// Instance transforms produced by the last [`update`](Self::update).
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    /// Completed regenerations so far.
    pub fn generation(&self) -> u64 {
        self.particles.generation()
    }
}
