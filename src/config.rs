//! Orb configuration and named presets.
//!
//! [`OrbConfig`] is the full set of tunables: the size-affecting trio
//! (particle count, body radius, arrangement radius) that forces a
//! regeneration when changed, and the per-frame knobs (interaction radius,
//! animation speed, deformation, glow, colors) that take effect on the next
//! frame. Presets are plain values of this record.

use glam::Vec3;

/// Every tunable of the orb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbConfig {
    /// Number of instanced bodies.
    pub particle_count: u32,
    /// Radius of one body's mesh.
    pub particle_radius: f32,
    /// Radius of the sphere the bodies are arranged in.
    pub arrangement_radius: f32,
    /// Pointer influence radius in normalized screen space.
    pub interaction_radius: f32,
    /// Base repulsion coefficient; each particle draws its own within +/-10%.
    pub base_repulsion: f32,
    /// Base damping coefficient; each particle draws its own within +/-10%.
    pub base_damping: f32,
    /// Multiplier on the noise animation rate.
    pub animation_speed: f32,
    /// Amplitude of the noise deformation along vertex normals.
    pub deformation_amount: f32,
    /// Strength of the additive fresnel rim.
    pub glow_intensity: f32,
    /// First blend color (linear RGB).
    pub color1: Vec3,
    /// Second blend color (linear RGB).
    pub color2: Vec3,
    /// Clear color behind the orb (linear RGB).
    pub background: Vec3,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            particle_count: 200_000,
            particle_radius: 0.0025,
            arrangement_radius: 2.0,
            interaction_radius: 0.5,
            base_repulsion: 1.0,
            base_damping: 0.05,
            animation_speed: 0.5,
            deformation_amount: 0.05,
            glow_intensity: 0.2,
            color1: Vec3::new(0.6, 0.2, 0.8),
            color2: Vec3::new(0.4, 0.1, 0.7),
            background: Vec3::ZERO,
        }
    }
}

impl OrbConfig {
    /// Whether switching from `self` to `other` requires rebuilding the
    /// particle set (a size-affecting field differs).
    pub fn requires_regeneration(&self, other: &OrbConfig) -> bool {
        self.particle_count != other.particle_count
            || self.particle_radius != other.particle_radius
            || self.arrangement_radius != other.arrangement_radius
    }
}

/// A named bundle of configuration values.
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub config: fn() -> OrbConfig,
}

pub static PRESETS: &[Preset] = &[
    Preset {
        name: "galaxy",
        description: "Violet dust, slow drift, gentle glow",
        config: || OrbConfig {
            color1: Vec3::new(0.6, 0.2, 1.0),       // #9933ff
            color2: Vec3::new(0.4, 0.098, 0.8),     // #6619cc
            background: Vec3::ZERO,                 // #000000
            arrangement_radius: 2.5,
            particle_radius: 0.003,
            base_repulsion: 1.0,
            interaction_radius: 0.5,
            animation_speed: 0.3,
            deformation_amount: 0.05,
            glow_intensity: 0.3,
            ..OrbConfig::default()
        },
    },
    Preset {
        name: "fireball",
        description: "Hot oranges, fast churn, strong repulsion",
        config: || OrbConfig {
            color1: Vec3::new(1.0, 0.282, 0.0),     // #ff4800
            color2: Vec3::new(1.0, 0.549, 0.0),     // #ff8c00
            background: Vec3::new(0.063, 0.0, 0.0), // #100000
            arrangement_radius: 2.0,
            particle_radius: 0.005,
            base_repulsion: 1.8,
            interaction_radius: 0.8,
            animation_speed: 1.2,
            deformation_amount: 0.15,
            glow_intensity: 0.5,
            ..OrbConfig::default()
        },
    },
    Preset {
        name: "oceanic",
        description: "Deep blues, calm swell, soft rim",
        config: || OrbConfig {
            color1: Vec3::new(0.0, 0.808, 0.82),     // #00ced1
            color2: Vec3::new(0.0, 0.467, 0.745),    // #0077be
            background: Vec3::new(0.008, 0.039, 0.11), // #020a1c
            arrangement_radius: 3.0,
            particle_radius: 0.004,
            base_repulsion: 0.5,
            interaction_radius: 0.6,
            animation_speed: 0.2,
            deformation_amount: 0.1,
            glow_intensity: 0.1,
            ..OrbConfig::default()
        },
    },
];

/// Look up a preset by name.
pub fn preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_initial_scene() {
        let config = OrbConfig::default();
        assert_eq!(config.particle_count, 200_000);
        assert_eq!(config.particle_radius, 0.0025);
        assert_eq!(config.arrangement_radius, 2.0);
        assert_eq!(config.interaction_radius, 0.5);
        assert_eq!(config.base_repulsion, 1.0);
        assert_eq!(config.base_damping, 0.05);
    }

    #[test]
    fn test_size_fields_force_regeneration() {
        let base = OrbConfig::default();

        let mut changed = base;
        changed.particle_count = 1_000;
        assert!(base.requires_regeneration(&changed));

        let mut changed = base;
        changed.arrangement_radius = 3.0;
        assert!(base.requires_regeneration(&changed));

        let mut changed = base;
        changed.particle_radius = 0.005;
        assert!(base.requires_regeneration(&changed));

        let mut changed = base;
        changed.glow_intensity = 0.9;
        changed.animation_speed = 2.0;
        changed.color1 = Vec3::ONE;
        assert!(!base.requires_regeneration(&changed));
    }

    #[test]
    fn test_fireball_preset_values() {
        let fireball = preset("fireball").map(|p| (p.config)()).unwrap();
        assert_eq!(fireball.arrangement_radius, 2.0);
        assert_eq!(fireball.particle_radius, 0.005);
        assert_eq!(fireball.base_repulsion, 1.8);
        assert_eq!(fireball.interaction_radius, 0.8);
        assert_eq!(fireball.animation_speed, 1.2);
        assert_eq!(fireball.deformation_amount, 0.15);
        assert_eq!(fireball.glow_intensity, 0.5);
    }

    #[test]
    fn test_unknown_preset_is_none() {
        assert!(preset("supernova").is_none());
        assert!(preset("galaxy").is_some());
        assert!(preset("oceanic").is_some());
    }
}
