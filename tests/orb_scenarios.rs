//! End-to-end scenarios through the public API.

use dustorb::prelude::*;

#[test]
fn generated_orb_is_contained_and_centered() {
    let config = OrbConfig {
        particle_count: 1_000,
        arrangement_radius: 2.0,
        particle_radius: 0.0025,
        ..OrbConfig::default()
    };
    let orb = Orb::new(config, u32::MAX).unwrap();

    let mut centroid = Vec3::ZERO;
    for p in orb.particles().particles() {
        assert!(p.resting_position.length() <= 2.0 + 1e-4);
        assert_eq!(p.current_position, p.resting_position);
        centroid += p.resting_position;
    }
    centroid /= 1_000.0;
    // Symmetric sampling keeps the centroid near the origin
    assert!(centroid.length() < 0.2, "centroid = {centroid}");
}

#[test]
fn pointer_over_particle_applies_full_strength() {
    // Identity projection, particle and pointer both at the screen origin,
    // coefficient 1 and damping 1: the particle is displaced by exactly the
    // maximum strength in the screen plane.
    let mut particles = vec![Particle {
        resting_position: Vec3::ZERO,
        current_position: Vec3::ZERO,
        repulsion: 1.0,
        damping: 1.0,
    }];
    let mut instances = Vec::new();

    dustorb::interaction::update(
        0.0,
        Vec2::ZERO,
        0.5,
        &Mat4::IDENTITY,
        &mut particles,
        &mut instances,
    );

    let displaced = particles[0].current_position;
    assert!((displaced.length() - 1.0).abs() < 1e-6);
    assert_eq!(displaced.z, 0.0);
    assert_eq!(instances[0].translation, displaced.to_array());
}

#[test]
fn particles_relax_when_pointer_moves_away() {
    let config = OrbConfig {
        particle_count: 200,
        ..OrbConfig::default()
    };
    let mut orb = Orb::new(config, u32::MAX).unwrap();
    let view_proj = Mat4::IDENTITY;

    // Let the pointer disturb the cloud for a while.
    orb.set_pointer(Vec2::new(0.05, 0.05));
    for frame in 0..60 {
        orb.update(frame as f32 / 60.0, &view_proj);
    }
    let disturbed: f32 = orb
        .particles()
        .particles()
        .iter()
        .map(|p| (p.current_position - p.resting_position).length())
        .sum();
    assert!(disturbed > 0.0);

    // Pointer far outside every particle's interaction radius: everything
    // converges geometrically back toward rest.
    orb.set_pointer(Vec2::new(10.0, 10.0));
    for frame in 60..2_000 {
        orb.update(frame as f32 / 60.0, &view_proj);
    }
    for p in orb.particles().particles() {
        assert!((p.current_position - p.resting_position).length() < 1e-3);
    }
}

#[test]
fn fireball_preset_round_trips_with_one_regeneration() {
    let mut orb = Orb::new(OrbConfig::default(), u32::MAX).unwrap();
    assert_eq!(orb.generation(), 1);

    let fireball = preset("fireball").unwrap();
    orb.apply_preset(fireball).unwrap();

    let expected = (fireball.config)();
    assert_eq!(orb.config(), &expected);
    assert_eq!(orb.config().arrangement_radius, 2.0);
    assert_eq!(orb.config().particle_radius, 0.005);
    assert_eq!(orb.config().base_repulsion, 1.8);
    assert_eq!(orb.generation(), 2);
}

#[test]
fn capacity_overflow_reports_and_preserves() {
    let config = OrbConfig {
        particle_count: 500,
        ..OrbConfig::default()
    };
    let mut orb = Orb::new(config, 1_000).unwrap();

    let err = orb.regenerate(5_000, 2.0, 0.0025).unwrap_err();
    assert_eq!(
        err,
        CapacityError {
            requested: 5_000,
            available: 1_000
        }
    );
    assert_eq!(orb.particles().len(), 500);
    assert_eq!(orb.generation(), 1);
}

#[test]
fn zero_delta_frames_are_harmless() {
    let config = OrbConfig {
        particle_count: 100,
        ..OrbConfig::default()
    };
    let mut orb = Orb::new(config, u32::MAX).unwrap();

    // The same elapsed time over and over: positions stay finite and the
    // instance list stays one-per-particle.
    for _ in 0..10 {
        orb.update(1.0, &Mat4::IDENTITY);
        assert_eq!(orb.instances().len(), 100);
        for p in orb.particles().particles() {
            assert!(p.current_position.is_finite());
        }
    }
}
