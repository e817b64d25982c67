//! Per-frame pointer interaction and damping update.
//!
//! [`update`] is a stateless pass over the particle array: it projects each
//! particle into normalized device coordinates, derives a repulsion target
//! from the pointer, applies the particle's damping step, and emits one
//! [`Instance`] transform for the renderer. All mutable state lives in the
//! array itself; every particle reads only its own slot plus the shared
//! read-only inputs, so the pass is linear in particle count.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

use crate::particles::Particle;

/// Radians per second of the perpetual per-particle spin.
pub const SPIN_RATE: f32 = 0.2;

/// Per-body transform handed to the instancing mechanism.
///
/// Rotation is an XYZ Euler triple; the vertex shader reconstitutes the
/// matrix. Each particle's spin phase is offset by its resting coordinates,
/// giving it a stable rotational signature instead of synchronized spin.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Instance {
    pub translation: [f32; 3],
    pub rotation: [f32; 3],
}

/// Project a world-space point to normalized device coordinates.
pub fn project_ndc(view_proj: &Mat4, position: Vec3) -> Vec2 {
    let clip = *view_proj * position.extend(1.0);
    if clip.w.abs() <= f32::EPSILON {
        return Vec2::ZERO;
    }
    Vec2::new(clip.x / clip.w, clip.y / clip.w)
}

/// Pointer push felt at `distance` from the pointer in screen space.
///
/// Zero at and beyond `interaction_radius` (the boundary is exclusive), the
/// full `coefficient` at distance zero, linear in between.
#[inline]
pub fn repulsion_strength(distance: f32, interaction_radius: f32, coefficient: f32) -> f32 {
    if distance < interaction_radius {
        (1.0 - distance / interaction_radius) * coefficient
    } else {
        0.0
    }
}

/// Run one frame of the interaction model over the whole set.
///
/// For each particle: the repulsion target offsets the resting position in
/// the screen-facing x/y axes only (the resting z is kept), then the current
/// position closes `damping` of the remaining distance to the target. The
/// emitted transforms land in `instances`, which is cleared first.
pub fn update(
    elapsed: f32,
    pointer: Vec2,
    interaction_radius: f32,
    view_proj: &Mat4,
    particles: &mut [Particle],
    instances: &mut Vec<Instance>,
) {
    instances.clear();
    instances.reserve(particles.len());

    for p in particles.iter_mut() {
        let screen = project_ndc(view_proj, p.current_position);
        let distance = pointer.distance(screen);

        let mut target = p.resting_position;
        if distance < interaction_radius {
            let strength = repulsion_strength(distance, interaction_radius, p.repulsion);
            let angle = (screen.y - pointer.y).atan2(screen.x - pointer.x);
            target.x += angle.cos() * strength;
            target.y += angle.sin() * strength;
        }

        p.current_position += (target - p.current_position) * p.damping;

        instances.push(Instance {
            translation: p.current_position.to_array(),
            rotation: [
                elapsed * SPIN_RATE + p.resting_position.x,
                elapsed * SPIN_RATE + p.resting_position.y,
                0.0,
            ],
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(resting: Vec3, repulsion: f32, damping: f32) -> Particle {
        Particle {
            resting_position: resting,
            current_position: resting,
            repulsion,
            damping,
        }
    }

    #[test]
    fn test_strength_boundary_is_exclusive() {
        assert_eq!(repulsion_strength(0.5, 0.5, 1.0), 0.0);
        assert_eq!(repulsion_strength(0.7, 0.5, 1.0), 0.0);
        assert_eq!(repulsion_strength(0.0, 0.5, 1.0), 1.0);
        assert!((repulsion_strength(0.25, 0.5, 2.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pointer_at_particle_gives_full_strength() {
        // Identity projection: NDC equals the particle's x/y. Particle and
        // pointer both at the origin, damping 1.0 jumps straight to the
        // target, so the displacement length equals the strength.
        let mut particles = vec![particle(Vec3::ZERO, 1.0, 1.0)];
        let mut instances = Vec::new();
        update(
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
    }

    #[test]
    fn test_repulsion_pushes_away_from_pointer() {
        // Particle to the right of the pointer gets pushed further right.
        let mut particles = vec![particle(Vec3::new(0.2, 0.0, 0.0), 1.0, 1.0)];
        let mut instances = Vec::new();
        update(
            0.0,
            Vec2::ZERO,
            0.5,
            &Mat4::IDENTITY,
            &mut particles,
            &mut instances,
        );
        let p = &particles[0];
        assert!(p.current_position.x > 0.2);
        assert!(p.current_position.y.abs() < 1e-6);
    }

    #[test]
    fn test_geometric_convergence_to_rest() {
        // Pointer far outside the interaction radius: the particle relaxes
        // toward rest, closing a (1 - damping) fraction each frame.
        let damping = 0.25;
        let mut particles = vec![Particle {
            resting_position: Vec3::ZERO,
            current_position: Vec3::new(1.0, -1.0, 0.5),
            repulsion: 1.0,
            damping,
        }];
        let mut instances = Vec::new();

        let mut previous = particles[0].current_position.length();
        for _ in 0..50 {
            update(
                0.0,
                Vec2::new(10.0, 10.0),
                0.5,
                &Mat4::IDENTITY,
                &mut particles,
                &mut instances,
            );
            let now = particles[0].current_position.length();
            assert!((now - previous * (1.0 - damping)).abs() < 1e-4);
            previous = now;
        }
        assert!(previous < 1e-5);
    }

    #[test]
    fn test_zero_damping_freezes_particle() {
        let start = Vec3::new(0.3, 0.4, 0.0);
        let mut particles = vec![particle(start, 1.0, 0.0)];
        let mut instances = Vec::new();
        update(
            1.0,
            Vec2::ZERO,
            0.5,
            &Mat4::IDENTITY,
            &mut particles,
            &mut instances,
        );
        assert_eq!(particles[0].current_position, start);
    }

    #[test]
    fn test_rotation_carries_resting_phase() {
        let resting = Vec3::new(0.7, -0.3, 0.1);
        let mut particles = vec![particle(resting, 1.0, 0.05)];
        let mut instances = Vec::new();
        let elapsed = 2.0;
        update(
            elapsed,
            Vec2::new(10.0, 10.0),
            0.5,
            &Mat4::IDENTITY,
            &mut particles,
            &mut instances,
        );
        let rot = instances[0].rotation;
        assert!((rot[0] - (elapsed * SPIN_RATE + resting.x)).abs() < 1e-6);
        assert!((rot[1] - (elapsed * SPIN_RATE + resting.y)).abs() < 1e-6);
        assert_eq!(rot[2], 0.0);
    }

    #[test]
    fn test_empty_set_emits_no_instances() {
        let mut particles: Vec<Particle> = Vec::new();
        let mut instances = vec![Instance {
            translation: [0.0; 3],
            rotation: [0.0; 3],
        }];
        update(
            0.0,
            Vec2::ZERO,
            0.5,
            &Mat4::IDENTITY,
            &mut particles,
            &mut instances,
        );
        assert!(instances.is_empty());
    }

    #[test]
    fn test_emits_one_instance_per_particle() {
        let mut particles: Vec<Particle> = (0..17)
            .map(|i| particle(Vec3::new(i as f32 * 0.1, 0.0, 0.0), 1.0, 0.05))
            .collect();
        let mut instances = Vec::new();
        update(
            0.0,
            Vec2::new(10.0, 10.0),
            0.5,
            &Mat4::IDENTITY,
            &mut particles,
            &mut instances,
        );
        assert_eq!(instances.len(), particles.len());
        for (inst, p) in instances.iter().zip(&particles) {
            assert_eq!(inst.translation, p.current_position.to_array());
        }
    }
}
