// Host-side tests for the particle system.

use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spectra_core::constants::{PARTICLE_COUNT, SPAWN_HALF_EXTENT};
use spectra_core::{DrawCmd, Particle, ParticleSystem};

const BOUNDS: DVec2 = DVec2::new(1024.0, 576.0);

fn anchor() -> DVec2 {
    BOUNDS / 2.0
}

fn in_anchor_square(v: f64, anchor: f64) -> bool {
    (v - anchor).abs() <= SPAWN_HALF_EXTENT
}

#[test]
fn spawn_yields_requested_count_inside_anchor_square() {
    let mut rng = StdRng::seed_from_u64(7);
    let sys = ParticleSystem::spawn(PARTICLE_COUNT, anchor(), &mut rng);
    assert_eq!(sys.len(), 150);
    for p in &sys.particles {
        assert!(in_anchor_square(p.pos.x, anchor().x), "x={}", p.pos.x);
        assert!(in_anchor_square(p.pos.y, anchor().y), "y={}", p.pos.y);
    }
}

#[test]
fn spawn_draws_attributes_from_their_ranges() {
    let mut rng = StdRng::seed_from_u64(11);
    let sys = ParticleSystem::spawn(500, anchor(), &mut rng);
    for p in &sys.particles {
        assert!(p.vel.x >= -2.0 && p.vel.x <= 2.0);
        assert!(p.vel.y >= -2.0 && p.vel.y <= 2.0);
        assert!(p.radius >= 1.0 && p.radius <= 3.0);
        assert!(p.alpha >= 0.2 && p.alpha <= 1.0);
        assert_eq!((p.color.r, p.color.g, p.color.b), (255, 255, 255));
        assert_eq!(p.color.a, p.alpha);
    }
}

#[test]
fn update_keeps_particles_on_canvas_or_respawns_them() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut sys = ParticleSystem::spawn(PARTICLE_COUNT, anchor(), &mut rng);
    for _ in 0..2_000 {
        let before: Vec<DVec2> = sys.particles.iter().map(|p| p.pos).collect();
        sys.update(false, BOUNDS, &mut rng);
        for (p, prev) in sys.particles.iter().zip(before) {
            let moved = prev + p.vel;
            for (axis, limit, anchor_axis) in [(0, BOUNDS.x, anchor().x), (1, BOUNDS.y, anchor().y)] {
                let v = p.pos[axis];
                let on_canvas = v >= 0.0 && v < limit;
                let respawned = v != moved[axis] && in_anchor_square(v, anchor_axis);
                assert!(on_canvas || respawned, "axis {axis} value {v}");
                assert!(on_canvas, "respawn must land on canvas: {v}");
            }
        }
    }
}

#[test]
fn respawn_keeps_velocity_and_only_rerolls_the_escaping_axis() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut sys = ParticleSystem {
        particles: vec![Particle {
            pos: DVec2::new(1023.0, 100.0),
            vel: DVec2::new(2.0, 1.0),
            ..Particle::random(&mut rng, anchor())
        }],
        anchor: anchor(),
    };
    sys.update(false, BOUNDS, &mut rng);
    let p = &sys.particles[0];
    assert!(in_anchor_square(p.pos.x, anchor().x));
    assert_eq!(p.pos.y, 101.0);
    assert_eq!(p.vel, DVec2::new(2.0, 1.0));
}

#[test]
fn paused_update_does_not_move_particles() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut sys = ParticleSystem::spawn(20, anchor(), &mut rng);
    let before = sys.particles.clone();
    sys.update(true, BOUNDS, &mut rng);
    assert_eq!(sys.particles, before);
}

#[test]
fn draw_emits_one_filled_circle_per_particle() {
    let mut rng = StdRng::seed_from_u64(13);
    let sys = ParticleSystem::spawn(12, anchor(), &mut rng);
    let shapes: Vec<_> = sys.draw().collect();
    assert_eq!(shapes.len(), 12);
    for (shape, p) in shapes.iter().zip(&sys.particles) {
        assert!(shape.contains(&DrawCmd::circle(p.pos, p.radius)));
        assert_eq!(shape.last(), Some(&DrawCmd::Fill));
    }
}

#[test]
fn non_finite_particle_is_skipped_when_drawing_and_respawned_on_update() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut sys = ParticleSystem::spawn(3, anchor(), &mut rng);
    sys.particles[1].pos = DVec2::new(f64::NAN, f64::NAN);
    assert_eq!(sys.draw().count(), 2);
    sys.update(false, BOUNDS, &mut rng);
    assert!(sys.particles[1].pos.is_finite());
    assert_eq!(sys.draw().count(), 3);
}
