//! Fixed-size set of drifting points that respawn near an anchor when they
//! leave the canvas.

use crate::color::Rgba;
use crate::constants::*;
use crate::surface::{DrawCmd, Shape};
use glam::DVec2;
use rand::Rng;
use smallvec::smallvec;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub alpha: f32,
    pub color: Rgba,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, anchor: DVec2) -> Self {
        let alpha = rng.gen_range(PARTICLE_ALPHA_MIN..PARTICLE_ALPHA_MAX);
        Self {
            pos: DVec2::new(
                spawn_coord(rng, anchor.x),
                spawn_coord(rng, anchor.y),
            ),
            vel: DVec2::new(
                rng.gen_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
                rng.gen_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
            ),
            radius: rng.gen_range(PARTICLE_RADIUS_MIN..PARTICLE_RADIUS_MAX),
            alpha,
            color: Rgba::new(255, 255, 255, alpha),
        }
    }

    /// Filled circle at the current position.
    pub fn draw(&self) -> Shape {
        smallvec![
            DrawCmd::FillStyle(self.color.into()),
            DrawCmd::BeginPath,
            DrawCmd::circle(self.pos, self.radius),
            DrawCmd::ClosePath,
            DrawCmd::Fill,
        ]
    }
}

#[inline]
fn spawn_coord<R: Rng + ?Sized>(rng: &mut R, anchor: f64) -> f64 {
    rng.gen_range(anchor - SPAWN_HALF_EXTENT..anchor + SPAWN_HALF_EXTENT)
}

#[inline]
fn out_of_bounds(v: f64, limit: f64) -> bool {
    !(v >= 0.0 && v < limit)
}

#[derive(Clone, Debug)]
pub struct ParticleSystem {
    pub particles: Vec<Particle>,
    pub anchor: DVec2,
}

impl ParticleSystem {
    pub fn spawn<R: Rng + ?Sized>(count: usize, anchor: DVec2, rng: &mut R) -> Self {
        let particles = (0..count).map(|_| Particle::random(rng, anchor)).collect();
        Self { particles, anchor }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Move the respawn anchor, e.g. after a canvas resize.
    pub fn set_anchor(&mut self, anchor: DVec2) {
        self.anchor = anchor;
    }

    /// Advance every particle by its velocity. An axis that leaves
    /// `[0, bounds)` is re-rolled inside the anchor square; velocity is kept.
    /// Does nothing while paused.
    pub fn update<R: Rng + ?Sized>(&mut self, paused: bool, bounds: DVec2, rng: &mut R) {
        if paused {
            return;
        }
        for p in &mut self.particles {
            p.pos += p.vel;
            if out_of_bounds(p.pos.x, bounds.x) {
                p.pos.x = spawn_coord(rng, self.anchor.x);
            }
            if out_of_bounds(p.pos.y, bounds.y) {
                p.pos.y = spawn_coord(rng, self.anchor.y);
            }
        }
    }

    pub fn draw(&self) -> impl Iterator<Item = Shape> + '_ {
        self.particles
            .iter()
            .filter(|p| p.pos.is_finite())
            .map(Particle::draw)
    }
}
