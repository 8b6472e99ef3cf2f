//! Particle physics - one integration step per frame, per state
//!
//! The state machine is closed: one physics arm per state, with the sticky
//! blown flag overriding all of them. Physics and render share a single
//! pass: force/decay, integrate, emit sprite if alive, purge if not.

use super::particle::{Particle, ParticleState};
use super::store::ParticleStore;
use rand::Rng;
use std::f32::consts::TAU;

/// Velocity multiplier per frame for ordinary aging particles
const FRICTION: f32 = 0.94;
/// Per-axis turbulence scale for blown particles
const WIND_FORCE: f32 = 1.2;
/// Per-frame life loss while blown
const WIND_DECAY: f32 = 0.008;
/// Per-frame life loss while exploding (fast burn-out)
const EXPLOSION_DECAY: f32 = 0.02;
/// Center of the radial speed band assigned on explode
const EXPLOSION_FORCE: f32 = 16.0;
/// Fraction of the remaining distance a gathering particle closes per frame
const GATHER_RATE: f32 = 0.12;
/// Inside this distance to the target, gathering jitters instead of closing
const CORE_RADIUS: f32 = 30.0;
/// Jitter amplitude inside the energy-ball core
const CORE_JITTER: f32 = 1.5;
/// Low end of the per-frame alpha flicker factor
const FLICKER_MIN: f32 = 0.6;

/// One drawable circle, the sole output of the physics pass
#[derive(Clone, Copy, Debug)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: [f32; 3],
    pub alpha: f32,
}

/// Advance every particle one step and emit sprites for the survivors.
/// Particles whose life reaches 0 are purged before returning.
pub fn step<R: Rng>(
    store: &mut ParticleStore,
    wind_active: bool,
    rng: &mut R,
    sprites: &mut Vec<Sprite>,
) {
    sprites.clear();

    for p in store.particles_mut() {
        if wind_active && p.state == ParticleState::Alive {
            p.blown = true;
        }

        if p.blown {
            step_blown(p, rng);
        } else {
            match p.state {
                ParticleState::Alive => step_alive(p),
                ParticleState::Gathering { tx, ty } => step_gathering(p, tx, ty, rng),
                ParticleState::Exploding => step_exploding(p),
            }
        }
        p.life = p.life.clamp(0.0, 1.0);

        if p.life > 0.0 {
            sprites.push(Sprite {
                x: p.x,
                y: p.y,
                radius: p.size,
                color: p.color,
                alpha: p.life * rng.gen_range(FLICKER_MIN..1.0),
            });
        }
    }

    store.retain(|p| p.life > 0.0);
}

fn step_alive(p: &mut Particle) {
    p.x += p.vx;
    p.y += p.vy;
    p.vx *= FRICTION;
    p.vy *= FRICTION;
    p.life -= p.decay;
}

fn step_blown<R: Rng>(p: &mut Particle, rng: &mut R) {
    p.vx += rng.gen_range(-1.0..1.0) * WIND_FORCE;
    p.vy += rng.gen_range(-1.0..1.0) * WIND_FORCE;
    p.x += p.vx;
    p.y += p.vy;
    p.life -= WIND_DECAY;
}

/// Critically-damped approach to the grab target, with a jitter core so the
/// gathered cloud keeps a visible volume instead of collapsing to a point.
fn step_gathering<R: Rng>(p: &mut Particle, tx: f32, ty: f32, rng: &mut R) {
    let dx = tx - p.x;
    let dy = ty - p.y;
    if dx.hypot(dy) > CORE_RADIUS {
        p.x += dx * GATHER_RATE;
        p.y += dy * GATHER_RATE;
    } else {
        p.x += rng.gen_range(-CORE_JITTER..CORE_JITTER);
        p.y += rng.gen_range(-CORE_JITTER..CORE_JITTER);
    }
    p.life -= p.decay;
}

fn step_exploding(p: &mut Particle) {
    p.x += p.vx;
    p.y += p.vy;
    p.life -= EXPLOSION_DECAY;
}

/// Grab gesture: pull every alive particle toward the target. Particles
/// already gathering get their target refreshed.
pub fn gather_all(store: &mut ParticleStore, target: (f32, f32)) {
    for p in store.particles_mut() {
        match p.state {
            ParticleState::Alive | ParticleState::Gathering { .. } => {
                p.state = ParticleState::Gathering {
                    tx: target.0,
                    ty: target.1,
                };
            }
            ParticleState::Exploding => {}
        }
    }
}

/// Palm-open after a grab: fling every gathered particle outward with a
/// radial speed in a narrow band around the explosion force.
pub fn explode_all<R: Rng>(store: &mut ParticleStore, rng: &mut R) {
    for p in store.particles_mut() {
        if let ParticleState::Gathering { .. } = p.state {
            let dir = rng.gen::<f32>() * TAU;
            let speed = EXPLOSION_FORCE * rng.gen_range(0.8..1.2);
            p.vx = speed * dir.cos();
            p.vy = speed * dir.sin();
            p.state = ParticleState::Exploding;
        }
    }
}
