//! Particle data and the creation routine
//!
//! A particle is the atomic drawable unit: dust by default, with a small
//! random fraction promoted to larger sparkles in a fixed highlight color.

use rand::Rng;
use std::f32::consts::TAU;

/// Fraction of spawned particles promoted to the sparkle variant
const SPARKLE_CHANCE: f32 = 0.05;
/// Warm white used for sparkles regardless of the brush color
const SPARKLE_COLOR: [f32; 3] = [1.0, 0.95, 0.8];
/// Dust render radius range
const DUST_SIZE: (f32, f32) = (0.5, 2.0);
/// Sparkle render radius range
const SPARKLE_SIZE: (f32, f32) = (2.0, 4.0);
/// Initial outward speed range for fresh particles
const SPAWN_SPEED_MAX: f32 = 0.5;

/// Per-particle behavior mode. `Gathering` carries its target inline;
/// the target is refreshed every frame the grab is held.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParticleState {
    Alive,
    Gathering { tx: f32, ty: f32 },
    Exploding,
}

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// In [0,1]; purged at the end of the frame once it reaches 0
    pub life: f32,
    /// Per-frame life loss under normal aging; 0 = persistent ink
    pub decay: f32,
    /// Render radius, fixed at creation
    pub size: f32,
    pub color: [f32; 3],
    /// Sticky: once blown, wind physics governs this particle forever
    pub blown: bool,
    pub state: ParticleState,
    /// Stroke the particle belongs to; immutable, used only for undo
    pub stroke: u32,
}

impl Particle {
    /// Spawn one brush particle scattered around `(cx, cy)`.
    ///
    /// Offset is area-uniform within the brush radius (polar sampling with
    /// sqrt-scaled radius so particles do not cluster at the center).
    pub fn spawn<R: Rng>(
        cx: f32,
        cy: f32,
        color: [f32; 3],
        brush_radius: f32,
        stroke: u32,
        rng: &mut R,
    ) -> Particle {
        let theta = rng.gen::<f32>() * TAU;
        let r = brush_radius * rng.gen::<f32>().sqrt();

        let dir = rng.gen::<f32>() * TAU;
        let speed = rng.gen::<f32>() * SPAWN_SPEED_MAX;

        let sparkle = rng.gen::<f32>() < SPARKLE_CHANCE;
        let (size, color) = if sparkle {
            (rng.gen_range(SPARKLE_SIZE.0..SPARKLE_SIZE.1), SPARKLE_COLOR)
        } else {
            (rng.gen_range(DUST_SIZE.0..DUST_SIZE.1), color)
        };

        Particle {
            x: cx + r * theta.cos(),
            y: cy + r * theta.sin(),
            vx: speed * dir.cos(),
            vy: speed * dir.sin(),
            life: 1.0,
            decay: 0.0,
            size,
            color,
            blown: false,
            state: ParticleState::Alive,
            stroke,
        }
    }
}
