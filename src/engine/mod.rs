//! Engine module - particle store, physics, strokes, stamping, orchestration
//!
//! Pure Rust, no web types: everything here is unit-testable off the browser.
//! Re-exports only. All logic in submodules.

mod orchestrator;
mod particle;
mod physics;
mod stamp;
mod store;
mod stroke;

pub use orchestrator::Engine;
pub use particle::{Particle, ParticleState};
pub use physics::Sprite;
pub use store::{ParticleStore, MAX_PARTICLES};
pub use stroke::{Mode, StrokeController, Tool};
