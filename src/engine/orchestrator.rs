//! Frame orchestrator - the per-frame driver
//!
//! Sequences classifier → stroke controller → physics → sprite emission.
//! One tick per display refresh; all state is exclusively owned here, so
//! no locking anywhere in the core.

use super::physics::{self, Sprite};
use super::stamp;
use super::store::{ParticleStore, MAX_PARTICLES};
use super::stroke::{Mode, StrokeController};
use crate::gesture::{FrameInput, GestureClassifier, GestureTuning};
use rand::rngs::SmallRng;
use rand::SeedableRng;

pub struct Engine {
    classifier: GestureClassifier,
    store: ParticleStore,
    controller: StrokeController,
    rng: SmallRng,
    viewport: (f32, f32),
    sprites: Vec<Sprite>,
}

impl Engine {
    pub fn new(width: f32, height: f32) -> Self {
        Self::seeded(width, height, SmallRng::from_entropy())
    }

    fn seeded(width: f32, height: f32, rng: SmallRng) -> Self {
        Self {
            classifier: GestureClassifier::new(GestureTuning::default()),
            store: ParticleStore::new(),
            controller: StrokeController::new(),
            rng,
            viewport: (width, height),
            sprites: Vec::new(),
        }
    }

    /// Deterministic engine for tests
    #[cfg(test)]
    pub fn with_seed(width: f32, height: f32, seed: u64) -> Self {
        Self::seeded(width, height, SmallRng::seed_from_u64(seed))
    }

    /// Advance one frame: classify, mutate, integrate, bound.
    /// Returns the sprites to draw for this frame.
    pub fn tick(&mut self, input: &FrameInput) -> &[Sprite] {
        let events = self.classifier.classify(input, self.viewport);

        match self.controller.mode {
            Mode::FreeDraw => {
                self.controller
                    .apply_draw(&events, &mut self.store, &mut self.rng);
            }
            Mode::Gesture => {
                if events.double_pinch {
                    if let Some(pointer) = events.pointer {
                        let stroke = self.controller.allocate_stroke();
                        stamp::burst(&mut self.store, pointer, stroke, &mut self.rng);
                    }
                }
                if events.fist_held {
                    if let Some(wrist) = events.wrist {
                        physics::gather_all(&mut self.store, wrist);
                    }
                }
                if events.palm_open {
                    physics::explode_all(&mut self.store, &mut self.rng);
                }
            }
        }

        physics::step(
            &mut self.store,
            events.wind_active,
            &mut self.rng,
            &mut self.sprites,
        );
        self.store.cap_at(MAX_PARTICLES);

        &self.sprites
    }

    /// Sprites emitted by the most recent tick
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn controller_mut(&mut self) -> &mut StrokeController {
        &mut self.controller
    }

    pub fn tuning_mut(&mut self) -> &mut GestureTuning {
        self.classifier.tuning_mut()
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
    }

    /// Empty the canvas and drop all carried gesture state
    pub fn clear(&mut self) {
        self.store.clear();
        self.sprites.clear();
        self.classifier.reset();
    }

    pub fn undo(&mut self) {
        self.controller.undo(&mut self.store);
    }
}
