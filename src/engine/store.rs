//! Particle store - the authoritative arena of live particles
//!
//! A plain Vec in creation order. Removal goes through `retain`
//! (compacting, no per-frame list rebuilds) and capacity bounding drops
//! the oldest particles from the front.

use super::particle::Particle;

/// Upper bound on live particles; beyond it the oldest are silently dropped
pub const MAX_PARTICLES: usize = 80_000;

#[derive(Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, p: Particle) {
        self.particles.push(p);
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Keep only particles matching the predicate (swap-free compaction)
    pub fn retain<F: FnMut(&Particle) -> bool>(&mut self, keep: F) {
        self.particles.retain(keep);
    }

    /// Bound memory and render cost: keep only the `max` most recent
    pub fn cap_at(&mut self, max: usize) {
        if self.particles.len() > max {
            let excess = self.particles.len() - max;
            self.particles.drain(..excess);
        }
    }

    /// Highest stroke id currently present, i.e. the most recent stroke
    pub fn max_stroke(&self) -> Option<u32> {
        self.particles.iter().map(|p| p.stroke).max()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub(super) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::particle::ParticleState;

    fn particle(stroke: u32) -> Particle {
        Particle {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            life: 1.0,
            decay: 0.0,
            size: 1.0,
            color: [1.0; 3],
            blown: false,
            state: ParticleState::Alive,
            stroke,
        }
    }

    #[test]
    fn cap_drops_oldest_first() {
        let mut store = ParticleStore::new();
        for i in 0..10 {
            store.push(particle(i));
        }
        store.cap_at(4);
        assert_eq!(store.len(), 4);
        let strokes: Vec<u32> = store.iter().map(|p| p.stroke).collect();
        assert_eq!(strokes, vec![6, 7, 8, 9]);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut store = ParticleStore::new();
        store.push(particle(0));
        store.clear();
        assert!(store.is_empty());
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn max_stroke_tracks_contents() {
        let mut store = ParticleStore::new();
        assert_eq!(store.max_stroke(), None);
        store.push(particle(2));
        store.push(particle(5));
        store.push(particle(1));
        assert_eq!(store.max_stroke(), Some(5));
    }
}
