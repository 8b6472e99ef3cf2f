//! Stroke & tool controller - maps gesture events into store mutations
//!
//! Drawing and erasing both interpolate the pointer path so fast motions
//! leave no gaps; stroke ids group particles for whole-stroke undo.

use super::particle::Particle;
use super::store::ParticleStore;
use crate::gesture::GestureFrame;
use rand::Rng;

/// Particles spawned at every interpolation step
pub const SPAWN_RATE: usize = 3;
/// Eraser radius as a multiple of the brush radius
const ERASE_RADIUS_FACTOR: f32 = 4.0;
/// Interpolation never steps finer than this (screen units)
const MIN_STEP: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    Draw,
    Erase,
}

/// Free-draw paints with pinches; gesture mode repurposes pinch/fist for
/// stamping, gathering and exploding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    FreeDraw,
    Gesture,
}

pub struct StrokeController {
    pub tool: Tool,
    pub mode: Mode,
    pub brush_size: f32,
    pub brush_color: [f32; 3],
    next_stroke: u32,
}

impl StrokeController {
    pub fn new() -> Self {
        Self {
            tool: Tool::Draw,
            mode: Mode::FreeDraw,
            brush_size: 8.0,
            brush_color: [0.45, 0.75, 1.0],
            next_stroke: 0,
        }
    }

    /// Allocate a fresh stroke id (new pinch-down or shape stamp)
    pub fn allocate_stroke(&mut self) -> u32 {
        let id = self.next_stroke;
        self.next_stroke += 1;
        id
    }

    /// Apply one frame of free-draw input. A stroke id is allocated exactly
    /// once per pinch-down; a held pinch keeps painting even when stationary.
    pub fn apply_draw<R: Rng>(
        &mut self,
        events: &GestureFrame,
        store: &mut ParticleStore,
        rng: &mut R,
    ) {
        if events.pinch_start {
            self.allocate_stroke();
        }
        if !events.pinch_held {
            return;
        }
        let cur = match events.pointer {
            Some(p) => p,
            None => return,
        };
        let prev = events.prev_pointer.unwrap_or(cur);
        let stroke = self.next_stroke.saturating_sub(1);

        match self.tool {
            Tool::Draw => self.draw_path(prev, cur, stroke, store, rng),
            Tool::Erase => self.erase_path(prev, cur, store),
        }
    }

    /// Subdivide the pointer jump and spawn SPAWN_RATE particles per step
    fn draw_path<R: Rng>(
        &self,
        from: (f32, f32),
        to: (f32, f32),
        stroke: u32,
        store: &mut ParticleStore,
        rng: &mut R,
    ) {
        for (x, y) in path_steps(from, to, self.brush_size) {
            for _ in 0..SPAWN_RATE {
                store.push(Particle::spawn(
                    x,
                    y,
                    self.brush_color,
                    self.brush_size,
                    stroke,
                    rng,
                ));
            }
        }
    }

    /// Remove everything within the eraser radius of each step point
    fn erase_path(&self, from: (f32, f32), to: (f32, f32), store: &mut ParticleStore) {
        let radius = self.brush_size * ERASE_RADIUS_FACTOR;
        let r2 = radius * radius;
        for (x, y) in path_steps(from, to, self.brush_size) {
            store.retain(|p| {
                let dx = p.x - x;
                let dy = p.y - y;
                dx * dx + dy * dy > r2
            });
        }
    }

    /// Remove the most recently created complete stroke. No-op when empty.
    pub fn undo(&self, store: &mut ParticleStore) {
        if let Some(last) = store.max_stroke() {
            store.retain(|p| p.stroke != last);
        }
    }
}

impl Default for StrokeController {
    fn default() -> Self {
        Self::new()
    }
}

/// Interpolated points along `from → to` in steps of `max(0.5, brush/2)`,
/// at least one step (the endpoint) even for a stationary pointer.
fn path_steps(
    from: (f32, f32),
    to: (f32, f32),
    brush_size: f32,
) -> impl Iterator<Item = (f32, f32)> {
    let step = (brush_size / 2.0).max(MIN_STEP);
    let dist = (to.0 - from.0).hypot(to.1 - from.1);
    let steps = ((dist / step).ceil() as usize).max(1);

    (1..=steps).map(move |i| {
        let t = i as f32 / steps as f32;
        (from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn pinch_frame(prev: Option<(f32, f32)>, cur: (f32, f32), start: bool) -> GestureFrame {
        GestureFrame {
            pointer: Some(cur),
            prev_pointer: prev,
            pinch_start: start,
            pinch_held: true,
            ..GestureFrame::default()
        }
    }

    #[test]
    fn step_count_matches_distance_over_step_size() {
        // D = 10, R = 4 -> step 2 -> 5 steps
        let pts: Vec<_> = path_steps((0.0, 0.0), (10.0, 0.0), 4.0).collect();
        assert_eq!(pts.len(), 5);
        assert_eq!(*pts.last().unwrap(), (10.0, 0.0));

        // Stationary pointer still yields one step
        let pts: Vec<_> = path_steps((3.0, 3.0), (3.0, 3.0), 4.0).collect();
        assert_eq!(pts.len(), 1);

        // Tiny brush clamps the step size at 0.5
        let pts: Vec<_> = path_steps((0.0, 0.0), (2.0, 0.0), 0.1).collect();
        assert_eq!(pts.len(), 4);
    }

    #[test]
    fn draw_spawns_spawn_rate_per_step() {
        let mut ctl = StrokeController::new();
        ctl.brush_size = 4.0;
        let mut store = ParticleStore::new();
        let mut rng = SmallRng::seed_from_u64(1);

        ctl.apply_draw(
            &pinch_frame(Some((0.0, 0.0)), (10.0, 0.0), true),
            &mut store,
            &mut rng,
        );
        assert_eq!(store.len(), 5 * SPAWN_RATE);
    }

    #[test]
    fn one_pinch_drag_is_one_stroke() {
        let mut ctl = StrokeController::new();
        let mut store = ParticleStore::new();
        let mut rng = SmallRng::seed_from_u64(2);

        ctl.apply_draw(&pinch_frame(None, (0.0, 0.0), true), &mut store, &mut rng);
        ctl.apply_draw(
            &pinch_frame(Some((0.0, 0.0)), (20.0, 0.0), false),
            &mut store,
            &mut rng,
        );
        let ids: Vec<u32> = store.iter().map(|p| p.stroke).collect();
        assert!(ids.iter().all(|&id| id == ids[0]));
    }

    #[test]
    fn undo_removes_only_the_latest_stroke() {
        let mut ctl = StrokeController::new();
        let mut store = ParticleStore::new();
        let mut rng = SmallRng::seed_from_u64(3);

        // First drag
        ctl.apply_draw(&pinch_frame(None, (0.0, 0.0), true), &mut store, &mut rng);
        let first = store.len();
        // Second drag
        ctl.apply_draw(
            &pinch_frame(None, (100.0, 100.0), true),
            &mut store,
            &mut rng,
        );
        assert!(store.len() > first);

        ctl.undo(&mut store);
        assert_eq!(store.len(), first);
        assert!(store.iter().all(|p| p.stroke == 0));

        ctl.undo(&mut store);
        assert!(store.is_empty());
        // Undo on an empty store is a no-op
        ctl.undo(&mut store);
        assert!(store.is_empty());
    }

    #[test]
    fn erase_clears_the_swept_path() {
        let mut ctl = StrokeController::new();
        ctl.brush_size = 2.0;
        let mut store = ParticleStore::new();
        let mut rng = SmallRng::seed_from_u64(4);

        // Ink a horizontal band
        ctl.apply_draw(
            &pinch_frame(Some((0.0, 50.0)), (200.0, 50.0), true),
            &mut store,
            &mut rng,
        );
        assert!(!store.is_empty());

        ctl.tool = Tool::Erase;
        ctl.apply_draw(
            &pinch_frame(Some((0.0, 50.0)), (200.0, 50.0), true),
            &mut store,
            &mut rng,
        );

        // Nothing remains within the eraser radius of any sampled point
        let radius = ctl.brush_size * ERASE_RADIUS_FACTOR;
        for (x, y) in path_steps((0.0, 50.0), (200.0, 50.0), ctl.brush_size) {
            for p in store.iter() {
                let d = (p.x - x).hypot(p.y - y);
                assert!(d > radius);
            }
        }
    }
}
