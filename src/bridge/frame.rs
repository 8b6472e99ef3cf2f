//! Per-frame driver - owns the engine cell and times each tick
//!
//! `advance_frame` is invoked once per display refresh from `render_frame`.
//! Until the landmark detector has delivered its first payload the tick is
//! skipped entirely (explicit no-mutation path); afterwards, frames without
//! a hand or face still tick so the particle field keeps animating.

use super::{face, hand};
use crate::engine::Engine;
use crate::gesture::FrameInput;
use std::cell::RefCell;

thread_local! {
    static ENGINE: RefCell<Engine> = RefCell::new(Engine::new(800.0, 600.0));
}

/// Advance the engine one frame from the latest bridge snapshots.
/// Re-arms implicitly: the caller schedules the next frame.
pub fn advance_frame() {
    // Skip path: upstream detection not ready yet, mutate nothing
    if !hand::has_ever_seen() && !face::has_ever_seen() {
        return;
    }

    let input = FrameInput {
        hand: hand::snapshot(),
        face: face::snapshot(),
        timestamp_ms: js_sys::Date::now(),
    };

    ENGINE.with(|engine_cell| {
        engine_cell.borrow_mut().tick(&input);
    });
}

/// Run a closure against the shared engine (commands, renderer)
pub fn with_engine<R>(f: impl FnOnce(&mut Engine) -> R) -> R {
    ENGINE.with(|engine_cell| f(&mut engine_cell.borrow_mut()))
}
