//! Hand landmark storage and JS bridge
//!
//! Receives MediaPipe Hands landmarks from JavaScript once per detection
//! result and holds the latest frame for the engine to pull. An empty
//! payload means "no hand detected this frame" - an expected, recoverable
//! condition, never an error.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

/// 21 landmarks × (x, y, z)
const FLAT_LEN: usize = 63;
const LANDMARK_COUNT: usize = 21;

struct HandStore {
    points: [(f32, f32); LANDMARK_COUNT],
    valid: bool,
    /// True once any payload (even an empty one) has ever arrived
    seen: bool,
}

impl Default for HandStore {
    fn default() -> Self {
        Self {
            points: [(0.0, 0.0); LANDMARK_COUNT],
            valid: false,
            seen: false,
        }
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static HAND: RefCell<HandStore> = RefCell::new(HandStore::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float32Array of 63 values
/// (21 landmarks × x, y, z). An empty array clears the hand for this frame.
#[wasm_bindgen]
pub fn update_hand_landmarks(data: &[f32]) {
    HAND.with(|store_cell| {
        let mut store = store_cell.borrow_mut();
        store.seen = true;

        if data.is_empty() {
            store.valid = false;
            return;
        }
        if data.len() != FLAT_LEN {
            web_sys::console::warn_1(
                &format!(
                    "Invalid hand landmark length: {} (expected {})",
                    data.len(),
                    FLAT_LEN
                )
                .into(),
            );
            return;
        }

        for i in 0..LANDMARK_COUNT {
            // z is depth; the canvas engine only needs x/y
            store.points[i] = (data[i * 3], data[i * 3 + 1]);
        }
        store.valid = true;
    });
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Latest hand landmarks, if a hand was detected this frame
pub fn snapshot() -> Option<[(f32, f32); LANDMARK_COUNT]> {
    HAND.with(|store_cell| {
        let store = store_cell.borrow();
        if store.valid {
            Some(store.points)
        } else {
            None
        }
    })
}

/// Whether the detector has ever delivered a payload (gates the frame loop)
pub fn has_ever_seen() -> bool {
    HAND.with(|store_cell| store_cell.borrow().seen)
}
