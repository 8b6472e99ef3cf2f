//! Face landmark storage and JS bridge
//!
//! The blow gesture only needs six face-mesh points, so JavaScript sends
//! exactly those, packed in a fixed order: upper lip (13), lower lip (14),
//! mouth corners (61, 291), chin (152), nose bridge (6). Missing face =
//! no blow detection this frame, never an error.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

/// 6 tracked points × (x, y, z)
const FLAT_LEN: usize = 18;
const POINT_COUNT: usize = 6;

struct FaceStore {
    points: [(f32, f32); POINT_COUNT],
    valid: bool,
    seen: bool,
}

impl Default for FaceStore {
    fn default() -> Self {
        Self {
            points: [(0.0, 0.0); POINT_COUNT],
            valid: false,
            seen: false,
        }
    }
}

thread_local! {
    static FACE: RefCell<FaceStore> = RefCell::new(FaceStore::default());
}

/// Called from JavaScript with a flat Float32Array of 18 values
/// (6 points × x, y, z). An empty array clears the face for this frame.
#[wasm_bindgen]
pub fn update_face_landmarks(data: &[f32]) {
    FACE.with(|store_cell| {
        let mut store = store_cell.borrow_mut();
        store.seen = true;

        if data.is_empty() {
            store.valid = false;
            return;
        }
        if data.len() != FLAT_LEN {
            web_sys::console::warn_1(
                &format!(
                    "Invalid face landmark length: {} (expected {})",
                    data.len(),
                    FLAT_LEN
                )
                .into(),
            );
            return;
        }

        for i in 0..POINT_COUNT {
            store.points[i] = (data[i * 3], data[i * 3 + 1]);
        }
        store.valid = true;
    });
}

/// Latest face points, if a face was detected this frame
pub fn snapshot() -> Option<[(f32, f32); POINT_COUNT]> {
    FACE.with(|store_cell| {
        let store = store_cell.borrow();
        if store.valid {
            Some(store.points)
        } else {
            None
        }
    })
}

pub fn has_ever_seen() -> bool {
    FACE.with(|store_cell| store_cell.borrow().seen)
}
