//! Gesture module - turns noisy per-frame landmarks into discrete events
//!
//! Re-exports only. All logic in submodules.

mod classifier;
mod tuning;

pub use classifier::{
    FrameInput, GestureClassifier, GestureFrame, INDEX_TIP, MIDDLE_TIP, PINKY_TIP, RING_TIP,
    THUMB_TIP, WRIST,
};
pub use tuning::GestureTuning;
