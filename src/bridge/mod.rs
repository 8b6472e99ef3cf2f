//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod commands;
mod face;
mod frame;
mod hand;

pub use commands::{
    clear_canvas, resize_viewport, set_blow_params, set_brush_color, set_brush_size,
    set_grip_params, set_interaction_mode, set_pinch_params, set_pointer_smoothing, set_tool,
    set_wind_sustain, undo_stroke,
};
pub use face::update_face_landmarks;
pub use frame::{advance_frame, with_engine};
pub use hand::update_hand_landmarks;
