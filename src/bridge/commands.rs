//! UI commands and tuning setters
//!
//! Fire-on-change entry points driven by the toolbar: clear, undo, tool,
//! brush, interaction mode, viewport, plus runtime overrides for the
//! gesture thresholds (they are configuration, not contracts).

use super::frame::with_engine;
use crate::engine::{Mode, Tool};
use wasm_bindgen::prelude::*;

/// Empty the canvas and reset carried gesture state
#[wasm_bindgen]
pub fn clear_canvas() {
    with_engine(|engine| engine.clear());
}

/// Remove the most recently drawn complete stroke
#[wasm_bindgen]
pub fn undo_stroke() {
    with_engine(|engine| engine.undo());
}

/// 0 = draw, anything else = erase
#[wasm_bindgen]
pub fn set_tool(tool: u32) {
    with_engine(|engine| {
        engine.controller_mut().tool = if tool == 0 { Tool::Draw } else { Tool::Erase };
    });
}

/// 0 = free drawing, anything else = gesture mode (stamp/gather/explode)
#[wasm_bindgen]
pub fn set_interaction_mode(mode: u32) {
    with_engine(|engine| {
        engine.controller_mut().mode = if mode == 0 { Mode::FreeDraw } else { Mode::Gesture };
    });
}

#[wasm_bindgen]
pub fn set_brush_size(size: f32) {
    with_engine(|engine| engine.controller_mut().brush_size = size.max(0.5));
}

/// RGB in [0,1]
#[wasm_bindgen]
pub fn set_brush_color(r: f32, g: f32, b: f32) {
    with_engine(|engine| engine.controller_mut().brush_color = [r, g, b]);
}

/// Map normalized camera space to this screen size
pub fn resize_viewport(width: u32, height: u32) {
    with_engine(|engine| engine.set_viewport(width as f32, height as f32));
}

// ============================================================================
// GESTURE TUNING OVERRIDES
// ============================================================================

#[wasm_bindgen]
pub fn set_pointer_smoothing(alpha: f32) {
    with_engine(|engine| engine.tuning_mut().pointer_alpha = alpha.clamp(0.01, 1.0));
}

#[wasm_bindgen]
pub fn set_pinch_params(pinch_dist: f32, double_window_ms: f64) {
    with_engine(|engine| {
        let tuning = engine.tuning_mut();
        tuning.pinch_dist = pinch_dist;
        tuning.double_pinch_window_ms = double_window_ms;
    });
}

#[wasm_bindgen]
pub fn set_grip_params(fist_enter: f32, palm_exit: f32) {
    with_engine(|engine| {
        let tuning = engine.tuning_mut();
        tuning.fist_enter = fist_enter;
        // Keep the hysteresis band ordered
        tuning.palm_exit = palm_exit.max(fist_enter);
    });
}

#[wasm_bindgen]
pub fn set_blow_params(mouth_open: f32, pout_ratio: f32, pout_width: f32) {
    with_engine(|engine| {
        let tuning = engine.tuning_mut();
        tuning.mouth_open = mouth_open;
        tuning.pout_ratio = pout_ratio;
        tuning.pout_width = pout_width;
    });
}

#[wasm_bindgen]
pub fn set_wind_sustain(sustain_ms: f64) {
    with_engine(|engine| engine.tuning_mut().wind_sustain_ms = sustain_ms.max(0.0));
}
