//! Lightpaint Web - paint with light in front of a camera
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

mod bridge;
mod engine;
mod gesture;
mod renderer;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    clear_canvas, set_blow_params, set_brush_color, set_brush_size, set_grip_params,
    set_interaction_mode, set_pinch_params, set_pointer_smoothing, set_tool, set_wind_sustain,
    undo_stroke, update_face_landmarks, update_hand_landmarks,
};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize WebGPU - must be called before render_frame
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn init() -> Result<(), JsValue> {
    renderer::initialize_gpu().await?;
    console_log!("✅ WebGPU initialized with additive particle pass");
    Ok(())
}

/// Resize the canvas surface and the engine's screen-space mapping
#[wasm_bindgen]
pub fn resize_viewport(width: u32, height: u32) {
    bridge::resize_viewport(width, height);
    renderer::resize_surface(width, height);
}

/// Advance the engine one frame and draw the particle field.
/// Called once per display refresh (requestAnimationFrame).
#[wasm_bindgen]
pub fn render_frame() {
    bridge::advance_frame();
    renderer::render_frame();
}
