//! Renderer module - WebGPU additive particle rendering
//!
//! Re-exports only. All logic in submodules.

mod sprites;
mod state;

pub use sprites::render_frame;
#[cfg(target_arch = "wasm32")]
pub use state::initialize_gpu;
pub use state::{resize_surface, GpuStateError};
