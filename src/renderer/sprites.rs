//! Particle pass - turns the engine's sprite list into additive quads
//!
//! Each sprite becomes one screen-aligned quad; the fragment shader masks
//! it to a soft-edged circle. Vertices carry premultiplied-free color plus
//! the flicker alpha computed by the physics pass.

use super::state::{create_vertex_buffer, GPU_STATE};
use crate::bridge;
use crate::engine::Sprite;

/// Vertex structure for particle quads
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Clip-space position
    pub position: [f32; 2],
    /// Quad-local coordinate in [-1, 1]; length 1 = circle edge
    pub local: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x2,
        2 => Float32x4
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Quad corners in local space, two counter-clockwise triangles
const CORNERS: [[f32; 2]; 6] = [
    [-1.0, -1.0],
    [1.0, -1.0],
    [1.0, 1.0],
    [-1.0, -1.0],
    [1.0, 1.0],
    [-1.0, 1.0],
];

/// Convert screen pixels to clip space (-1 to 1), flip Y
fn to_clip_space(x: f32, y: f32, width: f32, height: f32) -> (f32, f32) {
    (x / width * 2.0 - 1.0, -(y / height * 2.0 - 1.0))
}

/// Build one quad per sprite
fn build_sprite_vertices(sprites: &[Sprite], width: f32, height: f32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(sprites.len() * 6);

    for sprite in sprites {
        let color = [sprite.color[0], sprite.color[1], sprite.color[2], sprite.alpha];
        // Radius in clip units per axis
        let rx = sprite.radius / width * 2.0;
        let ry = sprite.radius / height * 2.0;
        let (cx, cy) = to_clip_space(sprite.x, sprite.y, width, height);

        for corner in CORNERS {
            vertices.push(Vertex {
                position: [cx + corner[0] * rx, cy + corner[1] * ry],
                local: corner,
                color,
            });
        }
    }

    vertices
}

/// Draw the current particle field over the (transparent) canvas
pub fn render_frame() {
    GPU_STATE.with(|state_cell| {
        let mut state_ref = state_cell.borrow_mut();
        let state = match state_ref.as_mut() {
            Some(s) => s,
            None => return,
        };

        let width = state.config.width as f32;
        let height = state.config.height as f32;
        let vertices = bridge::with_engine(|engine| {
            build_sprite_vertices(engine.sprites(), width, height)
        });

        // Grow the vertex buffer when the field outgrows it
        let needed = vertices.len() as u64;
        if needed > state.vertex_capacity {
            let mut capacity = state.vertex_capacity.max(1);
            while capacity < needed {
                capacity *= 2;
            }
            state.vertex_buffer = create_vertex_buffer(&state.device, capacity);
            state.vertex_capacity = capacity;
        }

        let output = match state.surface.get_current_texture() {
            Ok(t) => t,
            Err(_) => return,
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = state
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Particle Encoder"),
            });

        if !vertices.is_empty() {
            state
                .queue
                .write_buffer(&state.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        }

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Particle Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        // Transparent: the live video shows through
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !vertices.is_empty() {
                pass.set_pipeline(&state.render_pipeline);
                pass.set_vertex_buffer(0, state.vertex_buffer.slice(..));
                pass.draw(0..vertices.len() as u32, 0..1);
            }
        }

        state.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quads_are_centered_and_sized_in_clip_space() {
        let sprites = [Sprite {
            x: 400.0,
            y: 300.0,
            radius: 4.0,
            color: [1.0, 0.5, 0.25],
            alpha: 0.8,
        }];
        let verts = build_sprite_vertices(&sprites, 800.0, 600.0);
        assert_eq!(verts.len(), 6);

        // Screen center maps to clip origin
        let cx: f32 = verts.iter().map(|v| v.position[0]).sum::<f32>() / 6.0;
        let cy: f32 = verts.iter().map(|v| v.position[1]).sum::<f32>() / 6.0;
        assert!(cx.abs() < 1e-4 && cy.abs() < 1e-4);

        assert!(verts.iter().all(|v| v.color == [1.0, 0.5, 0.25, 0.8]));
        // Quad half-width matches the radius in clip units
        let max_x = verts.iter().map(|v| v.position[0].abs()).fold(0.0, f32::max);
        assert!((max_x - 4.0 / 800.0 * 2.0).abs() < 1e-5);
    }
}
