//! Shape stamper - rasterizes the stamp message into a one-shot burst
//!
//! A double pinch in gesture mode drops the fixed message at the pointer as
//! a cloud of small, crisp particles. The glyphs come from an embedded 5x7
//! bitmap font so the burst is deterministic; the scaled bitmap is sampled
//! on a fixed stride and every lit sample becomes one particle. The whole
//! stamp shares a single stroke id, so it undoes as one unit.

use super::particle::{Particle, ParticleState};
use super::store::ParticleStore;
use rand::Rng;

/// The fixed message every stamp rasterizes
const STAMP_MESSAGE: &str = "HELLO";
/// Glyph height on screen, in pixels
const STAMP_FONT_PX: f32 = 48.0;
/// Sample every Nth bitmap pixel in both axes
const STAMP_STRIDE: usize = 3;
/// Render radius of stamp particles (near-zero keeps the text crisp)
const STAMP_PARTICLE_SIZE: f32 = 1.2;
/// Each stamp particle picks one of these uniformly
const STAMP_PALETTE: [[f32; 3]; 5] = [
    [1.0, 0.35, 0.55],
    [1.0, 0.75, 0.25],
    [0.45, 0.95, 0.55],
    [0.35, 0.75, 1.0],
    [0.80, 0.55, 1.0],
];

const GLYPH_COLS: usize = 5;
const GLYPH_ROWS: usize = 7;
/// Blank columns between glyphs, in font cells
const GLYPH_GAP: usize = 1;

/// 5x7 glyphs, one 5-bit row pattern per array entry, MSB = leftmost column
fn glyph(c: char) -> [u8; 7] {
    match c {
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        // Unknown characters render as blanks
        _ => [0; 7],
    }
}

/// Offscreen boolean bitmap of the rasterized message
pub struct Bitmap {
    pub width: usize,
    pub height: usize,
    bits: Vec<bool>,
}

impl Bitmap {
    pub fn lit(&self, x: usize, y: usize) -> bool {
        self.bits[y * self.width + x]
    }
}

/// Rasterize `text` with each font cell scaled to match the target font size
pub fn rasterize(text: &str) -> Bitmap {
    let scale = ((STAMP_FONT_PX / GLYPH_ROWS as f32).round() as usize).max(1);
    let chars: Vec<char> = text.chars().collect();
    let cols = chars.len() * (GLYPH_COLS + GLYPH_GAP) - GLYPH_GAP.min(chars.len());
    let width = cols * scale;
    let height = GLYPH_ROWS * scale;
    let mut bits = vec![false; width * height];

    for (ci, &c) in chars.iter().enumerate() {
        let rows = glyph(c);
        let x0 = ci * (GLYPH_COLS + GLYPH_GAP) * scale;
        for (row, pattern) in rows.iter().enumerate() {
            for col in 0..GLYPH_COLS {
                if pattern & (1 << (GLYPH_COLS - 1 - col)) == 0 {
                    continue;
                }
                // Fill the scale x scale block for this font cell
                for dy in 0..scale {
                    for dx in 0..scale {
                        let x = x0 + col * scale + dx;
                        let y = row * scale + dy;
                        bits[y * width + x] = true;
                    }
                }
            }
        }
    }

    Bitmap {
        width,
        height,
        bits,
    }
}

/// Stamp the message centered on `(cx, cy)`: one particle per lit sample,
/// all tagged with `stroke`.
pub fn burst<R: Rng>(store: &mut ParticleStore, (cx, cy): (f32, f32), stroke: u32, rng: &mut R) {
    let bitmap = rasterize(STAMP_MESSAGE);
    let x0 = cx - bitmap.width as f32 / 2.0;
    let y0 = cy - bitmap.height as f32 / 2.0;

    for y in (0..bitmap.height).step_by(STAMP_STRIDE) {
        for x in (0..bitmap.width).step_by(STAMP_STRIDE) {
            if !bitmap.lit(x, y) {
                continue;
            }
            store.push(Particle {
                x: x0 + x as f32,
                y: y0 + y as f32,
                vx: 0.0,
                vy: 0.0,
                life: 1.0,
                decay: 0.0,
                size: STAMP_PARTICLE_SIZE,
                color: STAMP_PALETTE[rng.gen_range(0..STAMP_PALETTE.len())],
                blown: false,
                state: ParticleState::Alive,
                stroke,
            });
        }
    }
}
