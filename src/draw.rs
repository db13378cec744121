// Window + software drawing utilities.
// Visual effects provided here:
// 1) A resizable window that shows the dithered animation.
// 2) Solid fills and alpha-keyed blits of shape blocks onto the surface.
// 3) A tiny 5x7 bitmap font for the optional HUD (white on black shadow).

use crate::dither::{BLACK, WHITE};
use crate::error::Error;
use crate::types::{FrameBuffer, PixelBlock};
use minifb::{Key, KeyRepeat, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a resizable window with an initial size.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let options = WindowOptions { resize: true, ..WindowOptions::default() };
        let mut window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        // The host side of the frame scheduler: pace presents at ~60 Hz.
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Pump window events without presenting (used while the window is zero-sized).
    pub fn idle(&mut self) {
        self.window.update();
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we’ll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current drawable size of the window in pixels.
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    /// Mouse position in window pixels, or None once it leaves the window.
    /// Visual: Some(..) means the cursor halo is drawn at that point.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Discard)
    }

    /// H toggles the HUD overlay.
    pub fn h_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::H, KeyRepeat::No)
    }
}

/* ---------- Software drawing: fills, blits, tiny bitmap font ---------- */

/// Paint the whole surface one color.
pub fn fill(fb: &mut FrameBuffer, color: u32) {
    fb.pixels.fill(color);
}

/// Copy a shape block onto the surface at its world origin.
/// Transparent pixels (alpha 0) are skipped and anything outside the
/// surface is clipped.
pub fn blit(fb: &mut FrameBuffer, block: &PixelBlock) {
    if block.is_empty() {
        return;
    }
    let (fw, fh) = (fb.width as i32, fb.height as i32);

    // Visible span of the block in block-local coordinates.
    let x0 = (-block.x).max(0);
    let y0 = (-block.y).max(0);
    let x1 = (fw - block.x).min(block.width as i32);
    let y1 = (fh - block.y).min(block.height as i32);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    for ly in y0..y1 {
        let row = ((block.y + ly) * fw) as usize;
        for lx in x0..x1 {
            let px = block.word(lx as usize, ly as usize);
            if px >> 24 == 0 {
                continue;
            }
            fb.pixels[row + (block.x + lx) as usize] = px & 0x00_FF_FF_FF;
        }
    }
}

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/* ---------- 5x7 bitmap font (ASCII subset for "FPS 00.0 | T 000.00") ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y): black shadow first, then white.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char) {
    let Some(rows) = glyph5x7(ch) else { return };
    for (offset, color) in [(1, BLACK), (0, WHITE)] {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx + offset, y + ry as i32 + offset, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs; each glyph advances 6 pixels.
/// Visual: a compact monochrome HUD line that stays on the dither palette.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch);
        x += 6;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blit_skips_transparent_pixels() {
        let mut fb = FrameBuffer::new(4, 4);
        fill(&mut fb, 0x00_12_34_56);
        let mut block = PixelBlock::new();
        block.reset(1, 1, 2, 2);
        block.put(0, 0, 255);
        block.put(1, 1, 0);
        blit(&mut fb, &block);
        assert_eq!(fb.get(1, 1), Some(WHITE));
        assert_eq!(fb.get(2, 2), Some(BLACK));
        assert_eq!(fb.get(2, 1), Some(0x00_12_34_56));
        assert_eq!(fb.get(0, 0), Some(0x00_12_34_56));
    }

    #[test]
    fn blit_clips_to_surface() {
        let mut fb = FrameBuffer::new(5, 5);
        let mut block = PixelBlock::new();
        block.reset(-2, 3, 4, 4);
        for y in 0..4 {
            for x in 0..4 {
                block.put(x, y, 255);
            }
        }
        blit(&mut fb, &block);
        let lit: usize = fb.pixels.iter().filter(|&&p| p == WHITE).count();
        // visible span: x 0..2, y 3..5
        assert_eq!(lit, 4);
        assert_eq!(fb.get(1, 4), Some(WHITE));
        assert_eq!(fb.get(2, 4), Some(BLACK));

        // entirely off-surface
        block.reset(10, 10, 3, 3);
        block.put(0, 0, 255);
        blit(&mut fb, &block);
        assert_eq!(fb.pixels.iter().filter(|&&p| p == WHITE).count(), 4);
    }

    #[test]
    fn hud_text_is_monochrome() {
        let mut fb = FrameBuffer::new(120, 16);
        fill(&mut fb, BLACK);
        draw_text_5x7(&mut fb, 2, 2, "FPS 59.9 | T: 12.34");
        assert!(fb.pixels.iter().any(|&p| p == WHITE));
        assert!(fb.pixels.iter().all(|&p| p == WHITE || p == BLACK));
    }

    #[test]
    fn unknown_glyphs_draw_nothing() {
        let mut fb = FrameBuffer::new(20, 10);
        draw_text_5x7(&mut fb, 0, 0, "xyz");
        assert!(fb.pixels.iter().all(|&p| p == BLACK));
    }
}
