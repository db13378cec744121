// Core types shared by the rasterisers, the scene and the window.

#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the surface is on screen (pixels)
    pub height: usize,     // how tall the surface is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Packed color at (x, y), or None outside the surface.
    #[cfg(test)]
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Straight RGBA bytes (A = 255) for image encoders.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for &px in &self.pixels {
            out.push(((px >> 16) & 0xFF) as u8);
            out.push(((px >> 8) & 0xFF) as u8);
            out.push((px & 0xFF) as u8);
            out.push(255);
        }
        out
    }
}

/// A rectangular block of RGBA pixels placed at a world-space origin.
/// Visual: what a single shape paints; untouched pixels stay transparent
/// (alpha 0) and leave the surface underneath alone on blit.
#[derive(Clone, Debug, Default)]
pub struct PixelBlock {
    pub x: i32,
    pub y: i32,
    pub width: usize,
    pub height: usize,
    pixels: Vec<u32>, // 0xAARRGGBB
}

impl PixelBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-target the block to a new rectangle and clear it to transparent.
    /// The backing storage is kept so one block can serve every shape of
    /// every frame.
    pub fn reset(&mut self, x: i32, y: i32, width: usize, height: usize) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width * height, 0);
    }

    /// Write an opaque grey pixel at block-local (lx, ly).
    #[inline]
    pub fn put(&mut self, lx: usize, ly: usize, luma: u8) {
        let l = luma as u32;
        self.pixels[ly * self.width + lx] = 0xFF00_0000 | (l << 16) | (l << 8) | l;
    }

    /// Raw 0xAARRGGBB word at block-local (lx, ly).
    #[inline]
    pub fn word(&self, lx: usize, ly: usize) -> u32 {
        self.pixels[ly * self.width + lx]
    }

    /// Luminance at block-local (lx, ly) if that pixel was written.
    #[cfg(test)]
    pub fn luma(&self, lx: usize, ly: usize) -> Option<u8> {
        let px = self.word(lx, ly);
        if px >> 24 == 0 { None } else { Some((px & 0xFF) as u8) }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of written (opaque) pixels.
    #[cfg(test)]
    pub fn written(&self) -> usize {
        self.pixels.iter().filter(|px| **px >> 24 != 0).count()
    }
}

/// Surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    /// Half the diagonal: the farthest any on-screen point is from the center.
    pub fn half_diagonal(&self) -> f64 {
        let (w, h) = (self.width as f64, self.height as f64);
        (w * w + h * h).sqrt() / 2.0
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height) as f64
    }
}

/// Pointer position in surface pixels; `active` while it is over the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cursor {
    pub x: f64,
    pub y: f64,
    pub active: bool,
}

impl Cursor {
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y, active: true }
    }

    #[cfg(test)]
    pub fn inactive(x: f64, y: f64) -> Self {
        Self { x, y, active: false }
    }
}
