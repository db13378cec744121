// Shape rasterisers. Each one fills a PixelBlock covering its bounding
// rectangle; the caller blits the block onto the surface.
// Visual: dither cells are sampled in world space, so a shape sliding
// across the screen "reveals" a fixed pattern instead of dragging it along.

use std::f64::consts::TAU;

use crate::dither::dither_luma;
use crate::types::{PixelBlock, Viewport};

/// Number of horizontal wave bands.
pub const WAVE_COUNT: usize = 8;
/// Half the height of a wave band (pixels).
pub const WAVE_HEIGHT: f64 = 35.0;
/// Column stride inside a band; odd columns stay blank.
pub const WAVE_STRIDE: usize = 2;
/// Distance from the wave line that still gets ink.
const WAVE_REACH: f64 = 3.0;

/// Side of one background grid cell (pixels).
pub const GRID_SIZE: usize = 50;

/// Sides of the morphing polygon.
pub const HEX_SIDES: usize = 6;
/// Radial wobble of each hexagon vertex.
const HEX_MORPH: f64 = 0.15;

/// Disc with a linear radial fade: `intensity` at the center, 0 at the rim.
/// Visual: a soft dot, dense in the middle and sparse at the edge.
pub fn disc(block: &mut PixelBlock, cx: f64, cy: f64, radius: f64, intensity: f64) {
    if radius.is_nan() || radius <= 0.0 {
        block.reset(0, 0, 0, 0);
        return;
    }

    let size = (radius * 2.0).ceil() as usize;
    let ox = (cx - radius).floor() as i32;
    let oy = (cy - radius).floor() as i32;
    block.reset(ox, oy, size, size);

    for y in 0..size {
        let dy = y as f64 - radius;
        for x in 0..size {
            let dx = x as f64 - radius;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist < radius {
                let fade = 1.0 - dist / radius;
                let luma = dither_luma(ox + x as i32, oy + y as i32, intensity * fade);
                block.put(x, y, luma);
            }
        }
    }
}

/// One orbiting hexagon of the central form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hexagon {
    pub x: f64,        // world x of the shape's origin
    pub y: f64,        // world y of the shape's origin
    pub size: f64,     // mean vertex radius
    pub rotation: f64, // radians
    pub time: f64,     // drives the vertex wobble
    pub index: usize,  // phase offset between shapes
}

impl Hexagon {
    /// Vertices in world space: morphed, rotated about the origin, then
    /// moved to (x, y).
    pub fn vertices(&self) -> [(f64, f64); HEX_SIDES] {
        let (sin_r, cos_r) = self.rotation.sin_cos();
        let mut pts = [(0.0, 0.0); HEX_SIDES];
        for (i, pt) in pts.iter_mut().enumerate() {
            let angle = i as f64 / HEX_SIDES as f64 * TAU;
            let morph = (self.time * 0.5 + self.index as f64 + angle * 2.0).sin() * HEX_MORPH;
            let radius = self.size * (1.0 + morph);
            let (lx, ly) = (angle.cos() * radius, angle.sin() * radius);
            *pt = (
                self.x + lx * cos_r - ly * sin_r,
                self.y + lx * sin_r + ly * cos_r,
            );
        }
        pts
    }

    /// Brightness falls off with distance from the *world origin* (top-left
    /// corner), not the viewport center, so shapes toward the top-left glow
    /// brighter.
    pub fn intensity(&self, viewport: Viewport) -> f64 {
        let dist = (self.x * self.x + self.y * self.y).sqrt();
        let max_dist = viewport.half_diagonal();
        0.4 + (1.0 - dist / max_dist) * 0.4
    }
}

/// Even-odd ray cast: is (px, py) inside the closed polygon?
pub fn point_in_polygon(px: f64, py: f64, poly: &[(f64, f64)]) -> bool {
    let mut inside = false;
    let mut j = poly.len().wrapping_sub(1);
    for i in 0..poly.len() {
        let (xi, yi) = poly[i];
        let (xj, yj) = poly[j];
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Filled hexagon at a uniform intensity.
/// Visual: a flat-shaded, slowly breathing six-sided tile.
pub fn hexagon(block: &mut PixelBlock, hex: &Hexagon, viewport: Viewport) {
    let pts = hex.vertices();
    let intensity = hex.intensity(viewport);

    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for &(x, y) in &pts {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    if !(max_x > min_x && max_y > min_y) {
        block.reset(0, 0, 0, 0);
        return;
    }

    let ox = min_x.floor() as i32;
    let oy = min_y.floor() as i32;
    let w = (max_x.ceil() as i32 - ox) as usize;
    let h = (max_y.ceil() as i32 - oy) as usize;
    block.reset(ox, oy, w, h);

    for y in 0..h {
        let wy = oy + y as i32;
        for x in 0..w {
            let wx = ox + x as i32;
            // sample at the pixel center
            if point_in_polygon(wx as f64 + 0.5, wy as f64 + 0.5, &pts) {
                block.put(x, y, dither_luma(wx, wy, intensity));
            }
        }
    }
}

/// Horizontal sine band `index` (0..WAVE_COUNT) spanning the full width.
/// Visual: a thin dotted line undulating across the screen; lower bands are
/// brighter and flatter.
pub fn wave_band(block: &mut PixelBlock, index: usize, t: f64, viewport: Viewport) {
    let frac = index as f64 / WAVE_COUNT as f64;
    let y_base = frac * viewport.height as f64;
    let top = (y_base - WAVE_HEIGHT).floor() as i32;
    let rows = (WAVE_HEIGHT * 2.0).ceil() as usize;
    block.reset(0, top, viewport.width, rows);

    let offset = t * 15.0 + index as f64 * 25.0;
    let band_intensity = 0.08 + frac * 0.15;
    let amplitude = WAVE_HEIGHT * (1.0 - frac);

    for px in (0..viewport.width).step_by(WAVE_STRIDE) {
        let wave = ((px as f64 + offset) * 0.02).sin() * amplitude;
        for py in 0..rows {
            let y = top + py as i32;
            if y < 0 || y >= viewport.height as i32 {
                continue;
            }
            let dist = (py as f64 - WAVE_HEIGHT - wave).abs();
            if dist < WAVE_REACH {
                let local = band_intensity * (1.0 - dist / WAVE_REACH);
                block.put(px, py, dither_luma(px as i32, y, local));
            }
        }
    }
}

/// Solid square cell at a uniform intensity; every pixel is written.
pub fn grid_cell(block: &mut PixelBlock, x: i32, y: i32, size: usize, intensity: f64) {
    block.reset(x, y, size, size);
    for py in 0..size {
        for px in 0..size {
            block.put(px, py, dither_luma(x + px as i32, y + py as i32, intensity));
        }
    }
}
