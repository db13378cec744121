// The composition: six layers painted bottom to top every frame.
// Visual:
// 1) black background
// 2) a checker of faint grid cells, pulsing outward from the center
// 3) eight dotted sine waves drifting sideways
// 4) five discs orbiting the center
// 5) six morphing hexagons circling a breathing central disc
// 6) a halo under the cursor while it is over the window

use std::f64::consts::TAU;

use crate::dither::BLACK;
use crate::draw::{blit, fill};
use crate::raster::{self, GRID_SIZE, Hexagon, WAVE_COUNT};
use crate::types::{Cursor, FrameBuffer, PixelBlock, Viewport};

pub const ORBITAL_COUNT: usize = 5;
pub const HEX_COUNT: usize = 6;
/// Only every GRID_STEP-th column and row of the grid is drawn.
const GRID_STEP: usize = 2;
const GRID_GATE: f64 = 0.02;
pub const HALO_RADIUS: f64 = 50.0;

/// Placement of one dithered disc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disc {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub intensity: f64,
}

/// Intensity of grid cell (i, j) or None when it falls below the gate.
/// The pulse is added after gating.
pub fn grid_cell_intensity(i: usize, j: usize, t: f64, viewport: Viewport) -> Option<f64> {
    let (cx, cy) = viewport.center();
    let dx = (i * GRID_SIZE) as f64 - cx;
    let dy = (j * GRID_SIZE) as f64 - cy;
    let distance = (dx * dx + dy * dy).sqrt();

    let intensity = (1.0 - distance / viewport.half_diagonal()) * 0.12;
    if intensity <= GRID_GATE {
        return None;
    }
    let pulse = (t + distance * 0.008).sin() * 0.04;
    Some(intensity + pulse)
}

/// Orbiting disc `i` of ORBITAL_COUNT.
pub fn orbital_disc(i: usize, t: f64, viewport: Viewport) -> Disc {
    let (cx, cy) = viewport.center();
    let angle = i as f64 / ORBITAL_COUNT as f64 * TAU + t * 0.25;
    let orbit = viewport.min_side() * (0.12 + (i % 3) as f64 * 0.08);
    let fi = i as f64;
    Disc {
        cx: cx + angle.cos() * orbit,
        cy: cy + angle.sin() * orbit,
        radius: 25.0 + (t * 1.8 + fi).sin() * 12.0,
        intensity: 0.35 + (t + fi).sin() * 0.25,
    }
}

fn base_size(viewport: Viewport) -> f64 {
    viewport.min_side() * 0.12
}

/// Hexagon `k` of the central form.
pub fn central_hexagon(k: usize, t: f64, viewport: Viewport) -> Hexagon {
    let (cx, cy) = viewport.center();
    let fk = k as f64;
    let angle = fk / HEX_COUNT as f64 * TAU + t * 0.18;
    let distance = base_size(viewport) * (1.0 + (t * 0.4 + fk).sin() * 0.25);
    Hexagon {
        x: cx + angle.cos() * distance,
        y: cy + angle.sin() * distance,
        size: 20.0 + (t * 1.3 + fk).sin() * 8.0,
        rotation: t * 0.25 + fk,
        time: t,
        index: k,
    }
}

/// The breathing disc at the heart of the central form.
pub fn central_disc(t: f64, viewport: Viewport) -> Disc {
    let (cx, cy) = viewport.center();
    Disc {
        cx,
        cy,
        radius: base_size(viewport) * (1.0 + (t * 0.35).sin() * 0.15),
        intensity: 0.55 + t.sin() * 0.2,
    }
}

/// Cursor halo, present only while the cursor is over the surface.
/// Dimmer the farther the cursor strays from the center.
pub fn cursor_halo(cursor: Cursor, viewport: Viewport) -> Option<Disc> {
    if !cursor.active {
        return None;
    }
    let (cx, cy) = viewport.center();
    let (dx, dy) = (cursor.x - cx, cursor.y - cy);
    let distance = (dx * dx + dy * dy).sqrt();
    Some(Disc {
        cx: cursor.x,
        cy: cursor.y,
        radius: HALO_RADIUS,
        intensity: (1.0 - distance / viewport.half_diagonal()) * 0.35,
    })
}

/// Owns the scratch block every shape is rasterised into, so a frame
/// allocates nothing once the block has grown to the largest shape.
#[derive(Default)]
pub struct Scene {
    scratch: PixelBlock,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint one full frame for time `t` into `fb`.
    pub fn render(&mut self, fb: &mut FrameBuffer, t: f64, cursor: Cursor) {
        let viewport = Viewport::new(fb.width, fb.height);
        if viewport.is_empty() {
            return;
        }
        draw_background(fb);
        self.draw_grid_pattern(fb, t, viewport);
        self.draw_wave_pattern(fb, t, viewport);
        self.draw_orbital_circles(fb, t, viewport);
        self.draw_central_form(fb, t, viewport);
        self.draw_cursor_halo(fb, cursor, viewport);
    }

    fn draw_disc(&mut self, fb: &mut FrameBuffer, d: Disc) {
        raster::disc(&mut self.scratch, d.cx, d.cy, d.radius, d.intensity);
        blit(fb, &self.scratch);
    }

    fn draw_grid_pattern(&mut self, fb: &mut FrameBuffer, t: f64, viewport: Viewport) {
        let cols = viewport.width.div_ceil(GRID_SIZE);
        let rows = viewport.height.div_ceil(GRID_SIZE);
        for i in (0..cols).step_by(GRID_STEP) {
            for j in (0..rows).step_by(GRID_STEP) {
                let Some(intensity) = grid_cell_intensity(i, j, t, viewport) else { continue };
                let (x, y) = ((i * GRID_SIZE) as i32, (j * GRID_SIZE) as i32);
                raster::grid_cell(&mut self.scratch, x, y, GRID_SIZE, intensity);
                blit(fb, &self.scratch);
            }
        }
    }

    fn draw_wave_pattern(&mut self, fb: &mut FrameBuffer, t: f64, viewport: Viewport) {
        for index in 0..WAVE_COUNT {
            raster::wave_band(&mut self.scratch, index, t, viewport);
            blit(fb, &self.scratch);
        }
    }

    fn draw_orbital_circles(&mut self, fb: &mut FrameBuffer, t: f64, viewport: Viewport) {
        for i in 0..ORBITAL_COUNT {
            self.draw_disc(fb, orbital_disc(i, t, viewport));
        }
    }

    fn draw_central_form(&mut self, fb: &mut FrameBuffer, t: f64, viewport: Viewport) {
        for k in 0..HEX_COUNT {
            let hex = central_hexagon(k, t, viewport);
            raster::hexagon(&mut self.scratch, &hex, viewport);
            blit(fb, &self.scratch);
        }
        self.draw_disc(fb, central_disc(t, viewport));
    }

    fn draw_cursor_halo(&mut self, fb: &mut FrameBuffer, cursor: Cursor, viewport: Viewport) {
        if let Some(halo) = cursor_halo(cursor, viewport) {
            self.draw_disc(fb, halo);
        }
    }
}

fn draw_background(fb: &mut FrameBuffer) {
    fill(fb, BLACK);
}
