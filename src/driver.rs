// Frame driver: owns the only state that survives between frames
// (time, surface size, cursor) and repaints the whole scene on every tick.

use std::time::Duration;

use tracing::{debug, info};

use crate::scene::Scene;
use crate::types::{Cursor, FrameBuffer, Viewport};

/// Time added per tick under the fixed clock (nominal 60 Hz).
pub const TIME_STEP: f64 = 0.016;

/// How `t` advances on each tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Clock {
    /// Constant step per frame; slow hosts slow the animation down.
    #[default]
    Fixed,
    /// Real elapsed seconds since the previous tick.
    Wall,
}

pub struct Animator {
    time: f64,
    ticks: u64,
    clock: Clock,
    cursor: Cursor,
    scene: Scene,
    frame: FrameBuffer,
}

impl Animator {
    pub fn new(width: usize, height: usize, clock: Clock) -> Self {
        Self {
            time: 0.0,
            ticks: 0,
            clock,
            cursor: Cursor::default(),
            scene: Scene::new(),
            frame: FrameBuffer::new(width, height),
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.frame.width, self.frame.height)
    }

    /// Reallocate the surface when the host size changed. Returns true on change.
    pub fn resize(&mut self, width: usize, height: usize) -> bool {
        if self.frame.width == width && self.frame.height == height {
            return false;
        }
        info!(width, height, "surface resized");
        self.frame = FrameBuffer::new(width, height);
        true
    }

    /// Track the pointer. `None` means it left the surface; the last known
    /// position is kept but the halo switches off.
    pub fn set_cursor(&mut self, pos: Option<(f64, f64)>) {
        match pos {
            Some((x, y)) => {
                if !self.cursor.active {
                    debug!(x, y, "cursor entered");
                }
                self.cursor = Cursor::at(x, y);
            }
            None => {
                if self.cursor.active {
                    debug!("cursor left");
                }
                self.cursor.active = false;
            }
        }
    }

    /// Advance time and repaint. Returns the new frame, or None while the
    /// surface has no area.
    pub fn tick(&mut self, elapsed: Duration) -> Option<&FrameBuffer> {
        self.time += match self.clock {
            Clock::Fixed => TIME_STEP,
            Clock::Wall => elapsed.as_secs_f64(),
        };
        self.ticks += 1;

        if self.viewport().is_empty() {
            debug!(ticks = self.ticks, "zero-sized surface, frame skipped");
            return None;
        }
        self.scene.render(&mut self.frame, self.time, self.cursor);
        Some(&self.frame)
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Surface access for overlays drawn after the scene.
    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }
}
