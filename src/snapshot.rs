// Headless rendering: run the frame driver without a window and write
// selected frames to disk as PNG.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::info;

use crate::driver::{Animator, TIME_STEP};
use crate::error::Error;
use crate::types::FrameBuffer;

/// Which frames to render and where to put them.
#[derive(Clone, Debug)]
pub struct ExportPlan {
    pub frames: u64,     // ticks to run
    pub every: u64,      // keep every N-th tick (1 = all)
    pub out_dir: PathBuf,
}

pub fn frame_path(dir: &Path, tick: u64) -> PathBuf {
    dir.join(format!("frame_{tick:05}.png"))
}

/// Encode one surface as an opaque RGBA PNG.
pub fn save_png(fb: &FrameBuffer, path: &Path) -> Result<(), Error> {
    image::save_buffer_with_format(
        path,
        &fb.to_rgba8(),
        fb.width as u32,
        fb.height as u32,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )?;
    Ok(())
}

/// Tick the animator `plan.frames` times, saving the frames picked by
/// `plan.every`. Returns the written paths in order.
pub fn export(anim: &mut Animator, plan: &ExportPlan) -> Result<Vec<PathBuf>, Error> {
    if plan.every == 0 {
        return Err(Error::InvalidArgument("--every must be at least 1".into()));
    }
    std::fs::create_dir_all(&plan.out_dir)?;

    // Headless ticks pretend exactly one nominal frame elapsed.
    let step = Duration::from_secs_f64(TIME_STEP);
    let mut written = Vec::new();
    for _ in 0..plan.frames {
        if anim.tick(step).is_none() {
            continue;
        }
        let tick = anim.ticks();
        if tick % plan.every != 0 {
            continue;
        }
        let path = frame_path(&plan.out_dir, tick);
        save_png(anim.frame(), &path)?;
        info!(path = %path.display(), t = anim.time(), "wrote snapshot");
        written.push(path);
    }
    Ok(written)
}
