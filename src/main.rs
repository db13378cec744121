// What you SEE:
// • A black window with five layers of pure black/white dithered motion:
//   a pulsing grid, drifting sine bands, orbiting discs, and a ring of
//   morphing hexagons around a breathing disc.
// • Move the mouse over the window: a halo follows it.
// • H toggles the HUD (FPS + time). ESC quits.
// • --headless N renders N frames to PNG files instead of opening a window.

mod cli;
mod dither;
mod draw;
mod driver;
mod error;
mod raster;
mod scene;
mod snapshot;
mod types;

use clap::Parser;
use cli::Cli;
use draw::{Drawer, draw_text_5x7};
use driver::Animator;
use error::Error;
use snapshot::ExportPlan;
use std::time::{Duration, Instant};
use tracing::{info, warn};

fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO })
        .init();

    if cli.width == 0 || cli.height == 0 {
        return Err(Error::InvalidArgument(format!(
            "surface must have area, got {}x{}",
            cli.width, cli.height
        )));
    }
    info!(width = cli.width, height = cli.height, clock = ?cli.clock, "starting");

    let mut anim = Animator::new(cli.width, cli.height, cli.clock.into());

    match cli.headless {
        Some(frames) => run_headless(&mut anim, &cli, frames),
        None => run_window(&mut anim, &cli),
    }
}

fn run_headless(anim: &mut Animator, cli: &Cli, frames: u64) -> Result<(), Error> {
    anim.set_cursor(cli.cursor);
    info!(frames, every = cli.every, cursor = ?anim.cursor(), "headless render");
    let plan = ExportPlan { frames, every: cli.every, out_dir: cli.out.clone() };
    let written = snapshot::export(anim, &plan)?;
    info!(count = written.len(), dir = %plan.out_dir.display(), "headless export done");
    Ok(())
}

fn run_window(anim: &mut Animator, cli: &Cli) -> Result<(), Error> {
    let mut drawer = Drawer::new("Dither Orbit", cli.width, cli.height)?;
    if cli.cursor.is_some() {
        warn!("--cursor only applies to headless rendering");
    }

    /* --- HUD / FPS ---
       Visual: small white text in the top-left when enabled. */
    let mut show_hud = cli.hud;
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS 0.0");
    let mut last_frame_time = Instant::now();

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();
        let elapsed = now - last_frame_time; // only the wall clock uses this
        last_frame_time = now;

        /* 1) Host events: size, cursor, keys. */
        let (w, h) = drawer.size();
        anim.resize(w, h);
        anim.set_cursor(drawer.mouse_pos().map(|(x, y)| (x as f64, y as f64)));
        if drawer.h_pressed_once() {
            show_hud = !show_hud;
        }

        /* 2) Advance time and repaint; a minimised window just pumps events. */
        if anim.tick(elapsed).is_none() {
            drawer.idle();
            continue;
        }

        /* 3) HUD on top, then present. */
        if show_hud {
            let hud = format!("{} | T {:.2}", hud_fps_text, anim.time());
            draw_text_5x7(anim.frame_mut(), 8, 8, &hud);
        }
        drawer.present(anim.frame())?;

        /* 4) Frame rate, once per second. */
        frames_this_second += 1;
        let since = now.duration_since(last_fps_time);
        if since >= Duration::from_secs(1) {
            let fps = frames_this_second as f32 / since.as_secs_f32();
            info!(fps = %format!("{fps:.1}"), t = anim.time(), "frame rate");
            hud_fps_text = format!("FPS {:.1}", fps);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
