// Host options. The scene itself has no knobs; these only choose how the
// frames are shown (window or PNG files) and how time advances.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::driver::Clock;

#[derive(Parser, Debug)]
#[command(name = "dither-orbit", version, about = "Ordered-dither generative animation")]
pub struct Cli {
    /// Initial surface width in pixels.
    #[arg(long, default_value_t = 960)]
    pub width: usize,

    /// Initial surface height in pixels.
    #[arg(long, default_value_t = 600)]
    pub height: usize,

    /// How animation time advances.
    #[arg(long, value_enum, default_value_t = ClockChoice::Fixed)]
    pub clock: ClockChoice,

    /// Render this many frames without a window and write PNGs instead.
    #[arg(long, value_name = "FRAMES")]
    pub headless: Option<u64>,

    /// Headless: keep every N-th frame.
    #[arg(long, default_value_t = 1)]
    pub every: u64,

    /// Headless: output directory.
    #[arg(long, default_value = "frames")]
    pub out: PathBuf,

    /// Headless: pretend the cursor hovers at X,Y.
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    pub cursor: Option<(f64, f64)>,

    /// Start with the HUD (frame rate and time) visible. Toggle with H.
    #[arg(long)]
    pub hud: bool,

    /// Debug-level logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ClockChoice {
    /// +0.016 per frame, independent of real time.
    Fixed,
    /// Real elapsed seconds between frames.
    Wall,
}

impl From<ClockChoice> for Clock {
    fn from(choice: ClockChoice) -> Self {
        match choice {
            ClockChoice::Fixed => Clock::Fixed,
            ClockChoice::Wall => Clock::Wall,
        }
    }
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad X '{x}': {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad Y '{y}': {e}"))?;
    Ok((x, y))
}
