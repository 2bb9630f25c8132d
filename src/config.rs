/// Command-line settings.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::DEFAULT_MOUSE_SENSITIVITY;
use crate::error::Result;
use crate::map::Map;

#[derive(Debug, Clone, Parser)]
#[command(name = "raycast_shooter", version, about = "First-person raycasting shooter for the terminal")]
pub struct Settings {
    /// Render surface width in pixels (one terminal column each).
    #[arg(long, default_value_t = 160, value_parser = clap::value_parser!(u16).range(32..))]
    pub width: u16,

    /// Render surface height in pixels (two per terminal row).
    #[arg(long, default_value_t = 96, value_parser = clap::value_parser!(u16).range(24..))]
    pub height: u16,

    /// Target frames per second.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Seed for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// ASCII map file (`#` wall, `.` floor, `P` start).
    #[arg(long)]
    pub map: Option<PathBuf>,

    /// PNG used for the weapon viewmodel.
    #[arg(long)]
    pub weapon_sprite: Option<PathBuf>,

    /// Radians of turn per terminal column of pointer motion.
    #[arg(long, default_value_t = DEFAULT_MOUSE_SENSITIVITY)]
    pub mouse_sensitivity: f32,

    /// Where log output goes; the terminal itself is busy.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Ring the terminal bell on shots and kills.
    #[arg(long)]
    pub bell: bool,
}

impl Settings {
    /// `(width, height)` in pixels; height rounded up to even so every
    /// terminal row holds two full pixel rows.
    pub fn surface_size(&self) -> (usize, usize) {
        let height = self.height as usize;
        (self.width as usize, height + height % 2)
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("raycast_shooter.log"))
    }

    pub fn load_map(&self) -> Result<Map> {
        match &self.map {
            Some(path) => Map::parse(&std::fs::read_to_string(path)?),
            None => Map::builtin(),
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
