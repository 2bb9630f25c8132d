/// Weapon viewmodel image.
///
/// The image is optional and may arrive late: it is decoded on a worker
/// thread and handed over through a channel. Until then the renderer draws
/// a placeholder.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use image::imageops::{self, FilterType};
use log::{info, warn};

use crate::error::Result;
use crate::render::framebuffer::Rgb;

/// A small image with per-pixel transparency.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub width: usize,
    pub height: usize,
    /// Row-major; `None` is transparent.
    pub pixels: Vec<Option<Rgb>>,
}

impl Sprite {
    /// Build from tightly packed RGBA bytes. Alpha below 128 is transparent.
    pub fn from_rgba(width: usize, height: usize, rgba: &[u8]) -> Sprite {
        let pixels = rgba
            .chunks_exact(4)
            .take(width * height)
            .map(|p| (p[3] >= 128).then(|| Rgb::new(p[0], p[1], p[2])))
            .collect();
        Sprite {
            width,
            height,
            pixels,
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x]
        } else {
            None
        }
    }
}

/// Readiness of the viewmodel image.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewModel {
    #[default]
    NotLoaded,
    Loaded(Sprite),
}

impl ViewModel {
    pub fn sprite(&self) -> Option<&Sprite> {
        match self {
            ViewModel::NotLoaded => None,
            ViewModel::Loaded(sprite) => Some(sprite),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ViewModel::Loaded(_))
    }
}

/// Decode `path` and scale it to `target_width`, keeping the aspect ratio.
pub fn load_sprite(path: &Path, target_width: usize) -> Result<Sprite> {
    let img = image::open(path)?.to_rgba8();
    let (w, h) = img.dimensions();
    let target_w = (target_width.max(1)) as u32;
    let target_h = ((h as f32 / w.max(1) as f32) * target_w as f32).round().max(1.0) as u32;
    let scaled = imageops::resize(&img, target_w, target_h, FilterType::Nearest);
    Ok(Sprite::from_rgba(
        target_w as usize,
        target_h as usize,
        scaled.as_raw(),
    ))
}

/// Background loader for the viewmodel.
pub struct ViewModelLoader {
    rx: Option<Receiver<Result<Sprite>>>,
}

impl ViewModelLoader {
    /// Start decoding `path` on a worker thread.
    pub fn spawn(path: PathBuf, target_width: usize) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(load_sprite(&path, target_width));
        });
        ViewModelLoader { rx: Some(rx) }
    }

    /// A loader that never delivers; the placeholder stays up.
    pub fn none() -> Self {
        ViewModelLoader { rx: None }
    }

    /// Non-blocking: move `view` to `Loaded` once the image is ready.
    pub fn poll(&mut self, view: &mut ViewModel) {
        let Some(rx) = &self.rx else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(sprite)) => {
                info!("viewmodel loaded ({}x{})", sprite.width, sprite.height);
                *view = ViewModel::Loaded(sprite);
                self.rx = None;
            }
            Ok(Err(err)) => {
                warn!("viewmodel unavailable, keeping placeholder: {}", err);
                self.rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                warn!("viewmodel loader exited without a result");
                self.rx = None;
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.rx.is_some()
    }
}
