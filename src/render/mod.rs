//! Software rendering into an in-memory raster. Presenting the raster is
//! the host's job.

pub mod framebuffer;
pub mod hud;
pub mod scene;

pub use framebuffer::{Framebuffer, Rgb};
pub use hud::{overlay_banner, Hud};
pub use scene::render_scene;
