//! A first-person raycasting shooter: grid map, per-column ray marching,
//! billboard enemies, projectile weapons and a small level/overlay state
//! machine. Everything here is host-independent; the binary supplies the
//! terminal.

pub mod assets;
pub mod caster;
pub mod compute;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod frame;
pub mod input;
pub mod map;
pub mod render;
pub mod sound;
pub mod weapons;

pub use error::{GameError, Result};
