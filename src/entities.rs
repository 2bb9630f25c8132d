/// Simulation data. Behaviour lives in `compute`.

use std::sync::Arc;

use glam::Vec2;

use crate::map::Map;
use crate::weapons::WeaponKind;

// ── Overlay ───────────────────────────────────────────────────────────────────

/// The pause/menu layer. Anything other than `None` freezes the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    None,
    Start,
    LevelCleared,
    Dead,
}

impl Overlay {
    pub fn is_running(self) -> bool {
        self == Overlay::None
    }
}

// ── Events ────────────────────────────────────────────────────────────────────

/// Things that happened during a step, drained once per frame by the host
/// for logging and sound.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Fired { weapon: WeaponKind, pellets: u32 },
    DryFire,
    EnemyHit { damage: f32 },
    EnemyKilled { score: u32 },
    PlayerHurt,
    PlayerDied,
    LevelCleared { level: u32 },
    LevelStarted { level: u32, weapon: WeaponKind },
    AmmoBought,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    /// Heading in radians; 0 looks along +x, positive turns toward +y.
    pub angle: f32,
    /// 0..=100.
    pub health: f32,
    /// Never negative; fractional after a fractional-cost shot.
    pub ammo: f32,
    pub score: u32,
    pub alive: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    /// 0..=max_hp.
    pub hp: f32,
    pub max_hp: f32,
    pub speed: f32,
    pub alive: bool,
    /// Seconds left to show the health bar after being hit.
    pub hit_flash: f32,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub pos: Vec2,
    pub angle: f32,
    pub speed: f32,
    pub alive: bool,
}

/// A short-lived flash left where a projectile died.
#[derive(Clone, Debug, PartialEq)]
pub struct Spark {
    pub pos: Vec2,
    /// Seconds remaining.
    pub ttl: f32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire simulation state. Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub map: Arc<Map>,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub sparks: Vec<Spark>,
    /// Selected from the weapon table when a level starts; never edited.
    pub weapon: WeaponKind,
    /// Starts at 1.
    pub level: u32,
    pub overlay: Overlay,
    pub events: Vec<GameEvent>,
    /// Simulation steps taken since the run started.
    pub frame: u64,
}

impl GameState {
    pub fn living_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.alive)
    }
}
