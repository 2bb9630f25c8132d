/// Gameplay tuning. Distances are in map cells, times in seconds,
/// angles in radians.

use std::f32::consts::PI;

// ── View ──────────────────────────────────────────────────────────────────────

pub const FOV: f32 = PI / 3.0;
pub const HALF_FOV: f32 = FOV / 2.0;
/// March increment of a single ray.
pub const RAY_STEP: f32 = 0.02;
pub const MAX_DEPTH: f32 = 20.0;
/// Floor applied to distances before dividing or normalising by them.
pub const MIN_DISTANCE: f32 = 1e-4;
/// Sprites closer than this are not drawn.
pub const NEAR_PLANE: f32 = 0.2;
/// Enemy sprite size at distance 1, as a fraction of the surface height.
pub const ENEMY_SPRITE_SCALE: f32 = 0.6;

// ── Player ────────────────────────────────────────────────────────────────────

pub const MOVE_SPEED: f32 = 3.0;
pub const ROTATE_SPEED: f32 = 2.4;
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.02;
pub const PLAYER_MAX_HEALTH: f32 = 100.0;
pub const START_AMMO: f32 = 30.0;

/// Largest simulation step; longer stalls are truncated to this.
pub const MAX_FRAME_DT: f32 = 0.05;

// ── Enemies ───────────────────────────────────────────────────────────────────

pub const CONTACT_RADIUS: f32 = 0.6;
/// Health per second drained while an enemy is in contact.
pub const CONTACT_DPS: f32 = 18.0;
pub const PUSH_FRACTION: f32 = 0.5;
pub const MIN_PUSH: f32 = 0.02;
pub const HIT_FLASH_SECS: f32 = 1.0;
pub const MAX_ENEMIES: usize = 14;
pub const ENEMY_BASE_HP: f32 = 60.0;
pub const ENEMY_HP_PER_LEVEL: f32 = 20.0;
pub const ENEMY_BASE_SPEED: f32 = 0.9;
pub const ENEMY_SPEED_PER_LEVEL: f32 = 0.1;
pub const ENEMY_SPEED_JITTER: f32 = 0.5;
pub const SPAWN_MIN_DISTANCE: f32 = 4.0;
pub const SPAWN_RETRIES: usize = 50;

// ── Weapons & projectiles ─────────────────────────────────────────────────────

pub const PROJECTILE_SPEED: f32 = 14.0;
pub const HIT_RADIUS: f32 = 0.45;
pub const BASE_DAMAGE: f32 = 40.0;
/// Distance at which damage bottoms out at `MIN_DAMAGE_FRACTION`.
pub const FALLOFF_DISTANCE: f32 = 8.0;
pub const MIN_DAMAGE_FRACTION: f32 = 0.35;
/// Lifetime of an impact spark.
pub const SPARK_SECS: f32 = 0.15;

// ── Economy & progression ─────────────────────────────────────────────────────

pub const KILL_SCORE: u32 = 10;
pub const BUY_AMMO_COST: u32 = 20;
pub const BUY_AMMO_AMOUNT: f32 = 20.0;
pub const LEVEL_AMMO_REWARD: f32 = 15.0;
pub const LEVEL_HEALTH_REWARD: f32 = 25.0;
