/// Level scaling and enemy batch generation.

use glam::Vec2;
use log::warn;
use rand::Rng;

use crate::constants::{
    ENEMY_BASE_HP, ENEMY_BASE_SPEED, ENEMY_HP_PER_LEVEL, ENEMY_SPEED_JITTER,
    ENEMY_SPEED_PER_LEVEL, MAX_ENEMIES, SPAWN_MIN_DISTANCE, SPAWN_RETRIES,
};
use crate::entities::Enemy;
use crate::map::Map;

// ── Difficulty tables ────────────────────────────────────────────────────────

pub fn enemy_count(level: u32) -> usize {
    (2 + 2 * level as usize).min(MAX_ENEMIES)
}

pub fn enemy_max_hp(level: u32) -> f32 {
    ENEMY_BASE_HP + ENEMY_HP_PER_LEVEL * level.saturating_sub(1) as f32
}

pub fn enemy_speed(level: u32, rng: &mut impl Rng) -> f32 {
    ENEMY_BASE_SPEED + ENEMY_SPEED_PER_LEVEL * level as f32 + rng.gen_range(0.0..ENEMY_SPEED_JITTER)
}

// ── Spawning ─────────────────────────────────────────────────────────────────

/// Pick a spawn point: not in a wall and at least `SPAWN_MIN_DISTANCE`
/// from the player. After `SPAWN_RETRIES` misses the last floor sample is
/// used even if it is too close; if no sample landed on floor at all, the
/// floor cell farthest from the player is used.
pub fn sample_spawn(map: &Map, player_pos: Vec2, rng: &mut impl Rng) -> Vec2 {
    let mut last_floor = None;

    for _ in 0..SPAWN_RETRIES {
        let candidate = Vec2::new(
            rng.gen_range(0.0..map.width() as f32),
            rng.gen_range(0.0..map.height() as f32),
        );
        if map.is_wall_at(candidate) {
            continue;
        }
        if candidate.distance(player_pos) >= SPAWN_MIN_DISTANCE {
            return candidate;
        }
        last_floor = Some(candidate);
    }

    match last_floor {
        Some(pos) => {
            warn!("spawn retries exhausted, placing enemy at {:?}", pos);
            pos
        }
        None => {
            warn!("no floor sample found, using farthest floor cell");
            map.floor_cells()
                .into_iter()
                .max_by(|a, b| {
                    a.distance_squared(player_pos)
                        .total_cmp(&b.distance_squared(player_pos))
                })
                .unwrap_or_else(|| map.spawn())
        }
    }
}

/// A fresh batch of enemies sized and toughened for `level`.
pub fn spawn_enemies(map: &Map, player_pos: Vec2, level: u32, rng: &mut impl Rng) -> Vec<Enemy> {
    let max_hp = enemy_max_hp(level);
    (0..enemy_count(level))
        .map(|_| Enemy {
            pos: sample_spawn(map, player_pos, rng),
            hp: max_hp,
            max_hp,
            speed: enemy_speed(level, rng),
            alive: true,
            hit_flash: 0.0,
        })
        .collect()
}
