/// Shot generation, projectile flight and hit resolution.

use glam::Vec2;
use rand::Rng;

use crate::compute::movement::heading_vector;
use crate::constants::{
    BASE_DAMAGE, FALLOFF_DISTANCE, HIT_FLASH_SECS, HIT_RADIUS, KILL_SCORE,
    MIN_DAMAGE_FRACTION, PROJECTILE_SPEED, SPARK_SECS,
};
use crate::entities::{Enemy, GameEvent, Player, Projectile, Spark};
use crate::map::Map;
use crate::weapons::{WeaponKind, WeaponSpec};

// ── Damage ───────────────────────────────────────────────────────────────────

/// Fraction of weapon damage dealt at `distance`: 1.0 at zero, falling
/// linearly to `MIN_DAMAGE_FRACTION` at `FALLOFF_DISTANCE` and flat beyond.
pub fn damage_falloff(distance: f32) -> f32 {
    let t = distance.max(0.0) / FALLOFF_DISTANCE;
    (1.0 - (1.0 - MIN_DAMAGE_FRACTION) * t).max(MIN_DAMAGE_FRACTION)
}

pub fn hit_damage(weapon: WeaponKind, distance: f32) -> f32 {
    BASE_DAMAGE * weapon.spec().damage_multiplier * damage_falloff(distance)
}

// ── Firing ────────────────────────────────────────────────────────────────────

fn jitter(spec: &WeaponSpec, rng: &mut impl Rng) -> f32 {
    let half = spec.spread / 2.0;
    if half <= 0.0 {
        0.0
    } else {
        rng.gen_range(-half..=half)
    }
}

/// One heading per pellet: the aim plus a shared shot jitter plus an
/// individual pellet jitter, each within half the spread.
pub fn pellet_headings(aim: f32, spec: &WeaponSpec, rng: &mut impl Rng) -> Vec<f32> {
    let shot = jitter(spec, rng);
    (0..spec.pellets)
        .map(|_| aim + shot + jitter(spec, rng))
        .collect()
}

/// Spend ammo and spawn projectiles. With no ammo this is a dry fire:
/// ammo and projectiles are left untouched and false is returned.
pub fn fire(
    player: &mut Player,
    weapon: WeaponKind,
    projectiles: &mut Vec<Projectile>,
    rng: &mut impl Rng,
    events: &mut Vec<GameEvent>,
) -> bool {
    if player.ammo <= 0.0 {
        events.push(GameEvent::DryFire);
        return false;
    }

    let spec = weapon.spec();
    player.ammo = (player.ammo - spec.ammo_cost).max(0.0);

    projectiles.extend(
        pellet_headings(player.angle, spec, rng)
            .into_iter()
            .map(|angle| Projectile {
                pos: player.pos,
                angle,
                speed: PROJECTILE_SPEED,
                alive: true,
            }),
    );

    events.push(GameEvent::Fired {
        weapon,
        pellets: spec.pellets,
    });
    true
}

// ── Flight & hits ─────────────────────────────────────────────────────────────

/// Index of the first living enemy, in list order, within `HIT_RADIUS`.
fn first_hit(enemies: &[Enemy], pos: Vec2) -> Option<usize> {
    enemies
        .iter()
        .position(|e| e.alive && e.pos.distance(pos) <= HIT_RADIUS)
}

/// Damage `enemy`; returns true if this hit killed it.
pub fn apply_hit(enemy: &mut Enemy, damage: f32) -> bool {
    if !enemy.alive {
        return false;
    }
    enemy.hp = (enemy.hp - damage).clamp(0.0, enemy.max_hp);
    enemy.hit_flash = HIT_FLASH_SECS;
    if enemy.hp <= 0.0 {
        enemy.alive = false;
        return true;
    }
    false
}

/// Advance every projectile; kill it on a wall or on the first enemy it
/// reaches. Spent projectiles leave a spark and are dropped from the list.
#[allow(clippy::too_many_arguments)]
pub fn update_projectiles(
    projectiles: &mut Vec<Projectile>,
    enemies: &mut [Enemy],
    player: &mut Player,
    weapon: WeaponKind,
    map: &Map,
    dt: f32,
    sparks: &mut Vec<Spark>,
    events: &mut Vec<GameEvent>,
) {
    for projectile in projectiles.iter_mut().filter(|p| p.alive) {
        let next = projectile.pos + heading_vector(projectile.angle) * projectile.speed * dt;

        if map.is_wall(next.x, next.y) {
            projectile.alive = false;
            sparks.push(Spark {
                pos: projectile.pos,
                ttl: SPARK_SECS,
            });
            continue;
        }
        projectile.pos = next;

        if let Some(index) = first_hit(enemies, projectile.pos) {
            let enemy = &mut enemies[index];
            let damage = hit_damage(weapon, enemy.pos.distance(player.pos));
            projectile.alive = false;
            sparks.push(Spark {
                pos: projectile.pos,
                ttl: SPARK_SECS,
            });
            events.push(GameEvent::EnemyHit { damage });

            if apply_hit(enemy, damage) {
                player.score += KILL_SCORE;
                events.push(GameEvent::EnemyKilled { score: KILL_SCORE });
            }
        }
    }

    projectiles.retain(|p| p.alive);
}

/// Age sparks and drop expired ones.
pub fn update_sparks(sparks: &mut Vec<Spark>, dt: f32) {
    for spark in sparks.iter_mut() {
        spark.ttl -= dt;
    }
    sparks.retain(|s| s.ttl > 0.0);
}
