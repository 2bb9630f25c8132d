/// Straight-line pursuit with contact damage.
///
/// There is no pathfinding: an enemy heads directly at the player and
/// `slide` keeps it out of walls, so it can stall behind an obstacle.

use crate::compute::movement::{heading_vector, slide};
use crate::constants::{CONTACT_DPS, CONTACT_RADIUS, MIN_DISTANCE, MIN_PUSH, PUSH_FRACTION};
use crate::entities::{Enemy, GameEvent, Player};
use crate::map::Map;

pub fn update_enemies(
    enemies: &mut [Enemy],
    player: &mut Player,
    map: &Map,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    let mut hurt = false;

    for enemy in enemies.iter_mut().filter(|e| e.alive) {
        if enemy.hit_flash > 0.0 {
            enemy.hit_flash = (enemy.hit_flash - dt).max(0.0);
        }

        let to_player = player.pos - enemy.pos;
        let distance = to_player.length();

        if distance < CONTACT_RADIUS {
            if player.alive {
                player.health = (player.health - CONTACT_DPS * dt).max(0.0);
                hurt = true;
                if player.health <= 0.0 {
                    player.alive = false;
                }
            }

            // Back off so the sprite doesn't sit inside the camera. An enemy
            // standing exactly on the player backs away behind them.
            let away = if distance < MIN_DISTANCE {
                -heading_vector(player.angle)
            } else {
                -to_player / distance
            };
            let push = ((CONTACT_RADIUS - distance) * PUSH_FRACTION).max(MIN_PUSH);
            enemy.pos = slide(map, enemy.pos, away * push);
        } else {
            let toward = to_player / distance.max(MIN_DISTANCE);
            enemy.pos = slide(map, enemy.pos, toward * enemy.speed * dt);
        }
    }

    if hurt {
        events.push(GameEvent::PlayerHurt);
    }
}
