/// Player translation and rotation against the map.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::constants::{MOVE_SPEED, ROTATE_SPEED};
use crate::entities::Player;
use crate::input::InputSnapshot;
use crate::map::Map;

/// Unit vector along `angle`.
pub fn heading_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Unit vector pointing to the right of `angle`.
pub fn strafe_vector(angle: f32) -> Vec2 {
    Vec2::new(-angle.sin(), angle.cos())
}

/// Apply `delta` one axis at a time so a blocked axis doesn't cancel the
/// other: x first (at the current y), then y (at the possibly updated x).
pub fn slide(map: &Map, pos: Vec2, delta: Vec2) -> Vec2 {
    let mut next = pos;
    if !map.is_wall(pos.x + delta.x, next.y) {
        next.x += delta.x;
    }
    if !map.is_wall(next.x, pos.y + delta.y) {
        next.y += delta.y;
    }
    next
}

/// Displacement requested by the held movement keys over `dt`.
pub fn desired_displacement(angle: f32, input: &InputSnapshot, dt: f32) -> Vec2 {
    let forward = heading_vector(angle);
    let right = strafe_vector(angle);

    let mut delta = Vec2::ZERO;
    if input.forward {
        delta += forward;
    }
    if input.back {
        delta -= forward;
    }
    if input.strafe_right {
        delta += right;
    }
    if input.strafe_left {
        delta -= right;
    }
    delta * MOVE_SPEED * dt
}

/// Turn, then move. Key rotation scales with `dt`; pointer turn does not.
pub fn update_player(player: &mut Player, map: &Map, input: &InputSnapshot, dt: f32) {
    let mut angle = player.angle;
    if input.rotate_left {
        angle -= ROTATE_SPEED * dt;
    }
    if input.rotate_right {
        angle += ROTATE_SPEED * dt;
    }
    angle += input.pointer_turn;
    player.angle = angle.rem_euclid(TAU);

    let delta = desired_displacement(player.angle, input, dt);
    if delta != Vec2::ZERO {
        player.pos = slide(map, player.pos, delta);
    }
}
