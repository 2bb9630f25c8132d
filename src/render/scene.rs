/// Scene compositing: wall slabs, enemy billboards, sparks, viewmodel.
///
/// Sprites are drawn far-to-near so nearer ones overwrite farther ones, and
/// every sprite column is tested against the depth buffer so walls in front
/// hide it.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use rand::Rng;

use crate::assets::{Sprite, ViewModel};
use crate::caster::{shade, wall_height};
use crate::constants::{ENEMY_SPRITE_SCALE, FOV, HALF_FOV, NEAR_PLANE};
use crate::entities::{Enemy, GameState, Player};
use crate::render::framebuffer::{Framebuffer, Rgb};
use crate::weapons::WeaponKind;

// ── Colour palette ────────────────────────────────────────────────────────────

pub const C_CEILING: Rgb = Rgb::new(28, 30, 46);
pub const C_FLOOR_FAR: Rgb = Rgb::new(24, 20, 16);
pub const C_FLOOR_NEAR: Rgb = Rgb::new(92, 78, 60);
pub const C_WALL: Rgb = Rgb::new(170, 176, 190);
pub const C_ENEMY_BODY: Rgb = Rgb::new(196, 36, 48);
pub const C_ENEMY_FLASH: Rgb = Rgb::new(255, 235, 235);
pub const C_ENEMY_EYE: Rgb = Rgb::new(255, 220, 40);
pub const C_HEALTH_BG: Rgb = Rgb::new(60, 0, 0);
pub const C_HEALTH_FG: Rgb = Rgb::new(40, 220, 70);
pub const C_SPARK_CORE: Rgb = Rgb::new(255, 250, 200);
pub const C_SPARK_EDGE: Rgb = Rgb::new(255, 150, 30);
pub const C_GUN_METAL: Rgb = Rgb::new(70, 74, 82);
pub const C_GUN_HIGHLIGHT: Rgb = Rgb::new(130, 136, 148);
pub const C_GUN_GRIP: Rgb = Rgb::new(88, 56, 32);

/// Pixels per spark cluster.
const SPARK_PARTICLES: usize = 7;

// ── Projection ────────────────────────────────────────────────────────────────

/// Wrap into `[-π, π]`.
pub fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Where a world point lands on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub distance: f32,
    /// Angle off the view axis, in `[-HALF_FOV, HALF_FOV]`.
    pub relative_angle: f32,
    pub screen_x: f32,
}

/// `None` when the point is behind the near plane or outside the FOV.
pub fn project(player: &Player, target: Vec2, width: usize) -> Option<Projection> {
    let delta = target - player.pos;
    let distance = delta.length();
    if distance < NEAR_PLANE {
        return None;
    }
    let relative_angle = wrap_angle(delta.y.atan2(delta.x) - player.angle);
    if relative_angle.abs() > HALF_FOV {
        return None;
    }
    Some(Projection {
        distance,
        relative_angle,
        screen_x: (relative_angle / FOV + 0.5) * width as f32,
    })
}

/// A visible enemy ready to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemySprite {
    /// Index into `GameState::enemies`.
    pub index: usize,
    pub projection: Projection,
    /// Edge length in pixels, capped at the surface height.
    pub size: f32,
}

/// Living, on-screen enemies ordered far to near.
pub fn visible_enemies(state: &GameState, width: usize, height: usize) -> Vec<EnemySprite> {
    let mut sprites: Vec<EnemySprite> = state
        .enemies
        .iter()
        .enumerate()
        .filter(|(_, e)| e.alive)
        .filter_map(|(index, e)| {
            project(&state.player, e.pos, width).map(|projection| EnemySprite {
                index,
                projection,
                size: (height as f32 / projection.distance * ENEMY_SPRITE_SCALE)
                    .min(height as f32),
            })
        })
        .collect();
    sprites.sort_by(|a, b| b.projection.distance.total_cmp(&a.projection.distance));
    sprites
}

/// True when the wall in `column` is closer than `distance`.
fn occluded(depth: &[f32], column: i32, distance: f32) -> bool {
    if column < 0 {
        return true;
    }
    depth
        .get(column as usize)
        .map(|&wall| wall < distance)
        .unwrap_or(true)
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame of the 3D view.
pub fn render_scene(
    fb: &mut Framebuffer,
    state: &GameState,
    depth: &[f32],
    viewmodel: &ViewModel,
    rng: &mut impl Rng,
) {
    fb.clear(Rgb::BLACK);
    draw_walls(fb, depth);
    for sprite in visible_enemies(state, fb.width(), fb.height()) {
        draw_enemy(fb, &state.enemies[sprite.index], &sprite, depth);
    }
    draw_sparks(fb, state, depth, rng);
    draw_viewmodel(fb, state.weapon, viewmodel);
}

// ── Walls ─────────────────────────────────────────────────────────────────────

fn draw_walls(fb: &mut Framebuffer, depth: &[f32]) {
    let height = fb.height() as i32;
    let horizon = height / 2;

    for (x, &distance) in depth.iter().enumerate().take(fb.width()) {
        let x = x as i32;
        let slab = wall_height(fb.height(), distance);
        let top = (horizon as f32 - slab / 2.0).round() as i32;
        let bottom = (horizon as f32 + slab / 2.0).round() as i32;

        fb.vline(x, 0, top, C_CEILING);
        fb.vline(x, top, bottom, C_WALL.scaled(shade(distance)));
        for y in bottom.max(horizon)..height {
            let t = (y - horizon) as f32 / (height - horizon).max(1) as f32;
            fb.set_pixel(x, y, C_FLOOR_FAR.lerp(C_FLOOR_NEAR, t));
        }
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

/// Colour of the enemy figure at normalised sprite coordinates, if any.
fn enemy_texel(u: f32, v: f32, body: Rgb) -> Option<Rgb> {
    let eye = (0.12..0.2).contains(&v) && ((0.34..0.44).contains(&u) || (0.56..0.66).contains(&u));
    if eye {
        return Some(C_ENEMY_EYE);
    }
    let head = (u - 0.5).powi(2) + (v - 0.18).powi(2) <= 0.2f32.powi(2);
    let torso = (0.2..0.8).contains(&u) && (0.32..0.78).contains(&v);
    let legs = (0.78..=1.0).contains(&v) && ((0.26..0.44).contains(&u) || (0.56..0.74).contains(&u));
    (head || torso || legs).then_some(body)
}

fn draw_enemy(fb: &mut Framebuffer, enemy: &Enemy, sprite: &EnemySprite, depth: &[f32]) {
    let horizon = fb.height() as f32 / 2.0;
    let distance = sprite.projection.distance;
    let size = sprite.size.max(1.0);

    // Feet rest on the floor line at this distance.
    let bottom = horizon + wall_height(fb.height(), distance) / 2.0;
    let top = bottom - size;
    let left = sprite.projection.screen_x - size / 2.0;

    let body = if enemy.hit_flash > 0.0 {
        C_ENEMY_BODY.lerp(C_ENEMY_FLASH, (enemy.hit_flash * 0.6).min(0.6))
    } else {
        C_ENEMY_BODY
    };

    let x0 = left.floor() as i32;
    let x1 = (left + size).ceil() as i32;
    let y0 = top.floor() as i32;
    let y1 = bottom.ceil() as i32;

    for x in x0..x1 {
        if occluded(depth, x, distance) {
            continue;
        }
        let u = (x as f32 + 0.5 - left) / size;
        for y in y0..y1 {
            let v = (y as f32 + 0.5 - top) / size;
            if let Some(color) = enemy_texel(u, v, body) {
                fb.set_pixel(x, y, color);
            }
        }
    }

    if enemy.hit_flash > 0.0 {
        let bar_h = (size * 0.06).max(1.0) as i32;
        let bar_y = y0 - bar_h - 1;
        let filled = x0 + ((x1 - x0) as f32 * (enemy.hp / enemy.max_hp).clamp(0.0, 1.0)).round() as i32;
        for x in x0..x1 {
            if occluded(depth, x, distance) {
                continue;
            }
            let color = if x < filled { C_HEALTH_FG } else { C_HEALTH_BG };
            fb.vline(x, bar_y, bar_y + bar_h, color);
        }
    }
}

// ── Projectiles & impacts ─────────────────────────────────────────────────────

fn draw_spark_cluster(
    fb: &mut Framebuffer,
    projection: &Projection,
    depth: &[f32],
    rng: &mut impl Rng,
) {
    let horizon = fb.height() as f32 / 2.0;
    let radius = (fb.height() as f32 / projection.distance * 0.04).clamp(1.0, 6.0);
    let cx = projection.screen_x;

    for i in 0..SPARK_PARTICLES {
        let x = (cx + rng.gen_range(-radius..=radius)).round() as i32;
        let y = (horizon + rng.gen_range(-radius..=radius)).round() as i32;
        if occluded(depth, x, projection.distance) {
            continue;
        }
        let color = if i == 0 { C_SPARK_CORE } else { C_SPARK_EDGE };
        fb.set_pixel(x, y, color);
    }
}

fn draw_sparks(fb: &mut Framebuffer, state: &GameState, depth: &[f32], rng: &mut impl Rng) {
    let points = state
        .projectiles
        .iter()
        .filter(|p| p.alive)
        .map(|p| p.pos)
        .chain(state.sparks.iter().map(|s| s.pos));

    for point in points {
        if let Some(projection) = project(&state.player, point, fb.width()) {
            draw_spark_cluster(fb, &projection, depth, rng);
        }
    }
}

// ── Viewmodel ─────────────────────────────────────────────────────────────────

fn draw_sprite_bottom_center(fb: &mut Framebuffer, sprite: &Sprite) {
    let x0 = (fb.width() as i32 - sprite.width as i32) / 2;
    let y0 = fb.height() as i32 - sprite.height as i32;
    for y in 0..sprite.height {
        for x in 0..sprite.width {
            if let Some(color) = sprite.pixel(x, y) {
                fb.set_pixel(x0 + x as i32, y0 + y as i32, color);
            }
        }
    }
}

/// Geometric stand-in used until the viewmodel image is ready.
fn draw_placeholder(fb: &mut Framebuffer, weapon: WeaponKind) {
    let w = fb.width() as i32;
    let h = fb.height() as i32;
    let cx = w / 2;
    let unit = (w / 40).max(1);

    let (barrel_w, barrel_h, barrels) = match weapon {
        WeaponKind::Pistol => (unit * 2, h / 5, 1),
        WeaponKind::Rifle => (unit * 2, h / 3, 1),
        WeaponKind::Shotgun => (unit * 2, h / 4, 2),
    };

    let grip_w = unit * 4;
    let grip_h = h / 8;
    fb.fill_rect(cx - grip_w / 2, h - grip_h, grip_w, grip_h, C_GUN_GRIP);

    let total = barrel_w * barrels;
    for b in 0..barrels {
        let x = cx - total / 2 + b * barrel_w;
        fb.fill_rect(x, h - grip_h - barrel_h, barrel_w, barrel_h, C_GUN_METAL);
        fb.vline(x, h - grip_h - barrel_h, h - grip_h, C_GUN_HIGHLIGHT);
    }
}

fn draw_viewmodel(fb: &mut Framebuffer, weapon: WeaponKind, viewmodel: &ViewModel) {
    match viewmodel.sprite() {
        Some(sprite) => draw_sprite_bottom_center(fb, sprite),
        None => draw_placeholder(fb, weapon),
    }
}
