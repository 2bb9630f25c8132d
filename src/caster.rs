/// Per-column ray marching.
///
/// Every screen column gets one ray. The ray walks forward in fixed
/// `RAY_STEP` increments until it lands in a wall cell or runs out of
/// `MAX_DEPTH`. The resulting distances form the depth buffer used for both
/// wall slabs and sprite occlusion.

use glam::Vec2;

use crate::constants::{FOV, MAX_DEPTH, MIN_DISTANCE, RAY_STEP};
use crate::map::Map;

/// Angle of the ray for `column` out of `width`.
pub fn ray_angle(heading: f32, column: usize, width: usize) -> f32 {
    heading - FOV / 2.0 + (column as f32 / width.max(1) as f32) * FOV
}

/// Distance to the first wall along `angle`, in `(0, MAX_DEPTH]`.
/// Returns exactly `MAX_DEPTH` when nothing is hit within range.
pub fn cast_ray(map: &Map, origin: Vec2, angle: f32) -> f32 {
    let dir = Vec2::new(angle.cos(), angle.sin());
    let mut distance = 0.0;

    while distance < MAX_DEPTH {
        distance += RAY_STEP;
        let probe = origin + dir * distance;
        if map.is_wall(probe.x, probe.y) {
            return distance.min(MAX_DEPTH);
        }
    }

    MAX_DEPTH
}

/// Fill a depth buffer with one distance per column.
pub fn cast_columns(map: &Map, origin: Vec2, heading: f32, width: usize) -> Vec<f32> {
    (0..width)
        .map(|column| cast_ray(map, origin, ray_angle(heading, column, width)))
        .collect()
}

/// On-screen height of a wall slab at `distance`.
pub fn wall_height(surface_height: usize, distance: f32) -> f32 {
    surface_height as f32 / distance.max(MIN_DISTANCE)
}

/// Brightness in `[0, 1]`: 1 at the eye, 0 at `MAX_DEPTH`.
pub fn shade(distance: f32) -> f32 {
    (1.0 - distance / MAX_DEPTH).clamp(0.0, 1.0)
}
