use std::sync::Arc;

use glam::Vec2;

use raycast_shooter::entities::*;
use raycast_shooter::map::Map;
use raycast_shooter::weapons::{WeaponKind, WEAPON_TABLE};

#[test]
fn only_the_none_overlay_runs() {
    assert!(Overlay::None.is_running());
    assert!(!Overlay::Start.is_running());
    assert!(!Overlay::LevelCleared.is_running());
    assert!(!Overlay::Dead.is_running());
}

#[test]
fn game_state_clone_is_independent() {
    let map = Arc::new(Map::builtin().unwrap());
    let original = GameState {
        player: Player {
            pos: map.spawn(),
            angle: 0.0,
            health: 100.0,
            ammo: 30.0,
            score: 0,
            alive: true,
        },
        map,
        enemies: Vec::new(),
        projectiles: Vec::new(),
        sparks: Vec::new(),
        weapon: WeaponKind::Pistol,
        level: 1,
        overlay: Overlay::Start,
        events: Vec::new(),
        frame: 0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.pos = Vec2::new(9.0, 9.0);
    cloned.player.score = 999;
    cloned.enemies.push(Enemy {
        pos: Vec2::new(5.0, 5.0),
        hp: 60.0,
        max_hp: 60.0,
        speed: 1.0,
        alive: true,
        hit_flash: 0.0,
    });

    assert_eq!(original.player.pos, Vec2::new(1.5, 1.5));
    assert_eq!(original.player.score, 0);
    assert!(original.enemies.is_empty());
    assert!(Arc::ptr_eq(&original.map, &cloned.map));
}

#[test]
fn living_enemies_skips_the_dead() {
    let map = Arc::new(Map::builtin().unwrap());
    let enemy = |alive| Enemy {
        pos: Vec2::new(5.5, 5.5),
        hp: 60.0,
        max_hp: 60.0,
        speed: 1.0,
        alive,
        hit_flash: 0.0,
    };
    let state = GameState {
        player: Player {
            pos: map.spawn(),
            angle: 0.0,
            health: 100.0,
            ammo: 30.0,
            score: 0,
            alive: true,
        },
        map,
        enemies: vec![enemy(true), enemy(false), enemy(true)],
        projectiles: Vec::new(),
        sparks: Vec::new(),
        weapon: WeaponKind::Pistol,
        level: 1,
        overlay: Overlay::None,
        events: Vec::new(),
        frame: 0,
    };
    assert_eq!(state.living_enemies().count(), 2);
}

// ── Weapon table ──────────────────────────────────────────────────────────────

#[test]
fn weapon_for_level_uses_thresholds() {
    assert_eq!(WeaponKind::for_level(0), WeaponKind::Pistol);
    assert_eq!(WeaponKind::for_level(1), WeaponKind::Pistol);
    assert_eq!(WeaponKind::for_level(2), WeaponKind::Pistol);
    assert_eq!(WeaponKind::for_level(3), WeaponKind::Rifle);
    assert_eq!(WeaponKind::for_level(4), WeaponKind::Rifle);
    assert_eq!(WeaponKind::for_level(5), WeaponKind::Shotgun);
    assert_eq!(WeaponKind::for_level(50), WeaponKind::Shotgun);
}

#[test]
fn weapon_table_is_ordered_and_consistent() {
    for pair in WEAPON_TABLE.windows(2) {
        assert!(pair[0].1.unlock_level < pair[1].1.unlock_level);
    }
    for (kind, spec) in WEAPON_TABLE.iter() {
        assert_eq!(kind.spec(), spec);
        assert!(spec.pellets >= 1);
        assert!(spec.ammo_cost > 0.0);
    }
}

#[test]
fn baseline_weapon_is_a_single_pellet() {
    let spec = WeaponKind::BASELINE.spec();
    assert_eq!(spec.pellets, 1);
    assert_eq!(spec.ammo_cost, 1.0);
}

#[test]
fn shotgun_is_the_wide_tier() {
    let shotgun = WeaponKind::Shotgun.spec();
    assert_eq!(shotgun.pellets, 10);
    assert!(shotgun.spread > WeaponKind::Pistol.spec().spread);
}

#[test]
fn weapon_displays_its_name() {
    assert_eq!(WeaponKind::Rifle.to_string(), "Rifle");
}
