/// Simulation steps and overlay transitions.
///
/// Public functions borrow the current `GameState` and hand back the next
/// one; randomness comes in through the `rng` argument. Within `tick` the
/// copy is passed by `&mut` through movement, AI and ballistics in turn.

pub mod ballistics;
pub mod enemy_ai;
pub mod movement;
pub mod progression;

use std::sync::Arc;

use log::info;
use rand::Rng;

use crate::constants::{
    BUY_AMMO_AMOUNT, BUY_AMMO_COST, LEVEL_AMMO_REWARD, LEVEL_HEALTH_REWARD, PLAYER_MAX_HEALTH,
    START_AMMO,
};
use crate::entities::{GameEvent, GameState, Overlay, Player};
use crate::input::{Control, InputSnapshot};
use crate::map::Map;
use crate::weapons::WeaponKind;

// ── Constructors ─────────────────────────────────────────────────────────────

fn fresh_player(map: &Map) -> Player {
    Player {
        pos: map.spawn(),
        angle: 0.0,
        health: PLAYER_MAX_HEALTH,
        ammo: START_AMMO,
        score: 0,
        alive: true,
    }
}

/// A level-1 run waiting on the start screen.
pub fn init_state(map: Arc<Map>, rng: &mut impl Rng) -> GameState {
    let player = fresh_player(&map);
    let enemies = progression::spawn_enemies(&map, player.pos, 1, rng);
    GameState {
        map,
        player,
        enemies,
        projectiles: Vec::new(),
        sparks: Vec::new(),
        weapon: WeaponKind::for_level(1),
        level: 1,
        overlay: Overlay::Start,
        events: Vec::new(),
        frame: 0,
    }
}

// ── Control surface (pure) ───────────────────────────────────────────────────

/// START → running.
pub fn start(state: &GameState) -> GameState {
    if state.overlay != Overlay::Start {
        return state.clone();
    }
    info!("run started");
    GameState {
        overlay: Overlay::None,
        ..state.clone()
    }
}

/// Full reset from LEVEL_CLEARED or DEAD; straight into a running level 1.
pub fn restart(state: &GameState, rng: &mut impl Rng) -> GameState {
    if !matches!(state.overlay, Overlay::LevelCleared | Overlay::Dead) {
        return state.clone();
    }
    info!("restart after level {} with score {}", state.level, state.player.score);
    let mut next = init_state(Arc::clone(&state.map), rng);
    next.overlay = Overlay::None;
    next.events = state.events.clone();
    next.events.push(GameEvent::LevelStarted {
        level: 1,
        weapon: next.weapon,
    });
    next
}

/// LEVEL_CLEARED → next level: rewards, weapon lookup, new batch.
pub fn next_level(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.overlay != Overlay::LevelCleared {
        return state.clone();
    }

    let level = state.level + 1;
    let weapon = WeaponKind::for_level(level);
    let player = Player {
        ammo: state.player.ammo + LEVEL_AMMO_REWARD,
        health: (state.player.health + LEVEL_HEALTH_REWARD).min(PLAYER_MAX_HEALTH),
        ..state.player.clone()
    };
    let enemies = progression::spawn_enemies(&state.map, player.pos, level, rng);

    if weapon != state.weapon {
        info!("level {} unlocks {}", level, weapon);
    }
    info!("level {} started with {} enemies", level, enemies.len());

    let mut events = state.events.clone();
    events.push(GameEvent::LevelStarted { level, weapon });

    GameState {
        player,
        enemies,
        projectiles: Vec::new(),
        sparks: Vec::new(),
        weapon,
        level,
        overlay: Overlay::None,
        events,
        ..state.clone()
    }
}

/// Trade score for ammo if the player can afford it.
pub fn buy_ammo(state: &GameState) -> GameState {
    if state.player.score < BUY_AMMO_COST {
        return state.clone();
    }
    let mut events = state.events.clone();
    events.push(GameEvent::AmmoBought);
    GameState {
        player: Player {
            score: state.player.score - BUY_AMMO_COST,
            ammo: state.player.ammo + BUY_AMMO_AMOUNT,
            ..state.player.clone()
        },
        events,
        ..state.clone()
    }
}

pub fn apply_control(state: &GameState, control: Control, rng: &mut impl Rng) -> GameState {
    match control {
        Control::Start => start(state),
        Control::NextLevel => next_level(state, rng),
        Control::BuyAmmo => buy_ammo(state),
        Control::Restart => restart(state, rng),
    }
}

// ── End conditions ───────────────────────────────────────────────────────────

/// Overlay after a running step. Death wins over a cleared level.
pub fn evaluate_overlay(state: &GameState) -> Overlay {
    if state.overlay != Overlay::None {
        return state.overlay;
    }
    if !state.player.alive || state.player.health <= 0.0 {
        Overlay::Dead
    } else if state.enemies.iter().all(|e| !e.alive) {
        Overlay::LevelCleared
    } else {
        Overlay::None
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by `dt` seconds using one input snapshot.
/// A no-op while any overlay is showing.
pub fn tick(
    state: &GameState,
    input: &InputSnapshot,
    dt: f32,
    rng: &mut impl Rng,
) -> GameState {
    if !state.overlay.is_running() {
        return state.clone();
    }

    let mut next = state.clone();
    next.frame += 1;
    let map = Arc::clone(&next.map);

    // ── 1. Player movement ───────────────────────────────────────────────────
    movement::update_player(&mut next.player, &map, input, dt);

    // ── 2. Enemies ───────────────────────────────────────────────────────────
    enemy_ai::update_enemies(&mut next.enemies, &mut next.player, &map, dt, &mut next.events);

    // ── 3. Weapon & projectiles ──────────────────────────────────────────────
    // A player killed by contact this step neither shoots nor scores.
    ballistics::update_sparks(&mut next.sparks, dt);
    if next.player.alive {
        if input.fire {
            ballistics::fire(
                &mut next.player,
                next.weapon,
                &mut next.projectiles,
                rng,
                &mut next.events,
            );
        }
        ballistics::update_projectiles(
            &mut next.projectiles,
            &mut next.enemies,
            &mut next.player,
            next.weapon,
            &map,
            dt,
            &mut next.sparks,
            &mut next.events,
        );
    }

    // ── 4. End conditions ────────────────────────────────────────────────────
    next.overlay = evaluate_overlay(&next);
    match next.overlay {
        Overlay::Dead => {
            info!("player died on level {}", next.level);
            next.events.push(GameEvent::PlayerDied);
        }
        Overlay::LevelCleared => {
            info!("level {} cleared", next.level);
            next.events.push(GameEvent::LevelCleared { level: next.level });
        }
        Overlay::None | Overlay::Start => {}
    }

    next
}
