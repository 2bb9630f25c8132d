/// The frame loop body: one simulation step (when running) followed by a
/// full redraw (always).

use std::sync::Arc;
use std::time::Instant;

use log::debug;
use rand::Rng;

use crate::assets::ViewModel;
use crate::caster::cast_columns;
use crate::compute::{apply_control, init_state, tick};
use crate::constants::MAX_FRAME_DT;
use crate::entities::{GameEvent, GameState};
use crate::input::{Control, InputSnapshot};
use crate::map::Map;
use crate::render::{render_scene, Framebuffer, Hud};
use crate::sound::SoundSink;

/// Elapsed time between frames, clamped so a stall can't produce a huge
/// simulation step.
#[derive(Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock { last: None }
    }

    /// Seconds since the previous call, in `[0, MAX_FRAME_DT]`. The first
    /// call returns 0.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = match self.last {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        dt.min(MAX_FRAME_DT)
    }
}

/// Owns the simulation state and everything drawn from it.
pub struct Game<R: Rng> {
    state: GameState,
    framebuffer: Framebuffer,
    depth: Vec<f32>,
    hud: Hud,
    viewmodel: ViewModel,
    sound: Box<dyn SoundSink>,
    rng: R,
}

impl<R: Rng> Game<R> {
    /// A new run on the start screen.
    pub fn new(map: Arc<Map>, width: usize, height: usize, mut rng: R, sound: Box<dyn SoundSink>) -> Self {
        let state = init_state(map, &mut rng);
        Game::from_state(state, width, height, rng, sound)
    }

    pub fn from_state(
        state: GameState,
        width: usize,
        height: usize,
        rng: R,
        sound: Box<dyn SoundSink>,
    ) -> Self {
        let hud = Hud::from_state(&state);
        Game {
            state,
            framebuffer: Framebuffer::new(width, height),
            depth: vec![0.0; width],
            hud,
            viewmodel: ViewModel::NotLoaded,
            sound,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn depth(&self) -> &[f32] {
        &self.depth
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn viewmodel_mut(&mut self) -> &mut ViewModel {
        &mut self.viewmodel
    }

    /// Apply overlay buttons in the order they were pressed.
    pub fn apply_controls(&mut self, controls: &[Control]) {
        for &control in controls {
            self.state = apply_control(&self.state, control, &mut self.rng);
        }
        self.dispatch_events();
    }

    /// One frame: simulate if no overlay is up, then redraw and refresh the
    /// HUD regardless.
    pub fn frame(&mut self, input: &InputSnapshot, dt: f32) {
        if self.state.overlay.is_running() {
            self.state = tick(&self.state, input, dt, &mut self.rng);
        }

        self.depth = cast_columns(
            &self.state.map,
            self.state.player.pos,
            self.state.player.angle,
            self.framebuffer.width(),
        );
        render_scene(
            &mut self.framebuffer,
            &self.state,
            &self.depth,
            &self.viewmodel,
            &mut self.rng,
        );
        self.hud = Hud::from_state(&self.state);

        self.dispatch_events();
    }

    fn dispatch_events(&mut self) {
        for event in std::mem::take(&mut self.state.events) {
            match &event {
                GameEvent::Fired { weapon, pellets } => {
                    debug!("fired {} ({} pellets)", weapon, pellets)
                }
                GameEvent::DryFire => debug!("click: out of ammo"),
                GameEvent::EnemyHit { damage } => debug!("enemy hit for {:.1}", damage),
                GameEvent::EnemyKilled { score } => debug!("enemy killed (+{})", score),
                GameEvent::PlayerHurt => {}
                other => debug!("{:?}", other),
            }
            self.sound.play(&event);
        }
    }
}
