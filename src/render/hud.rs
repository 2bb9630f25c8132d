/// HUD text, rebuilt from state every frame.

use crate::entities::{GameState, Overlay};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hud {
    pub health: String,
    pub ammo: String,
    pub score: String,
    pub level: String,
    pub weapon: String,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Hud {
        Hud {
            health: format!("Health: {}", state.player.health.ceil() as u32),
            ammo: format!("Ammo: {}", state.player.ammo.floor() as u32),
            score: format!("Score: {}", state.player.score),
            level: format!("Level: {}", state.level),
            weapon: format!("Weapon: {}", state.weapon),
        }
    }

    pub fn fields(&self) -> [&str; 5] {
        [
            self.health.as_str(),
            self.ammo.as_str(),
            self.score.as_str(),
            self.level.as_str(),
            self.weapon.as_str(),
        ]
    }
}

/// Title and control hint for the overlay panel, if one is showing.
pub fn overlay_banner(overlay: Overlay) -> Option<(&'static str, &'static str)> {
    match overlay {
        Overlay::None => None,
        Overlay::Start => Some(("RAYCAST SHOOTER", "ENTER : Start   Q : Quit")),
        Overlay::LevelCleared => Some((
            "LEVEL CLEARED",
            "N : Next level   B : Buy ammo   R : Restart",
        )),
        Overlay::Dead => Some(("YOU DIED", "R : Restart   Q : Quit")),
    }
}
