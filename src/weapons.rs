/// Weapon tiers, unlocked by level.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeaponKind {
    Pistol,
    Rifle,
    Shotgun,
}

/// Fixed per-tier parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeaponSpec {
    pub name: &'static str,
    /// First level at which this tier is carried.
    pub unlock_level: u32,
    pub damage_multiplier: f32,
    pub ammo_cost: f32,
    pub pellets: u32,
    /// Maximum angular deviation of a pellet from the aim heading.
    pub spread: f32,
}

/// Ordered by `unlock_level`.
pub const WEAPON_TABLE: [(WeaponKind, WeaponSpec); 3] = [
    (
        WeaponKind::Pistol,
        WeaponSpec {
            name: "Pistol",
            unlock_level: 1,
            damage_multiplier: 1.0,
            ammo_cost: 1.0,
            pellets: 1,
            spread: 0.03,
        },
    ),
    (
        WeaponKind::Rifle,
        WeaponSpec {
            name: "Rifle",
            unlock_level: 3,
            damage_multiplier: 1.5,
            ammo_cost: 1.0,
            pellets: 1,
            spread: 0.015,
        },
    ),
    (
        WeaponKind::Shotgun,
        WeaponSpec {
            name: "Shotgun",
            unlock_level: 5,
            damage_multiplier: 0.55,
            ammo_cost: 2.5,
            pellets: 10,
            spread: 0.20,
        },
    ),
];

impl WeaponKind {
    pub const BASELINE: WeaponKind = WeaponKind::Pistol;

    pub fn spec(self) -> &'static WeaponSpec {
        WEAPON_TABLE
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, spec)| spec)
            .unwrap_or(&WEAPON_TABLE[0].1)
    }

    /// Highest tier whose unlock level has been reached.
    pub fn for_level(level: u32) -> WeaponKind {
        WEAPON_TABLE
            .iter()
            .rev()
            .find(|(_, spec)| spec.unlock_level <= level)
            .map(|(kind, _)| *kind)
            .unwrap_or(WeaponKind::BASELINE)
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }
}

impl fmt::Display for WeaponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
