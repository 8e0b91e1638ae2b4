use serde::{Deserialize, Serialize};

use crate::*;

/// Action the brigade can select before clicking the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrigadeAction {
    Firewall,
    Water,
    MegaBlast,
    FoamBarrier,
}

impl BrigadeAction {
    /// Whether a hydrant has to be anchored before a target can be chosen.
    pub const fn needs_hydrant(self) -> bool {
        matches!(self, Self::Water | Self::MegaBlast)
    }

    /// The charge this action spends, if it is a special ability.
    pub const fn special(self) -> Option<Special> {
        match self {
            Self::Firewall | Self::Water => None,
            Self::MegaBlast => Some(Special::MegaBlast),
            Self::FoamBarrier => Some(Special::FoamBarrier),
        }
    }
}

/// Limited-use brigade abilities.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Special {
    MegaBlast,
    FoamBarrier,
    Emergency,
}

/// Remaining uses of each special ability. Charges never replenish during a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialCharges {
    pub mega_blast: u8,
    pub foam_barrier: u8,
    pub emergency: u8,
}

impl SpecialCharges {
    pub const fn get(self, special: Special) -> u8 {
        match special {
            Special::MegaBlast => self.mega_blast,
            Special::FoamBarrier => self.foam_barrier,
            Special::Emergency => self.emergency,
        }
    }

    pub const fn has(self, special: Special) -> bool {
        self.get(special) > 0
    }

    /// Spends one charge of `special`.
    pub fn consume(self, special: Special) -> Result<Self> {
        let mut charges = self;
        let slot = match special {
            Special::MegaBlast => &mut charges.mega_blast,
            Special::FoamBarrier => &mut charges.foam_barrier,
            Special::Emergency => &mut charges.emergency,
        };
        *slot = slot.checked_sub(1).ok_or(GameError::NoCharges(special))?;
        Ok(charges)
    }
}

impl Default for SpecialCharges {
    fn default() -> Self {
        Self {
            mega_blast: 1,
            foam_barrier: 1,
            emergency: 1,
        }
    }
}

/// A fully specified action, ready to be handed to [`resolve`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Flame(Coord2),
    Firewall { target: Coord2, walls_placed: u8 },
    Water { hydrant: Coord2, target: Coord2 },
    MegaBlast { hydrant: Coord2, target: Coord2 },
    Foam(Coord2),
}

impl Move {
    pub const fn role(self) -> Role {
        match self {
            Self::Flame(_) => Role::Flame,
            Self::Firewall { .. } | Self::Water { .. } | Self::MegaBlast { .. } | Self::Foam(_) => {
                Role::Brigade
            }
        }
    }

    pub const fn target(self) -> Coord2 {
        match self {
            Self::Flame(target)
            | Self::Firewall { target, .. }
            | Self::Water { target, .. }
            | Self::MegaBlast { target, .. }
            | Self::Foam(target) => target,
        }
    }
}
