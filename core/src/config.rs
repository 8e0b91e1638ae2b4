use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Number of turns each side plays before the brigade wins by holding out.
pub const MAX_TURNS: u8 = 8;

pub const FLAME_ACTIONS_PER_TURN: u8 = 2;

pub const FIREWALLS_PER_TURN: u8 = 2;

/// Rows the flame side is trying to reach.
pub const TOP_ROWS: core::ops::Range<Coord> = 0..3;

/// Flames needed in [`TOP_ROWS`] for the flame side to win.
pub const TOP_ROWS_FLAME_TARGET: CellCount = 6;

/// Rule constants and opening layout of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub max_turns: u8,
    pub flame_actions_per_turn: u8,
    pub firewalls_per_turn: u8,
    pub charges: SpecialCharges,
    pub flames: Vec<Coord2>,
    pub hydrants: Vec<Coord2>,
}

impl GameConfig {
    /// Parses and validates a JSON config. Missing fields take the standard values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|err| {
            log::warn!("Malformed game config: {err}");
            GameError::InvalidConfig("malformed JSON")
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_turns == 0 {
            return Err(GameError::InvalidConfig("max_turns must be positive"));
        }
        if self.flame_actions_per_turn == 0 {
            return Err(GameError::InvalidConfig(
                "flame_actions_per_turn must be positive",
            ));
        }
        if self.firewalls_per_turn == 0 {
            return Err(GameError::InvalidConfig(
                "firewalls_per_turn must be positive",
            ));
        }
        if self.flames.is_empty() {
            return Err(GameError::InvalidConfig("at least one flame is required"));
        }

        let mut seen = BTreeSet::new();
        for &coords in self.flames.iter().chain(&self.hydrants) {
            Board::validate_coords(coords)
                .map_err(|_| GameError::InvalidConfig("seed cell outside the board"))?;
            if !seen.insert(coords) {
                return Err(GameError::InvalidConfig("seed cells overlap"));
            }
        }

        Ok(())
    }

    /// Turn counter value at which the brigade has held out.
    pub const fn turn_limit(&self) -> u16 {
        2 * self.max_turns as u16
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_turns: MAX_TURNS,
            flame_actions_per_turn: FLAME_ACTIONS_PER_TURN,
            firewalls_per_turn: FIREWALLS_PER_TURN,
            charges: SpecialCharges::default(),
            flames: vec![(7, 2), (7, 3), (7, 4)],
            hydrants: vec![(2, 2), (2, 5), (5, 1), (5, 6), (4, 3), (4, 4)],
        }
    }
}
