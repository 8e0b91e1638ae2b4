#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use action::*;
pub use board::*;
pub use cell::*;
pub use chain::*;
pub use command::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use movegen::*;
pub use resolver::*;
pub use snapshot::*;
pub use types::*;
pub use win::*;

mod action;
mod board;
mod cell;
mod chain;
mod command;
mod config;
mod engine;
mod error;
mod movegen;
mod resolver;
mod snapshot;
mod types;
mod win;

/// The two sides of the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Flame,
    Brigade,
}

impl Role {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Flame => Self::Brigade,
            Self::Brigade => Self::Flame,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Playing,
    FlameWins,
    BrigadeWins,
}

impl GameStatus {
    pub const fn won_by(winner: Role) -> Self {
        match winner {
            Role::Flame => Self::FlameWins,
            Role::Brigade => Self::BrigadeWins,
        }
    }

    pub const fn winner(self) -> Option<Role> {
        match self {
            Self::Playing => None,
            Self::FlameWins => Some(Role::Flame),
            Self::BrigadeWins => Some(Role::Brigade),
        }
    }

    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Playing
    }
}

/// Outcome of a click on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A hydrant was picked as the anchor of a water action.
    Anchored,
    /// The move was applied and the same side acts again.
    Continued,
    /// The move was applied and the other side is up.
    TurnPassed,
    /// The move decided the game.
    Finished(Role),
}

impl ClickOutcome {
    pub const fn ends_turn(self) -> bool {
        matches!(self, Self::TurnPassed | Self::Finished(_))
    }
}
