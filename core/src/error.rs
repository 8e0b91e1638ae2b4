use thiserror::Error;

use crate::{Role, Special};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Not available during the {0:?} turn")]
    WrongRole(Role),
    #[error("No brigade action selected")]
    NoActionSelected,
    #[error("Select a hydrant first")]
    HydrantRequired,
    #[error("Cell is not a hydrant")]
    NotAHydrant,
    #[error("Cell is not a legal target for the current action")]
    IllegalTarget,
    #[error("No {0:?} charges left")]
    NoCharges(Special),
    #[error("Emergency response already active")]
    EmergencyActive,
    #[error("Finish placing firewalls before switching action")]
    ActionInProgress,
    #[error("Board shape does not match 8x8")]
    InvalidBoardShape,
    #[error("Unknown cell symbol {0:?}")]
    InvalidCell(char),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("Malformed command")]
    MalformedCommand,
}

impl GameError {
    /// Whether this is a rejected gameplay command rather than a construction problem.
    pub const fn is_illegal_action(self) -> bool {
        use GameError::*;
        match self {
            InvalidCoords | AlreadyEnded | WrongRole(_) | NoActionSelected | HydrantRequired
            | NotAHydrant | IllegalTarget | NoCharges(_) | EmergencyActive | ActionInProgress => {
                true
            }
            InvalidBoardShape | InvalidCell(_) | InvalidConfig(_) | MalformedCommand => false,
        }
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
