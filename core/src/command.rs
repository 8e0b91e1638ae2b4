use serde::{Deserialize, Serialize};

use crate::*;

/// A user interaction forwarded by the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    SelectAction { action: BrigadeAction },
    SelectHydrant { at: Coord2 },
    CancelSelection,
    ActivateEmergency,
    Click { at: Coord2 },
    Reset,
}

impl Command {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| {
            log::warn!("Malformed command: {err}");
            GameError::MalformedCommand
        })
    }
}

impl Game {
    /// Applies `command` and returns the resulting view of the game.
    pub fn dispatch(&mut self, command: Command) -> Result<Snapshot> {
        let result = match command {
            Command::SelectAction { action } => self.select_action(action),
            Command::SelectHydrant { at } => self.select_hydrant(at),
            Command::CancelSelection => self.cancel_selection(),
            Command::ActivateEmergency => self.activate_emergency(),
            Command::Click { at } => self.apply_click(at).map(|_| ()),
            Command::Reset => {
                self.reset();
                Ok(())
            }
        };

        match result {
            Ok(()) => Ok(self.snapshot()),
            Err(err) => {
                log::debug!("Rejected {command:?}: {err}");
                Err(err)
            }
        }
    }
}
