use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Contents of a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Flame,
    /// Reserved, never placed by any rule.
    BrigadeUnit,
    Firewall,
    Hydrant,
    /// Put out but can burn again.
    Suppressed,
    Foam,
    /// Put out for one turn, reverts to `Empty` when the flame side moves next.
    Watered,
}

impl Cell {
    pub const fn is_flame(self) -> bool {
        matches!(self, Self::Flame)
    }

    /// Whether the flame side may spread into this cell.
    pub const fn is_flammable(self) -> bool {
        matches!(self, Self::Empty | Self::Suppressed)
    }

    /// Whether foam may be laid on this cell.
    pub const fn accepts_foam(self) -> bool {
        matches!(self, Self::Empty | Self::Suppressed)
    }

    /// State after being caught in a chain-reaction burst.
    pub const fn burnt(self) -> Self {
        use Cell::*;
        match self {
            Empty | Firewall | Suppressed | Watered => Flame,
            Foam => Suppressed,
            Flame | Hydrant | BrigadeUnit => self,
        }
    }

    pub const fn symbol(self) -> char {
        use Cell::*;
        match self {
            Empty => '.',
            Flame => 'F',
            BrigadeUnit => 'B',
            Firewall => 'W',
            Hydrant => 'H',
            Suppressed => 'S',
            Foam => 'O',
            Watered => 'D',
        }
    }

    pub const fn from_symbol(symbol: char) -> Result<Self> {
        use Cell::*;
        Ok(match symbol {
            '.' => Empty,
            'F' => Flame,
            'B' => BrigadeUnit,
            'W' => Firewall,
            'H' => Hydrant,
            'S' => Suppressed,
            'O' => Foam,
            'D' => Watered,
            other => return Err(GameError::InvalidCell(other)),
        })
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}
