use alloc::collections::BTreeSet;
use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Board tallies shown next to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Flames in [`TOP_ROWS`].
    pub top_row_flames: CellCount,
    pub top_row_target: CellCount,
    pub total_flames: CellCount,
    /// Cells held by the brigade, suppressed or under foam.
    pub suppressed: CellCount,
    /// Current round, starting at 1. Each round is one flame turn and one brigade turn.
    pub round: u16,
    pub max_rounds: u8,
    /// Turns the brigade still has to hold out, counting the current one.
    pub turns_remaining: u16,
}

impl Stats {
    pub fn new(board: &Board, turn_counter: u16, config: &GameConfig) -> Self {
        let turns_left = config.turn_limit().saturating_sub(turn_counter);
        Self {
            top_row_flames: board.count_in_rows(Cell::Flame, TOP_ROWS),
            top_row_target: TOP_ROWS_FLAME_TARGET,
            total_flames: board.count(Cell::Flame),
            suppressed: board.count_where(|cell| matches!(cell, Cell::Suppressed | Cell::Foam)),
            round: (turn_counter / 2 + 1).min(config.max_turns.into()),
            max_rounds: config.max_turns,
            turns_remaining: turns_left.div_ceil(2),
        }
    }
}

/// Read-only view of a game for the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub active_role: Role,
    pub turn_counter: u16,
    pub flame_actions_remaining: u8,
    pub special_charges: SpecialCharges,
    pub selected_action: Option<BrigadeAction>,
    pub anchor_hydrant: Option<Coord2>,
    pub walls_placed_this_turn: u8,
    pub emergency_active: bool,
    pub watered: BTreeSet<Coord2>,
    pub status: GameStatus,
    pub ignition: Option<Coord2>,
    /// Cells a click would act on.
    pub targets: TargetSet,
    pub stats: Stats,
}

impl Snapshot {
    pub fn from_game(game: &Game) -> Self {
        let state = game.state();
        let selection = game.selection().unwrap_or_default();

        Self {
            board: state.board.clone(),
            active_role: game.active_role(),
            turn_counter: state.turn_counter,
            flame_actions_remaining: game.flame_actions_remaining(),
            special_charges: state.charges,
            selected_action: selection.action,
            anchor_hydrant: selection.hydrant,
            walls_placed_this_turn: selection.walls_placed,
            emergency_active: selection.emergency,
            watered: state.watered.clone(),
            status: game.status(),
            ignition: state.ignition,
            targets: game.list_targets(),
            stats: Stats::new(&state.board, state.turn_counter, game.config()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
