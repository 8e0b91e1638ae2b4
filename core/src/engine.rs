use alloc::collections::BTreeSet;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the brigade has chosen so far during its turn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub action: Option<BrigadeAction>,
    pub hydrant: Option<Coord2>,
    /// Firewalls raised by the action in progress.
    pub walls_placed: u8,
    /// The next completed action spends an emergency charge instead of ending the turn.
    pub emergency: bool,
}

/// Valid transitions:
/// - FlameTurn -> FlameTurn, after a placement with budget left
/// - FlameTurn -> BrigadeTurn, once the budget is spent
/// - BrigadeTurn -> BrigadeTurn, while selecting, placing the first firewall or using emergency
/// - BrigadeTurn -> FlameTurn, after a completed action
/// - FlameTurn | BrigadeTurn -> GameOver
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    FlameTurn { actions_remaining: u8 },
    BrigadeTurn(Selection),
    GameOver { winner: Role, last_active: Role },
}

impl Phase {
    pub const fn active_role(self) -> Role {
        match self {
            Self::FlameTurn { .. } => Role::Flame,
            Self::BrigadeTurn(_) => Role::Brigade,
            Self::GameOver { last_active, .. } => last_active,
        }
    }

    pub const fn status(self) -> GameStatus {
        match self {
            Self::GameOver { winner, .. } => GameStatus::won_by(winner),
            Self::FlameTurn { .. } | Self::BrigadeTurn(_) => GameStatus::Playing,
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::GameOver { .. })
    }
}

/// Everything that changes over the course of a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub phase: Phase,
    /// Completed turns of either side.
    pub turn_counter: u16,
    pub charges: SpecialCharges,
    /// Cells watered since the flame side last moved.
    pub watered: BTreeSet<Coord2>,
    /// Window that burst during the last accepted click.
    pub ignition: Option<Coord2>,
}

impl GameState {
    fn opening(config: &GameConfig, board: Board) -> Self {
        Self {
            board,
            phase: Phase::FlameTurn {
                actions_remaining: config.flame_actions_per_turn,
            },
            turn_counter: 0,
            charges: config.charges,
            watered: BTreeSet::new(),
            ignition: None,
        }
    }
}

/// Turn controller, the single owner of the game state.
///
/// Every command either applies completely or returns an error and leaves the state untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    state: GameState,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let board = Board::from_config(&config);
        Ok(Self::with_board(config, board))
    }

    /// Starts a game from an arbitrary board, the flame side moving first.
    pub fn with_board(config: GameConfig, board: Board) -> Self {
        let state = GameState::opening(&config, board);
        Self { config, state }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn status(&self) -> GameStatus {
        self.state.phase.status()
    }

    pub fn is_finished(&self) -> bool {
        self.state.phase.is_finished()
    }

    pub fn active_role(&self) -> Role {
        self.state.phase.active_role()
    }

    pub fn turn_counter(&self) -> u16 {
        self.state.turn_counter
    }

    pub fn charges(&self) -> SpecialCharges {
        self.state.charges
    }

    pub fn flame_actions_remaining(&self) -> u8 {
        match self.state.phase {
            Phase::FlameTurn { actions_remaining } => actions_remaining,
            Phase::BrigadeTurn(_) | Phase::GameOver { .. } => self.config.flame_actions_per_turn,
        }
    }

    /// Brigade selection, only present during a brigade turn.
    pub fn selection(&self) -> Option<Selection> {
        match self.state.phase {
            Phase::BrigadeTurn(selection) => Some(selection),
            Phase::FlameTurn { .. } | Phase::GameOver { .. } => None,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_game(self)
    }

    /// Cells a click would currently act on.
    pub fn list_targets(&self) -> TargetSet {
        use BrigadeAction::*;

        let board = &self.state.board;
        match self.state.phase {
            Phase::FlameTurn { .. } => flame_moves(board),
            Phase::BrigadeTurn(selection) => match (selection.action, selection.hydrant) {
                (Some(Firewall), _) => firewall_targets(board),
                (Some(Water), Some(hydrant)) => water_targets(board, hydrant),
                (Some(MegaBlast), Some(hydrant)) => mega_blast_targets(board, hydrant),
                (Some(FoamBarrier), _) => foam_targets(board),
                (Some(Water | MegaBlast), None) | (None, _) => TargetSet::new(),
            },
            Phase::GameOver { .. } => TargetSet::new(),
        }
    }

    pub fn select_action(&mut self, action: BrigadeAction) -> Result<()> {
        let charges = self.state.charges;
        let selection = self.brigade_selection()?;

        if selection.walls_placed > 0 {
            return Err(GameError::ActionInProgress);
        }
        if let Some(special) = action.special() {
            if !charges.has(special) {
                return Err(GameError::NoCharges(special));
            }
        }

        selection.action = Some(action);
        selection.hydrant = None;
        selection.walls_placed = 0;
        log::debug!("Brigade selected {action:?}");
        Ok(())
    }

    /// Anchors the selected water action to the hydrant at `coords`.
    pub fn select_hydrant(&mut self, coords: Coord2) -> Result<()> {
        let coords = Board::validate_coords(coords)?;
        let is_hydrant = self.state.board[coords] == Cell::Hydrant;
        let selection = self.brigade_selection()?;

        match selection.action {
            None => return Err(GameError::NoActionSelected),
            Some(action) if !action.needs_hydrant() => return Err(GameError::IllegalTarget),
            Some(_) => {}
        }
        if !is_hydrant {
            return Err(GameError::NotAHydrant);
        }

        selection.hydrant = Some(coords);
        log::debug!("Brigade anchored on hydrant {coords:?}");
        Ok(())
    }

    pub fn cancel_selection(&mut self) -> Result<()> {
        let selection = self.brigade_selection()?;

        if selection.walls_placed > 0 {
            return Err(GameError::ActionInProgress);
        }

        *selection = Selection {
            emergency: selection.emergency,
            ..Selection::default()
        };
        Ok(())
    }

    /// Arms emergency response: the next completed brigade action does not end the turn.
    pub fn activate_emergency(&mut self) -> Result<()> {
        let charges = self.state.charges;
        let selection = self.brigade_selection()?;

        if !charges.has(Special::Emergency) {
            return Err(GameError::NoCharges(Special::Emergency));
        }
        if selection.emergency {
            return Err(GameError::EmergencyActive);
        }

        selection.emergency = true;
        log::debug!("Brigade activated emergency response");
        Ok(())
    }

    pub fn apply_click(&mut self, coords: Coord2) -> Result<ClickOutcome> {
        let coords = Board::validate_coords(coords)?;

        match self.state.phase {
            Phase::FlameTurn { actions_remaining } => self.flame_click(coords, actions_remaining),
            Phase::BrigadeTurn(selection) => self.brigade_click(coords, selection),
            Phase::GameOver { .. } => Err(GameError::AlreadyEnded),
        }
    }

    pub fn reset(&mut self) {
        log::debug!("Game reset");
        self.state = GameState::opening(&self.config, Board::from_config(&self.config));
    }

    fn flame_click(&mut self, coords: Coord2, actions_remaining: u8) -> Result<ClickOutcome> {
        let resolution = resolve(
            &self.state.board,
            self.state.charges,
            Move::Flame(coords),
            &self.config,
        )?;
        log::debug!("Flame spread to {coords:?}");
        self.commit(resolution);

        let actions_remaining = actions_remaining.saturating_sub(1);
        let passed = if actions_remaining == 0 {
            self.begin_turn(Role::Brigade);
            true
        } else {
            self.state.phase = Phase::FlameTurn { actions_remaining };
            false
        };

        Ok(self.settle(passed))
    }

    fn brigade_click(&mut self, coords: Coord2, selection: Selection) -> Result<ClickOutcome> {
        let action = selection.action.ok_or(GameError::NoActionSelected)?;

        let action = match action {
            BrigadeAction::Firewall => Move::Firewall {
                target: coords,
                walls_placed: selection.walls_placed,
            },
            BrigadeAction::FoamBarrier => Move::Foam(coords),
            BrigadeAction::Water | BrigadeAction::MegaBlast => {
                let Some(hydrant) = selection.hydrant else {
                    if self.state.board[coords] != Cell::Hydrant {
                        return Err(GameError::HydrantRequired);
                    }
                    self.select_hydrant(coords)?;
                    self.state.ignition = None;
                    return Ok(ClickOutcome::Anchored);
                };
                if action == BrigadeAction::Water {
                    Move::Water {
                        hydrant,
                        target: coords,
                    }
                } else {
                    Move::MegaBlast {
                        hydrant,
                        target: coords,
                    }
                }
            }
        };

        let mut resolution = resolve(
            &self.state.board,
            self.state.charges,
            action,
            &self.config,
        )?;
        let completed = resolution.completed;
        if completed && selection.emergency {
            resolution.charges = resolution.charges.consume(Special::Emergency)?;
        }
        log::debug!("Brigade resolved {action:?}");
        self.commit(resolution);

        let passed = if !completed {
            self.state.phase = Phase::BrigadeTurn(Selection {
                walls_placed: selection.walls_placed + 1,
                ..selection
            });
            false
        } else if selection.emergency {
            log::debug!("Emergency response grants another brigade action");
            self.state.phase = Phase::BrigadeTurn(Selection::default());
            false
        } else {
            self.begin_turn(Role::Flame);
            true
        };

        Ok(self.settle(passed))
    }

    fn commit(&mut self, resolution: Resolution) {
        self.state.board = resolution.board;
        self.state.charges = resolution.charges;
        self.state.watered.extend(resolution.watered);
        self.state.ignition = resolution.ignition;
    }

    fn begin_turn(&mut self, role: Role) {
        self.state.turn_counter += 1;
        self.state.phase = match role {
            Role::Flame => {
                self.expire_watered();
                Phase::FlameTurn {
                    actions_remaining: self.config.flame_actions_per_turn,
                }
            }
            Role::Brigade => Phase::BrigadeTurn(Selection::default()),
        };
        log::debug!(
            "Turn {} goes to {role:?}, {:?} waits",
            self.state.turn_counter,
            role.opponent()
        );
    }

    fn expire_watered(&mut self) {
        let cleared = self.state.board.replace_all(Cell::Watered, Cell::Empty);
        if cleared > 0 {
            log::debug!("{cleared} watered cells dried up");
        }
        self.state.watered.clear();
    }

    fn settle(&mut self, passed: bool) -> ClickOutcome {
        let status = evaluate(&self.state.board, self.state.turn_counter, &self.config);

        match status.winner() {
            Some(winner) => {
                log::info!(
                    "{winner:?} wins after {} turns",
                    self.state.turn_counter
                );
                self.state.phase = Phase::GameOver {
                    winner,
                    last_active: self.state.phase.active_role(),
                };
                ClickOutcome::Finished(winner)
            }
            None if passed => ClickOutcome::TurnPassed,
            None => ClickOutcome::Continued,
        }
    }

    fn brigade_selection(&mut self) -> Result<&mut Selection> {
        match &mut self.state.phase {
            Phase::BrigadeTurn(selection) => Ok(selection),
            Phase::FlameTurn { .. } => Err(GameError::WrongRole(Role::Flame)),
            Phase::GameOver { .. } => Err(GameError::AlreadyEnded),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        let config = GameConfig::default();
        let board = Board::from_config(&config);
        Self::with_board(config, board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brigade_game(board: Board) -> Game {
        let mut game = Game::with_board(GameConfig::default(), board);
        game.state.phase = Phase::BrigadeTurn(Selection::default());
        game.state.turn_counter = 1;
        game
    }

    #[test]
    fn new_game_starts_with_flame_turn() {
        let game = Game::default();

        assert_eq!(game.active_role(), Role::Flame);
        assert_eq!(game.turn_counter(), 0);
        assert_eq!(game.flame_actions_remaining(), 2);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.board().count(Cell::Flame), 3);
        assert_eq!(game.board().count(Cell::Hydrant), 6);
        assert_eq!(game.charges(), SpecialCharges::default());
    }

    #[test]
    fn two_flame_placements_pass_the_turn() {
        let mut game = Game::default();

        assert_eq!(game.apply_click((6, 2)).unwrap(), ClickOutcome::Continued);
        assert_eq!(game.flame_actions_remaining(), 1);
        assert_eq!(game.turn_counter(), 0);

        assert_eq!(game.apply_click((5, 4)).unwrap(), ClickOutcome::TurnPassed);
        assert_eq!(game.active_role(), Role::Brigade);
        assert_eq!(game.turn_counter(), 1);
        assert_eq!(game.flame_actions_remaining(), 2);
        assert_eq!(game.board()[(6, 2)], Cell::Flame);
        assert_eq!(game.board()[(5, 4)], Cell::Flame);
    }

    #[test]
    fn rejected_click_changes_nothing() {
        let mut game = Game::default();
        let before = game.clone();

        assert_eq!(game.apply_click((0, 0)), Err(GameError::IllegalTarget));
        assert_eq!(game.apply_click((8, 0)), Err(GameError::InvalidCoords));
        assert_eq!(game, before);
    }

    #[test]
    fn brigade_commands_rejected_during_flame_turn() {
        let mut game = Game::default();

        assert_eq!(
            game.select_action(BrigadeAction::Firewall),
            Err(GameError::WrongRole(Role::Flame))
        );
        assert_eq!(
            game.activate_emergency(),
            Err(GameError::WrongRole(Role::Flame))
        );
        assert_eq!(
            game.cancel_selection(),
            Err(GameError::WrongRole(Role::Flame))
        );
    }

    #[test]
    fn click_without_action_is_rejected() {
        let mut game = brigade_game(Board::standard());

        assert_eq!(
            game.apply_click((0, 0)),
            Err(GameError::NoActionSelected)
        );
        assert!(game.list_targets().is_empty());
    }

    #[test]
    fn firewall_action_places_two_walls() {
        let mut game = brigade_game(Board::standard());
        game.select_action(BrigadeAction::Firewall).unwrap();
        let targets = game.list_targets();
        assert!(targets.contains(&(6, 3)));

        assert_eq!(game.apply_click((6, 3)).unwrap(), ClickOutcome::Continued);
        assert_eq!(game.selection().unwrap().walls_placed, 1);
        assert!(!game.list_targets().contains(&(6, 3)));
        assert_eq!(game.list_targets().len(), targets.len() - 1);

        assert_eq!(game.apply_click((6, 3)), Err(GameError::IllegalTarget));
        assert_eq!(game.apply_click((6, 4)).unwrap(), ClickOutcome::TurnPassed);
        assert_eq!(game.active_role(), Role::Flame);
        assert_eq!(game.turn_counter(), 2);
        assert_eq!(game.board().count(Cell::Firewall), 2);
    }

    #[test]
    fn open_firewall_action_cannot_be_switched() {
        let mut game = brigade_game(Board::standard());
        game.select_action(BrigadeAction::Firewall).unwrap();
        game.apply_click((0, 0)).unwrap();

        assert_eq!(game.cancel_selection(), Err(GameError::ActionInProgress));
        assert_eq!(
            game.select_action(BrigadeAction::Firewall),
            Err(GameError::ActionInProgress)
        );
        assert_eq!(game.apply_click((0, 1)).unwrap(), ClickOutcome::TurnPassed);
    }

    #[test]
    fn water_needs_an_anchored_hydrant() {
        let board = Board::standard().set((3, 2), Cell::Flame);
        let mut game = brigade_game(board);
        game.select_action(BrigadeAction::Water).unwrap();

        assert!(game.list_targets().is_empty());
        assert_eq!(game.apply_click((3, 2)), Err(GameError::HydrantRequired));
        assert_eq!(game.select_hydrant((3, 3)), Err(GameError::NotAHydrant));

        assert_eq!(game.apply_click((2, 2)).unwrap(), ClickOutcome::Anchored);
        assert_eq!(game.selection().unwrap().hydrant, Some((2, 2)));
        assert_eq!(game.turn_counter(), 1);
        assert!(game.list_targets().contains(&(3, 2)));

        assert_eq!(game.apply_click((3, 2)).unwrap(), ClickOutcome::TurnPassed);
        assert_eq!(game.board()[(3, 2)], Cell::Empty);
    }

    #[test]
    fn select_hydrant_requires_water_action() {
        let mut game = brigade_game(Board::standard());

        assert_eq!(
            game.select_hydrant((2, 2)),
            Err(GameError::NoActionSelected)
        );
        game.select_action(BrigadeAction::Firewall).unwrap();
        assert_eq!(game.select_hydrant((2, 2)), Err(GameError::IllegalTarget));
        game.select_action(BrigadeAction::MegaBlast).unwrap();
        assert_eq!(game.select_hydrant((2, 2)), Ok(()));
    }

    #[test]
    fn emergency_grants_one_more_action() {
        let mut game = brigade_game(Board::standard());

        game.activate_emergency().unwrap();
        assert_eq!(game.activate_emergency(), Err(GameError::EmergencyActive));

        game.select_action(BrigadeAction::FoamBarrier).unwrap();
        assert_eq!(game.apply_click((0, 0)).unwrap(), ClickOutcome::Continued);
        assert_eq!(game.active_role(), Role::Brigade);
        assert_eq!(game.turn_counter(), 1);
        assert_eq!(game.charges().emergency, 0);
        assert_eq!(game.charges().foam_barrier, 0);
        assert_eq!(game.selection(), Some(Selection::default()));

        assert_eq!(
            game.activate_emergency(),
            Err(GameError::NoCharges(Special::Emergency))
        );
        assert_eq!(
            game.select_action(BrigadeAction::FoamBarrier),
            Err(GameError::NoCharges(Special::FoamBarrier))
        );

        game.select_action(BrigadeAction::Firewall).unwrap();
        game.apply_click((0, 1)).unwrap();
        assert_eq!(game.apply_click((0, 2)).unwrap(), ClickOutcome::TurnPassed);
        assert_eq!(game.turn_counter(), 2);
    }

    #[test]
    fn emergency_waits_for_second_firewall() {
        let mut game = brigade_game(Board::standard());
        game.activate_emergency().unwrap();
        game.select_action(BrigadeAction::Firewall).unwrap();

        assert_eq!(game.apply_click((0, 0)).unwrap(), ClickOutcome::Continued);
        assert_eq!(game.charges().emergency, 1);
        assert!(game.selection().unwrap().emergency);

        assert_eq!(game.apply_click((0, 1)).unwrap(), ClickOutcome::Continued);
        assert_eq!(game.charges().emergency, 0);
        assert_eq!(game.active_role(), Role::Brigade);
        assert_eq!(game.turn_counter(), 1);
        assert_eq!(game.selection(), Some(Selection::default()));
    }

    #[test]
    fn cancel_keeps_emergency_armed() {
        let mut game = brigade_game(Board::standard());
        game.activate_emergency().unwrap();
        game.select_action(BrigadeAction::Water).unwrap();

        game.cancel_selection().unwrap();

        let selection = game.selection().unwrap();
        assert_eq!(selection.action, None);
        assert!(selection.emergency);
    }

    #[test]
    fn mega_blast_waters_block_once() {
        let board = Board::empty()
            .set((2, 2), Cell::Hydrant)
            .set((1, 1), Cell::Flame)
            .set((1, 2), Cell::Flame)
            .set((3, 3), Cell::Flame)
            .set((7, 7), Cell::Flame);
        let mut game = brigade_game(board);
        game.activate_emergency().unwrap();
        game.select_action(BrigadeAction::MegaBlast).unwrap();
        game.select_hydrant((2, 2)).unwrap();

        assert_eq!(game.list_targets().len(), 3);
        assert_eq!(game.apply_click((3, 3)).unwrap(), ClickOutcome::Continued);

        for coords in [(1, 1), (1, 2), (3, 3)] {
            assert_eq!(game.board()[coords], Cell::Watered);
        }
        assert_eq!(game.charges().mega_blast, 0);
        assert_eq!(game.state().watered.len(), 3);
        assert_eq!(
            game.select_action(BrigadeAction::MegaBlast),
            Err(GameError::NoCharges(Special::MegaBlast))
        );
    }

    #[test]
    fn watered_cells_dry_up_when_flame_moves_next() {
        let board = Board::standard()
            .set((3, 2), Cell::Flame)
            .set((0, 0), Cell::Suppressed)
            .set((0, 7), Cell::Foam);
        let mut game = brigade_game(board);
        game.activate_emergency().unwrap();
        game.select_action(BrigadeAction::Water).unwrap();
        game.select_hydrant((2, 2)).unwrap();

        assert_eq!(game.apply_click((3, 2)).unwrap(), ClickOutcome::Continued);
        assert_eq!(game.board()[(3, 2)], Cell::Watered);
        assert!(game.state().watered.contains(&(3, 2)));

        game.select_action(BrigadeAction::Firewall).unwrap();
        game.apply_click((6, 0)).unwrap();
        assert_eq!(game.apply_click((6, 7)).unwrap(), ClickOutcome::TurnPassed);

        assert_eq!(game.board()[(3, 2)], Cell::Empty);
        assert!(game.state().watered.is_empty());
        assert_eq!(game.board()[(0, 0)], Cell::Suppressed);
        assert_eq!(game.board()[(0, 7)], Cell::Foam);
    }

    #[test]
    fn putting_out_last_flame_wins_for_brigade() {
        let board = Board::standard()
            .set((7, 2), Cell::Empty)
            .set((7, 3), Cell::Empty)
            .set((7, 4), Cell::Empty)
            .set((3, 2), Cell::Flame);
        let mut game = brigade_game(board);
        game.select_action(BrigadeAction::Water).unwrap();
        game.select_hydrant((2, 2)).unwrap();

        assert_eq!(
            game.apply_click((3, 2)).unwrap(),
            ClickOutcome::Finished(Role::Brigade)
        );
        assert_eq!(game.status(), GameStatus::BrigadeWins);
    }

    #[test]
    fn reaching_top_rows_wins_for_flame() {
        let board = Board::parse(
            "
            F.F.F...
            ........
            F.F.....
            ........
            ........
            ........
            ........
            ........
            ",
        )
        .unwrap();
        let mut game = Game::with_board(GameConfig::default(), board);

        assert_eq!(
            game.apply_click((0, 6)).unwrap(),
            ClickOutcome::Finished(Role::Flame)
        );
        assert_eq!(game.status(), GameStatus::FlameWins);
        assert_eq!(game.active_role(), Role::Flame);
    }

    #[test]
    fn holding_out_wins_and_freezes_until_reset() {
        let config = GameConfig {
            max_turns: 1,
            ..Default::default()
        };
        let mut game = Game::new(config).unwrap();

        game.apply_click((6, 2)).unwrap();
        game.apply_click((5, 4)).unwrap();
        game.select_action(BrigadeAction::Firewall).unwrap();
        game.apply_click((0, 0)).unwrap();

        assert_eq!(
            game.apply_click((0, 1)).unwrap(),
            ClickOutcome::Finished(Role::Brigade)
        );
        assert_eq!(game.turn_counter(), 2);
        assert!(game.is_finished());
        assert!(game.list_targets().is_empty());
        assert_eq!(game.apply_click((6, 3)), Err(GameError::AlreadyEnded));
        assert_eq!(
            game.select_action(BrigadeAction::Water),
            Err(GameError::AlreadyEnded)
        );

        game.reset();
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.turn_counter(), 0);
        assert_eq!(game.board(), &Board::standard());
    }

    #[test]
    fn chain_reaction_is_recorded_on_the_state() {
        let mut game = Game::default();

        game.apply_click((6, 2)).unwrap();
        game.apply_click((6, 3)).unwrap();

        assert_eq!(game.state().ignition, Some((6, 2)));
        assert_eq!(game.board()[(5, 1)], Cell::Hydrant);
        assert_eq!(game.board()[(5, 2)], Cell::Flame);
        assert_eq!(game.board()[(7, 1)], Cell::Flame);
    }
}
