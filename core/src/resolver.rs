use smallvec::SmallVec;

use crate::*;

/// Board and charges after a move, plus what the controller needs to advance the turn.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub board: Board,
    pub charges: SpecialCharges,
    /// Whether the atomic action is over. A firewall action stays open until all walls are up.
    pub completed: bool,
    /// Cells put out by this move.
    pub watered: SmallVec<[Coord2; 9]>,
    /// Window that set off a chain reaction.
    pub ignition: Option<Coord2>,
}

/// Applies `action` to `board`.
///
/// Nothing is modified in place: on success the new board and charges are returned, on failure
/// the caller keeps its state as it was.
pub fn resolve(
    board: &Board,
    charges: SpecialCharges,
    action: Move,
    config: &GameConfig,
) -> Result<Resolution> {
    let target = Board::validate_coords(action.target())?;

    let mut next = board.clone();
    let mut charges = charges;
    let mut watered = SmallVec::new();
    let mut ignition = None;

    let completed = match action {
        Move::Flame(_) => {
            require(flame_moves(board).contains(&target))?;
            next.put(target, Cell::Flame);
            let (burnt, window) = chain_reaction(next);
            next = burnt;
            ignition = window;
            true
        }
        Move::Firewall { walls_placed, .. } => {
            require(walls_placed < config.firewalls_per_turn)?;
            require(firewall_targets(board).contains(&target))?;
            next.put(target, Cell::Firewall);
            walls_placed + 1 >= config.firewalls_per_turn || firewall_targets(&next).is_empty()
        }
        Move::Water { hydrant, .. } => {
            check_hydrant(board, hydrant)?;
            require(water_targets(board, hydrant).contains(&target))?;
            next.put(target, Cell::Watered);
            watered.push(target);
            true
        }
        Move::MegaBlast { hydrant, .. } => {
            charges = charges.consume(Special::MegaBlast)?;
            check_hydrant(board, hydrant)?;
            let hits = mega_blast_targets(board, hydrant);
            require(hits.contains(&target))?;
            for coords in hits {
                next.put(coords, Cell::Watered);
                watered.push(coords);
            }
            true
        }
        Move::Foam(_) => {
            charges = charges.consume(Special::FoamBarrier)?;
            require(foam_targets(board).contains(&target))?;
            next.put(target, Cell::Foam);
            true
        }
    };

    Ok(Resolution {
        board: next,
        charges,
        completed,
        watered,
        ignition,
    })
}

fn require(legal: bool) -> Result<()> {
    if legal {
        Ok(())
    } else {
        Err(GameError::IllegalTarget)
    }
}

fn check_hydrant(board: &Board, hydrant: Coord2) -> Result<()> {
    let hydrant = Board::validate_coords(hydrant)?;
    if board[hydrant] == Cell::Hydrant {
        Ok(())
    } else {
        Err(GameError::NotAHydrant)
    }
}
