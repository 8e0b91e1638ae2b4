use alloc::collections::BTreeSet;

use crate::*;

/// Legal target cells, deduplicated and ordered row-major.
pub type TargetSet = BTreeSet<Coord2>;

/// How many cells along an axis a flame can spread in one placement.
pub const FLAME_REACH: isize = 2;

/// Cells the flame side may ignite next.
///
/// Every flame spreads up to [`FLAME_REACH`] cells along each axis. A firewall stops the scan in
/// that direction, so nothing at or beyond it is reachable from that flame. Only empty and
/// suppressed cells can catch fire.
pub fn flame_moves(board: &Board) -> TargetSet {
    let mut moves = TargetSet::new();

    for source in board.positions_of(Cell::Flame) {
        for (d_row, d_col) in ORTHOGONAL {
            for step in 1..=FLAME_REACH {
                let Some(coords) = apply_delta(source, (d_row * step, d_col * step)) else {
                    break;
                };

                let cell = board[coords];
                if cell == Cell::Firewall {
                    break;
                }
                if cell.is_flammable() {
                    moves.insert(coords);
                }
            }
        }
    }

    moves
}

/// Cells where the brigade may raise a firewall.
pub fn firewall_targets(board: &Board) -> TargetSet {
    board.positions_of(Cell::Empty).collect()
}

/// Flames right next to `hydrant` that a regular water spray can reach.
pub fn water_targets(board: &Board, hydrant: Coord2) -> TargetSet {
    ORTHOGONAL
        .into_iter()
        .filter_map(|delta| apply_delta(hydrant, delta))
        .filter(|&coords| board[coords].is_flame())
        .collect()
}

/// Flames in the 3×3 block around `hydrant`, all of which a mega blast puts out.
pub fn mega_blast_targets(board: &Board, hydrant: Coord2) -> TargetSet {
    BlockIter::around(hydrant)
        .filter(|&coords| board[coords].is_flame())
        .collect()
}

/// Cells that can take a foam barrier.
pub fn foam_targets(board: &Board) -> TargetSet {
    board
        .iter()
        .filter(|&(_, cell)| cell.accepts_foam())
        .map(|(coords, _)| coords)
        .collect()
}
