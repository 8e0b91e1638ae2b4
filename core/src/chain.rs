use crate::*;

/// Top-left corner of the first 2×2 window made only of flames, scanning row-major.
pub fn find_ignition(board: &Board) -> Option<Coord2> {
    (0..BOARD_SIZE - 1)
        .flat_map(|row| (0..BOARD_SIZE - 1).map(move |col| (row, col)))
        .find(|&(row, col)| {
            [(row, col), (row, col + 1), (row + 1, col), (row + 1, col + 1)]
                .into_iter()
                .all(|coords| board[coords].is_flame())
        })
}

/// Burns the 4×4 block around the 2×2 window at `top_left`, see [`Cell::burnt`].
pub fn burst(board: &Board, top_left: Coord2) -> Board {
    let mut burnt = board.clone();
    for coords in BlockIter::surrounding_window(top_left) {
        burnt.put(coords, board[coords].burnt());
    }
    burnt
}

/// Applies at most one burst, for the first saturated window found.
///
/// Cells set alight by the burst are not scanned again in the same pass.
pub fn chain_reaction(board: Board) -> (Board, Option<Coord2>) {
    match find_ignition(&board) {
        Some(top_left) => {
            log::debug!("Chain reaction at {top_left:?}");
            (burst(&board, top_left), Some(top_left))
        }
        None => (board, None),
    }
}
