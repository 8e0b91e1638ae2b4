use crate::*;

/// Checks the terminal conditions, in order of precedence:
///
/// 1. the flame side holds at least [`TOP_ROWS_FLAME_TARGET`] cells in [`TOP_ROWS`],
/// 2. the brigade has held out until the turn limit,
/// 3. the brigade has put out every flame.
pub fn evaluate(board: &Board, turn_counter: u16, config: &GameConfig) -> GameStatus {
    if board.count_in_rows(Cell::Flame, TOP_ROWS) >= TOP_ROWS_FLAME_TARGET {
        return GameStatus::FlameWins;
    }

    if turn_counter >= config.turn_limit() {
        return GameStatus::BrigadeWins;
    }

    if board.count(Cell::Flame) == 0 {
        return GameStatus::BrigadeWins;
    }

    GameStatus::Playing
}
