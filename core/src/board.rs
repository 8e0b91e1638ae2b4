use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, Range};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The 8×8 playing field, indexed by `(row, col)` with row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: Array2::default((BOARD_SIZE, BOARD_SIZE).to_nd_index()),
        }
    }

    /// Opening layout described by `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        let mut board = Self::empty();
        for &coords in &config.hydrants {
            board.cells[coords.to_nd_index()] = Cell::Hydrant;
        }
        for &coords in &config.flames {
            board.put(coords, Cell::Flame);
        }
        board
    }

    /// Opening layout of the standard game.
    pub fn standard() -> Self {
        Self::from_config(&GameConfig::default())
    }

    /// Reads a board from eight lines of eight cell symbols, see [`Cell::symbol`].
    ///
    /// Blank lines and whitespace inside a line are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let mut symbols = Vec::with_capacity(usize::from(BOARD_SIZE) * usize::from(BOARD_SIZE));
        let mut rows = 0;

        for line in text.lines() {
            let before = symbols.len();
            for symbol in line.chars().filter(|c| !c.is_whitespace()) {
                symbols.push(Cell::from_symbol(symbol)?);
            }
            let width = symbols.len() - before;
            if width == 0 {
                continue;
            }
            if width != usize::from(BOARD_SIZE) {
                return Err(GameError::InvalidBoardShape);
            }
            rows += 1;
        }

        if rows != usize::from(BOARD_SIZE) {
            return Err(GameError::InvalidBoardShape);
        }

        let cells = Array2::from_shape_vec((BOARD_SIZE, BOARD_SIZE).to_nd_index(), symbols)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self { cells })
    }

    pub fn get(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    /// Returns a copy of this board with `coords` set to `cell`.
    ///
    /// Hydrants are fixed terrain, setting a hydrant cell leaves it untouched.
    pub fn set(&self, coords: Coord2, cell: Cell) -> Self {
        let mut board = self.clone();
        board.put(coords, cell);
        board
    }

    pub(crate) fn put(&mut self, coords: Coord2, cell: Cell) -> bool {
        let slot = &mut self.cells[coords.to_nd_index()];
        if *slot == Cell::Hydrant && cell != Cell::Hydrant {
            log::warn!("Ignored overwrite of hydrant at {coords:?} with {cell:?}");
            return false;
        }
        *slot = cell;
        true
    }

    /// Turns every `from` cell into `to`, returning how many changed.
    pub(crate) fn replace_all(&mut self, from: Cell, to: Cell) -> CellCount {
        if from == Cell::Hydrant {
            return 0;
        }
        let mut changed: CellCount = 0;
        for cell in self.cells.iter_mut().filter(|cell| **cell == from) {
            *cell = to;
            changed += 1;
        }
        changed
    }

    pub const fn within_bounds(row: isize, col: isize) -> bool {
        within_bounds(row, col)
    }

    pub fn validate_coords(coords: Coord2) -> Result<Coord2> {
        if coords.0 < BOARD_SIZE && coords.1 < BOARD_SIZE {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// All cells with their coordinates, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn positions_of(&self, cell: Cell) -> impl Iterator<Item = Coord2> + '_ {
        self.iter()
            .filter(move |&(_, other)| other == cell)
            .map(|(coords, _)| coords)
    }

    pub fn count(&self, cell: Cell) -> CellCount {
        self.count_where(|other| other == cell)
    }

    pub fn count_where(&self, predicate: impl Fn(Cell) -> bool) -> CellCount {
        self.cells
            .iter()
            .filter(|&&cell| predicate(cell))
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    /// Counts `cell` within the given rows.
    pub fn count_in_rows(&self, cell: Cell, rows: Range<Coord>) -> CellCount {
        self.iter()
            .filter(|&((row, _), other)| rows.contains(&row) && other == cell)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
