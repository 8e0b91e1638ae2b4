/// Single coordinate axis used for rows and columns.
pub type Coord = u8;

/// Count type used for cell tallies.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Side length of the square board.
pub const BOARD_SIZE: Coord = 8;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// The four axis directions as `(d_row, d_col)`.
pub const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const fn within_bounds(row: isize, col: isize) -> bool {
    row >= 0 && row < BOARD_SIZE as isize && col >= 0 && col < BOARD_SIZE as isize
}

/// Applies `delta` to `coords`, returning a value only when it remains on the board.
pub fn apply_delta(coords: Coord2, delta: (isize, isize)) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= BOARD_SIZE {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= BOARD_SIZE {
        return None;
    }

    Some((next_row, next_col))
}

pub const fn manhattan(a: Coord2, b: Coord2) -> Coord {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

/// Iterates a square block of cells in row-major order, skipping cells off the board.
#[derive(Debug)]
pub struct BlockIter {
    top: isize,
    left: isize,
    span: u8,
    index: u8,
}

impl BlockIter {
    pub fn new(top: isize, left: isize, span: u8) -> Self {
        Self {
            top,
            left,
            span,
            index: 0,
        }
    }

    /// The 3×3 block centered on `center`, the center included.
    pub fn around(center: Coord2) -> Self {
        Self::new(center.0 as isize - 1, center.1 as isize - 1, 3)
    }

    /// The 4×4 block obtained by growing the 2×2 window at `top_left` by one cell per side.
    pub fn surrounding_window(top_left: Coord2) -> Self {
        Self::new(top_left.0 as isize - 1, top_left.1 as isize - 1, 4)
    }
}

impl Iterator for BlockIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if u16::from(self.index) >= u16::from(self.span) * u16::from(self.span) {
                return None;
            }

            let row = self.top + (self.index / self.span) as isize;
            let col = self.left + (self.index % self.span) as isize;
            self.index += 1;

            if within_bounds(row, col) {
                return Some((row as Coord, col as Coord));
            }
        }
    }
}
