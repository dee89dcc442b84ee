//! Board dimensions, cell addressing and slide directions.
//!
//! Coordinates are `(x, y)` with `x` running left to right across the four
//! columns and `y` running top to bottom across the five rows.

/// A cell coordinate `(x, y)`.
pub type Coord = (i32, i32);

/// Number of columns.
pub const WIDTH: usize = 4;

/// Number of rows.
pub const HEIGHT: usize = 5;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = WIDTH * HEIGHT;

/// Top-left corner the goal piece must reach.
pub const TARGET: Coord = (1, 3);

/// One orthogonal single-cell slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Enumeration order used by the move generator.
///
/// Changing this order changes which of several equal-cost paths the
/// searches report, so it must stay fixed.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

impl Direction {
    /// The `(dx, dy)` shift applied to a piece's top-left corner.
    #[inline]
    pub const fn offset(self) -> Coord {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// Returns true if `(x, y)` lies on the board.
#[inline(always)]
pub const fn in_bounds(x: i32, y: i32) -> bool {
    x >= 0 && y >= 0 && (x as usize) < WIDTH && (y as usize) < HEIGHT
}

/// Converts `(x, y)` to a linear cell index.
///
/// Index order is row-major: `idx = y * WIDTH + x`.
#[inline(always)]
pub const fn coord_to_idx(x: i32, y: i32) -> usize {
    (y as usize) * WIDTH + (x as usize)
}

/// Converts a linear cell index to `(x, y)`.
#[inline(always)]
pub const fn idx_to_coord(cell_index: usize) -> Coord {
    ((cell_index % WIDTH) as i32, (cell_index / WIDTH) as i32)
}
