//! Board representation.
//!
//! A board owns its piece list and a 4x5 grid of cell markers derived from
//! it. Both fields are private and the grid is only ever written by the
//! board itself, so the two can never disagree. The grid doubles as the
//! state signature: two boards with the same markers in every cell are the
//! same search state regardless of piece-list order.

use std::fmt;

use thiserror::Error;

use crate::geometry::{coord_to_idx, CELL_COUNT, HEIGHT, TARGET, WIDTH};
use crate::pieces::{Orientation, Piece, PieceKind};

/// Bits used per cell in a packed signature.
const BITS_PER_CELL: u32 = 3;

/// Contents of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    Empty = 0,
    Goal = 1,
    Single = 2,
    /// Left half of a horizontal double.
    Left = 3,
    /// Right half of a horizontal double.
    Right = 4,
    /// Top half of a vertical double.
    Top = 5,
    /// Bottom half of a vertical double.
    Bottom = 6,
}

impl Cell {
    /// The text marker for this cell.
    pub const fn marker(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Goal => '1',
            Cell::Single => '2',
            Cell::Left => '<',
            Cell::Right => '>',
            Cell::Top => '^',
            Cell::Bottom => 'v',
        }
    }

    pub const fn from_marker(marker: char) -> Option<Cell> {
        match marker {
            '.' => Some(Cell::Empty),
            '1' => Some(Cell::Goal),
            '2' => Some(Cell::Single),
            '<' => Some(Cell::Left),
            '>' => Some(Cell::Right),
            '^' => Some(Cell::Top),
            'v' => Some(Cell::Bottom),
            _ => None,
        }
    }
}

/// Reasons a piece list cannot form a board.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("piece {index} at ({x}, {y}) does not fit on the 4x5 board")]
    OutOfBounds { index: usize, x: i32, y: i32 },
    #[error("pieces overlap at ({x}, {y})")]
    Overlap { x: i32, y: i32 },
    #[error("board has no goal piece")]
    MissingGoal,
    #[error("board has {count} goal pieces, expected exactly one")]
    MultipleGoals { count: usize },
}

/// A snapshot of every piece position plus the derived occupancy grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pieces: Vec<Piece>,
    cells: [Cell; CELL_COUNT],
    goal_index: usize,
}

/// Marker written into each cell of a piece, in `Piece::cells` order.
fn piece_markers(kind: PieceKind) -> &'static [Cell] {
    match kind {
        PieceKind::Goal => &[Cell::Goal; 4],
        PieceKind::Single => &[Cell::Single],
        PieceKind::Double(Orientation::Horizontal) => &[Cell::Left, Cell::Right],
        PieceKind::Double(Orientation::Vertical) => &[Cell::Top, Cell::Bottom],
    }
}

impl Board {
    /// Builds a board from its pieces, deriving the grid.
    ///
    /// Rejects footprints that leave the board, footprints that overlap, and
    /// piece lists without exactly one goal piece.
    pub fn new(pieces: Vec<Piece>) -> Result<Self, BoardError> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut goal_index = None;
        let mut goal_count = 0;

        for (index, piece) in pieces.iter().enumerate() {
            if !piece.fits() {
                return Err(BoardError::OutOfBounds {
                    index,
                    x: piece.x,
                    y: piece.y,
                });
            }
            if piece.is_goal() {
                goal_count += 1;
                goal_index.get_or_insert(index);
            }
            let markers = piece_markers(piece.kind);
            for (&(x, y), &marker) in piece.cells().as_slice().iter().zip(markers) {
                let cell = &mut cells[coord_to_idx(x, y)];
                if *cell != Cell::Empty {
                    return Err(BoardError::Overlap { x, y });
                }
                *cell = marker;
            }
        }

        match (goal_index, goal_count) {
            (Some(goal_index), 1) => Ok(Self {
                pieces,
                cells,
                goal_index,
            }),
            (None, _) => Err(BoardError::MissingGoal),
            (_, count) => Err(BoardError::MultipleGoals { count }),
        }
    }

    /// Returns a copy of this board with the piece at `index` taken out and
    /// `moved` appended at the end of the piece list, updating the grid in
    /// lock-step.
    ///
    /// The caller guarantees that every cell of `moved` outside the old
    /// footprint is empty and on the board.
    pub(crate) fn with_piece_moved(&self, index: usize, moved: Piece) -> Board {
        let mut next = self.clone();
        let old = self.pieces[index];
        for &(x, y) in old.cells().as_slice() {
            next.cells[coord_to_idx(x, y)] = Cell::Empty;
        }
        for (&(x, y), &marker) in moved
            .cells()
            .as_slice()
            .iter()
            .zip(piece_markers(moved.kind))
        {
            let cell = &mut next.cells[coord_to_idx(x, y)];
            debug_assert_eq!(*cell, Cell::Empty, "moved piece lands on ({x}, {y})");
            *cell = marker;
        }
        next.pieces.remove(index);
        next.pieces.push(moved);
        if index == self.goal_index {
            next.goal_index = next.pieces.len() - 1;
        } else if index < self.goal_index {
            next.goal_index -= 1;
        }
        next
    }

    /// Pieces in generator order.
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The goal piece.
    #[inline]
    pub fn goal(&self) -> Piece {
        self.pieces[self.goal_index]
    }

    /// Marker at `(x, y)`. Panics if the coordinate is off the board.
    #[inline]
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        self.cells[coord_to_idx(x, y)]
    }

    #[inline]
    pub fn is_empty_at(&self, x: i32, y: i32) -> bool {
        self.cell(x, y) == Cell::Empty
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }

    /// Canonical state signature: every cell marker packed into 3 bits.
    ///
    /// 20 cells x 3 bits fits in a `u64` with room to spare, so equal
    /// signatures mean equal grids.
    pub fn signature(&self) -> u64 {
        self.cells.iter().fold(0u64, |packed, &cell| {
            (packed << BITS_PER_CELL) | cell as u64
        })
    }

    /// True if the goal block covers the 2x2 exit at the bottom middle.
    pub fn is_goal(&self) -> bool {
        let (tx, ty) = TARGET;
        [(tx, ty), (tx + 1, ty), (tx, ty + 1), (tx + 1, ty + 1)]
            .iter()
            .all(|&(x, y)| self.cell(x, y) == Cell::Goal)
    }

    /// Manhattan distance from the goal piece's corner to the exit corner.
    ///
    /// A move shifts one piece by one cell, so this never overestimates.
    pub fn heuristic(&self) -> u32 {
        let goal = self.goal();
        let (tx, ty) = TARGET;
        (goal.x - tx).unsigned_abs() + (goal.y - ty).unsigned_abs()
    }

    /// Rows of cell markers, top row first.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(WIDTH)
            .map(|row| row.iter().map(|cell| cell.marker()).collect())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Formats a solution trace as grids separated by blank lines.
pub fn format_solution(trace: &[Board]) -> String {
    let mut output = String::with_capacity(trace.len() * (CELL_COUNT + HEIGHT + 1));
    for board in trace {
        output.push_str(&board.to_string());
        output.push('\n');
    }
    output
}
