//! Piece definitions.
//!
//! A piece is a value object: its kind plus the top-left corner of its
//! footprint. Moving a piece produces a new `Piece`; existing ones are never
//! updated in place.

use crate::geometry::{in_bounds, Coord, Direction};

/// Maximum number of cells covered by any single piece (the 2x2 goal block).
pub const MAX_CELLS: usize = 4;

/// Orientation of a two-cell piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Two cells side by side (`<>`).
    Horizontal,
    /// Two cells stacked (`^` over `v`).
    Vertical,
}

/// The four piece shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// The 2x2 block that has to reach the exit.
    Goal,
    /// A 1x1 block.
    Single,
    /// A 2x1 or 1x2 block.
    Double(Orientation),
}

impl PieceKind {
    /// Width and height of the footprint.
    #[inline]
    pub const fn footprint(self) -> (i32, i32) {
        match self {
            PieceKind::Goal => (2, 2),
            PieceKind::Single => (1, 1),
            PieceKind::Double(Orientation::Horizontal) => (2, 1),
            PieceKind::Double(Orientation::Vertical) => (1, 2),
        }
    }
}

/// A piece placed on the board, addressed by its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub x: i32,
    pub y: i32,
}

/// Absolute cells covered by a piece.
///
/// Uses a fixed-size array to avoid heap allocation in the move generator.
#[derive(Clone, Copy, Debug)]
pub struct Cells {
    positions: [Coord; MAX_CELLS],
    count: u8,
}

impl Cells {
    #[inline]
    pub fn as_slice(&self) -> &[Coord] {
        &self.positions[..self.count as usize]
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.as_slice().contains(&coord)
    }
}

impl Piece {
    pub const fn new(kind: PieceKind, x: i32, y: i32) -> Self {
        Self { kind, x, y }
    }

    pub const fn goal(x: i32, y: i32) -> Self {
        Self::new(PieceKind::Goal, x, y)
    }

    pub const fn single(x: i32, y: i32) -> Self {
        Self::new(PieceKind::Single, x, y)
    }

    pub const fn horizontal(x: i32, y: i32) -> Self {
        Self::new(PieceKind::Double(Orientation::Horizontal), x, y)
    }

    pub const fn vertical(x: i32, y: i32) -> Self {
        Self::new(PieceKind::Double(Orientation::Vertical), x, y)
    }

    #[inline]
    pub fn is_goal(&self) -> bool {
        self.kind == PieceKind::Goal
    }

    /// Number of cells this piece covers.
    #[inline]
    pub fn size(&self) -> usize {
        let (w, h) = self.kind.footprint();
        (w * h) as usize
    }

    /// Cells covered by this piece in row-major order.
    pub fn cells(&self) -> Cells {
        let (w, h) = self.kind.footprint();
        let mut positions = [(0, 0); MAX_CELLS];
        let mut count = 0;
        for dy in 0..h {
            for dx in 0..w {
                positions[count] = (self.x + dx, self.y + dy);
                count += 1;
            }
        }
        Cells {
            positions,
            count: count as u8,
        }
    }

    /// Returns true if the whole footprint lies on the board.
    #[inline]
    pub fn fits(&self) -> bool {
        let (w, h) = self.kind.footprint();
        in_bounds(self.x, self.y) && in_bounds(self.x + w - 1, self.y + h - 1)
    }

    /// The same piece slid one cell in `direction`.
    #[inline]
    pub fn shifted(&self, direction: Direction) -> Piece {
        let (dx, dy) = direction.offset();
        Piece::new(self.kind, self.x + dx, self.y + dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_match_footprint() {
        let goal = Piece::goal(1, 2);
        assert_eq!(goal.cells().as_slice(), &[(1, 2), (2, 2), (1, 3), (2, 3)]);

        let horizontal = Piece::horizontal(2, 4);
        assert_eq!(horizontal.cells().as_slice(), &[(2, 4), (3, 4)]);

        let vertical = Piece::vertical(3, 0);
        assert_eq!(vertical.cells().as_slice(), &[(3, 0), (3, 1)]);

        assert_eq!(Piece::single(0, 0).cells().as_slice(), &[(0, 0)]);
    }

    #[test]
    fn test_fits_checks_far_corner() {
        assert!(Piece::goal(2, 3).fits());
        assert!(!Piece::goal(3, 0).fits());
        assert!(!Piece::goal(0, 4).fits());
        assert!(!Piece::horizontal(3, 0).fits());
        assert!(!Piece::vertical(0, 4).fits());
        assert!(!Piece::single(-1, 0).fits());
    }

    #[test]
    fn test_shifted_keeps_kind() {
        let piece = Piece::vertical(1, 1);
        let moved = piece.shifted(Direction::Left);
        assert_eq!(moved, Piece::vertical(0, 1));
        assert_eq!(piece, Piece::vertical(1, 1));
        assert_eq!(piece.shifted(Direction::Down), Piece::vertical(1, 2));
    }
}
