//! Legal-move generation.
//!
//! A slide is legal when the shifted footprint stays on the board and every
//! cell it newly covers is empty. Cells the piece already covers are always
//! allowed, which is what lets a double slide along its own length into a
//! single free cell while needing two free cells to slide sideways.

use crate::geometry::{Direction, DIRECTIONS};
use crate::grid::Board;
use crate::pieces::Piece;

/// One legal slide: which piece moved, which way, and where it ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub piece_index: usize,
    pub direction: Direction,
    pub moved: Piece,
}

/// Slides the piece at `index` one cell, if the slide is legal.
#[inline]
pub fn try_slide(board: &Board, index: usize, direction: Direction) -> Option<Piece> {
    let piece = board.pieces()[index];
    let moved = piece.shifted(direction);
    if !moved.fits() {
        return None;
    }

    let current = piece.cells();
    moved
        .cells()
        .as_slice()
        .iter()
        .filter(|&&coord| !current.contains(coord))
        .all(|&(x, y)| board.is_empty_at(x, y))
        .then_some(moved)
}

/// All legal slides, pieces in board order and directions in `DIRECTIONS` order.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    for piece_index in 0..board.pieces().len() {
        for &direction in &DIRECTIONS {
            if let Some(moved) = try_slide(board, piece_index, direction) {
                moves.push(Move {
                    piece_index,
                    direction,
                    moved,
                });
            }
        }
    }
    moves
}

/// Every board reachable from `board` in one slide.
///
/// Each result is an independent copy; `board` itself is not touched.
pub fn successors(board: &Board) -> Vec<Board> {
    legal_moves(board)
        .into_iter()
        .map(|mv| board.with_piece_moved(mv.piece_index, mv.moved))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::parse_board;

    fn board(text: &str) -> Board {
        parse_board(text).unwrap()
    }

    fn moves_of(board: &Board, piece_index: usize) -> Vec<Direction> {
        legal_moves(board)
            .into_iter()
            .filter(|mv| mv.piece_index == piece_index)
            .map(|mv| mv.direction)
            .collect()
    }

    #[test]
    fn test_mixed_board_enumeration_order() {
        let start = board("^<>.\nv11.\n.11.\n2^..\n.v.2");
        let found: Vec<(usize, Direction)> = legal_moves(&start)
            .into_iter()
            .map(|mv| (mv.piece_index, mv.direction))
            .collect();

        assert_eq!(
            found,
            vec![
                (0, Direction::Down),
                (1, Direction::Right),
                (2, Direction::Right),
                (3, Direction::Up),
                (3, Direction::Down),
                (4, Direction::Right),
                (5, Direction::Left),
                (5, Direction::Up),
            ]
        );
    }

    #[test]
    fn test_horizontal_double_needs_both_cells_to_move_vertically() {
        let start = board("<>..\n2...\n11..\n11..\n....");
        assert_eq!(moves_of(&start, 0), vec![Direction::Right]);

        let next = successors(&start);
        assert_eq!(next[0].to_string(), ".<>.\n2...\n11..\n11..\n....\n");
    }

    #[test]
    fn test_vertical_double_needs_both_cells_to_move_horizontally() {
        let start = board("^2..\nv...\n....\n11..\n11..");
        assert_eq!(moves_of(&start, 0), vec![Direction::Down]);

        let next = successors(&start);
        assert_eq!(next[0].to_string(), ".2..\n^...\nv...\n11..\n11..\n");
    }

    #[test]
    fn test_goal_overlaps_its_own_cells() {
        let start = board("....\n.11.\n.11.\n....\n....");
        assert_eq!(
            moves_of(&start, 0),
            vec![
                Direction::Left,
                Direction::Right,
                Direction::Up,
                Direction::Down
            ]
        );

        let next = successors(&start);
        assert_eq!(next[3].to_string(), "....\n....\n.11.\n.11.\n....\n");
        assert_eq!(next[3].goal(), Piece::goal(1, 2));
    }

    #[test]
    fn test_single_needs_an_empty_cell() {
        let start = board("2<>.\n11^.\n11v.\n....\n....");
        assert!(moves_of(&start, 0).is_empty());
    }

    #[test]
    fn test_blocked_board_only_moves_singles() {
        let start = board("^11^\nv11v\n2<>2\n^22^\nv..v");
        let found: Vec<(usize, Direction)> = legal_moves(&start)
            .into_iter()
            .map(|mv| (mv.piece_index, mv.direction))
            .collect();

        assert_eq!(found, vec![(7, Direction::Down), (8, Direction::Down)]);
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let start = board("^11^\nv11v\n^<>^\nv22v\n2<>2");
        assert!(successors(&start).is_empty());
    }

    #[test]
    fn test_successors_conserve_footprint_and_leave_source_intact() {
        let start = board("^11^\nv11v\n^<>^\nv22v\n2..2");
        let before = start.to_string();
        let mut layer = vec![start.clone()];

        for _ in 0..4 {
            let mut next_layer = Vec::new();
            for parent in &layer {
                for child in successors(parent) {
                    assert_eq!(child.occupied_count(), parent.occupied_count());
                    assert_ne!(child.signature(), parent.signature());
                    assert!(child.heuristic().abs_diff(parent.heuristic()) <= 1);
                    assert_eq!(Board::new(child.pieces().to_vec()).unwrap(), child);
                    next_layer.push(child);
                }
            }
            layer = next_layer;
        }

        assert_eq!(start.to_string(), before);
    }
}
