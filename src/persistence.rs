//! Reading puzzles from text and writing solution traces.
//!
//! Puzzle format: five rows of four markers.
//! - `.` empty cell
//! - `1` goal block (all four cells)
//! - `2` single block
//! - `<` `>` left and right halves of a horizontal double
//! - `^` `v` top and bottom halves of a vertical double
//!
//! Only the anchoring marker of each piece creates a piece (`^`, `<`, `2`
//! and the first `1` in row-major order). The board rebuilt from those
//! pieces must then match the text cell for cell, which rejects orphaned
//! halves, partial goal blocks and overlaps.
//!
//! Solution format: each board of the trace in the puzzle format, followed
//! by a blank line. A search with no solution writes an empty file.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

use crate::geometry::{idx_to_coord, CELL_COUNT, HEIGHT, WIDTH};
use crate::grid::{format_solution, Board, BoardError, Cell};
use crate::pieces::Piece;

/// Reasons a puzzle file cannot be loaded.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read puzzle: {0}")]
    Io(#[from] io::Error),
    #[error("expected 5 rows, found {found}")]
    RowCount { found: usize },
    #[error("row {row} has {found} cells, expected 4")]
    RowWidth { row: usize, found: usize },
    #[error("unknown marker {marker:?} at ({x}, {y})")]
    UnknownMarker { marker: char, x: usize, y: usize },
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("cell ({x}, {y}) reads {expected:?} but the pieces place {found:?} there")]
    Mismatch {
        x: i32,
        y: i32,
        expected: char,
        found: char,
    },
}

/// Parses a puzzle from its text form.
///
/// Trailing whitespace on each row and trailing blank lines are ignored.
pub fn parse_board(text: &str) -> Result<Board, LoadError> {
    let mut rows: Vec<&str> = text.lines().map(str::trim_end).collect();
    while rows.last().is_some_and(|row| row.is_empty()) {
        rows.pop();
    }
    if rows.len() != HEIGHT {
        return Err(LoadError::RowCount { found: rows.len() });
    }

    let mut pieces = Vec::new();
    let mut expected = Vec::with_capacity(CELL_COUNT);
    let mut goal_found = false;

    for (y, row) in rows.iter().enumerate() {
        let width = row.chars().count();
        if width != WIDTH {
            return Err(LoadError::RowWidth {
                row: y + 1,
                found: width,
            });
        }

        for (x, marker) in row.chars().enumerate() {
            let cell =
                Cell::from_marker(marker).ok_or(LoadError::UnknownMarker { marker, x, y })?;
            let (px, py) = (x as i32, y as i32);
            match cell {
                Cell::Top => pieces.push(Piece::vertical(px, py)),
                Cell::Left => pieces.push(Piece::horizontal(px, py)),
                Cell::Single => pieces.push(Piece::single(px, py)),
                Cell::Goal if !goal_found => {
                    goal_found = true;
                    pieces.push(Piece::goal(px, py));
                }
                _ => {}
            }
            expected.push(cell);
        }
    }

    let board = Board::new(pieces)?;

    for (cell_index, &cell) in expected.iter().enumerate() {
        let (x, y) = idx_to_coord(cell_index);
        let found = board.cell(x, y);
        if found != cell {
            return Err(LoadError::Mismatch {
                x,
                y,
                expected: cell.marker(),
                found: found.marker(),
            });
        }
    }

    Ok(board)
}

/// Loads a puzzle file.
pub fn read_board(path: &Path) -> Result<Board, LoadError> {
    let text = fs::read_to_string(path)?;
    parse_board(&text)
}

/// Writes a solution trace, root first.
pub fn write_solution(path: &Path, trace: &[Board]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(format_solution(trace).as_bytes())?;
    file.flush()
}
