//! Hua Rong Dao Solver Library
//!
//! Solves the 4x5 sliding-block puzzle: slide the 2x2 goal block to the exit
//! at the bottom middle of the board, one single-cell slide at a time.

pub mod geometry;
pub mod grid;
pub mod moves;
pub mod persistence;
pub mod pieces;
pub mod solver;

use grid::Board;
use solver::{SearchLimits, SearchOutcome};

/// Search algorithm, as chosen on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    /// Best-first search ordered by moves so far plus distance to the exit.
    /// Finds a shortest solution.
    Astar,
    /// Depth-first search that skips boards it has already expanded.
    /// Fast to find something, but the solution is rarely short.
    Dfs,
}

/// A search strategy that can be selected at runtime.
pub trait Strategy {
    fn name(&self) -> &'static str;
    fn search(&self, root: &Board) -> SearchOutcome;
}

/// Best-first search with the Manhattan-distance heuristic.
pub struct BestFirst {
    pub limits: SearchLimits,
}

/// Depth-first search with duplicate pruning.
pub struct DepthFirst {
    pub limits: SearchLimits,
}

impl Strategy for BestFirst {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn search(&self, root: &Board) -> SearchOutcome {
        solver::best_first(root, self.limits)
    }
}

impl Strategy for DepthFirst {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn search(&self, root: &Board) -> SearchOutcome {
        solver::depth_first(root, self.limits)
    }
}

impl Algorithm {
    pub fn strategy(self, limits: SearchLimits) -> Box<dyn Strategy> {
        match self {
            Algorithm::Astar => Box::new(BestFirst { limits }),
            Algorithm::Dfs => Box::new(DepthFirst { limits }),
        }
    }
}

/// Solves `board` and returns the trace from the start to the goal.
///
/// The trace is empty if the goal cannot be reached.
pub fn solve(board: &Board, algorithm: Algorithm) -> Vec<Board> {
    algorithm
        .strategy(SearchLimits::UNLIMITED)
        .search(board)
        .trace()
}
