//! Best-first and depth-first search over board states.
//!
//! Key points:
//! - Search states live in an arena (`Vec<SearchState>`) and link to their
//!   parent by index, so reconstructing a path never fights the borrow checker
//! - Packed `u64` signatures in an `FxHashSet` for duplicate detection
//! - Best-first orders its frontier by `f = depth + heuristic`; the heuristic
//!   is admissible, so the first goal popped is a shortest solution
//! - Depth-first uses a plain stack and prunes duplicates lazily when popped

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use log::{debug, info, warn};
use rustc_hash::FxHashSet;

use crate::grid::Board;
use crate::moves::successors;

/// Index of a state in the search arena.
pub type StateId = usize;

/// A board annotated with search bookkeeping.
#[derive(Clone, Debug)]
pub struct SearchState {
    pub board: Board,
    /// Priority for best-first search: `depth + heuristic`.
    pub f: u32,
    /// Number of moves from the root.
    pub depth: u32,
    /// The state this one was expanded from; `None` for the root.
    pub parent: Option<StateId>,
}

impl SearchState {
    /// Wraps the starting board at depth 0.
    pub fn root(board: Board) -> Self {
        let f = board.heuristic();
        Self {
            board,
            f,
            depth: 0,
            parent: None,
        }
    }
}

/// Produces a search state for every board one slide away from `states[id]`.
pub fn expand(states: &[SearchState], id: StateId) -> Vec<SearchState> {
    let depth = states[id].depth + 1;
    successors(&states[id].board)
        .into_iter()
        .map(|board| SearchState {
            f: depth + board.heuristic(),
            board,
            depth,
            parent: Some(id),
        })
        .collect()
}

/// Optional caps on how much work a search may do.
///
/// The default is unlimited. The state space is finite, so every search
/// terminates without a cap; a cap only bounds time on very large spaces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Stop after expanding this many states.
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    pub const UNLIMITED: Self = Self {
        max_expansions: None,
    };

    #[inline]
    fn exhausted(&self, stats: &SearchStats) -> bool {
        self.max_expansions.is_some_and(|max| stats.expanded >= max)
    }
}

/// Counters collected during a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States whose successors were generated.
    pub expanded: usize,
    /// Successor states produced by `expand`.
    pub generated: usize,
    /// States discarded because their signature was already seen.
    pub duplicates: usize,
    /// True if the search stopped because of `SearchLimits`.
    pub limit_reached: bool,
}

/// Result of a search: the arena it built and the goal state, if any.
#[derive(Debug)]
pub struct SearchOutcome {
    pub states: Vec<SearchState>,
    pub terminal: Option<StateId>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// The goal state the search stopped at.
    pub fn solution(&self) -> Option<&SearchState> {
        self.terminal.map(|id| &self.states[id])
    }

    /// Number of moves in the solution.
    pub fn moves(&self) -> Option<u32> {
        self.solution().map(|state| state.depth)
    }

    /// Boards from the root to the goal; empty if no solution was found.
    pub fn trace(&self) -> Vec<Board> {
        reconstruct(&self.states, self.terminal)
    }
}

/// Walks parent links from `terminal` back to the root.
///
/// Returns the boards in root-to-terminal order, or an empty trace when
/// `terminal` is `None`.
pub fn reconstruct(states: &[SearchState], terminal: Option<StateId>) -> Vec<Board> {
    let mut trace = Vec::new();
    let mut cursor = terminal;
    while let Some(id) = cursor {
        let state = &states[id];
        trace.push(state.board.clone());
        cursor = state.parent;
    }
    trace.reverse();
    trace
}

fn finish(
    name: &str,
    started: Instant,
    states: Vec<SearchState>,
    terminal: Option<StateId>,
    stats: SearchStats,
) -> SearchOutcome {
    match terminal {
        Some(id) => info!(
            "{name}: solved in {} moves, expanded {} states in {:.2?}",
            states[id].depth,
            stats.expanded,
            started.elapsed()
        ),
        None if stats.limit_reached => warn!(
            "{name}: gave up after {} expansions without reaching the goal",
            stats.expanded
        ),
        None => info!(
            "{name}: no solution, exhausted {} states in {:.2?}",
            stats.expanded,
            started.elapsed()
        ),
    }
    debug!(
        "{name}: generated {} states, discarded {} duplicates, arena holds {}",
        stats.generated,
        stats.duplicates,
        states.len()
    );

    SearchOutcome {
        states,
        terminal,
        stats,
    }
}

/// Best-first (A*) search.
///
/// A child is recorded as seen when it is generated, so each board enters
/// the frontier at most once. Entries with equal `f` are popped in the order
/// they were pushed: arena ids are handed out in push order, so the id
/// itself serves as the tie-break.
pub fn best_first(root: &Board, limits: SearchLimits) -> SearchOutcome {
    const NAME: &str = "best-first";
    let started = Instant::now();
    let mut stats = SearchStats::default();

    let mut states = vec![SearchState::root(root.clone())];
    let mut seen: FxHashSet<u64> = FxHashSet::default();
    seen.insert(root.signature());

    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((states[0].f, 0)));

    while let Some(Reverse((_, id))) = frontier.pop() {
        if states[id].board.is_goal() {
            return finish(NAME, started, states, Some(id), stats);
        }
        if limits.exhausted(&stats) {
            stats.limit_reached = true;
            break;
        }

        stats.expanded += 1;
        for child in expand(&states, id) {
            stats.generated += 1;
            if !seen.insert(child.board.signature()) {
                stats.duplicates += 1;
                continue;
            }
            let child_id = states.len();
            frontier.push(Reverse((child.f, child_id)));
            states.push(child);
        }
    }

    finish(NAME, started, states, None, stats)
}

/// Depth-first search with duplicate pruning.
///
/// Children are pushed unfiltered; a state whose signature was already seen
/// is dropped when popped, before it is expanded. The path found depends on
/// the move generator's enumeration order and is usually far from shortest.
pub fn depth_first(root: &Board, limits: SearchLimits) -> SearchOutcome {
    const NAME: &str = "depth-first";
    let started = Instant::now();
    let mut stats = SearchStats::default();

    let mut states = vec![SearchState::root(root.clone())];
    let mut seen: FxHashSet<u64> = FxHashSet::default();
    let mut frontier: Vec<StateId> = vec![0];

    while let Some(id) = frontier.pop() {
        if !seen.insert(states[id].board.signature()) {
            stats.duplicates += 1;
            continue;
        }
        if states[id].board.is_goal() {
            return finish(NAME, started, states, Some(id), stats);
        }
        if limits.exhausted(&stats) {
            stats.limit_reached = true;
            break;
        }

        stats.expanded += 1;
        for child in expand(&states, id) {
            stats.generated += 1;
            frontier.push(states.len());
            states.push(child);
        }
    }

    finish(NAME, started, states, None, stats)
}
