//! Knuth's Algorithm X over a dancing-links [`Matrix`].
//!
//! The search is a depth-first backtrack: pick the column with the fewest
//! remaining rows, cover it, then try each of its rows in turn, covering every
//! other column the row satisfies before recursing. Everything a branch
//! covers is uncovered in reverse order on the way back out, so the matrix is
//! restored exactly when the branch is exhausted.
//!
//! # Example
//! ```
//! use dancing_links::{build, make_search};
//!
//! let matrix = vec![
//!     vec![true, false, true, false],
//!     vec![true, false, false, true],
//!     vec![false, true, true, false],
//!     vec![false, true, false, true],
//! ];
//! let mut m = build(&matrix, &["c0", "c1", "c2", "c3"]).unwrap();
//!
//! let find_all = make_search(true);
//! let solutions = find_all(&mut m);
//! assert_eq!(solutions.len(), 2);
//!
//! let mut rows: Vec<_> = solutions.iter().map(|s| s.rows(&m)).collect();
//! rows.iter_mut().for_each(|r| r.sort());
//! rows.sort();
//! assert_eq!(rows, vec![vec![0, 3], vec![1, 2]]);
//! ```

use log::{debug, trace, warn};

use crate::matrix::{CellId, Matrix};

/// Whether a search stops at the first exact cover or enumerates all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Stop at the first solution. The accepted branch is left covered.
    #[default]
    First,
    /// Enumerate every solution, restoring the matrix afterwards.
    All,
}

/// Configuration for a [`Search`].
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// First solution only, or every solution
    pub mode: SearchMode,
}

/// One exact cover: a representative cell for each selected row, in the
/// order the rows were chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    cells: Vec<CellId>,
}

impl Solution {
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Input matrix rows of this solution, in selection order.
    pub fn rows(&self, matrix: &Matrix) -> Vec<usize> {
        self.cells.iter().map(|&cell| matrix.row_of(cell)).collect()
    }
}

/// Counters gathered during a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search tree nodes visited
    pub nodes: u64,
    /// Solutions recorded
    pub solutions: usize,
    /// Largest partial solution reached
    pub max_depth: usize,
}

/// The solutions found by one run of a [`Search`].
///
/// In [`SearchMode::First`] this holds at most one solution; an empty set
/// means the matrix has no exact cover.
#[derive(Debug, Clone, Default)]
pub struct SolutionSet {
    solutions: Vec<Solution>,
    stats: SearchStats,
}

impl SolutionSet {
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn first(&self) -> Option<&Solution> {
        self.solutions.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.solutions.iter()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl<'a> IntoIterator for &'a SolutionSet {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.iter()
    }
}

impl IntoIterator for SolutionSet {
    type Item = Solution;
    type IntoIter = std::vec::IntoIter<Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

/// Algorithm X search engine.
#[derive(Debug, Clone, Default)]
pub struct Search {
    config: SearchConfig,
}

impl Search {
    pub fn new(config: SearchConfig) -> Self {
        Search { config }
    }

    pub fn mode(&self) -> SearchMode {
        self.config.mode
    }

    /// Runs the search to completion over `matrix`.
    ///
    /// In [`SearchMode::All`] the matrix is fully restored afterwards. In
    /// [`SearchMode::First`] a successful run leaves the accepted branch
    /// covered (see [`Matrix::is_pristine`]) and the matrix must be rebuilt
    /// before it is searched again; a failed run restores it.
    pub fn run(&self, matrix: &mut Matrix) -> SolutionSet {
        if !matrix.is_pristine() {
            warn!("searching a matrix that still has covered columns; results will be incomplete");
        }
        debug!(
            "starting {:?} search over {} columns, {} cells",
            self.config.mode,
            matrix.num_columns(),
            matrix.num_cells()
        );

        let mut state = State {
            partial: Vec::with_capacity(matrix.num_columns()),
            solutions: Vec::new(),
            stats: SearchStats::default(),
        };
        match self.config.mode {
            SearchMode::All => state.search_all(matrix),
            SearchMode::First => {
                if state.search_first(matrix) {
                    let solution = Solution {
                        cells: std::mem::take(&mut state.partial),
                    };
                    state.record(solution);
                }
            }
        }

        debug!(
            "search finished: {} solutions, {} nodes, max depth {}",
            state.stats.solutions, state.stats.nodes, state.stats.max_depth
        );
        SolutionSet {
            solutions: state.solutions,
            stats: state.stats,
        }
    }
}

/// Builds a search function: every solution if `find_all`, else the first.
///
/// ```
/// use dancing_links::{build, make_search};
///
/// let matrix = vec![vec![true, false], vec![false, true], vec![true, true]];
/// let mut m = build(&matrix, &["a", "b"]).unwrap();
/// let solutions = make_search(false)(&mut m);
/// assert_eq!(solutions.len(), 1);
/// assert_eq!(solutions.first().unwrap().rows(&m), vec![0, 1]);
/// ```
pub fn make_search(find_all: bool) -> impl Fn(&mut Matrix) -> SolutionSet {
    let mode = if find_all {
        SearchMode::All
    } else {
        SearchMode::First
    };
    let search = Search::new(SearchConfig { mode });
    move |matrix: &mut Matrix| search.run(matrix)
}

struct State {
    partial: Vec<CellId>,
    solutions: Vec<Solution>,
    stats: SearchStats,
}

impl State {
    fn search_all(&mut self, matrix: &mut Matrix) {
        self.stats.nodes += 1;
        let Some(col) = matrix.choose_column() else {
            let solution = Solution {
                cells: self.partial.clone(),
            };
            self.record(solution);
            return;
        };

        matrix.cover(col);
        let mut row = matrix.down(col);
        while row != col {
            self.push(row);
            cover_row(matrix, row);
            self.search_all(matrix);
            self.partial.pop();
            uncover_row(matrix, row);
            row = matrix.down(row);
        }
        matrix.uncover(col);
    }

    /// Returns true as soon as a solution is found, leaving it in
    /// `self.partial` and its columns covered.
    fn search_first(&mut self, matrix: &mut Matrix) -> bool {
        self.stats.nodes += 1;
        let Some(col) = matrix.choose_column() else {
            return true;
        };

        matrix.cover(col);
        let mut row = matrix.down(col);
        while row != col {
            self.push(row);
            cover_row(matrix, row);
            if self.search_first(matrix) {
                return true;
            }
            self.partial.pop();
            uncover_row(matrix, row);
            row = matrix.down(row);
        }
        matrix.uncover(col);
        false
    }

    fn push(&mut self, row: CellId) {
        self.partial.push(row);
        self.stats.max_depth = self.stats.max_depth.max(self.partial.len());
    }

    fn record(&mut self, solution: Solution) {
        trace!("solution {}: {:?}", self.stats.solutions, solution.cells);
        self.stats.solutions += 1;
        self.solutions.push(solution);
    }
}

/// Covers every other column `row` satisfies, going right.
fn cover_row(matrix: &mut Matrix, row: CellId) {
    let mut node = matrix.right(row);
    while node != row {
        let column = matrix.column(node);
        matrix.cover(column);
        node = matrix.right(node);
    }
}

/// Undoes [`cover_row`], going left.
fn uncover_row(matrix: &mut Matrix, row: CellId) {
    let mut node = matrix.left(row);
    while node != row {
        let column = matrix.column(node);
        matrix.uncover(column);
        node = matrix.left(node);
    }
}
