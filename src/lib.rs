//! Knuth's Algorithm X with Dancing Links, for exact cover problems.
//!
//! Given a 0/1 matrix, an exact cover is a subset of rows that has exactly
//! one 1 in every column. Puzzles such as Sudoku or polyomino tiling reduce
//! to exact cover, and this crate finds the first or every such subset.
//!
//! ```
//! use dancing_links::{build, make_search, resolve};
//!
//! let matrix = vec![
//!     vec![true, false, false], // A
//!     vec![false, true, true],  // B
//!     vec![true, false, true],  // C conflicts with both
//! ];
//! let mut m = build(&matrix, &["c1", "c2", "c3"]).unwrap();
//!
//! let solutions = make_search(true)(&mut m);
//! assert_eq!(solutions.len(), 1);
//! assert_eq!(resolve(&m, &solutions), vec![vec![vec!["c2", "c3"], vec!["c1"]]]);
//! ```

pub mod error;
pub mod matrix;
pub mod resolve;
pub mod search;

pub use error::{Error, InvalidInput, Result};
pub use matrix::{build, CellId, Matrix};
pub use resolve::{resolve, resolve_solution};
pub use search::{
    make_search, Search, SearchConfig, SearchMode, SearchStats, Solution, SolutionSet,
};
