use crate::matrix::Matrix;
use crate::search::{Solution, SolutionSet};

/// Maps each solution to the column names covered by each of its rows.
///
/// Rows are walked rightwards from their representative cell, so the names
/// of a row start with the column the row was chosen for. Row rings are never
/// touched by a search, so this works on a matrix a first-solution search
/// left covered.
///
/// # Example
/// ```
/// use dancing_links::{build, make_search, resolve};
///
/// let matrix = vec![
///     vec![true, false, false],
///     vec![false, true, true],
///     vec![true, false, true],
/// ];
/// let mut m = build(&matrix, &["c1", "c2", "c3"]).unwrap();
/// let solutions = make_search(true)(&mut m);
/// assert_eq!(resolve(&m, &solutions), vec![vec![vec!["c2", "c3"], vec!["c1"]]]);
/// ```
pub fn resolve<'m>(matrix: &'m Matrix, solutions: &SolutionSet) -> Vec<Vec<Vec<&'m str>>> {
    solutions
        .iter()
        .map(|solution| resolve_solution(matrix, solution))
        .collect()
}

/// Column names of every row in a single solution.
pub fn resolve_solution<'m>(matrix: &'m Matrix, solution: &Solution) -> Vec<Vec<&'m str>> {
    solution
        .cells()
        .iter()
        .map(|&cell| {
            matrix
                .row_cells(cell)
                .map(|node| matrix.column_name(node))
                .collect()
        })
        .collect()
}
