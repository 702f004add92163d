use std::collections::HashSet;

use log::debug;

use super::{Header, Matrix, Node, ROOT};
use crate::error::{InvalidInput, Result};

/// Builds a [`Matrix`] from a boolean matrix and one name per column.
///
/// `matrix[r][c] = true` means row `r` covers column `c`. Rows with no
/// `true` entry contribute no cells and can never appear in a solution.
///
/// # Example
/// ```
/// use dancing_links::build;
///
/// let matrix = vec![
///     vec![true, false, false],
///     vec![false, true, true],
/// ];
/// let m = build(&matrix, &["c1", "c2", "c3"]).unwrap();
/// assert_eq!(m.num_columns(), 3);
/// assert_eq!(m.num_cells(), 3);
///
/// assert!(build(&[], &["c1"]).is_err());
/// ```
pub fn build<S: AsRef<str>>(matrix: &[Vec<bool>], names: &[S]) -> Result<Matrix> {
    Matrix::build(matrix, names)
}

impl Matrix {
    /// Constructs the dancing-links structure. See [`build`].
    pub fn build<S: AsRef<str>>(matrix: &[Vec<bool>], names: &[S]) -> Result<Self> {
        validate(matrix, names)?;

        let cols = names.len();
        let cells = matrix.iter().flatten().filter(|&&set| set).count();

        let mut nodes = Vec::with_capacity(1 + cols + cells);
        let mut headers = Vec::with_capacity(cols);
        let mut row_id = Vec::with_capacity(cells);

        // Root plus column headers in a left-right ring
        nodes.push(Node {
            left: cols,
            right: 1,
            ..Node::looped(ROOT)
        });
        for (i, name) in names.iter().enumerate() {
            let c = i + 1;
            nodes.push(Node {
                left: c - 1,
                right: if c == cols { ROOT } else { c + 1 },
                ..Node::looped(c)
            });
            headers.push(Header {
                size: 0,
                name: name.as_ref().to_string(),
            });
        }

        for (r, row) in matrix.iter().enumerate() {
            let mut first_in_row: Option<usize> = None;
            for (c, _) in row.iter().enumerate().filter(|(_, &set)| set) {
                let header = c + 1;
                let node = nodes.len();
                let bottom = nodes[header].up;

                // Insert to the left of the row's first cell, closing the ring
                let (left, right) = match first_in_row {
                    Some(first) => (nodes[first].left, first),
                    None => (node, node),
                };
                nodes.push(Node {
                    left,
                    right,
                    up: bottom,
                    down: header,
                    column: header,
                });
                nodes[bottom].down = node;
                nodes[header].up = node;
                if first_in_row.is_some() {
                    nodes[left].right = node;
                    nodes[right].left = node;
                } else {
                    first_in_row = Some(node);
                }

                row_id.push(r);
                headers[c].size += 1;
            }
        }

        debug!(
            "built dancing links matrix: {} rows, {} columns, {} cells",
            matrix.len(),
            cols,
            cells
        );

        Ok(Matrix {
            nodes,
            headers,
            row_id,
            depth: 0,
        })
    }
}

fn validate<S: AsRef<str>>(matrix: &[Vec<bool>], names: &[S]) -> Result<()> {
    if matrix.is_empty() {
        return Err(InvalidInput::EmptyMatrix.into());
    }
    if names.is_empty() {
        return Err(InvalidInput::ZeroWidth.into());
    }
    let expected = names.len();
    if let Some((row, width)) = matrix
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, width)| width != expected)
    {
        return Err(InvalidInput::RowWidth {
            row,
            width,
            expected,
        }
        .into());
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(expected);
    if let Some(name) = names
        .iter()
        .map(|name| name.as_ref())
        .find(|&name| !seen.insert(name))
    {
        return Err(InvalidInput::DuplicateName {
            name: name.to_string(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::error::Error;
    use crate::matrix::testing::*;
    use crate::matrix::CellId;

    #[test]
    fn test_invalid_input() {
        let err = build::<&str>(&[], &["c1"]).unwrap_err();
        assert_eq!(err, Error::InvalidInput(InvalidInput::EmptyMatrix));

        let names: [&str; 0] = [];
        let err = build(&[vec![]], &names).unwrap_err();
        assert_eq!(err, Error::InvalidInput(InvalidInput::ZeroWidth));

        let err = build(&[vec![true, false], vec![true]], &["a", "b"]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInput(InvalidInput::RowWidth {
                row: 1,
                width: 1,
                expected: 2
            })
        );

        // zero-width row against non-empty names
        let err = build(&[vec![]], &["a"]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InvalidInput::RowWidth { row: 0, .. })
        ));

        let err = build(&[vec![true, true]], &["a", "a"]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInput(InvalidInput::DuplicateName {
                name: "a".to_string()
            })
        );
    }

    #[test]
    fn test_sizes_match_input() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..20 {
            let matrix = random_matrix(&mut rng, 8, 6, 0.4);
            let m = build(&matrix, &names(6)).unwrap();
            for c in 0..6 {
                let expected = matrix.iter().filter(|row| row[c]).count();
                assert_eq!(m.size(CellId(c + 1)), Some(expected));
            }
            check_invariants(&m);
        }
    }

    #[test]
    fn test_row_order_preserved() {
        let matrix = vec![
            vec![true, true],
            vec![false, false],
            vec![true, false],
            vec![true, true],
        ];
        let m = build(&matrix, &["a", "b"]).unwrap();

        let rows: Vec<_> = m
            .column_cells(CellId(1))
            .map(|cell| m.row_of(cell))
            .collect();
        assert_eq!(rows, vec![0, 2, 3]);

        // each row ring lists its columns left to right
        for cell in m.column_cells(CellId(1)) {
            let names: Vec<_> = m.row_cells(cell).map(|c| m.column_name(c)).collect();
            let expected: Vec<_> = ["a", "b"]
                .iter()
                .zip(&matrix[m.row_of(cell)])
                .filter(|(_, &set)| set)
                .map(|(&name, _)| name)
                .collect();
            assert_eq!(names, expected);
        }
    }

    #[test]
    fn test_empty_columns_and_rows() {
        let matrix = vec![vec![false, false, false], vec![false, true, false]];
        let m = build(&matrix, &["x", "y", "z"]).unwrap();
        assert_eq!(m.num_cells(), 1);
        assert_eq!(m.size(CellId(1)), Some(0));
        assert_eq!(m.column_cells(CellId(1)).count(), 0);
        assert_eq!(m.active_columns().count(), 3);
        assert_eq!(m.column_names().collect::<Vec<_>>(), vec!["x", "y", "z"]);
        check_invariants(&m);
    }
}
