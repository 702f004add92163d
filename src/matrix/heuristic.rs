use super::{CellId, Matrix, ROOT};

impl Matrix {
    /// Chooses the active column with the fewest cells, the first one in ring
    /// order on ties. Returns `None` once every column is covered.
    pub fn choose_column(&self) -> Option<CellId> {
        let mut c = self.nodes[ROOT].right;
        if c == ROOT {
            return None;
        }
        let mut best = c;
        let mut best_size = self.headers[c - 1].size;
        while c != ROOT && best_size > 0 {
            let size = self.headers[c - 1].size;
            if size < best_size {
                best = c;
                best_size = size;
            }
            c = self.nodes[c].right;
        }
        Some(CellId(best))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::matrix::testing::*;
    use crate::matrix::{CellId, Matrix};

    #[test]
    fn test_picks_smallest() {
        let matrix = vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![false, false, true],
        ];
        let m = Matrix::build(&matrix, &["a", "b", "c"]).unwrap();
        assert_eq!(m.choose_column(), Some(CellId(2)));
    }

    #[test]
    fn test_ties_go_to_ring_order() {
        let matrix = vec![vec![true, true, true], vec![false, true, true]];
        let mut m = Matrix::build(&matrix, &["a", "b", "c"]).unwrap();
        assert_eq!(m.choose_column(), Some(CellId(1)));

        // covering a retires row 0; b and c tie at 1 and b comes first
        m.cover(CellId(1));
        assert_eq!(m.choose_column(), Some(CellId(2)));
        m.cover(CellId(2));
        assert_eq!(m.choose_column(), Some(CellId(3)));
        assert_eq!(m.size(CellId(3)), Some(0));
        m.cover(CellId(3));
        assert_eq!(m.choose_column(), None);
    }

    #[test]
    fn test_empty_column_wins() {
        let matrix = vec![vec![true, false, false], vec![true, false, true]];
        let m = Matrix::build(&matrix, &["a", "b", "c"]).unwrap();
        assert_eq!(m.choose_column(), Some(CellId(2)));
    }

    #[test]
    fn test_matches_linear_scan() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..40 {
            let matrix = random_matrix(&mut rng, 9, 7, 0.3);
            let m = Matrix::build(&matrix, &names(7)).unwrap();
            let expected = m
                .active_columns()
                .min_by_key(|&c| m.size(c).unwrap_or(usize::MAX));
            assert_eq!(m.choose_column(), expected);
        }
    }
}
