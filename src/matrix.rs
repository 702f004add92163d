//! The sparse "dancing links" matrix.
//!
//! Every 1-entry of the input matrix becomes a [`Node`] linked into two
//! circular doubly-linked rings: one for its row (`left`/`right`) and one for
//! its column (`up`/`down`). Nodes live in a single arena and refer to each
//! other by index, so relinking never touches ownership.
//!
//! Arena layout:
//! * index `0` is the root, which anchors the ring of active column headers;
//! * indices `1..=num_columns` are the column headers, in input order;
//! * the remaining indices are matrix cells, in row-major input order.
//!
//! Header-only data (`size`, `name`) lives in a side table indexed by
//! `header - 1`, so plain cells simply have none.

pub mod builder;
mod cover;
mod heuristic;

pub use builder::build;

/// Arena index of the root header.
pub(crate) const ROOT: usize = 0;

/// Opaque handle to a node of a [`Matrix`].
///
/// Handles are only meaningful for the matrix that produced them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub(crate) usize);

impl CellId {
    /// Position of this node in the matrix arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Each node links up/down/left/right in two circular lists.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) left: usize,
    pub(crate) right: usize,
    pub(crate) up: usize,
    pub(crate) down: usize,
    /// Header of the column this node belongs to.
    pub(crate) column: usize,
}

impl Node {
    /// A node whose four links all point back at itself.
    fn looped(index: usize) -> Self {
        Node {
            left: index,
            right: index,
            up: index,
            down: index,
            column: index,
        }
    }
}

#[derive(Clone, Debug)]
struct Header {
    /// Number of cells currently linked into the column.
    size: usize,
    name: String,
}

/// A toroidal doubly-linked representation of a 0/1 matrix.
///
/// Built once by [`Matrix::build`] and then mutated in place by
/// [`cover`](Matrix::cover) / [`uncover`](Matrix::uncover) during a search.
#[derive(Clone, Debug)]
pub struct Matrix {
    nodes: Vec<Node>,
    headers: Vec<Header>,
    /// Input row of each cell, indexed by `cell - first_cell`.
    row_id: Vec<usize>,
    /// Covers not yet matched by an uncover.
    depth: usize,
}

#[derive(Copy, Clone)]
enum Direction {
    Right,
    Down,
}

/// Walks a ring from just after `head` until it comes back to `head`.
pub struct Ring<'a> {
    nodes: &'a [Node],
    direction: Direction,
    head: usize,
    cursor: usize,
}

impl<'a> Ring<'a> {
    fn new(nodes: &'a [Node], head: usize, direction: Direction) -> Self {
        let mut ring = Ring {
            nodes,
            direction,
            head,
            cursor: head,
        };
        ring.cursor = ring.step(head);
        ring
    }

    fn step(&self, from: usize) -> usize {
        let node = &self.nodes[from];
        match self.direction {
            Direction::Right => node.right,
            Direction::Down => node.down,
        }
    }
}

impl Iterator for Ring<'_> {
    type Item = CellId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.head {
            return None;
        }
        let current = self.cursor;
        self.cursor = self.step(current);
        Some(CellId(current))
    }
}

impl Matrix {
    /// The root header anchoring the ring of active columns.
    pub fn root(&self) -> CellId {
        CellId(ROOT)
    }

    /// Number of columns the matrix was built with.
    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    /// Number of matrix cells (1-entries), excluding headers and the root.
    pub fn num_cells(&self) -> usize {
        self.row_id.len()
    }

    /// True once every column has been covered.
    pub fn is_solved(&self) -> bool {
        self.nodes[ROOT].right == ROOT
    }

    /// True when every [`cover`](Matrix::cover) has been undone.
    ///
    /// A successful first-solution search leaves its accepted branch covered,
    /// so the matrix is not pristine afterwards and must be rebuilt before
    /// searching it again.
    pub fn is_pristine(&self) -> bool {
        self.depth == 0
    }

    pub fn left(&self, cell: CellId) -> CellId {
        CellId(self.nodes[cell.0].left)
    }

    pub fn right(&self, cell: CellId) -> CellId {
        CellId(self.nodes[cell.0].right)
    }

    pub fn up(&self, cell: CellId) -> CellId {
        CellId(self.nodes[cell.0].up)
    }

    pub fn down(&self, cell: CellId) -> CellId {
        CellId(self.nodes[cell.0].down)
    }

    /// Header of the column `cell` belongs to. Headers are their own column.
    pub fn column(&self, cell: CellId) -> CellId {
        CellId(self.nodes[cell.0].column)
    }

    /// Whether `cell` is a column header (the root is not).
    pub fn is_header(&self, cell: CellId) -> bool {
        (1..=self.headers.len()).contains(&cell.0)
    }

    /// Active cell count of a column, or `None` if `column` is not a header.
    pub fn size(&self, column: CellId) -> Option<usize> {
        self.header(column.0).map(|header| header.size)
    }

    /// Name of a column, or `None` if `column` is not a header.
    pub fn name(&self, column: CellId) -> Option<&str> {
        self.header(column.0).map(|header| header.name.as_str())
    }

    /// Input row a cell was built from, or `None` for headers and the root.
    pub fn row_index(&self, cell: CellId) -> Option<usize> {
        cell.0
            .checked_sub(self.first_cell())
            .and_then(|offset| self.row_id.get(offset))
            .copied()
    }

    /// Column names in build order, regardless of what is covered.
    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.headers.iter().map(|header| header.name.as_str())
    }

    /// Columns still linked into the root ring, in ring order.
    pub fn active_columns(&self) -> Ring<'_> {
        Ring::new(&self.nodes, ROOT, Direction::Right)
    }

    /// Cells currently linked into `column`, top to bottom.
    pub fn column_cells(&self, column: CellId) -> Ring<'_> {
        Ring::new(&self.nodes, column.0, Direction::Down)
    }

    /// Every cell of `cell`'s row in `right` order, starting with `cell`.
    pub fn row_cells(&self, cell: CellId) -> impl Iterator<Item = CellId> + '_ {
        std::iter::once(cell).chain(Ring::new(&self.nodes, cell.0, Direction::Right))
    }

    /// Name of the column `cell` belongs to.
    pub(crate) fn column_name(&self, cell: CellId) -> &str {
        &self.headers[self.nodes[cell.0].column - 1].name
    }

    /// Input row of a matrix cell; `cell` must not be a header.
    pub(crate) fn row_of(&self, cell: CellId) -> usize {
        self.row_id[cell.0 - self.first_cell()]
    }

    fn header(&self, index: usize) -> Option<&Header> {
        index.checked_sub(1).and_then(|i| self.headers.get(i))
    }

    fn first_cell(&self) -> usize {
        1 + self.headers.len()
    }

    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> (Vec<Node>, Vec<usize>) {
        (
            self.nodes.clone(),
            self.headers.iter().map(|header| header.size).collect(),
        )
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    fn worked_example() -> Matrix {
        let matrix = vec![
            vec![true, false, false],
            vec![false, true, true],
            vec![true, false, true],
        ];
        Matrix::build(&matrix, &["c1", "c2", "c3"]).unwrap()
    }

    #[test]
    fn test_accessors() {
        let m = worked_example();
        assert_eq!(m.num_columns(), 3);
        assert_eq!(m.num_cells(), 5);
        assert!(!m.is_solved());
        assert!(m.is_pristine());

        let columns: Vec<_> = m.active_columns().collect();
        assert_eq!(columns, vec![CellId(1), CellId(2), CellId(3)]);
        assert_eq!(m.name(CellId(2)), Some("c2"));
        assert_eq!(m.size(CellId(3)), Some(2));

        // root and plain cells carry no header data
        assert_eq!(m.size(m.root()), None);
        assert_eq!(m.name(CellId(4)), None);
        assert!(!m.is_header(m.root()));
        assert!(m.is_header(CellId(3)));
        assert!(!m.is_header(CellId(4)));
    }

    #[test]
    fn test_rows_and_columns() {
        let m = worked_example();
        // cells: 4 = A/c1, 5 = B/c2, 6 = B/c3, 7 = C/c1, 8 = C/c3
        let c1: Vec<_> = m.column_cells(CellId(1)).collect();
        assert_eq!(c1, vec![CellId(4), CellId(7)]);

        let row_b: Vec<_> = m.row_cells(CellId(6)).collect();
        assert_eq!(row_b, vec![CellId(6), CellId(5)]);
        assert_eq!(m.row_cells(CellId(4)).count(), 1);

        assert_eq!(m.row_index(CellId(8)), Some(2));
        assert_eq!(m.row_index(CellId(3)), None);
        assert_eq!(m.column_name(CellId(8)), "c3");
        assert_eq!(m.column(CellId(5)), CellId(2));
        assert_eq!(m.column(CellId(2)), CellId(2));
    }

    #[test]
    fn test_ring_links() {
        let m = worked_example();
        assert_eq!(m.right(m.root()), CellId(1));
        assert_eq!(m.left(m.root()), CellId(3));
        assert_eq!(m.up(CellId(1)), CellId(7));
        assert_eq!(m.down(CellId(7)), CellId(1));
        check_invariants(&m);
    }
}
