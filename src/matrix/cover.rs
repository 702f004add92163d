use super::{CellId, Matrix, Node};

impl Matrix {
    /// Removes `column` from the header ring and unlinks every other row that
    /// intersects it from the columns those rows touch.
    ///
    /// Only link fields and sizes change; nothing is allocated or freed. Must
    /// be undone by [`uncover`](Matrix::uncover) in LIFO order.
    pub fn cover(&mut self, column: CellId) {
        let col = column.0;
        debug_assert!(self.is_header(column), "{col} is not a column header");
        debug_assert!(self.is_linked(col), "column {col} is already covered");

        // Remove column header from the active ring
        let Node { left, right, .. } = self.nodes[col];
        self.nodes[left].right = right;
        self.nodes[right].left = left;

        let mut row_node = self.nodes[col].down;
        while row_node != col {
            let mut node = self.nodes[row_node].right;
            while node != row_node {
                let Node {
                    up, down, column, ..
                } = self.nodes[node];
                self.nodes[up].down = down;
                self.nodes[down].up = up;
                self.headers[column - 1].size -= 1;
                node = self.nodes[node].right;
            }
            row_node = self.nodes[row_node].down;
        }
        self.depth += 1;
    }

    /// Exact inverse of [`cover`](Matrix::cover): walks the column bottom to
    /// top and each row right to left, relinking as it goes.
    pub fn uncover(&mut self, column: CellId) {
        let col = column.0;
        debug_assert!(self.is_header(column), "{col} is not a column header");
        debug_assert!(!self.is_linked(col), "column {col} is not covered");

        let mut row_node = self.nodes[col].up;
        while row_node != col {
            let mut node = self.nodes[row_node].left;
            while node != row_node {
                let Node {
                    up, down, column, ..
                } = self.nodes[node];
                self.nodes[up].down = node;
                self.nodes[down].up = node;
                self.headers[column - 1].size += 1;
                node = self.nodes[node].left;
            }
            row_node = self.nodes[row_node].up;
        }

        let Node { left, right, .. } = self.nodes[col];
        self.nodes[left].right = col;
        self.nodes[right].left = col;
        self.depth -= 1;
    }

    fn is_linked(&self, col: usize) -> bool {
        let Node { left, right, .. } = self.nodes[col];
        self.nodes[left].right == col && self.nodes[right].left == col
    }
}
