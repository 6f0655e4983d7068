//! Dense LCS length table and the cell recurrence.
//!
//! `table[i][j]` holds the LCS length of `x[0..i)` and `y[0..j)`. Row 0 and
//! column 0 are the base case and stay zero; every other cell is written
//! exactly once by [`compute_cell`] after its three upper/left neighbours.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// `(m+1) × (n+1)` grid of LCS lengths, stored row-major.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DpTable {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl DpTable {
    /// Zero-filled table for sequences of length `m` and `n`.
    pub fn zeroed(m: usize, n: usize) -> Self {
        let rows = m + 1;
        let cols = n + 1;
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Number of rows (`m + 1`), or 0 for a discarded table.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`n + 1`), or 0 for a discarded table.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True for the discarded 0×0 table an idle engine holds.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Value at `(i, j)`.
    ///
    /// # Panics
    /// Panics if `(i, j)` is outside the table.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        assert!(i < self.rows && j < self.cols, "cell ({i},{j}) out of bounds");
        self.cells[i * self.cols + j]
    }

    /// Value at `(i, j)`, or `None` outside the table.
    #[inline]
    pub fn try_get(&self, i: usize, j: usize) -> Option<u32> {
        (i < self.rows && j < self.cols).then(|| self.cells[i * self.cols + j])
    }

    /// Row `i` as a slice of `cols()` values.
    pub fn row(&self, i: usize) -> &[u32] {
        let start = i * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Iterate rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        // chunks(0) panics, and a discarded table has no rows anyway
        self.cells.chunks(self.cols.max(1))
    }

    /// The bottom-right value, i.e. the full LCS length once filled.
    pub fn corner(&self) -> u32 {
        self.cells.last().copied().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, value: u32) {
        debug_assert!(i < self.rows && j < self.cols);
        self.cells[i * self.cols + j] = value;
    }
}

/// Value the recurrence assigns to `(i, j)` given an already-filled
/// neighbourhood. Does not write.
#[inline]
pub fn cell_value<T: PartialEq>(table: &DpTable, x: &[T], y: &[T], i: usize, j: usize) -> u32 {
    debug_assert!(i >= 1 && i <= x.len());
    debug_assert!(j >= 1 && j <= y.len());
    if x[i - 1] == y[j - 1] {
        table.get(i - 1, j - 1) + 1
    } else {
        table.get(i - 1, j).max(table.get(i, j - 1))
    }
}

/// Fill `table[i][j]` from `table[i-1][j-1]`, `table[i-1][j]` and
/// `table[i][j-1]`.
///
/// Requires `1 <= i <= x.len()` and `1 <= j <= y.len()`.
#[inline]
pub fn compute_cell<T: PartialEq>(table: &mut DpTable, x: &[T], y: &[T], i: usize, j: usize) {
    let value = cell_value(table, x, y, i, j);
    table.set(i, j, value);
}

/// Fill every non-base cell in row-major order.
pub fn fill_row_major<T: PartialEq>(table: &mut DpTable, x: &[T], y: &[T]) {
    for i in 1..=x.len() {
        for j in 1..=y.len() {
            compute_cell(table, x, y, i, j);
        }
    }
}

/// Fill every non-base cell one anti-diagonal at a time.
///
/// Cells on the diagonal `i + j = d` depend only on diagonals `d-1` and
/// `d-2`, so each diagonal is evaluated in parallel against the current
/// table and then written back. The result is identical to
/// [`fill_row_major`].
#[cfg(feature = "parallel")]
pub fn fill_wavefront<T: PartialEq + Sync>(table: &mut DpTable, x: &[T], y: &[T]) {
    let m = x.len();
    let n = y.len();
    if m == 0 || n == 0 {
        return;
    }
    for d in 2..=m + n {
        let lo = d.saturating_sub(n).max(1);
        let hi = (d - 1).min(m);
        if lo > hi {
            continue;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(diagonal = d, cells = hi - lo + 1, "wavefront");
        let snapshot: &DpTable = table;
        let values: Vec<u32> = (lo..=hi)
            .into_par_iter()
            .map(|i| cell_value(snapshot, x, y, i, d - i))
            .collect();
        for (i, value) in (lo..=hi).zip(values) {
            table.set(i, d - i, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn zeroed_has_base_shape() {
        let t = DpTable::zeroed(3, 5);
        assert_eq!(t.rows(), 4);
        assert_eq!(t.cols(), 6);
        assert!(t.iter_rows().all(|r| r.iter().all(|&v| v == 0)));
        assert_eq!(t.iter_rows().count(), 4);
    }

    #[test]
    fn discarded_table_is_empty() {
        let t = DpTable::default();
        assert!(t.is_empty());
        assert_eq!(t.corner(), 0);
        assert_eq!(t.iter_rows().count(), 0);
        assert_eq!(t.try_get(0, 0), None);
    }

    #[test]
    fn compute_cell_match_and_mismatch() {
        let x = chars("AB");
        let y = chars("AC");
        let mut t = DpTable::zeroed(2, 2);
        compute_cell(&mut t, &x, &y, 1, 1);
        assert_eq!(t.get(1, 1), 1, "A == A takes the diagonal");
        compute_cell(&mut t, &x, &y, 1, 2);
        assert_eq!(t.get(1, 2), 1, "A != C carries the left value");
        compute_cell(&mut t, &x, &y, 2, 1);
        assert_eq!(t.get(2, 1), 1, "B != A carries the upper value");
        compute_cell(&mut t, &x, &y, 2, 2);
        assert_eq!(t.get(2, 2), 1);
    }

    #[test]
    fn row_major_fill_classic_pair() {
        let x = chars("ABCBDAB");
        let y = chars("BDCAB");
        let mut t = DpTable::zeroed(x.len(), y.len());
        fill_row_major(&mut t, &x, &y);
        assert_eq!(t.row(7), &[0, 1, 2, 2, 3, 4]);
        assert_eq!(t.row(4), &[0, 1, 1, 2, 2, 3]);
        assert_eq!(t.corner(), 4);
    }

    #[test]
    #[should_panic]
    fn get_out_of_bounds_panics() {
        let t = DpTable::zeroed(1, 1);
        let _ = t.get(2, 0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn wavefront_matches_row_major() {
        let x = chars("GXTXAYBGATTACA");
        let y = chars("AGGTABCATTAG");
        let mut a = DpTable::zeroed(x.len(), y.len());
        let mut b = DpTable::zeroed(x.len(), y.len());
        fill_row_major(&mut a, &x, &y);
        fill_wavefront(&mut b, &x, &y);
        assert_eq!(a, b);
    }
}
