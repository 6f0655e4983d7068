//! Reconstruction of one LCS from a filled table.
//!
//! The walk starts at `(m, n)` and stops at the first zero row or column.
//! When the characters differ and both neighbours tie, it moves up
//! (`table[i-1][j] >= table[i][j-1]`). Different tie rules select different,
//! equally long subsequences; this rule is fixed so results are reproducible.

use std::collections::{BTreeSet, HashMap};

use crate::table::DpTable;

/// One visited cell of the backtrace walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BacktrackCell {
    pub row: usize,
    pub col: usize,
    /// True for a diagonal step taken because `x[row-1] == y[col-1]`.
    pub matched: bool,
}

/// Reconstructed LCS together with the walk that produced it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Backtrace {
    /// One longest common subsequence.
    pub lcs: String,
    /// Visited cells in start-to-end order (top-left first).
    pub path: Vec<BacktrackCell>,
    /// 0-based positions in `x` that belong to `lcs`.
    pub matched_x: BTreeSet<usize>,
    /// 0-based positions in `y` that belong to `lcs`.
    pub matched_y: BTreeSet<usize>,
    /// `(row, col) -> matched` for every cell of `path`.
    cells: HashMap<(usize, usize), bool>,
}

impl Backtrace {
    /// Length of the LCS in characters.
    pub fn len(&self) -> usize {
        self.matched_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matched_x.is_empty()
    }

    /// True if `(row, col)` lies on the walk.
    pub fn visits(&self, row: usize, col: usize) -> bool {
        self.cells.contains_key(&(row, col))
    }

    /// True if `(row, col)` is a matched (diagonal) step of the walk.
    pub fn matches_at(&self, row: usize, col: usize) -> bool {
        self.cells.get(&(row, col)).copied().unwrap_or(false)
    }
}

/// Walk a fully filled `table` back from `(x.len(), y.len())`.
///
/// `table` must have been filled for exactly `x` and `y`.
pub fn backtrace(table: &DpTable, x: &[char], y: &[char]) -> Backtrace {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("backtrace", rows = x.len(), cols = y.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    debug_assert_eq!(table.rows(), x.len() + 1);
    debug_assert_eq!(table.cols(), y.len() + 1);

    let mut i = x.len();
    let mut j = y.len();
    let mut rev_path = Vec::with_capacity(i + j);
    let mut rev_lcs = Vec::with_capacity(table.corner() as usize);
    let mut matched_x = BTreeSet::new();
    let mut matched_y = BTreeSet::new();

    while i > 0 && j > 0 {
        if x[i - 1] == y[j - 1] {
            rev_path.push(BacktrackCell {
                row: i,
                col: j,
                matched: true,
            });
            rev_lcs.push(x[i - 1]);
            matched_x.insert(i - 1);
            matched_y.insert(j - 1);
            i -= 1;
            j -= 1;
        } else {
            rev_path.push(BacktrackCell {
                row: i,
                col: j,
                matched: false,
            });
            if table.get(i - 1, j) >= table.get(i, j - 1) {
                i -= 1;
            } else {
                j -= 1;
            }
        }
    }

    rev_path.reverse();
    let cells = rev_path
        .iter()
        .map(|c| ((c.row, c.col), c.matched))
        .collect();
    Backtrace {
        lcs: rev_lcs.into_iter().rev().collect(),
        path: rev_path,
        matched_x,
        matched_y,
        cells,
    }
}
