//! One-shot LCS with an automatic table-size guard.

use std::collections::BTreeSet;

use crate::linear::hirschberg;
use crate::utils::exceeds_cell_limit;
use crate::LcsEngine;

/// Which algorithm produced a [`Solution`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Full `(m+1)×(n+1)` table with the "prefer up" backtrace.
    FullTable,
    /// Hirschberg divide and conquer in linear memory.
    LinearSpace,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub lcs: String,
    pub matched_x: BTreeSet<usize>,
    pub matched_y: BTreeSet<usize>,
    pub strategy: Strategy,
}

impl Solution {
    /// LCS length in characters.
    pub fn len(&self) -> usize {
        self.matched_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matched_x.is_empty()
    }
}

/// Compute one LCS of `x` and `y`.
///
/// Inputs whose table would exceed `table_cell_limit` cells are solved in
/// linear space instead; the length is the same but the chosen subsequence
/// may differ from the full-table one when several exist.
pub fn solve(x: &str, y: &str, table_cell_limit: usize) -> Solution {
    let xs: Vec<char> = x.chars().collect();
    let ys: Vec<char> = y.chars().collect();

    if exceeds_cell_limit(xs.len(), ys.len(), table_cell_limit) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            rows = xs.len(),
            cols = ys.len(),
            limit = table_cell_limit,
            "table over limit, solving in linear space"
        );
        let pairs = hirschberg(&xs, &ys);
        return Solution {
            lcs: pairs.iter().map(|&(i, _)| xs[i]).collect(),
            matched_x: pairs.iter().map(|&(i, _)| i).collect(),
            matched_y: pairs.iter().map(|&(_, j)| j).collect(),
            strategy: Strategy::LinearSpace,
        };
    }

    let mut engine = LcsEngine::new();
    engine.set_sequences(x, y);
    engine.compute_all();
    let result = engine.result().cloned().unwrap_or_default();
    Solution {
        lcs: result.lcs,
        matched_x: result.matched_x,
        matched_y: result.matched_y,
        strategy: Strategy::FullTable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::DEFAULT_TABLE_CELL_LIMIT;

    #[test]
    fn small_inputs_use_full_table() {
        let s = solve("ABCBDAB", "BDCAB", DEFAULT_TABLE_CELL_LIMIT);
        assert_eq!(s.strategy, Strategy::FullTable);
        assert_eq!(s.lcs, "BCAB");
    }

    #[test]
    fn over_limit_switches_strategy_but_not_length() {
        let s = solve("ABCBDAB", "BDCAB", 10);
        assert_eq!(s.strategy, Strategy::LinearSpace);
        assert_eq!(s.len(), 4);
        assert_eq!(s.lcs.chars().count(), 4);
        assert_eq!(s.matched_y.len(), 4);
    }

    #[test]
    fn empty_input_is_full_table_and_empty() {
        let s = solve("", "ABC", 0);
        assert_eq!(s.strategy, Strategy::FullTable);
        assert!(s.is_empty());
    }
}
