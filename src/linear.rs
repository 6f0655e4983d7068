//! Linear-space LCS (Hirschberg).
//!
//! Only two DP rows are live at any time. The input `x` is split in half; a
//! forward pass over the top half and a backward pass over the reversed
//! bottom half pick the column where an optimal path crosses the split, and
//! the two sub-problems recurse independently.
//!
//! The subsequence found has optimal length but need not be the one the
//! full-table backtrace picks when several exist.

/// Last DP row of LCS(x, y): `row[j] = LCS(x, y[0..j])`, length `y.len()+1`.
pub fn lcs_last_row<T: PartialEq>(x: &[T], y: &[T]) -> Vec<u32> {
    let n = y.len();
    let mut prev = vec![0u32; n + 1];
    let mut curr = vec![0u32; n + 1];

    for cx in x {
        for j in 1..=n {
            curr[j] = if *cx == y[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev
}

/// LCS length in O(|y|) memory.
pub fn lcs_length<T: PartialEq>(x: &[T], y: &[T]) -> u32 {
    // iterate over the longer side so the row is the shorter one
    if y.len() <= x.len() {
        *lcs_last_row(x, y).last().unwrap_or(&0)
    } else {
        *lcs_last_row(y, x).last().unwrap_or(&0)
    }
}

/// Matched index pairs `(i, j)` with `x[i] == y[j]` forming one LCS, in
/// increasing order of both coordinates.
pub fn hirschberg<T: PartialEq + Clone>(x: &[T], y: &[T]) -> Vec<(usize, usize)> {
    #[cfg(feature = "tracing")]
    let span = tracing::debug_span!("hirschberg", rows = x.len(), cols = y.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut pairs = Vec::new();
    split(x, y, 0, 0, &mut pairs);
    pairs
}

fn split<T: PartialEq + Clone>(
    x: &[T],
    y: &[T],
    x_off: usize,
    y_off: usize,
    out: &mut Vec<(usize, usize)>,
) {
    if x.is_empty() || y.is_empty() {
        return;
    }
    if x.len() == 1 {
        if let Some(j) = y.iter().position(|c| *c == x[0]) {
            out.push((x_off, y_off + j));
        }
        return;
    }

    let mid = x.len() / 2;
    let fwd = lcs_last_row(&x[..mid], y);
    let bwd = {
        let x_rev: Vec<T> = x[mid..].iter().rev().cloned().collect();
        let y_rev: Vec<T> = y.iter().rev().cloned().collect();
        lcs_last_row(&x_rev, &y_rev)
    };

    // column k maximising fwd[k] + bwd[n-k]; first maximum wins
    let n = y.len();
    let mut best_k = 0usize;
    let mut best_val = 0u32;
    for k in 0..=n {
        let v = fwd[k] + bwd[n - k];
        if v > best_val {
            best_val = v;
            best_k = k;
        }
    }

    split(&x[..mid], &y[..best_k], x_off, y_off, out);
    split(&x[mid..], &y[best_k..], x_off + mid, y_off + best_k, out);
}
