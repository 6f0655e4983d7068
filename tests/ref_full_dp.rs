use lcs_stepper::{table::DpTable, LcsEngine};
use proptest::prelude::*;

fn full_lcs_table(s: &[char], t: &[char]) -> Vec<Vec<u32>> {
    let n = s.len();
    let m = t.len();
    let mut dp = vec![vec![0u32; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            let up = dp[i - 1][j];
            let left = dp[i][j - 1];
            let diag = dp[i - 1][j - 1] + if s[i - 1] == t[j - 1] { 1 } else { 0 };
            dp[i][j] = up.max(left).max(diag);
        }
    }
    dp
}

fn as_rows(table: &DpTable) -> Vec<Vec<u32>> {
    table.iter_rows().map(|r| r.to_vec()).collect()
}

fn batch(x: &str, y: &str) -> LcsEngine {
    let mut engine = LcsEngine::new();
    engine.set_sequences(x, y);
    engine.compute_all();
    engine
}

fn stepped(x: &str, y: &str) -> LcsEngine {
    let mut engine = LcsEngine::new();
    engine.initialize(x, y);
    while engine.step() {}
    engine
}

fn is_subsequence(needle: &str, hay: &str) -> bool {
    let mut it = hay.chars();
    needle.chars().all(|c| it.any(|h| h == c))
}

proptest! {
    #[test]
    fn table_matches_reference(a in "[ACGT]{0,12}", b in "[ACGT]{0,12}") {
        let s: Vec<char> = a.chars().collect();
        let t: Vec<char> = b.chars().collect();
        let engine = batch(&a, &b);
        prop_assert_eq!(as_rows(engine.table()), full_lcs_table(&s, &t));
    }

    #[test]
    fn recurrence_holds_cellwise(a in "[ABC]{1,10}", b in "[ABC]{1,10}") {
        let engine = batch(&a, &b);
        let x = engine.sequence_x();
        let y = engine.sequence_y();
        let table = engine.table();
        for i in 1..=x.len() {
            for j in 1..=y.len() {
                let expected = if x[i - 1] == y[j - 1] {
                    table.get(i - 1, j - 1) + 1
                } else {
                    table.get(i - 1, j).max(table.get(i, j - 1))
                };
                prop_assert_eq!(table.get(i, j), expected);
            }
        }
    }

    #[test]
    fn corner_equals_lcs_length(a in "[ACGT]{0,16}", b in "[ACGT]{0,16}") {
        let engine = batch(&a, &b);
        let result = engine.result().unwrap();
        prop_assert_eq!(engine.table().corner() as usize, result.lcs.chars().count());
        prop_assert!(is_subsequence(&result.lcs, &a));
        prop_assert!(is_subsequence(&result.lcs, &b));
        prop_assert_eq!(result.matched_x.len(), result.lcs.chars().count());
        prop_assert_eq!(result.matched_y.len(), result.lcs.chars().count());
    }

    #[test]
    fn stepping_equals_batch(a in "[ACGT]{0,10}", b in "[ACGT]{0,10}") {
        let s = stepped(&a, &b);
        let c = batch(&a, &b);
        prop_assert_eq!(s.table(), c.table());
        prop_assert_eq!(s.result(), c.result());
        prop_assert_eq!(s.cursor(), c.cursor());
    }

    #[test]
    fn swap_preserves_length(a in "[ACGT]{0,12}", b in "[ACGT]{0,12}") {
        prop_assert_eq!(batch(&a, &b).lcs_len(), batch(&b, &a).lcs_len());
    }

    #[test]
    fn path_moves_one_cell_at_a_time(a in "[AB]{1,10}", b in "[AB]{1,10}") {
        let engine = batch(&a, &b);
        let x = engine.sequence_x();
        let y = engine.sequence_y();
        let path = &engine.result().unwrap().path;
        let last = path.last().unwrap();
        prop_assert_eq!((last.row, last.col), (x.len(), y.len()));
        let first = path.first().unwrap();
        prop_assert!(first.row >= 1 && first.col >= 1);
        for w in path.windows(2) {
            let (p, q) = (w[0], w[1]);
            let step = (q.row - p.row, q.col - p.col);
            if q.matched {
                prop_assert_eq!(step, (1, 1));
            } else {
                prop_assert!(step == (1, 0) || step == (0, 1), "bad step {:?}", step);
            }
        }
        for c in path {
            prop_assert_eq!(c.matched, x[c.row - 1] == y[c.col - 1]);
        }
    }
}
