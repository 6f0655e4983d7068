use lcs_stepper::{LcsEngine, Status};

fn batch(x: &str, y: &str) -> LcsEngine {
    let mut engine = LcsEngine::new();
    engine.set_sequences(x, y);
    engine.compute_all();
    engine
}

fn is_subsequence(needle: &str, hay: &str) -> bool {
    let mut it = hay.chars();
    needle.chars().all(|c| it.any(|h| h == c))
}

#[test]
fn repository_fixtures() {
    let cases = [
        ("ABCBDAB", "BDCAB", "BCAB"),
        ("GXTXAYB", "AGGTAB", "GTAB"),
        ("HUMAN", "CHIMPANZEE", "HMAN"),
        ("A", "A", "A"),
        ("ABC", "XYZ", ""),
    ];
    for (x, y, expected) in cases {
        let engine = batch(x, y);
        assert_eq!(engine.status(), Status::Done);
        let result = engine.result().expect("done engine has a result");
        assert_eq!(result.lcs, expected, "lcs({x}, {y})");
        assert_eq!(engine.lcs_len(), Some(expected.chars().count() as u32));
        assert!(is_subsequence(&result.lcs, x));
        assert!(is_subsequence(&result.lcs, y));
    }
}

#[test]
fn long_dna_pair() {
    let s = "ACCGGTCGAGTGCGCGGAAGCCGGCCGAA";
    let t = "GTCGTTCGGAATGCCGTTGCTCTGTAAA";
    let engine = batch(s, t);
    assert_eq!(engine.lcs_len(), Some(20));
    let result = engine.result().unwrap();
    assert_eq!(result.lcs.len(), 20);
    assert!(is_subsequence(&result.lcs, s));
    assert!(is_subsequence(&result.lcs, t));
}

#[test]
fn matched_positions_spell_the_lcs() {
    let engine = batch("HUMAN", "CHIMPANZEE");
    let result = engine.result().unwrap();
    let from_x: String = result
        .matched_x
        .iter()
        .map(|&i| engine.sequence_x()[i])
        .collect();
    let from_y: String = result
        .matched_y
        .iter()
        .map(|&j| engine.sequence_y()[j])
        .collect();
    assert_eq!(from_x, "HMAN");
    assert_eq!(from_y, "HMAN");
    assert_eq!(
        result.matched_y.iter().copied().collect::<Vec<_>>(),
        vec![1, 3, 5, 6]
    );
}
