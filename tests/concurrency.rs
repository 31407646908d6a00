use matchstat::prelude::*;
use std::thread;

const TEXT: &[u8] = b"ABABABABAB AAAAAA ABCABC GCATCGCAGAGAGTATACAGTACG";
const PATTERNS: [&[u8]; 5] = [b"ABABAB", b"AAAA", b"XYZ", b"GCAGAGAG", b"AB"];

#[test]
fn workers_own_independent_stats() {
    let sequential: Vec<Vec<SearchReport>> = PATTERNS
        .iter()
        .map(|p| Algorithm::ALL.iter().map(|a| a.run(p, TEXT).unwrap()).collect())
        .collect();

    let parallel: Vec<Vec<SearchReport>> = thread::scope(|s| {
        let handles: Vec<_> = PATTERNS
            .iter()
            .map(|p| s.spawn(move || Algorithm::ALL.iter().map(|a| a.run(p, TEXT).unwrap()).collect::<Vec<_>>()))
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}

#[test]
fn shared_tables_across_threads() {
    let mut setup = SearchStats::new();
    let matcher = FailureFunctionMatcher::preprocess(b"AB", &mut setup).unwrap();
    let matcher = &matcher;

    let counts: Vec<(usize, SearchStats)> = thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(move || {
                    let mut stats = SearchStats::new();
                    let mut count = MatchCount::default();
                    let found = matcher.search(TEXT, &mut count, &mut stats);
                    assert_eq!(found, count.0);
                    (found, stats)
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(counts.iter().all(|c| *c == counts[0]));
    assert_eq!(counts[0].0, 7);
}
