use super::*;
use crate::stats::Phase;

fn find_all(pattern: &[u8], text: &[u8]) -> (Vec<usize>, SearchStats) {
    let mut stats = SearchStats::new();
    let mut matches: Vec<usize> = Vec::new();
    let matcher = ShiftTableMatcher::preprocess(pattern, &mut stats).unwrap();
    let count = matcher.search(text, &mut matches, &mut stats);
    assert_eq!(count, matches.len());
    (matches, stats)
}

#[test]
fn shift_table_units() {
    assert_eq!(find_all(b"ABABAB", b"ABABABABAB").0, vec![0, 2, 4]);
    assert_eq!(find_all(b"AAAA", b"AAAAAA").0, vec![0, 1, 2]);
    assert_eq!(find_all(b"XYZ", b"ABCABC").0, Vec::<usize>::new());
    assert_eq!(find_all(b"AA", b"AAA").0, vec![0, 1]);
    assert_eq!(find_all(b"GCAGAGAG", b"GCATCGCAGAGAGTATACAGTACG").0, vec![5]);
    assert_eq!(find_all(b"A", b"BABBA").0, vec![1, 4]);
}

#[test]
fn four_byte_pattern_tables() {
    let mut stats = SearchStats::new();
    let matcher = ShiftTableMatcher::preprocess(b"ABAB", &mut stats).unwrap();

    assert_eq!(matcher.bad_character()[b'A' as usize], 1);
    assert_eq!(matcher.bad_character()[b'B' as usize], 2);
    assert_eq!(matcher.good_suffix(), &[2, 2, 4, 1]);

    assert_eq!(stats.phase(), Phase::Idle);
    assert_eq!(stats.extra.get(SMALL_ENTRIES), Some(2));
    assert_eq!(stats.lookup_entries, [SIGMA, 4]);
    assert_eq!(stats.memory_used, (SIGMA + 4) * size_of::<usize>());
    assert_eq!(*stats.searching(), Counters::default());

    let mut matches: Vec<usize> = Vec::new();
    matcher.search(b"ABAB", &mut matches, &mut stats);
    assert_eq!(matches, vec![0]);
}

#[test]
fn exact_search_counters() {
    let (matches, stats) = find_all(b"AB", b"AB");
    assert_eq!(matches, vec![0]);

    let expected = Counters {
        pattern_bytes_read: 2,
        text_bytes_read:    2,
        lookups:            1,
        writes:             6,
        branches:           7,
        verifications:      1,
        jumps:              1,
        computations:       0,
    };
    assert_eq!(*stats.searching(), expected);
}

#[test]
fn pattern_longer_than_text() {
    let (matches, stats) = find_all(b"ABCDE", b"ABC");
    assert!(matches.is_empty());
    assert_eq!(stats.searching().comparisons(), 0);
    assert_eq!(
        *stats.searching(),
        Counters {
            branches: 1,
            ..Counters::default()
        }
    );
    assert!(stats.preprocessing().writes > 0);
}

#[test]
fn pattern_equal_length_to_text() {
    assert_eq!(find_all(b"ABCD", b"ABCD").0, vec![0]);
    assert!(find_all(b"ABCD", b"ABCE").0.is_empty());
    assert!(find_all(b"ABCD", b"XBCD").0.is_empty());
}

#[test]
fn empty_text() {
    let (matches, stats) = find_all(b"A", b"");
    assert!(matches.is_empty());
    assert_eq!(stats.searching().comparisons(), 0);
}

#[test]
fn mismatch_uses_shift_arithmetic() {
    let (matches, stats) = find_all(b"XYZ", b"ABCABC");
    assert!(matches.is_empty());
    // Windows at 0 and 3, each rejected on its last byte
    assert_eq!(stats.searching().verifications, 2);
    assert_eq!(stats.searching().computations, 2);
    assert_eq!(stats.searching().comparisons(), 2);
    assert_eq!(stats.searching().jumps, 2);
}

#[test]
fn preprocessing_is_idempotent() {
    let pattern = b"GCAGAGAG";
    let mut first = SearchStats::new();
    let mut second = SearchStats::new();

    let a = ShiftTableMatcher::preprocess(pattern, &mut first).unwrap();
    let b = ShiftTableMatcher::preprocess(pattern, &mut second).unwrap();
    assert_eq!(a, b);
    assert_eq!(first, second);
}

#[test]
fn empty_pattern_leaves_stats_idle() {
    let mut stats = SearchStats::new();
    assert_eq!(
        ShiftTableMatcher::preprocess(b"", &mut stats),
        Err(MatchError::InvalidPattern)
    );
    assert_eq!(stats, SearchStats::new());
}

#[cfg(feature = "rand")]
#[test]
fn table_invariants() {
    use crate::generate::rand_sequence;

    for seed in 0..500 {
        let m = 1 + (seed as usize % 40);
        let pattern = rand_sequence(b"ACGT", m, seed);
        let mut stats = SearchStats::new();
        let matcher = ShiftTableMatcher::preprocess(&pattern, &mut stats).unwrap();

        assert!(matcher.bad_character().iter().all(|&s| (1..=m).contains(&s)));
        for b in 0..=u8::MAX {
            if !pattern[..m - 1].contains(&b) {
                assert_eq!(matcher.bad_character()[b as usize], m);
            }
        }
        assert_eq!(matcher.good_suffix().len(), m);
        assert!(matcher.good_suffix().iter().all(|&s| (1..=m).contains(&s)));
    }
}
