//! ## Instrumented exact string matchers
//!
//! Every matcher implements [`Matcher`]: a preprocessing step that builds the
//! tables for one pattern, and a search step that scans a text with those
//! tables. Both steps record their work into a caller-owned [`SearchStats`],
//! attributing it to [`Phase::Preprocessing`] and [`Phase::Searching`]
//! respectively. Matches are reported to a [`MatchSink`] in strictly increasing
//! offset order regardless of the direction a matcher compares bytes in.
//!
//! *matchstat* provides three matchers:
//! * [`ShiftTableMatcher`], Boyer-Moore with bad-character and good-suffix
//!   shifts
//! * [`FailureFunctionMatcher`], Knuth-Morris-Pratt with a compressed
//!   failure function
//! * [`BruteForceMatcher`], the quadratic baseline
//!
//! ## Examples
//!
//! Run a matcher chosen at runtime and read its statistics:
//! ```
//! # use matchstat::search::Algorithm;
//! let report = Algorithm::ShiftTable.run(b"ABAB", b"ABABAB").unwrap();
//! assert_eq!(report.matches, vec![0, 2]);
//! assert_eq!(report.stats.extra.get("#small"), Some(2));
//! ```
//!
//! Build the tables once and reuse them for several texts:
//! ```
//! # use matchstat::{search::{FailureFunctionMatcher, Matcher}, stats::SearchStats};
//! let mut stats = SearchStats::new();
//! let matcher = FailureFunctionMatcher::preprocess(b"AA", &mut stats).unwrap();
//!
//! for (text, expected) in [(&b"AAA"[..], vec![0, 1]), (&b"BAAB"[..], vec![1])] {
//!     let mut stats = SearchStats::new();
//!     let mut matches: Vec<usize> = Vec::new();
//!     matcher.search(text, &mut matches, &mut stats);
//!     assert_eq!(matches, expected);
//! }
//! ```
//!
//! [`Phase::Preprocessing`]: crate::stats::Phase::Preprocessing
//! [`Phase::Searching`]: crate::stats::Phase::Searching

use crate::stats::SearchStats;
use std::{fmt, str::FromStr};

mod brute_force;
mod errors;
mod failure;
mod shift_table;

pub use brute_force::*;
pub use errors::*;
pub use failure::*;
pub use shift_table::*;

/// The size of the byte alphabet. Tables keyed by byte value have exactly
/// this many entries.
pub const SIGMA: usize = 256;

/// The shared shape of every instrumented matcher.
///
/// A matcher is constructed for one pattern by [`preprocess`], which borrows
/// the pattern and owns the tables built from it. The tables are immutable
/// afterwards, so a matcher may [`search`] any number of texts.
///
/// [`preprocess`]: Matcher::preprocess
/// [`search`]: Matcher::search
pub trait Matcher<'p>: Sized {
    /// Short identifier used in reports.
    const NAME: &'static str;

    /// Builds the tables for `pattern`, recording the work under
    /// [`Phase::Preprocessing`](crate::stats::Phase::Preprocessing) along with
    /// the table memory footprint and any algorithm-specific metrics.
    ///
    /// ### Errors
    ///
    /// [`MatchError::InvalidPattern`] if `pattern` is empty, checked before
    /// any allocation, or [`MatchError::AllocationFailure`] if a table cannot
    /// be allocated.
    fn preprocess(pattern: &'p [u8], stats: &mut SearchStats) -> Result<Self, MatchError>;

    /// Scans `text` for every occurrence of the pattern, reporting start
    /// offsets to `sink` in increasing order and returning the number of
    /// matches. Work is recorded under
    /// [`Phase::Searching`](crate::stats::Phase::Searching).
    fn search<S: MatchSink + ?Sized>(&self, text: &[u8], sink: &mut S, stats: &mut SearchStats) -> usize;

    /// The pattern the tables were built for.
    fn pattern(&self) -> &'p [u8];
}

/// Receives the start offsets of matches as they are found.
pub trait MatchSink {
    fn report(&mut self, offset: usize);
}

impl MatchSink for Vec<usize> {
    #[inline]
    fn report(&mut self, offset: usize) {
        self.push(offset);
    }
}

/// A [`MatchSink`] that only counts matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchCount(pub usize);

impl MatchSink for MatchCount {
    #[inline]
    fn report(&mut self, _offset: usize) {
        self.0 += 1;
    }
}

/// Runs one full invocation of matcher `M`: the statistics are reset, the
/// pattern is preprocessed, and the text is searched. Returns the number of
/// matches.
///
/// ### Errors
///
/// Any [`MatchError`] from [`Matcher::preprocess`]. The text is not scanned in
/// that case.
pub fn run_matcher<'p, M, S>(
    pattern: &'p [u8], text: &[u8], sink: &mut S, stats: &mut SearchStats,
) -> Result<usize, MatchError>
where
    M: Matcher<'p>,
    S: MatchSink + ?Sized, {
    stats.reset();
    tracing::debug!(algorithm = M::NAME, m = pattern.len(), n = text.len(), "starting search");

    let matcher = M::preprocess(pattern, stats).inspect_err(|e| {
        tracing::debug!(algorithm = M::NAME, error = %e, "preprocessing failed");
    })?;
    let count = matcher.search(text, sink, stats);

    tracing::debug!(algorithm = M::NAME, matches = count, "finished search");
    Ok(count)
}

/// Selects one of the provided matchers at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// [`ShiftTableMatcher`]
    ShiftTable,
    /// [`FailureFunctionMatcher`]
    FailureFunction,
    /// [`BruteForceMatcher`]
    BruteForce,
}

/// The matches and statistics of a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub algorithm: Algorithm,
    pub matches:   Vec<usize>,
    pub stats:     SearchStats,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::ShiftTable, Algorithm::FailureFunction, Algorithm::BruteForce];

    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::ShiftTable => ShiftTableMatcher::NAME,
            Algorithm::FailureFunction => FailureFunctionMatcher::NAME,
            Algorithm::BruteForce => BruteForceMatcher::NAME,
        }
    }

    /// Runs the selected matcher with a caller-provided sink and statistics
    /// record. See [`run_matcher`].
    ///
    /// ### Errors
    ///
    /// Any [`MatchError`] from preprocessing.
    pub fn search_into<S: MatchSink + ?Sized>(
        self, pattern: &[u8], text: &[u8], sink: &mut S, stats: &mut SearchStats,
    ) -> Result<usize, MatchError> {
        match self {
            Algorithm::ShiftTable => run_matcher::<ShiftTableMatcher, S>(pattern, text, sink, stats),
            Algorithm::FailureFunction => run_matcher::<FailureFunctionMatcher, S>(pattern, text, sink, stats),
            Algorithm::BruteForce => run_matcher::<BruteForceMatcher, S>(pattern, text, sink, stats),
        }
    }

    /// Runs the selected matcher with a fresh statistics record, collecting
    /// every match offset.
    ///
    /// ### Errors
    ///
    /// Any [`MatchError`] from preprocessing.
    pub fn run(self, pattern: &[u8], text: &[u8]) -> Result<SearchReport, MatchError> {
        let mut stats = SearchStats::new();
        let mut matches = Vec::new();
        self.search_into(pattern, text, &mut matches, &mut stats)?;

        Ok(SearchReport {
            algorithm: self,
            matches,
            stats,
        })
    }

    /// Like [`run`](Algorithm::run) but only counts the matches.
    ///
    /// ### Errors
    ///
    /// Any [`MatchError`] from preprocessing.
    pub fn count(self, pattern: &[u8], text: &[u8]) -> Result<(usize, SearchStats), MatchError> {
        let mut stats = SearchStats::new();
        let mut count = MatchCount::default();
        self.search_into(pattern, text, &mut count, &mut stats)?;
        Ok((count.0, stats))
    }
}

impl fmt::Display for Algorithm {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = AlgorithmParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bm" | "boyer-moore" | "shift-table" => Ok(Algorithm::ShiftTable),
            "kmp" | "knuth-morris-pratt" | "failure-function" => Ok(Algorithm::FailureFunction),
            "bf" | "brute-force" | "naive" => Ok(Algorithm::BruteForce),
            _ => Err(AlgorithmParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn algorithm_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
            assert_eq!(algorithm.to_string(), algorithm.name());
        }
        assert_eq!("KMP".parse::<Algorithm>(), Ok(Algorithm::FailureFunction));
        assert!("horspool".parse::<Algorithm>().is_err());
    }

    #[test]
    fn count_matches_run() {
        for algorithm in Algorithm::ALL {
            let (count, stats) = algorithm.count(b"AA", b"AAAA").unwrap();
            let report = algorithm.run(b"AA", b"AAAA").unwrap();
            assert_eq!(count, 3);
            assert_eq!(report.matches, vec![0, 1, 2]);
            assert_eq!(stats, report.stats);
        }
    }

    #[test]
    fn empty_pattern_is_rejected() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.run(b"", b"ABC"), Err(MatchError::InvalidPattern));
        }
    }

    #[test]
    fn run_resets_stats() {
        let mut stats = SearchStats::new();
        let mut matches: Vec<usize> = Vec::new();
        Algorithm::ShiftTable
            .search_into(b"AB", b"ABAB", &mut matches, &mut stats)
            .unwrap();
        let first = stats.clone();

        matches.clear();
        Algorithm::ShiftTable
            .search_into(b"AB", b"ABAB", &mut matches, &mut stats)
            .unwrap();
        assert_eq!(first, stats);
        assert_eq!(matches, vec![0, 2]);
    }
}
