//! Boyer-Moore matching with bad-character and good-suffix shifts.
//!
//! ### Citation
//!
//! 1. Boyer, R. S. and Moore, J. S. (1977). "A fast string searching
//!    algorithm." Communications of the ACM, 20(10), 762-772.
//!    doi: <https://doi.org/10.1145/359842.359859>

use super::{MatchError, MatchSink, Matcher, SIGMA};
use crate::stats::{Counters, SearchStats};
use std::mem::size_of;

mod tables;

pub use tables::*;

/// The extra metric recording how many bad-character entries are below `m`,
/// which is the number of distinct bytes in the pattern excluding its final
/// position.
pub const SMALL_ENTRIES: &str = "#small";

/// Searches right-to-left within each window, shifting by the larger of the
/// good-suffix and bad-character rules.
///
/// See the [module documentation](crate::search) for usage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftTableMatcher<'p> {
    pattern:       &'p [u8],
    bad_character: BadCharacterTable,
    good_suffix:   Vec<usize>,
}

impl ShiftTableMatcher<'_> {
    #[inline]
    #[must_use]
    pub fn bad_character(&self) -> &BadCharacterTable {
        &self.bad_character
    }

    #[inline]
    #[must_use]
    pub fn good_suffix(&self) -> &[usize] {
        &self.good_suffix
    }

    fn scan<S: MatchSink + ?Sized>(&self, text: &[u8], sink: &mut S, c: &mut Counters) -> usize {
        let (x, m, n) = (self.pattern, self.pattern.len(), text.len());

        c.branches += 1;
        if m > n {
            return 0;
        }

        let mut count = 0;
        let mut j = 0;
        c.writes += 2;

        loop {
            c.branches += 1;
            if j > n - m {
                break;
            }
            c.verifications += 1;

            // `i` is the number of window bytes not yet compared
            let mut i = m;
            c.writes += 1;
            let mismatch = loop {
                c.branches += 1;
                if i == 0 {
                    break None;
                }
                c.compare();
                if x[i - 1] != text[j + i - 1] {
                    break Some(i - 1);
                }
                i -= 1;
                c.writes += 1;
            };

            c.branches += 1;
            let shift = if let Some(i) = mismatch {
                let bad_character = self.bad_character[text[i + j] as usize];
                c.lookups += 2;
                c.computations += 1;
                self.good_suffix[i].max((bad_character + i + 1).saturating_sub(m))
            } else {
                sink.report(j);
                count += 1;
                c.lookups += 1;
                self.good_suffix[0]
            };

            j += shift;
            c.writes += 1;
            c.jumps += 1;
        }

        count
    }
}

impl<'p> Matcher<'p> for ShiftTableMatcher<'p> {
    const NAME: &'static str = "bm";

    fn preprocess(pattern: &'p [u8], stats: &mut SearchStats) -> Result<Self, MatchError> {
        if pattern.is_empty() {
            return Err(MatchError::InvalidPattern);
        }

        let c = stats.begin_preprocessing();
        let tables = build_good_suffix(pattern, c).map(|gs| (build_bad_character(pattern, c), gs));
        stats.finish();
        let (bad_character, good_suffix) = tables?;

        let m = pattern.len();
        let small = bad_character.iter().filter(|&&s| s < m).count();
        stats.memory_used = size_of::<BadCharacterTable>() + m * size_of::<usize>();
        stats.lookup_entries = [SIGMA, m];
        stats.extra.set(SMALL_ENTRIES, i64::try_from(small).unwrap_or(i64::MAX));

        Ok(Self {
            pattern,
            bad_character,
            good_suffix,
        })
    }

    fn search<S: MatchSink + ?Sized>(&self, text: &[u8], sink: &mut S, stats: &mut SearchStats) -> usize {
        let count = self.scan(text, sink, stats.begin_searching());
        stats.finish();
        count
    }

    #[inline]
    fn pattern(&self) -> &'p [u8] {
        self.pattern
    }
}

#[cfg(test)]
mod test;
