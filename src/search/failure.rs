//! Knuth-Morris-Pratt matching with a compressed failure function.
//!
//! ### Citation
//!
//! 1. Knuth, D. E., Morris, J. H. and Pratt, V. R. (1977). "Fast pattern
//!    matching in strings." SIAM Journal on Computing, 6(1), 323-350.
//!    doi: <https://doi.org/10.1137/0206024>

use super::{MatchError, MatchSink, Matcher, errors::try_table};
use crate::stats::{Counters, SearchStats};
use std::mem::size_of;

/// The extra metric recording how many failure-function entries are `-1`,
/// i.e. the positions at which a mismatch restarts the scan at the next text
/// byte.
pub const RESTART_ENTRIES: &str = "#restarts";

/// Computes the failure function of `pattern`, which has `m + 1` entries.
/// Entry `0` is `-1` and every entry `i` is less than `i`. Entry `m` is the
/// length of the longest border of the whole pattern and is used to resume
/// after a full match.
///
/// An entry is compressed to the entry it would fall back to whenever the
/// byte following the border equals the byte at `i`, since comparing it would
/// fail again.
///
/// ### Errors
///
/// [`MatchError::InvalidPattern`] if `pattern` is empty, or
/// [`MatchError::AllocationFailure`].
pub fn failure_function(pattern: &[u8]) -> Result<Vec<isize>, MatchError> {
    if pattern.is_empty() {
        return Err(MatchError::InvalidPattern);
    }
    build_failure(pattern, &mut Counters::default())
}

#[allow(clippy::cast_sign_loss)]
fn build_failure(pattern: &[u8], c: &mut Counters) -> Result<Vec<isize>, MatchError> {
    let m = pattern.len();
    let mut next = try_table(m + 1, 0isize)?;

    let mut i = 0;
    let mut j: isize = -1;
    next[0] = -1;
    c.writes += 3;

    loop {
        c.branches += 1;
        if i >= m {
            break;
        }

        loop {
            c.branches += 1;
            if j < 0 {
                break;
            }
            c.compare_pattern();
            if pattern[i] == pattern[j as usize] {
                break;
            }
            j = next[j as usize];
            c.lookups += 1;
            c.writes += 1;
        }

        i += 1;
        j += 1;
        c.writes += 2;

        c.branches += 1;
        let repeats = if i < m {
            c.compare_pattern();
            pattern[i] == pattern[j as usize]
        } else {
            false
        };

        next[i] = if repeats {
            c.lookups += 1;
            next[j as usize]
        } else {
            j
        };
        c.writes += 1;
    }

    Ok(next)
}

/// Searches left-to-right, falling back through the failure function on a
/// mismatch so no text byte is passed over twice. Overlapping occurrences are
/// reported.
///
/// See the [module documentation](crate::search) for usage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureFunctionMatcher<'p> {
    pattern: &'p [u8],
    next:    Vec<isize>,
}

impl FailureFunctionMatcher<'_> {
    /// The failure function, with `m + 1` entries.
    #[inline]
    #[must_use]
    pub fn failure(&self) -> &[isize] {
        &self.next
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    fn scan<S: MatchSink + ?Sized>(&self, text: &[u8], sink: &mut S, c: &mut Counters) -> usize {
        let (x, m, n) = (self.pattern, self.pattern.len(), text.len());

        c.branches += 1;
        if m > n {
            return 0;
        }

        let mut count = 0;
        let mut i: isize = 0;
        let mut j = 0;
        c.writes += 3;

        loop {
            c.branches += 1;
            if j >= n {
                break;
            }
            c.verifications += 1;

            loop {
                c.branches += 1;
                if i < 0 {
                    break;
                }
                c.compare();
                if x[i as usize] == text[j] {
                    break;
                }
                i = self.next[i as usize];
                c.lookups += 1;
                c.writes += 1;
            }

            i += 1;
            j += 1;
            c.writes += 2;
            c.jumps += 1;

            c.branches += 1;
            if i as usize >= m {
                sink.report(j - m);
                count += 1;
                i = self.next[m];
                c.lookups += 1;
                c.writes += 1;
            }
        }

        count
    }
}

impl<'p> Matcher<'p> for FailureFunctionMatcher<'p> {
    const NAME: &'static str = "kmp";

    fn preprocess(pattern: &'p [u8], stats: &mut SearchStats) -> Result<Self, MatchError> {
        if pattern.is_empty() {
            return Err(MatchError::InvalidPattern);
        }

        let next = build_failure(pattern, stats.begin_preprocessing());
        stats.finish();
        let next = next?;

        let restarts = next.iter().filter(|&&k| k < 0).count();
        stats.memory_used = next.len() * size_of::<isize>();
        stats.lookup_entries = [next.len(), 0];
        stats.extra.set(RESTART_ENTRIES, i64::try_from(restarts).unwrap_or(i64::MAX));

        Ok(Self { pattern, next })
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
