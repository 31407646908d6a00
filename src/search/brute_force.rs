use super::{MatchError, MatchSink, Matcher};
use crate::stats::{Counters, SearchStats};

/// Compares the pattern left-to-right against every window of the text,
/// advancing by one byte after each attempt. Builds no tables.
///
/// This is the quadratic baseline the table-driven matchers are compared
/// against, and the oracle for their match offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BruteForceMatcher<'p> {
    pattern: &'p [u8],
}

impl BruteForceMatcher<'_> {
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

            let mut i = 0;
            c.writes += 1;
            loop {
                c.branches += 1;
                if i == m {
                    break;
                }
                c.compare();
                if x[i] != text[i + j] {
                    break;
                }
                i += 1;
                c.writes += 1;
            }

            c.branches += 1;
            if i == m {
                sink.report(j);
                count += 1;
            }

            j += 1;
            c.writes += 1;
            c.jumps += 1;
        }

        count
    }
}

impl<'p> Matcher<'p> for BruteForceMatcher<'p> {
    const NAME: &'static str = "bf";

    fn preprocess(pattern: &'p [u8], stats: &mut SearchStats) -> Result<Self, MatchError> {
        if pattern.is_empty() {
            return Err(MatchError::InvalidPattern);
        }

        stats.begin_preprocessing();
        stats.finish();
        stats.memory_used = 0;
        stats.lookup_entries = [0, 0];

        Ok(Self { pattern })
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
