//! ## Execution statistics for instrumented searches
//!
//! Every matcher in [`crate::search`] records what it does into a
//! [`SearchStats`], which is created (or [`reset`]) once per invocation and
//! exclusively owned by it. Counters are split by [`Phase`] so that table
//! construction can be reported separately from the text scan.
//!
//! The only way to obtain a mutable [`Counters`] bucket is through a phase
//! transition:
//!
//! ```
//! # use matchstat::stats::{Phase, SearchStats};
//! let mut stats = SearchStats::new();
//! let counters = stats.begin_preprocessing();
//! counters.writes += 1;
//! let counters = stats.begin_searching();
//! counters.branches += 1;
//! stats.finish();
//!
//! assert_eq!(stats.phase(), Phase::Idle);
//! assert_eq!(stats.preprocessing().writes, 1);
//! assert_eq!(stats.searching().branches, 1);
//! ```
//!
//! [`reset`]: SearchStats::reset

mod extra;
mod std_traits;

pub use extra::*;

/// The phase a [`SearchStats`] record is currently attributing counters to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No matcher is running.
    #[default]
    Idle,
    /// Tables are being built from the pattern.
    Preprocessing,
    /// The text is being scanned.
    Searching,
}

/// Monotonically increasing operation counts for a single phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counters {
    /// Pattern bytes read by a comparison.
    pub pattern_bytes_read: u64,
    /// Text bytes read by a comparison.
    pub text_bytes_read:    u64,
    /// Table entries read.
    pub lookups:            u64,
    /// Table entries and cursor variables written.
    pub writes:             u64,
    /// Conditions evaluated.
    pub branches:           u64,
    /// Candidate windows examined.
    pub verifications:      u64,
    /// Text cursor advances.
    pub jumps:              u64,
    /// Shift arithmetic evaluated.
    pub computations:       u64,
}

impl Counters {
    /// The number of byte comparisons performed during a search phase, where
    /// each comparison reads exactly one pattern byte and one text byte.
    #[inline]
    #[must_use]
    pub fn comparisons(&self) -> u64 {
        self.text_bytes_read
    }

    /// Records a single byte comparison between the pattern and the text.
    #[inline]
    pub(crate) fn compare(&mut self) {
        self.pattern_bytes_read += 1;
        self.text_bytes_read += 1;
    }

    /// Records a comparison between two pattern bytes.
    #[inline]
    pub(crate) fn compare_pattern(&mut self) {
        self.pattern_bytes_read += 2;
    }
}

/// The statistics record for one search invocation.
///
/// Holds one [`Counters`] bucket per phase, the number of bytes used by the
/// matcher's persistent tables, the number of entries in up to two lookup
/// tables, and a small set of algorithm-specific [`ExtraMetrics`].
///
/// A record must never be shared between concurrent invocations. Workers that
/// search in parallel each construct their own.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchStats {
    phase:              Phase,
    preprocessing:      Counters,
    searching:          Counters,
    /// Total size in bytes of the tables kept for the search phase.
    pub memory_used:    usize,
    /// Number of entries in the primary and secondary lookup tables.
    pub lookup_entries: [usize; 2],
    /// Named algorithm-specific measurements.
    pub extra:          ExtraMetrics,
}

impl SearchStats {
    /// Column names matching the [`Display`](std::fmt::Display)
    /// implementation of this struct, tab separated.
    pub const TSV_HEADER: &'static str = concat!(
        "phase\tpattern_bytes_read\ttext_bytes_read\tlookups\twrites\tbranches\t",
        "verifications\tjumps\tcomputations\tmemory_used\tlookup_entries_1\tlookup_entries_2\textra"
    );

    /// Creates an empty record in the [`Phase::Idle`] state.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every counter and metric and returns to [`Phase::Idle`].
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Counters attributed to table construction.
    #[inline]
    #[must_use]
    pub fn preprocessing(&self) -> &Counters {
        &self.preprocessing
    }

    /// Counters attributed to the text scan.
    #[inline]
    #[must_use]
    pub fn searching(&self) -> &Counters {
        &self.searching
    }

    /// Transitions from [`Phase::Idle`] to [`Phase::Preprocessing`] and
    /// returns the bucket for that phase.
    #[inline]
    pub fn begin_preprocessing(&mut self) -> &mut Counters {
        debug_assert_eq!(self.phase, Phase::Idle, "preprocessing must start from an idle record");
        tracing::trace!("phase: preprocessing");
        self.phase = Phase::Preprocessing;
        &mut self.preprocessing
    }

    /// Transitions to [`Phase::Searching`] and returns the bucket for that
    /// phase. Starting from [`Phase::Idle`] is permitted so that tables built
    /// once may be reused for several texts.
    #[inline]
    pub fn begin_searching(&mut self) -> &mut Counters {
        debug_assert_ne!(self.phase, Phase::Searching, "searching phase already started");
        tracing::trace!("phase: searching");
        self.phase = Phase::Searching;
        &mut self.searching
    }

    /// Returns the record to [`Phase::Idle`], keeping all counters.
    #[inline]
    pub fn finish(&mut self) {
        tracing::trace!("phase: idle");
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn phases_attribute_counters() {
        let mut stats = SearchStats::new();
        assert_eq!(stats.phase(), Phase::Idle);

        let c = stats.begin_preprocessing();
        c.compare_pattern();
        c.writes += 3;
        assert_eq!(stats.phase(), Phase::Preprocessing);

        let c = stats.begin_searching();
        c.compare();
        c.compare();
        assert_eq!(stats.phase(), Phase::Searching);
        stats.finish();

        assert_eq!(stats.preprocessing().pattern_bytes_read, 2);
        assert_eq!(stats.preprocessing().text_bytes_read, 0);
        assert_eq!(stats.preprocessing().writes, 3);
        assert_eq!(stats.searching().comparisons(), 2);
        assert_eq!(stats.searching().writes, 0);
    }

    #[test]
    fn search_without_preprocessing() {
        let mut stats = SearchStats::new();
        stats.begin_searching().jumps += 1;
        stats.finish();
        assert_eq!(*stats.preprocessing(), Counters::default());
        assert_eq!(stats.searching().jumps, 1);
    }

    #[test]
    fn reset_clears_everything() {
        let mut stats = SearchStats::new();
        stats.begin_preprocessing().lookups += 7;
        stats.memory_used = 1024;
        stats.lookup_entries = [256, 4];
        stats.extra.set("#small", 3);
        stats.finish();

        stats.reset();
        assert_eq!(stats, SearchStats::new());
        assert!(stats.extra.is_empty());
    }
}
