#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::wildcard_imports)]

/// Exit codes and graceful failure for binaries.
pub mod err;
/// Pattern file reading.
pub mod io;
/// Instrumented exact matchers and the contract they share.
pub mod search;
/// Per-invocation execution statistics.
pub mod stats;

/// Wrappers implementing `Arbitrary` for fuzzing.
#[cfg(feature = "fuzzing")]
pub mod fuzz;
/// Generate seeded random patterns and texts.
#[cfg(feature = "rand")]
pub mod generate;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::err::OrFail;
    #[cfg(feature = "rand")]
    pub use crate::generate::{rand_pattern_from, rand_sequence};
    pub use crate::search::{
        Algorithm, BruteForceMatcher, FailureFunctionMatcher, MatchCount, MatchError, MatchSink, Matcher,
        SearchReport, ShiftTableMatcher,
    };
    pub use crate::stats::{Counters, Phase, SearchStats};
}
