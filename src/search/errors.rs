use crate::err::GetCode;
use std::{collections::TryReserveError, error::Error, fmt};

/// Errors that abort a single matcher invocation before any searching.
///
/// Both variants are deterministic in their inputs, so retrying the same
/// pattern will fail identically.
#[derive(Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatchError {
    /// The pattern was empty, for which no shift or failure table is defined
    InvalidPattern,
    /// A table with the given number of entries could not be allocated
    AllocationFailure { entries: usize },
}

impl fmt::Display for MatchError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchError::InvalidPattern => write!(f, "The pattern must contain at least one byte"),
            MatchError::AllocationFailure { entries } => {
                write!(f, "Failed to allocate a table with {entries} entries")
            }
        }
    }
}

impl fmt::Debug for MatchError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for MatchError {}

impl GetCode for MatchError {}

/// An unrecognized algorithm name was given to
/// [`Algorithm::from_str`](std::str::FromStr::from_str).
#[derive(Clone, PartialEq, Eq)]
pub struct AlgorithmParseError(pub String);

impl fmt::Display for AlgorithmParseError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unknown algorithm '{}', expected one of: bm, kmp, bf", self.0)
    }
}

impl fmt::Debug for AlgorithmParseError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for AlgorithmParseError {}

impl GetCode for AlgorithmParseError {
    #[inline]
    fn get_code(&self) -> i32 {
        2
    }
}

/// Allocates a table of `len` copies of `fill`, reporting allocation failure
/// rather than aborting.
pub(crate) fn try_table<T: Clone>(len: usize, fill: T) -> Result<Vec<T>, MatchError> {
    let mut table = Vec::new();
    table
        .try_reserve_exact(len)
        .map_err(|_: TryReserveError| MatchError::AllocationFailure { entries: len })?;
    table.resize(len, fill);
    Ok(table)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn try_table_fills() {
        assert_eq!(try_table(3, 7usize), Ok(vec![7, 7, 7]));
        assert_eq!(try_table(0, 0isize), Ok(Vec::new()));
    }

    #[test]
    fn try_table_reports_failure() {
        assert_eq!(
            try_table(usize::MAX, 0u64),
            Err(MatchError::AllocationFailure { entries: usize::MAX })
        );
    }
}
