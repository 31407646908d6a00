//! A module providing implementations of
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! for pattern and text pairs, suitable for fuzzing the matchers against each
//! other.
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these
//! functions.
//!
//! </div>

use arbitrary::{Arbitrary, Result, Unstructured};

macro_rules! impl_deref {
    ($wrapper:ty, $inner:ty) => {
        impl ::std::ops::Deref for $wrapper {
            type Target = $inner;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::std::ops::DerefMut for $wrapper {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }
    };
}

/// A pattern and text to search. The pattern is never empty; the text may
/// be, and may be shorter than the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCase {
    pub pattern: Vec<u8>,
    pub text:    Vec<u8>,
}

impl<'a> Arbitrary<'a> for SearchCase {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let mut pattern = Vec::<u8>::arbitrary(u)?;
        if pattern.is_empty() {
            pattern.push(u8::arbitrary(u)?);
        }
        let text = Vec::<u8>::arbitrary(u)?;

        Ok(SearchCase { pattern, text })
    }
}

/// A wrapper around [`SearchCase`] such that the implementation of
/// [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
/// only generates bytes in `A`..=`C` and patterns of at most 16 bytes, which
/// makes occurrences, overlaps and partial matches frequent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCaseSmallAlphabet(pub SearchCase);

impl_deref! {SearchCaseSmallAlphabet, SearchCase}

impl<'a> Arbitrary<'a> for SearchCaseSmallAlphabet {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let m = u.int_in_range(1..=16)?;
        let mut pattern = Vec::with_capacity(m);
        for _ in 0..m {
            pattern.push(u.int_in_range(b'A'..=b'C')?);
        }

        let n = u.arbitrary_len::<u8>()?;
        let mut text = Vec::with_capacity(n);
        for _ in 0..n {
            text.push(u.int_in_range(b'A'..=b'C')?);
        }

        Ok(SearchCaseSmallAlphabet(SearchCase { pattern, text }))
    }
}

#[cfg(all(test, feature = "rand"))]
mod test {
    use super::*;
    use crate::{generate::rand_sequence, search::Algorithm};

    #[test]
    fn arbitrary_cases_agree() {
        for seed in 0..300 {
            let raw = rand_sequence(&(0..=u8::MAX).collect::<Vec<_>>(), 512, seed);
            let mut u = Unstructured::new(&raw);

            let Ok(case) = SearchCaseSmallAlphabet::arbitrary(&mut u) else {
                continue;
            };
            assert!(!case.pattern.is_empty());
            assert!(case.pattern.iter().chain(&case.text).all(|b| (b'A'..=b'C').contains(b)));

            let expected = Algorithm::BruteForce.run(&case.pattern, &case.text).unwrap().matches;
            for algorithm in [Algorithm::ShiftTable, Algorithm::FailureFunction] {
                assert_eq!(algorithm.run(&case.pattern, &case.text).unwrap().matches, expected);
            }
        }
    }

    #[test]
    fn arbitrary_pattern_is_never_empty() {
        let mut u = Unstructured::new(&[]);
        let case = SearchCase::arbitrary(&mut u).unwrap();
        assert_eq!(case.pattern.len(), 1);
    }
}
