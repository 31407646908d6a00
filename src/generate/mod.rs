use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};

/// Generates a sequence of `length` bytes drawn uniformly from `alpha`,
/// reproducible from `seed`. Small alphabets produce texts with many
/// repeated, overlapping and near-miss occurrences.
///
/// ### Panics
///
/// If `alpha` is empty and `length` is non-zero.
#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    (1..=length).map(|_| alpha[rng.next_u32() as usize % alpha.len()]).collect()
}

/// Copies a pattern of `length` bytes out of `text` at a position chosen
/// from `seed`, so the pattern is guaranteed at least one occurrence. Returns
/// [`None`] if `length` is zero or longer than `text`.
#[must_use]
pub fn rand_pattern_from(text: &[u8], length: usize, seed: u64) -> Option<Vec<u8>> {
    if length == 0 || length > text.len() {
        return None;
    }

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let start = (rng.next_u64() % (text.len() - length + 1) as u64) as usize;
    Some(text[start..start + length].to_vec())
}
