use crate::{
    search::{MatchError, SIGMA, errors::try_table},
    stats::Counters,
};

/// Bad-character shifts indexed directly by byte value.
pub type BadCharacterTable = [usize; SIGMA];

/// Builds the bad-character table for `pattern`. Every byte maps to its
/// distance from the end of the pattern at its rightmost occurrence,
/// excluding the final position. Bytes that do not occur there map to `m`.
///
/// ### Errors
///
/// [`MatchError::InvalidPattern`] if `pattern` is empty.
pub fn bad_character_table(pattern: &[u8]) -> Result<BadCharacterTable, MatchError> {
    if pattern.is_empty() {
        return Err(MatchError::InvalidPattern);
    }
    Ok(build_bad_character(pattern, &mut Counters::default()))
}

/// Computes the suffix lengths of `pattern`: entry `i` is the length of the
/// longest substring ending at `i` that is also a suffix of the whole
/// pattern. Entry `m - 1` is therefore always `m`.
///
/// ### Errors
///
/// [`MatchError::InvalidPattern`] if `pattern` is empty, or
/// [`MatchError::AllocationFailure`].
pub fn suffix_lengths(pattern: &[u8]) -> Result<Vec<usize>, MatchError> {
    if pattern.is_empty() {
        return Err(MatchError::InvalidPattern);
    }
    build_suffix_lengths(pattern, &mut Counters::default())
}

/// Builds the good-suffix table for `pattern`. Entry `i` is the shift to
/// apply after a mismatch at pattern position `i` (or at `0` after a full
/// match), aligning the matched suffix with its previous occurrence or with a
/// border of the pattern.
///
/// ### Errors
///
/// [`MatchError::InvalidPattern`] if `pattern` is empty, or
/// [`MatchError::AllocationFailure`].
pub fn good_suffix_table(pattern: &[u8]) -> Result<Vec<usize>, MatchError> {
    if pattern.is_empty() {
        return Err(MatchError::InvalidPattern);
    }
    build_good_suffix(pattern, &mut Counters::default())
}

/// Requires a non-empty pattern.
pub(crate) fn build_bad_character(pattern: &[u8], c: &mut Counters) -> BadCharacterTable {
    let m = pattern.len();
    let mut table = [m; SIGMA];
    c.writes += SIGMA as u64;

    // The final position is skipped so a mismatch there still shifts
    for (i, &b) in pattern[..m - 1].iter().enumerate() {
        c.branches += 1;
        c.pattern_bytes_read += 1;
        table[b as usize] = m - i - 1;
        c.writes += 1;
    }
    c.branches += 1;

    table
}

/// Requires a non-empty pattern. The matched segment is `(g, f]`: the
/// substring ending at `f` that equals a suffix of the pattern, extending
/// left to just after `g`.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
pub(crate) fn build_suffix_lengths(pattern: &[u8], c: &mut Counters) -> Result<Vec<usize>, MatchError> {
    let m = pattern.len();
    let mut suff = try_table(m, 0usize)?;
    suff[m - 1] = m;
    c.writes += 1;

    let last = m as isize - 1;
    let mut g = last;
    let mut f = last;
    c.writes += 2;

    for i in (0..last).rev() {
        c.branches += 1;

        c.branches += 1;
        if i > g {
            let known = suff[(i + last - f) as usize];
            c.lookups += 1;

            c.branches += 1;
            if (known as isize) < i - g {
                suff[i as usize] = known;
                c.writes += 1;
                continue;
            }
        }

        c.branches += 1;
        if i < g {
            g = i;
            c.writes += 1;
        }
        f = i;
        c.writes += 1;

        loop {
            c.branches += 1;
            if g < 0 {
                break;
            }
            c.compare_pattern();
            if pattern[g as usize] != pattern[(g + last - f) as usize] {
                break;
            }
            g -= 1;
            c.writes += 1;
        }

        suff[i as usize] = (f - g) as usize;
        c.writes += 1;
    }
    c.branches += 1;

    Ok(suff)
}

/// Requires a non-empty pattern. The suffix lengths are transient and are not
/// part of the returned table.
pub(crate) fn build_good_suffix(pattern: &[u8], c: &mut Counters) -> Result<Vec<usize>, MatchError> {
    let m = pattern.len();
    let suff = build_suffix_lengths(pattern, c)?;
    let mut table = try_table(m, m)?;
    c.writes += m as u64;

    // Prefixes that are also suffixes fill every shorter unset shift
    let mut j = 0;
    c.writes += 1;
    for i in (0..m).rev() {
        c.branches += 1;

        c.lookups += 1;
        c.branches += 1;
        if suff[i] == i + 1 {
            while j < m - 1 - i {
                c.branches += 1;

                c.lookups += 1;
                c.branches += 1;
                if table[j] == m {
                    table[j] = m - 1 - i;
                    c.writes += 1;
                }
                j += 1;
                c.writes += 1;
            }
            c.branches += 1;
        }
    }
    c.branches += 1;

    // Inner occurrences of suffixes take priority over borders
    for (i, &s) in suff[..m - 1].iter().enumerate() {
        c.branches += 1;
        c.lookups += 1;
        table[m - 1 - s] = m - 1 - i;
        c.writes += 1;
    }
    c.branches += 1;

    Ok(table)
}
