//! Digest bytes → bounded integer.
//!
//! Reading bytes as a hex string and parsing it back in base 16 is the same as
//! accumulating them big-endian, so that is what [`fold`] does.

/// At most this many leading bytes contribute to a folded value.
pub const MAX_FOLD_BYTES: usize = 10;

/// Fold up to [`MAX_FOLD_BYTES`] bytes into an unsigned integer, big-endian.
///
/// Empty input folds to 0. Values wider than 64 bits saturate at `u64::MAX`,
/// matching `strtoul` on an overlong hex string.
pub fn fold(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .take(MAX_FOLD_BYTES)
        .try_fold(0u64, |acc, &b| acc.checked_mul(256)?.checked_add(u64::from(b)))
        .unwrap_or(u64::MAX)
}
