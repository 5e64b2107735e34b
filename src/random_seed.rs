//! Fresh random seeds for "surprise me" renders.
//!
//! Uses the process-wide `fastrand` generator; these seeds only need to be
//! varied, never reproducible.

/// Characters a generated seed may contain.
pub const SEED_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
/// Length used when the caller asks for zero characters.
pub const DEFAULT_RANDOM_SEED_LENGTH: usize = 12;

/// A random seed of `len` characters from [`SEED_ALPHABET`].
///
/// `len == 0` yields [`DEFAULT_RANDOM_SEED_LENGTH`] characters.
pub fn generate_seed(len: usize) -> String {
    generate_seed_with(&mut fastrand::Rng::new(), len)
}

/// [`generate_seed`] drawing from a caller-supplied generator.
pub fn generate_seed_with(rng: &mut fastrand::Rng, len: usize) -> String {
    let len = if len == 0 {
        DEFAULT_RANDOM_SEED_LENGTH
    } else {
        len
    };
    (0..len)
        .map(|_| SEED_ALPHABET[rng.usize(..SEED_ALPHABET.len())] as char)
        .collect()
}
