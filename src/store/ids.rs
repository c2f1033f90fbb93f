//! Short random identifier generation
//!
//! Identifiers are 6 characters drawn uniformly from lowercase letters
//! and digits. Nothing here guarantees uniqueness; the store checks for
//! collisions at insert time.

use rand::Rng;

/// Alphabet identifiers are drawn from.
const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of every generated identifier.
pub const ID_LENGTH: usize = 6;

/// Generates one identifier from the process-wide RNG.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
