//! Opaque id generation for participants and matches.

use rand::Rng;

/// Alphabet for generated ids (URL-safe).
const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Length of generated ids.
pub const ID_LENGTH: usize = 21;

/// Generate a fresh opaque id.
///
/// Ids are random 21-character strings over a URL-safe alphabet and carry no
/// meaning beyond uniqueness within a store.
pub fn new_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
