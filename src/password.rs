//! Random passwords for shared sessions.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use rand::seq::SliceRandom;
use rand::Rng;

/// Length of generated session passwords.
pub const SESSION_PASSWORD_LEN: usize = 12;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a session password: ASCII letters only, no repeated characters.
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}

/// Generate with a caller-supplied RNG.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    LETTERS
        .choose_multiple(rng, SESSION_PASSWORD_LEN)
        .map(|&b| b as char)
        .collect()
}
