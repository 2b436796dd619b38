//! QR code generation

use rand::Rng;

/// Alphabet for check-in codes (uppercase alphanumerics)
const QR_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Fixed code length
pub const QR_CODE_LEN: usize = 32;

/// Generate an opaque single-use check-in code
///
/// Callers must treat the code as structureless; the only contract is
/// 32 characters drawn from `[A-Z0-9]`.
pub fn generate_code() -> String {
    let mut rng = rand::thread_rng();
    (0..QR_CODE_LEN)
        .map(|_| QR_ALPHABET[rng.gen_range(0..QR_ALPHABET.len())] as char)
        .collect()
}
