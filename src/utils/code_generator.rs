//! Short code generation.
//!
//! Codes are drawn from the OS CSPRNG, encoded as URL-safe base64 and stripped
//! of `-`, `_` and `=`, leaving the 62-character alphabet `[A-Za-z0-9]`.

use base64::Engine as _;

/// Number of characters in every generated short code.
pub const SHORT_CODE_LENGTH: usize = 6;

/// Random bytes drawn per round. 9 bytes encode to exactly 12 characters.
const RANDOM_BYTES_PER_ROUND: usize = 9;

/// Generates a cryptographically secure random short code.
///
/// Base64 maps each 6-bit group uniformly onto 64 symbols, so discarding the
/// two separator symbols leaves the other 62 uniform. If a round yields fewer
/// than [`SHORT_CODE_LENGTH`] usable characters, another round is drawn.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut code = String::with_capacity(SHORT_CODE_LENGTH);

    while code.len() < SHORT_CODE_LENGTH {
        let mut buffer = [0u8; RANDOM_BYTES_PER_ROUND];
        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        let encoded = base64::engine::general_purpose::URL_SAFE.encode(buffer);

        code.extend(
            encoded
                .chars()
                .filter(|c| !matches!(c, '-' | '_' | '='))
                .take(SHORT_CODE_LENGTH - code.len()),
        );
    }

    code
}

/// Returns whether `code` has the shape of a generated short code.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == SHORT_CODE_LENGTH && code.chars().all(|c| c.is_ascii_alphanumeric())
}
