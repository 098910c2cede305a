//! Session token generation.

use base64::{Engine as _, engine::general_purpose};
use rand::prelude::RngExt;
use rand::rng;

/// Random bytes behind each token (256 bits of entropy).
const TOKEN_BYTES: usize = 32;

/// Produces opaque bearer tokens from a cryptographically secure source.
///
/// Tokens are URL-safe base64 without padding, 43 characters for 32 bytes.
/// This type makes no uniqueness promise; the session registry checks new
/// tokens against live sessions and regenerates on collision.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenGenerator;

impl TokenGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh random token.
    pub fn generate(&self) -> String {
        let mut token_bytes = [0u8; TOKEN_BYTES];
        rng().fill(&mut token_bytes);

        general_purpose::URL_SAFE_NO_PAD.encode(token_bytes)
    }
}
