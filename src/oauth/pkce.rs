// PKCE helper for the S256 challenge method (RFC 7636)
use base64::{engine::general_purpose, Engine as _};
use sha2::{Digest, Sha256};

use crate::random::{secure_random_bytes, secure_random_int, RandomError};

pub const MIN_VERIFIER_LEN: usize = 43;
pub const MAX_VERIFIER_LEN: usize = 128;

/// The 66 unreserved URI characters RFC 7636 allows in a code verifier.
pub const VERIFIER_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";

/// Generate a code verifier: a random length in [43, 128], then that many
/// secure random bytes mapped into the unreserved alphabet.
///
/// The `byte % 66` mapping slightly favors the first 58 alphabet characters
/// (256 is not a multiple of 66). Accepted: the verifier keeps well over the
/// entropy RFC 7636 asks for, and rejection sampling would change the
/// observable output distribution for no security gain here.
pub fn generate_code_verifier() -> Result<String, RandomError> {
    let len = secure_random_int(MIN_VERIFIER_LEN as u64, MAX_VERIFIER_LEN as u64)? as usize;
    let bytes = secure_random_bytes(len)?;
    Ok(bytes
        .into_iter()
        .map(|b| VERIFIER_ALPHABET[b as usize % VERIFIER_ALPHABET.len()] as char)
        .collect())
}

/// S256 code challenge: base64url (no padding) of SHA-256 over the verifier
/// bytes. 43 characters for the 32-byte digest.
pub fn code_challenge_s256(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    general_purpose::URL_SAFE_NO_PAD.encode(hash)
}
