//! Opaque bearer token generation and hashing.
//!
//! Raw tokens are random bytes from the operating system, rendered as
//! URL-safe base64 without padding so they can go straight into a cookie
//! value or a query parameter. Only [`hash`] of a raw token is ever
//! persisted.

use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// The minimum number of random bytes behind every issued token.
///
/// Requests for fewer bytes are raised to this floor.
pub const MIN_BYTES_PER_TOKEN: usize = 32;

/// A raw, unhashed token as handed to the client.
///
/// The value is never printed through `Debug`; call [`RawToken::as_str`]
/// to place it into a cookie or link.
#[derive(Clone, PartialEq, Eq)]
pub struct RawToken(String);

impl RawToken {
    /// Borrows the token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the token text.
    pub fn into_string(self) -> String {
        self.0
    }

    /// SHA-256 digest of this token, as stored by the credential tables.
    pub fn hash(&self) -> String {
        hash(&self.0)
    }
}

impl fmt::Debug for RawToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawToken(<redacted>)")
    }
}

impl From<String> for RawToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RawToken {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for RawToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generates a token from `num_bytes` bytes of OS randomness.
///
/// `num_bytes` below [`MIN_BYTES_PER_TOKEN`] is clamped up to the floor.
/// There is no fallback when the OS entropy source fails: the error is
/// returned as [`Error::Entropy`].
pub fn generate(num_bytes: usize) -> Result<RawToken> {
    let mut bytes = vec![0u8; num_bytes.max(MIN_BYTES_PER_TOKEN)];
    OsRng.try_fill_bytes(&mut bytes).map_err(Error::Entropy)?;
    Ok(RawToken(URL_SAFE_NO_PAD.encode(&bytes)))
}

/// Computes the URL-safe SHA-256 digest of a raw token.
///
/// No server-side key is mixed in, so the same input always maps to the
/// same digest and lookups can match on equality.
pub fn hash(raw: &str) -> String {
    let digest = Sha256::digest(raw.as_bytes());
    URL_SAFE_NO_PAD.encode(digest)
}
