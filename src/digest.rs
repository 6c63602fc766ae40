//! Digest providers.
//!
//! The generator only needs "digest bytes of message + optional salt" for a
//! given [`HashAlgorithm`]. [`DigestProvider`] is that seam; [`RustCryptoDigest`]
//! is the production implementation on top of the RustCrypto hash crates.
//!
//! | Algorithm | Crate | Digest length |
//! |---|---|---|
//! | MD5 | `md-5` | 16 bytes |
//! | SHA-1 | `sha1` | 20 bytes |
//! | SHA-256 | `sha2` | 32 bytes |
//! | SHA-512 | `sha2` | 64 bytes |

use crate::options::HashAlgorithm;
use sha2::Digest;

/// Computes the digest of a message with an optional salt appended.
pub trait DigestProvider: Sync {
    fn digest(&self, message: &[u8], salt: Option<&[u8]>, algorithm: HashAlgorithm) -> Vec<u8>;
}

/// RustCrypto-backed provider. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoDigest;

impl RustCryptoDigest {
    pub fn new() -> Self {
        Self
    }
}

impl DigestProvider for RustCryptoDigest {
    fn digest(&self, message: &[u8], salt: Option<&[u8]>, algorithm: HashAlgorithm) -> Vec<u8> {
        match algorithm {
            HashAlgorithm::Md5 => hash_with::<md5::Md5>(message, salt),
            HashAlgorithm::Sha1 => hash_with::<sha1::Sha1>(message, salt),
            HashAlgorithm::Sha256 => hash_with::<sha2::Sha256>(message, salt),
            HashAlgorithm::Sha512 => hash_with::<sha2::Sha512>(message, salt),
        }
    }
}

fn hash_with<D: Digest>(message: &[u8], salt: Option<&[u8]>) -> Vec<u8> {
    let mut hasher = D::new();
    hasher.update(message);
    if let Some(salt) = salt {
        hasher.update(salt);
    }
    hasher.finalize().to_vec()
}

/// Lowercase hex rendering of a digest.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
