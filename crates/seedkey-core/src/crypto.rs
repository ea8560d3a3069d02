//! Ed25519 key expansion
//!
//! A private key here is the 64-byte RFC 8032 keypair encoding: the seed
//! followed by the compressed public point. The expansion itself (SHA-512 of
//! the seed, scalar clamping, base point multiplication) is delegated to
//! `ed25519-dalek`.

use std::fmt;

use ed25519_dalek::SigningKey;
use tracing::{debug, instrument};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Result;
use crate::seed::Seed;
use crate::SEED_LEN;

/// Compressed Edwards point length
pub const PUBLIC_KEY_LEN: usize = 32;

/// Seed followed by public key
pub const PRIVATE_KEY_LEN: usize = SEED_LEN + PUBLIC_KEY_LEN;

/// Ed25519 public key (32 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_LEN]);

impl PublicKey {
    pub fn new(bytes: [u8; PUBLIC_KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        let mut bytes = [0u8; PUBLIC_KEY_LEN];
        hex::decode_to_slice(s.trim(), &mut bytes)?;
        Ok(Self(bytes))
    }
}

/// Ed25519 private key: seed || public key (64 bytes)
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; PRIVATE_KEY_LEN]);

impl PrivateKey {
    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_LEN] {
        &self.0
    }

    /// The seed half
    pub fn seed(&self) -> Seed {
        let mut bytes = [0u8; SEED_LEN];
        bytes.copy_from_slice(&self.0[..SEED_LEN]);
        Seed::new(bytes)
    }

    /// The public key half
    pub fn public_key(&self) -> PublicKey {
        let mut bytes = [0u8; PUBLIC_KEY_LEN];
        bytes.copy_from_slice(&self.0[SEED_LEN..]);
        PublicKey(bytes)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &self.public_key().to_hex())
            .finish_non_exhaustive()
    }
}

/// Derive the Ed25519 private key for a raw seed.
///
/// Fails with [`crate::Error::InvalidSeedLength`] unless `seed` is exactly 32 bytes;
/// no key material is computed in that case.
#[instrument(skip_all, fields(seed_len = seed.len()))]
pub fn derive(seed: &[u8]) -> Result<PrivateKey> {
    let seed = Seed::try_from(seed)?;
    Ok(derive_from_seed(&seed))
}

/// Derive the Ed25519 private key for an already validated seed
pub fn derive_from_seed(seed: &Seed) -> PrivateKey {
    let signing_key = SigningKey::from_bytes(seed.as_bytes());
    let private_key = PrivateKey(signing_key.to_keypair_bytes());

    debug!(
        public_key = %private_key.public_key().to_hex(),
        "Expanded Ed25519 seed"
    );

    private_key
}
