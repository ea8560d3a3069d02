//! Fixed-length secret seed

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Error, Result};
use crate::SEED_LEN;

/// 32-byte Ed25519 seed (the RFC 8032 secret key)
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    pub fn new(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a hex string, rejecting anything that does not decode to exactly 32 bytes
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = Zeroizing::new(hex::decode(s.trim())?);
        Self::try_from(bytes.as_slice())
    }
}

impl TryFrom<&[u8]> for Seed {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let array: [u8; SEED_LEN] = bytes.try_into().map_err(|_| Error::InvalidSeedLength {
            expected: SEED_LEN,
            got: bytes.len(),
        })?;
        Ok(Self(array))
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed([REDACTED])")
    }
}
