//! Checksummed base32 addresses
//!
//! An address is the public key followed by the last four bytes of its
//! SHA-512/256 digest, encoded as unpadded RFC 4648 base32.

use std::fmt;
use std::str::FromStr;

use data_encoding::BASE32_NOPAD;
use sha2::{Digest, Sha512_256};

use crate::crypto::{PublicKey, PUBLIC_KEY_LEN};
use crate::error::{Error, Result};

const CHECKSUM_LEN: usize = 4;

/// Length of the encoded address in characters
pub const ADDRESS_LEN: usize = 58;

/// Address for an Ed25519 public key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    public_key: PublicKey,
}

impl Address {
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        Self {
            public_key: *public_key,
        }
    }

    /// Whether the encoded address starts with `prefix`.
    ///
    /// Only the public key is encoded, the checksum is skipped. The first 51
    /// characters do not depend on it.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        BASE32_NOPAD
            .encode(self.public_key.as_bytes())
            .starts_with(prefix)
    }

    fn checksum(&self) -> [u8; CHECKSUM_LEN] {
        let digest = Sha512_256::digest(self.public_key.as_bytes());
        let mut checksum = [0u8; CHECKSUM_LEN];
        checksum.copy_from_slice(&digest[digest.len() - CHECKSUM_LEN..]);
        checksum
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut raw = Vec::with_capacity(PUBLIC_KEY_LEN + CHECKSUM_LEN);
        raw.extend_from_slice(self.public_key.as_bytes());
        raw.extend_from_slice(&self.checksum());
        f.write_str(&BASE32_NOPAD.encode(&raw))
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() != ADDRESS_LEN {
            return Err(Error::InvalidAddress(format!(
                "expected {} characters, got {}",
                ADDRESS_LEN,
                s.len()
            )));
        }

        let raw = BASE32_NOPAD
            .decode(s.as_bytes())
            .map_err(|e| Error::InvalidAddress(e.to_string()))?;
        if raw.len() != PUBLIC_KEY_LEN + CHECKSUM_LEN {
            return Err(Error::InvalidAddress(format!(
                "decoded to {} bytes",
                raw.len()
            )));
        }

        let mut key = [0u8; PUBLIC_KEY_LEN];
        key.copy_from_slice(&raw[..PUBLIC_KEY_LEN]);
        let address = Self::from_public_key(&PublicKey::new(key));

        if address.checksum()[..] != raw[PUBLIC_KEY_LEN..] {
            return Err(Error::ChecksumMismatch);
        }

        Ok(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::derive_from_seed;
    use crate::seed::Seed;

    fn sample_address() -> Address {
        let key = derive_from_seed(&Seed::new([0x24; 32]));
        Address::from_public_key(&key.public_key())
    }

    #[test]
    fn test_address_length_and_alphabet() {
        let encoded = sample_address().to_string();
        assert_eq!(encoded.len(), ADDRESS_LEN);
        assert!(encoded
            .chars()
            .all(|c| c.is_ascii_uppercase() || ('2'..='7').contains(&c)));
    }

    #[test]
    fn test_address_parse_roundtrip() {
        let address = sample_address();
        let parsed: Address = address.to_string().parse().unwrap();
        assert_eq!(parsed, address);
    }

    #[test]
    fn test_address_detects_corruption() {
        let encoded = sample_address().to_string();

        // Flip one character inside the public key portion
        let mut chars: Vec<char> = encoded.chars().collect();
        chars[10] = if chars[10] == 'A' { 'B' } else { 'A' };
        let corrupted: String = chars.into_iter().collect();

        assert_eq!(corrupted.parse::<Address>(), Err(Error::ChecksumMismatch));
    }

    #[test]
    fn test_address_rejects_bad_input() {
        assert!(matches!(
            "ABC".parse::<Address>(),
            Err(Error::InvalidAddress(_))
        ));
        assert!(matches!(
            "1".repeat(ADDRESS_LEN).parse::<Address>(),
            Err(Error::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_has_prefix_agrees_with_full_address() {
        let address = sample_address();
        let encoded = address.to_string();

        assert!(address.has_prefix(""));
        assert!(address.has_prefix(&encoded[..8]));
        assert!(address.has_prefix(&encoded[..51]));
        assert!(!address.has_prefix("not-base32"));
    }
}
