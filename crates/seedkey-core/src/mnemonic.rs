//! 25-word mnemonic encoding of a seed
//!
//! The seed is split into little-endian 11-bit groups (24 words, the last one
//! carrying 3 data bits) and a checksum word taken from the first 11 bits of
//! SHA-512/256 over the seed. Words come from the BIP-39 English list.

use bip39::Language;
use sha2::{Digest, Sha512_256};
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::seed::Seed;
use crate::SEED_LEN;

const BITS_PER_WORD: u32 = 11;
const WORD_MASK: u32 = (1 << BITS_PER_WORD) - 1;
const DATA_WORDS: usize = (SEED_LEN * 8 + BITS_PER_WORD as usize - 1) / BITS_PER_WORD as usize;
const DELIMITER: &str = " ";

/// Number of words in a mnemonic, checksum included
pub const MNEMONIC_WORDS: usize = DATA_WORDS + 1;

fn to_u11_array(bytes: &[u8]) -> Vec<u16> {
    let mut buf = 0u32;
    let mut bit_count = 0u32;
    let mut out = Vec::with_capacity(DATA_WORDS);
    for &b in bytes {
        buf |= u32::from(b) << bit_count;
        bit_count += 8;
        if bit_count >= BITS_PER_WORD {
            out.push((buf & WORD_MASK) as u16);
            buf >>= BITS_PER_WORD;
            bit_count -= BITS_PER_WORD;
        }
    }
    if bit_count != 0 {
        out.push((buf & WORD_MASK) as u16);
    }
    out
}

fn from_u11_array(words: &[u16]) -> Vec<u8> {
    let mut buf = 0u32;
    let mut bit_count = 0u32;
    let mut out = Vec::with_capacity(words.len() * BITS_PER_WORD as usize / 8 + 1);
    for &w in words {
        buf |= u32::from(w) << bit_count;
        bit_count += BITS_PER_WORD;
        while bit_count >= 8 {
            out.push((buf & 0xff) as u8);
            buf >>= 8;
            bit_count -= 8;
        }
    }
    if bit_count != 0 {
        out.push((buf & 0xff) as u8);
    }
    out
}

fn checksum_index(seed: &[u8; SEED_LEN]) -> u16 {
    let digest = Sha512_256::digest(seed);
    ((u16::from(digest[1]) << 8) | u16::from(digest[0])) & WORD_MASK as u16
}

/// Encode a seed as 25 space-separated words
pub fn from_seed(seed: &Seed) -> String {
    let words = Language::English.word_list();
    let indices = Zeroizing::new(to_u11_array(seed.as_bytes()));

    let mut phrase: Vec<&str> = indices.iter().map(|&i| words[i as usize]).collect();
    phrase.push(words[checksum_index(seed.as_bytes()) as usize]);
    phrase.join(DELIMITER)
}

/// Decode a 25-word mnemonic back into its seed.
///
/// Words are matched case-insensitively and may be separated by any
/// whitespace.
pub fn to_seed(mnemonic: &str) -> Result<Seed> {
    let words: Vec<String> = mnemonic
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();
    if words.len() != MNEMONIC_WORDS {
        return Err(Error::InvalidMnemonic(format!(
            "expected {} words, got {}",
            MNEMONIC_WORDS,
            words.len()
        )));
    }

    let mut indices = Zeroizing::new(Vec::with_capacity(MNEMONIC_WORDS));
    for word in &words {
        let index = Language::English
            .find_word(word)
            .ok_or_else(|| Error::InvalidMnemonic(format!("unknown word: {}", word)))?;
        indices.push(index);
    }

    let bytes = Zeroizing::new(from_u11_array(&indices[..DATA_WORDS]));
    // 24 words carry 264 bits; everything past the seed must be zero padding
    if bytes[SEED_LEN..].iter().any(|&b| b != 0) {
        return Err(Error::InvalidMnemonic(
            "non-zero padding in final word".to_string(),
        ));
    }

    let seed = Seed::try_from(&bytes[..SEED_LEN])?;
    if checksum_index(seed.as_bytes()) != indices[DATA_WORDS] {
        return Err(Error::ChecksumMismatch);
    }

    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u11_packing_sizes() {
        assert_eq!(DATA_WORDS, 24);
        assert_eq!(MNEMONIC_WORDS, 25);
        assert_eq!(to_u11_array(&[0u8; SEED_LEN]).len(), DATA_WORDS);
        assert_eq!(from_u11_array(&[0u16; DATA_WORDS]).len(), 33);
    }

    #[test]
    fn test_u11_packing_is_little_endian() {
        // 0x07ff in the low 11 bits, remaining bits of byte 1 set to 0b10101
        let words = to_u11_array(&[0xff, 0xaf]);
        assert_eq!(words, vec![0x7ff, 0b10101]);
        assert_eq!(from_u11_array(&words), vec![0xff, 0xaf, 0x00]);
    }

    #[test]
    fn test_mnemonic_roundtrip() {
        let seed = Seed::new([0x9c; 32]);
        let phrase = from_seed(&seed);
        assert_eq!(phrase.split(' ').count(), MNEMONIC_WORDS);
        assert_eq!(to_seed(&phrase).unwrap(), seed);
    }

    #[test]
    fn test_mnemonic_accepts_loose_formatting() {
        let seed = Seed::new([0x31; 32]);
        let phrase = from_seed(&seed).to_uppercase().replace(' ', "\n  ");
        assert_eq!(to_seed(&phrase).unwrap(), seed);
    }

    #[test]
    fn test_mnemonic_wrong_word_count() {
        assert!(matches!(
            to_seed("abandon abandon abandon"),
            Err(Error::InvalidMnemonic(_))
        ));
    }

    #[test]
    fn test_mnemonic_unknown_word() {
        let phrase = from_seed(&Seed::new([0x02; 32]));
        let mut words: Vec<&str> = phrase.split(' ').collect();
        words[3] = "notaword";
        assert!(matches!(
            to_seed(&words.join(" ")),
            Err(Error::InvalidMnemonic(_))
        ));
    }

    #[test]
    fn test_mnemonic_bad_checksum() {
        let phrase = from_seed(&Seed::new([0x02; 32]));
        let mut words: Vec<&str> = phrase.split(' ').collect();
        let list = Language::English.word_list();
        let checksum = words[DATA_WORDS];
        words[DATA_WORDS] = if checksum == list[0] { list[1] } else { list[0] };
        assert_eq!(to_seed(&words.join(" ")), Err(Error::ChecksumMismatch));
    }

    #[test]
    fn test_mnemonic_nonzero_padding() {
        let phrase = from_seed(&Seed::new([0x00; 32]));
        let mut words: Vec<&str> = phrase.split(' ').collect();
        // Last data word may only use its 3 low bits
        words[DATA_WORDS - 1] = Language::English.word_list()[0x100];
        assert!(matches!(
            to_seed(&words.join(" ")),
            Err(Error::InvalidMnemonic(_))
        ));
    }
}
