//! Seedkey Core - Ed25519 key expansion from a fixed seed
//!
//! This crate provides the seed and key types, the deterministic seed to
//! private key derivation, and the address and mnemonic encodings built on
//! top of the derived public key.

pub mod address;
pub mod crypto;
pub mod error;
pub mod mnemonic;
pub mod render;
pub mod seed;

pub use address::{Address, ADDRESS_LEN};
pub use crypto::{
    derive, derive_from_seed, PrivateKey, PublicKey, PRIVATE_KEY_LEN, PUBLIC_KEY_LEN,
};
pub use error::{Error, Result};
pub use mnemonic::MNEMONIC_WORDS;
pub use render::OutputFormat;
pub use seed::Seed;

/// Seed length in bytes
pub const SEED_LEN: usize = 32;
