//! Seedkey CLI - prints the Ed25519 key material for an embedded seed
//!
//! With no arguments the binary prints the 64-byte private key for
//! [`EMBEDDED_SEED`] as a decimal byte array on a single line.

pub mod commands;
pub mod config;

pub use commands::{execute, Output};
pub use config::CliConfig;

/// Seed expanded when none is supplied
pub const EMBEDDED_SEED: [u8; 32] = [
    108, 75, 154, 1, 135, 158, 88, 246, 92, 77, 139, 103, 47, 229, 239, 40, 220, 185, 84, 75,
    117, 203, 247, 26, 91, 7, 240, 156, 134, 212, 162, 234,
];

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "seedkey=warn,seedkey_cli=warn,seedkey_core=warn";
