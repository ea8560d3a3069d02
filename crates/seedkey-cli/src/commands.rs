//! Output selection for the seedkey binary

use seedkey_core::{derive_from_seed, mnemonic, Address, OutputFormat, Seed};
use tracing::info;

/// What to print for the seed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Output {
    /// 64-byte private key (seed || public key)
    #[default]
    PrivateKey,
    /// 32-byte public key
    PublicKey,
    /// Checksummed base32 address
    Address,
    /// 25-word mnemonic for the seed
    Mnemonic,
}

/// Render the requested output as a single line (without the newline)
pub fn execute(output: Output, seed: &Seed, format: OutputFormat) -> String {
    let private_key = derive_from_seed(seed);
    info!(?output, ?format, "Rendering derived key");

    match output {
        Output::PrivateKey => format.render(private_key.as_bytes()),
        Output::PublicKey => format.render(private_key.public_key().as_bytes()),
        Output::Address => Address::from_public_key(&private_key.public_key()).to_string(),
        Output::Mnemonic => mnemonic::from_seed(seed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_key_output_formats() {
        let seed = Seed::new([0x00; 32]);

        let decimal = execute(Output::PrivateKey, &seed, OutputFormat::Decimal);
        assert!(decimal.starts_with("[0, 0, 0,"));
        assert_eq!(decimal.split(", ").count(), 64);

        let hex = execute(Output::PrivateKey, &seed, OutputFormat::Hex);
        assert_eq!(hex.len(), 128);
        assert!(hex.starts_with(&"00".repeat(32)));
    }

    #[test]
    fn test_public_key_output() {
        let seed = Seed::new([0x00; 32]);
        let hex = execute(Output::PublicKey, &seed, OutputFormat::Hex);
        let private = execute(Output::PrivateKey, &seed, OutputFormat::Hex);
        assert_eq!(hex, private[64..]);
    }

    #[test]
    fn test_address_and_mnemonic_ignore_format() {
        let seed = Seed::new([0x55; 32]);
        for output in [Output::Address, Output::Mnemonic] {
            assert_eq!(
                execute(output, &seed, OutputFormat::Decimal),
                execute(output, &seed, OutputFormat::Hex)
            );
        }
    }
}
