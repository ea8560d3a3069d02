#![no_main]

use libfuzzer_sys::fuzz_target;
use seedkey_core::{mnemonic, Seed};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Parsing arbitrary text must never panic
        let _ = mnemonic::to_seed(s);
    }

    if data.len() >= 32 {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&data[..32]);
        let seed = Seed::new(bytes);
        let phrase = mnemonic::from_seed(&seed);
        assert_eq!(mnemonic::to_seed(&phrase).unwrap(), seed);
    }
});
