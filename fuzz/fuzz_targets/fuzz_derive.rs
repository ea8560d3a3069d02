#![no_main]

use libfuzzer_sys::fuzz_target;
use seedkey_core::{derive, Error, SEED_LEN};

fuzz_target!(|data: &[u8]| {
    match derive(data) {
        Ok(key) => {
            assert_eq!(data.len(), SEED_LEN);
            assert_eq!(&key.as_bytes()[..SEED_LEN], data);

            // Deterministic
            let again = derive(data).unwrap();
            assert_eq!(key, again);
        }
        Err(Error::InvalidSeedLength { expected, got }) => {
            assert_eq!(expected, SEED_LEN);
            assert_eq!(got, data.len());
            assert_ne!(got, SEED_LEN);
        }
        Err(e) => panic!("unexpected error: {}", e),
    }
});
