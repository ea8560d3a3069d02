#![no_main]

use libfuzzer_sys::fuzz_target;
use seedkey_core::Address;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Anything that parses must re-encode to the same string
        if let Ok(address) = s.parse::<Address>() {
            assert_eq!(address.to_string(), s);
        }
    }
});
