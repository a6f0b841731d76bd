//! Fuzz target for ChemblId.
//!
//! Parsing must never panic, and anything accepted must round-trip exactly.

#![no_main]

use chembl::ChemblId;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(id) = ChemblId::parse(input) {
            assert_eq!(id.as_str(), input);
            assert!(ChemblId::is_valid(input));
            let _ = id.number();
        }
    }
});
