//! Fuzz target for the format dispatcher and XML extractor.
//!
//! Arbitrary payloads must produce a record or an error, never a panic.

#![no_main]

use chembl::{Assay, Bioactivity, Compound, Entity};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);

    let _ = Bioactivity::parse(&input);
    let _ = Bioactivity::parse_list(&input);
    let _ = Compound::parse(&input);
    let _ = Assay::parse_list(&input);
});
