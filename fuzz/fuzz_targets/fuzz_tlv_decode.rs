#![no_main]

use fatoora::core::SchemaVersion;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must not panic — errors are fine, panics are bugs.
    let _ = fatoora::tlv::decode_record(data, SchemaVersion::Basic);
    let _ = fatoora::tlv::decode_record(data, SchemaVersion::Extended);
});
