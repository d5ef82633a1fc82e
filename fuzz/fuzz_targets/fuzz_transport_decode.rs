#![no_main]

use fatoora::core::SchemaVersion;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(payload) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let _ = fatoora::transport::decode_fields(payload, SchemaVersion::Basic);
        let _ = fatoora::transport::decode_fields(payload, SchemaVersion::Extended);
    }
});
