#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any scannable buffer must re-serialize to a buffer that scans to the
    // same fields.
    if let Ok(fields) = fatoora::tlv::scan_fields(data) {
        let mut buf = Vec::new();
        for field in &fields {
            field.write_to(&mut buf);
        }
        assert_eq!(fatoora::tlv::scan_fields(&buf).unwrap(), fields);
    }
});
