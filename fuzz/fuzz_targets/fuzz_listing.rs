#![no_main]
use libfuzzer_sys::fuzz_target;
use sevenz_report::{parse_listing, resolve_nested};

fuzz_target!(|data: &str| {
    // Listings must fail cleanly, never panic
    if let Ok(archive) = parse_listing(data) {
        let _ = resolve_nested(&archive);
        assert_eq!(archive.entries().count(), archive.len());
    }
});
