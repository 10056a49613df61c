#![no_main]
use libfuzzer_sys::fuzz_target;
use sevenz_report::extract_error;

fuzz_target!(|data: &str| {
    // The extracted block is always a verbatim slice of the input
    if let Some(message) = extract_error(data) {
        assert!(data.contains(&message));
    }
});
