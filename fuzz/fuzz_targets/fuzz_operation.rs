#![no_main]
use libfuzzer_sys::fuzz_target;
use sevenz_report::{parse, parse_create, parse_update};

fuzz_target!(|data: &str| {
    let _ = parse_create(data);
    let _ = parse_update(data);
    let _ = parse(data);
});
