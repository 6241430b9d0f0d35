#![no_main]

use libfuzzer_sys::fuzz_target;
use retrace_log::commit::UserStore;
use retrace_log::parser::{RefDecoratorParser, parse_log};

fuzz_target!(|data: &[u8]| {
    // Arbitrary input may fail to parse, but must never panic.
    if let Ok(text) = std::str::from_utf8(data) {
        let mut users = UserStore::new();
        let _ = std::hint::black_box(parse_log(text, &mut users, &RefDecoratorParser));
    }
});
