#![no_main]

use libfuzzer_sys::fuzz_target;
use retrace_log::commit::UserStore;
use retrace_log::parser::{RefDecoratorParser, parse_log_filtered};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // First record doubles as the filter, the rest is the log body.
        let (filter, rest) = match text.split_once('\n') {
            Some(parts) => parts,
            None => ("mod.rs", text),
        };
        let mut users = UserStore::new();
        let _ = std::hint::black_box(parse_log_filtered(
            rest,
            filter,
            &mut users,
            &RefDecoratorParser,
        ));
    }
});
