#![no_main]

use libfuzzer_sys::fuzz_target;
use retrace_diff::hunk::find_change_block;
use retrace_diff::line::DiffLine;

fuzz_target!(|data: &[u8]| {
    let lines: Vec<DiffLine> = data
        .iter()
        .map(|b| match b % 5 {
            0 => DiffLine::normal("ctx", 1, 1),
            1 => DiffLine::added("new", 1),
            2 => DiffLine::deleted("old", 1),
            3 => DiffLine::indicator("@@"),
            _ => DiffLine::placeholder(),
        })
        .collect();

    for anchor in 0..lines.len() {
        if let Some((start, end)) = find_change_block(&lines, anchor) {
            assert!(start <= anchor && anchor <= end && end < lines.len());
        }
    }
});
