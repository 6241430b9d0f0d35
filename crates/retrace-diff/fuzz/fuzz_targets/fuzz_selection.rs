#![no_main]

use libfuzzer_sys::fuzz_target;
use retrace_diff::line::DiffLine;
use retrace_diff::selection::{SideIndexTranslator, make_selection};
use retrace_diff::twoside::TwoSideDiff;

fuzz_target!(|data: &[u8]| {
    let Some((&a, rest)) = data.split_first() else {
        return;
    };
    let Some((&b, body)) = rest.split_first() else {
        return;
    };

    let lines: Vec<DiffLine> = body
        .iter()
        .map(|byte| match byte % 5 {
            0 => DiffLine::normal("ctx", 1, 1),
            1 => DiffLine::added("new", 1),
            2 => DiffLine::deleted("old", 1),
            3 => DiffLine::indicator("@@"),
            _ => DiffLine::placeholder(),
        })
        .collect();

    let _ = std::hint::black_box(make_selection(
        &lines,
        usize::from(a),
        usize::from(b),
        a % 2 == 0,
        b % 2 == 0,
    ));

    let twoside = TwoSideDiff::from_combined(&lines);
    let _ = std::hint::black_box(twoside.to_combined_range(
        usize::from(a),
        usize::from(b),
        a % 2 == 0,
    ));
    let _ = std::hint::black_box(twoside.block_to_combined(
        usize::from(a),
        usize::from(b),
        b % 2 == 0,
    ));
});
