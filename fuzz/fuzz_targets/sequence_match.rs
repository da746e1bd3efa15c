#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use afinar::eval::{bag_overlap_ratio, longest_common_run};

/// Fuzz target for the sequence match metrics
///
/// Checks the metric invariants hold for arbitrary token streams: bounds,
/// symmetry of the run length, and stability of the overlap ratio.

#[derive(Arbitrary, Debug)]
struct SequencePair {
    a: Vec<u32>,
    b: Vec<u32>,
}

fuzz_target!(|pair: SequencePair| {
    let run = longest_common_run(&pair.a, &pair.b);

    // Invariant 1: bounded by the shorter input
    assert!(run <= pair.a.len().min(pair.b.len()));

    // Invariant 2: symmetric
    assert_eq!(run, longest_common_run(&pair.b, &pair.a));

    // Invariant 3: a sequence always fully matches itself
    assert_eq!(longest_common_run(&pair.a, &pair.a), pair.a.len());

    // Invariant 4: the overlap ratio stays inside the unit interval
    let ratio = bag_overlap_ratio(&pair.a, &pair.b);
    assert!((0.0..=1.0).contains(&ratio));

    // Invariant 5: empty inputs never score
    assert_eq!(longest_common_run(&pair.a, &[]), 0);
    assert_eq!(bag_overlap_ratio(&[], &pair.b), 0.0);

    // Invariant 6: a shared run implies a non-zero overlap on the same pair
    if run > 0 && !pair.b.is_empty() {
        assert!(bag_overlap_ratio(&pair.a, &pair.b) > 0.0);
    }
});
