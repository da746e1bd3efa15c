//! Sequence-level match metrics over token streams.

use std::collections::HashMap;
use std::hash::Hash;

/// Length of the longest contiguous run of tokens shared by `a` and `b`
///
/// This is longest common *substring*, not subsequence: a mismatch resets
/// the run. The DP table is kept as two rolling rows swapped each outer
/// iteration, so memory stays O(n) while time is O(m*n).
///
/// Returns 0 when either sequence is empty or nothing is shared.
pub fn longest_common_run<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let n = b.len();
    let mut prev_row = vec![0usize; n + 1];
    let mut current_row = vec![0usize; n + 1];
    let mut max_length = 0;

    for item in a {
        std::mem::swap(&mut prev_row, &mut current_row);
        for (j, other) in b.iter().enumerate() {
            if item == other {
                // Run extends the one ending at the diagonal predecessor
                current_row[j + 1] = prev_row[j] + 1;
                max_length = max_length.max(current_row[j + 1]);
            } else {
                current_row[j + 1] = 0;
            }
        }
    }

    max_length
}

/// Fraction of candidate tokens that also occur in the reference
///
/// Token counts are matched with multiplicity: each reference occurrence
/// can absorb at most one candidate occurrence. The sum of matches is
/// divided by the *candidate* length, not the reference's. The asymmetry
/// is part of the metric's definition; it is neither precision nor recall.
///
/// Returns 0.0 when either sequence is empty.
pub fn bag_overlap_ratio<T: Eq + Hash>(reference: &[T], candidate: &[T]) -> f32 {
    if reference.is_empty() || candidate.is_empty() {
        return 0.0;
    }

    let mut reference_counts: HashMap<&T, usize> = HashMap::new();
    for token in reference {
        *reference_counts.entry(token).or_insert(0) += 1;
    }

    let mut candidate_counts: HashMap<&T, usize> = HashMap::new();
    for token in candidate {
        *candidate_counts.entry(token).or_insert(0) += 1;
    }

    let matches: usize = reference_counts
        .iter()
        .filter_map(|(token, &count)| candidate_counts.get(token).map(|&c| count.min(c)))
        .sum();

    matches as f32 / candidate.len() as f32
}
