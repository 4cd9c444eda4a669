//! Property-based tests for edit scripts.
//!
//! Uses proptest to generate pairs of short sequences over small alphabets,
//! where repeated symbols make ties between equally short scripts common.

use proptest::prelude::*;
use sift_core::script::{invert, new_side, old_side};
use sift_core::{
    diff, Comparator, Counting, Diff, Edit, EditKind, HistoryComparator, ScriptStats,
};

/// Edit distance from a classic longest-common-subsequence table
fn reference_distance(a: &[u8], b: &[u8]) -> usize {
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in 0..a.len() {
        for j in 0..b.len() {
            table[i + 1][j + 1] = if a[i] == b[j] {
                table[i][j] + 1
            } else {
                table[i][j + 1].max(table[i + 1][j])
            };
        }
    }
    a.len() + b.len() - 2 * table[a.len()][b.len()]
}

fn sequence() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"ABC".to_vec()), 0..24)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: kept+deleted symbols rebuild A, kept+inserted rebuild B.
    #[test]
    fn script_round_trips(a in sequence(), b in sequence()) {
        let script = diff(&a, &b).unwrap();
        prop_assert_eq!(old_side(&script), a.clone());
        prop_assert_eq!(new_side(&script), b.clone());

        let inverted = invert(&script);
        prop_assert_eq!(old_side(&inverted), b);
        prop_assert_eq!(new_side(&inverted), a);
    }

    /// Property: the number of changes is the true edit distance.
    #[test]
    fn script_is_minimal(a in sequence(), b in sequence()) {
        let script = diff(&a, &b).unwrap();
        let stats = ScriptStats::of(&script);
        prop_assert_eq!(stats.distance(), reference_distance(&a, &b));
        prop_assert_eq!(script.len(), a.len() + b.len() - stats.keeps);
    }

    /// Property: comparing a sequence with itself keeps every symbol.
    #[test]
    fn identity_keeps_everything(a in sequence()) {
        let script = diff(&a, &a).unwrap();
        let expected: Vec<Edit<u8>> = a.iter().map(|&s| Edit::new(EditKind::Keep, s)).collect();
        prop_assert_eq!(script, expected);
    }

    /// Property: swapping the inputs swaps insert and delete counts.
    #[test]
    fn swapped_inputs_mirror_counts(a in sequence(), b in sequence()) {
        let forward = ScriptStats::of(&diff(&a, &b).unwrap());
        let backward = ScriptStats::of(&diff(&b, &a).unwrap());
        prop_assert_eq!(forward.keeps, backward.keeps);
        prop_assert_eq!(forward.inserts, backward.deletes);
        prop_assert_eq!(forward.deletes, backward.inserts);
    }

    /// Property: repeated calls, strategies and index widths all agree.
    #[test]
    fn scripts_are_deterministic(a in sequence(), b in sequence()) {
        let mut traced = Comparator::with_tracker(Counting::new());
        let first = traced.compare(&a, &b).unwrap();
        prop_assert_eq!(&traced.compare(&a, &b).unwrap(), &first);

        let mut narrow = Comparator::new().with_width::<u16>();
        prop_assert_eq!(&narrow.compare(&a, &b).unwrap(), &first);

        let mut history = HistoryComparator::new().with_width::<u64>();
        prop_assert_eq!(&history.compare(&a, &b).unwrap(), &first);
    }

    /// Property: the trace spans D + 1 depths with at most one bit per
    /// diagonal visited after the first.
    #[test]
    fn trace_is_bounded_by_distance(a in sequence(), b in sequence()) {
        let mut comparator = Comparator::new();
        let (distance, trace) = comparator.trace(&a, &b).unwrap();
        prop_assert_eq!(distance, reference_distance(&a, &b));
        prop_assert_eq!(trace.depths(), distance + 1);
        prop_assert!(trace.bits() <= distance * (distance + 1) / 2);
    }
}
