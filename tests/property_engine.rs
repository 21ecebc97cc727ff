//! Property-based tests using proptest
//!
//! Tests the mathematical invariants of the derivation engine:
//! - Cardinality preservation of `annotate`
//! - Baseline rows normalize to exactly 1.0
//! - Per-group min-time dominance of `optimal_configurations`
//! - `sorted_optimal` is an ordered permutation
//! - Idempotence of annotation

use proptest::prelude::*;

use analizar::{
    annotate, optimal_configurations, sorted_optimal, AnnotatedObservation, Observation, Speedup,
};

/// One generated benchmark group: a (size, method) key plus per-thread times.
///
/// Thread counts within a group are unique, so the group has at most one
/// baseline row and the 1.0-speedup property holds without qualification.
fn group_strategy() -> impl Strategy<Value = Vec<Observation>> {
    (
        prop::sample::select(vec![32usize, 64, 100, 256, 512, 1024]),
        prop::sample::select(vec!["naive", "transposed", "blocked", "simd"]),
        proptest::collection::btree_map(1usize..=64, 1e-6f64..1e3, 1..8),
    )
        .prop_map(|(size, method, times)| {
            times
                .into_iter()
                .map(|(threads, time)| Observation::new(size, method, threads, time))
                .collect()
        })
}

/// A full observation table: several distinct-keyed groups flattened
fn table_strategy() -> impl Strategy<Value = Vec<Observation>> {
    proptest::collection::vec(group_strategy(), 0..6).prop_map(|groups| {
        let mut table: Vec<Observation> = Vec::new();
        for group in groups {
            for obs in group {
                // Colliding (size, method) keys across generated groups just
                // merge into one bigger group; properties below hold either way.
                table.push(obs);
            }
        }
        table
    })
}

proptest! {
    /// annotate preserves cardinality and row identity, in order
    #[test]
    fn prop_annotate_preserves_cardinality(table in table_strategy()) {
        let annotated = annotate(&table).expect("generated tables are valid");
        prop_assert_eq!(annotated.len(), table.len());
        for (raw, ann) in table.iter().zip(&annotated) {
            prop_assert_eq!(&ann.to_observation(), raw);
        }
    }

    /// Every group's first baseline row has speedup exactly 1.0, and every
    /// measured speedup in the group equals baseline_time / own_time
    #[test]
    fn prop_baseline_normalizes_to_one(table in table_strategy()) {
        let annotated = annotate(&table).expect("generated tables are valid");
        for (i, row) in annotated.iter().enumerate() {
            // The baseline is the FIRST threads==1 row of the group in
            // table order; merged groups may carry duplicate baseline runs.
            let base_idx = table.iter().position(|o| {
                o.size == row.size && o.method == row.method && o.threads == 1
            });
            match (base_idx, row.speedup) {
                (Some(j), Speedup::Measured(s)) => {
                    prop_assert_eq!(s, table[j].time_seconds / row.time_seconds);
                    if i == j {
                        prop_assert_eq!(s, 1.0);
                    }
                }
                (None, Speedup::Undefined) => {}
                (Some(_), Speedup::Undefined) => {
                    return Err(TestCaseError::fail("baseline exists but speedup undefined"));
                }
                (None, Speedup::Measured(_)) => {
                    return Err(TestCaseError::fail("no baseline but speedup measured"));
                }
            }
        }
    }

    /// The selected optimum dominates every row of its group
    #[test]
    fn prop_optimal_minimizes_group_time(table in table_strategy()) {
        let annotated = annotate(&table).expect("generated tables are valid");
        let optimal = optimal_configurations(&annotated);

        for config in &optimal {
            for row in annotated.iter().filter(|r| {
                r.size == config.size && r.method == config.method
            }) {
                prop_assert!(config.min_time_seconds <= row.time_seconds);
            }
        }
    }

    /// One optimal configuration per distinct group key
    #[test]
    fn prop_optimal_covers_every_group_once(table in table_strategy()) {
        let annotated = annotate(&table).expect("generated tables are valid");
        let optimal = optimal_configurations(&annotated);

        let mut expected: Vec<(usize, String)> = table
            .iter()
            .map(|o| (o.size, o.method.clone()))
            .collect();
        expected.sort();
        expected.dedup();

        let mut actual: Vec<(usize, String)> = optimal
            .iter()
            .map(|c| (c.size, c.method.clone()))
            .collect();
        actual.sort();
        actual.dedup();

        prop_assert_eq!(actual.len(), optimal.len(), "no duplicate group keys");
        let mut actual_sorted = optimal
            .iter()
            .map(|c| (c.size, c.method.clone()))
            .collect::<Vec<_>>();
        actual_sorted.sort();
        prop_assert_eq!(actual_sorted, expected);
    }

    /// sorted_optimal orders by (size asc, min_time asc) and permutes
    #[test]
    fn prop_sorted_optimal_is_ordered_permutation(table in table_strategy()) {
        let annotated = annotate(&table).expect("generated tables are valid");
        let optimal = optimal_configurations(&annotated);
        let sorted = sorted_optimal(optimal.clone());

        prop_assert_eq!(sorted.len(), optimal.len());
        for pair in sorted.windows(2) {
            let ordered = pair[0].size < pair[1].size
                || (pair[0].size == pair[1].size
                    && pair[0].min_time_seconds <= pair[1].min_time_seconds);
            prop_assert!(ordered, "out of order: {:?} then {:?}", pair[0], pair[1]);
        }

        let key = |c: &analizar::OptimalConfiguration| {
            (c.size, c.method.clone(), c.optimal_threads)
        };
        let mut before: Vec<_> = optimal.iter().map(key).collect();
        let mut after: Vec<_> = sorted.iter().map(key).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    /// Annotating the projection of an annotated table changes nothing
    #[test]
    fn prop_annotate_idempotent(table in table_strategy()) {
        let first = annotate(&table).expect("generated tables are valid");
        let projected: Vec<Observation> = first
            .iter()
            .map(AnnotatedObservation::to_observation)
            .collect();
        let second = annotate(&projected).expect("projected tables stay valid");
        prop_assert_eq!(first, second);
    }
}
