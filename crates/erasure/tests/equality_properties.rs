//! Property-based tests for `AnyEquatable`
//!
//! Boxes are built from arbitrary members of the `Base` family, with arbitrary counts.

use erasure::equatable::{AnyEquatable, Strategy};
use erasure::family::{Base, Child1, Child2};
use erasure::matrix::ComparisonMatrix;
use proptest::prelude::*;

fn member(strategy: Strategy, kind: u8, count: usize) -> AnyEquatable {
    match kind % 3 {
        0 => strategy.wrap(Base::new(count)),
        1 => strategy.wrap(Child1::new(count)),
        _ => strategy.wrap(Child2::new(count)),
    }
}

fn members(strategy: Strategy, specs: &[(u8, usize)]) -> Vec<AnyEquatable> {
    specs.iter()
        .map(|&(kind, count)| member(strategy, kind, count))
        .collect()
}

proptest! {
    /// Normalized boxes are symmetric
    #[test]
    fn normalized_symmetry(lhs in (any::<u8>(), 0usize..4), rhs in (any::<u8>(), 0usize..4)) {
        let lhs = member(Strategy::Normalized, lhs.0, lhs.1);
        let rhs = member(Strategy::Normalized, rhs.0, rhs.1);
        prop_assert_eq!(lhs == rhs, rhs == lhs);
    }

    /// Every box equals itself, whatever the strategy
    #[test]
    fn reflexivity(kind in any::<u8>(), count in any::<usize>(), normalized in any::<bool>()) {
        let strategy = if normalized { Strategy::Normalized } else { Strategy::Naive };
        let value = member(strategy, kind, count);
        prop_assert!(value == value);
    }

    /// Normalized boxes compare equal exactly when their counts are equal
    #[test]
    fn normalized_equality_follows_count(lhs in (any::<u8>(), 0usize..4), rhs in (any::<u8>(), 0usize..4)) {
        let expected = lhs.1 == rhs.1;
        let lhs = member(Strategy::Normalized, lhs.0, lhs.1);
        let rhs = member(Strategy::Normalized, rhs.0, rhs.1);
        prop_assert_eq!(lhs == rhs, expected);
    }

    /// Comparison matrices of normalized boxes are equivalence relations
    #[test]
    fn normalized_matrix_is_an_equivalence(specs in prop::collection::vec((any::<u8>(), 0usize..3), 1..8)) {
        let matrix = ComparisonMatrix::of(&members(Strategy::Normalized, &specs));
        prop_assert!(matrix.is_reflexive());
        prop_assert!(matrix.is_symmetric());
        prop_assert!(matrix.is_transitive());
    }

    /// Naive boxes of a single concrete type stay symmetric, only mixing variants breaks it
    #[test]
    fn naive_symmetry_within_one_type(kind in any::<u8>(), lhs in 0usize..4, rhs in 0usize..4) {
        let lhs = member(Strategy::Naive, kind, lhs);
        let rhs = member(Strategy::Naive, kind, rhs);
        prop_assert_eq!(lhs == rhs, rhs == lhs);
    }
}
