//! Property-based tests using proptest.
//!
//! These tests verify invariants of the matrix algebra and the Hopfield
//! learning rule.

use engram::prelude::*;
use proptest::prelude::*;

// Strategy for generating small matrices of a fixed shape
fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    proptest::collection::vec(-100.0f64..100.0, rows * cols).prop_map(move |data| {
        Matrix::from_vec(rows, cols, data).expect("Test data should be valid")
    })
}

// Strategy for matrices of arbitrary small shape
fn any_matrix() -> impl Strategy<Value = Matrix> {
    (1usize..7, 1usize..7).prop_flat_map(|(r, c)| matrix_strategy(r, c))
}

// Strategy for row or column vectors
fn vector_strategy() -> impl Strategy<Value = Matrix> {
    (1usize..16, any::<bool>()).prop_flat_map(|(n, as_row)| {
        if as_row {
            matrix_strategy(1, n)
        } else {
            matrix_strategy(n, 1)
        }
    })
}

// Strategy for a network size and a batch of patterns of that size
fn patterns_strategy() -> impl Strategy<Value = (usize, Vec<Vec<bool>>)> {
    (1usize..12).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec(proptest::collection::vec(any::<bool>(), n), 1..6),
        )
    })
}

fn train_all(size: usize, patterns: &[Vec<bool>]) -> HopfieldNetwork {
    let mut net = HopfieldNetwork::new(size).expect("size > 0");
    for p in patterns {
        net.train(p).expect("pattern matches network size");
    }
    net
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Matrix algebra properties
    #[test]
    fn transpose_is_involution(m in any_matrix()) {
        prop_assert_eq!(math::transpose(&math::transpose(&m)), m);
    }

    #[test]
    fn identity_is_neutral_for_multiply(m in any_matrix()) {
        let right = math::identity(m.n_cols()).expect("n > 0");
        let left = math::identity(m.n_rows()).expect("n > 0");
        prop_assert_eq!(&math::multiply(&m, &right).expect("cols match"), &m);
        prop_assert_eq!(&math::multiply(&left, &m).expect("rows match"), &m);
    }

    #[test]
    fn dot_with_self_is_squared_length(v in vector_strategy()) {
        let dot = math::dot_product(&v, &v).expect("vector");
        let len = math::vector_length(&v).expect("vector");
        prop_assert!((dot - len * len).abs() <= 1e-9 * dot.max(1.0));
    }

    #[test]
    fn add_then_subtract_restores(
        (a, b) in (1usize..6, 1usize..6)
            .prop_flat_map(|(r, c)| (matrix_strategy(r, c), matrix_strategy(r, c)))
    ) {
        let back = math::subtract(&math::add(&a, &b).expect("same shape"), &b).expect("same shape");
        for (x, y) in back.as_slice().iter().zip(a.as_slice()) {
            prop_assert!((x - y).abs() < 1e-9);
        }
    }

    #[test]
    fn mismatched_shapes_are_rejected(m in any_matrix()) {
        let (r, c) = m.shape();
        let wider = Matrix::zeros(r, c + 1).expect("valid");
        prop_assert!(
            matches!(math::add(&m, &wider), Err(EngramError::IncompatibleShape { .. })),
            "add accepted mismatched shapes",
        );
        prop_assert!(
            matches!(math::subtract(&m, &wider), Err(EngramError::IncompatibleShape { .. })),
            "subtract accepted mismatched shapes",
        );
        let tall = Matrix::zeros(c + 1, 1).expect("valid");
        prop_assert!(
            matches!(math::multiply(&m, &tall), Err(EngramError::IncompatibleShape { .. })),
            "multiply accepted mismatched shapes",
        );
    }

    #[test]
    fn non_vectors_are_rejected(m in (2usize..6, 2usize..6).prop_flat_map(|(r, c)| matrix_strategy(r, c))) {
        prop_assert!(
            matches!(math::vector_length(&m), Err(EngramError::NotVector { .. })),
            "vector_length accepted a non-vector",
        );
        prop_assert!(
            matches!(math::dot_product(&m, &m), Err(EngramError::NotVector { .. })),
            "dot_product accepted a non-vector",
        );
    }

    // Hopfield properties
    #[test]
    fn fresh_network_has_zero_weights(n in 1usize..20) {
        let net = HopfieldNetwork::new(n).expect("size > 0");
        prop_assert!(net.weights().is_zero());
        prop_assert!(net.weights().is_square());
    }

    #[test]
    fn diagonal_is_always_zero((n, patterns) in patterns_strategy()) {
        let net = train_all(n, &patterns);
        for i in 0..n {
            prop_assert_eq!(net.weights().get(i, i).expect("in bounds"), 0.0);
        }
    }

    #[test]
    fn every_train_call_is_counted((n, patterns) in patterns_strategy()) {
        let net = train_all(n, &patterns);
        prop_assert_eq!(net.pattern_count(), patterns.len());
        prop_assert!(net.is_trained());
    }

    #[test]
    fn training_commutes((n, patterns) in patterns_strategy()) {
        let mut reversed = patterns.clone();
        reversed.reverse();
        prop_assert_eq!(train_all(n, &patterns), train_all(n, &reversed));
    }

    #[test]
    fn weights_bounded_by_pattern_count((n, patterns) in patterns_strategy()) {
        let net = train_all(n, &patterns);
        let bound = patterns.len() as f64;
        prop_assert!(net.weights().as_slice().iter().all(|w| w.abs() <= bound));
    }

    #[test]
    fn untrained_network_outputs_all_false(p in proptest::collection::vec(any::<bool>(), 1..20)) {
        let net = HopfieldNetwork::new(p.len()).expect("size > 0");
        prop_assert_eq!(net.present(&p).expect("pattern fits"), vec![false; p.len()]);
    }

    #[test]
    fn single_pattern_is_a_fixed_point(p in proptest::collection::vec(any::<bool>(), 3..20)) {
        // With one stored pattern each activation is (n - 1) * p_j, so recall
        // is exact for n >= 2.
        let net = train_all(p.len(), std::slice::from_ref(&p));
        prop_assert_eq!(net.present(&p).expect("pattern fits"), p);
    }

    #[test]
    fn wrong_length_is_rejected(n in 1usize..10, extra in 1usize..5, shorter in any::<bool>()) {
        let mut net = HopfieldNetwork::new(n).expect("size > 0");
        let len = if shorter { n.saturating_sub(extra) } else { n + extra };
        prop_assume!(len != n);
        let pattern = vec![true; len];
        prop_assert_eq!(
            net.present(&pattern),
            Err(EngramError::SizeMismatch { expected: n, actual: len })
        );
        prop_assert!(net.train(&pattern).is_err());
        prop_assert_eq!(net.pattern_count(), 0);
        prop_assert!(net.weights().is_zero());
    }
}
