// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use itertools::Itertools;

use super::*;

fn pair(dim_a: usize, val_a: usize, dim_b: usize, val_b: usize) -> Pair {
    Pair::new(dim_a, val_a, dim_b, val_b).expect("Distinct dimensions")
}

#[test]
fn test_pair_is_canonical() {
    let a = pair(3, 1, 0, 2);
    let b = pair(0, 2, 3, 1);
    assert_eq!(a, b);
    assert_eq!((a.dim1(), a.val1(), a.dim2(), a.val2()), (0, 2, 3, 1));
    assert_eq!(a.first(), DimValue::new(0, 2));
    assert_eq!(a.second(), DimValue::new(3, 1));
}

#[test]
fn test_pair_same_dimension() {
    match Pair::new(2, 0, 2, 1) {
        Err(PairwiseError::InvalidArgument { .. }) => {}
        other => panic!("Expected InvalidArgument, got {:?}", other),
    }
    assert!(Pair::from_dim_values(DimValue::new(1, 0), DimValue::new(1, 0)).is_err());
}

#[test]
fn test_pair_value_of() {
    let p = pair(4, 7, 1, 3);
    assert!(p.contains_dim(1));
    assert!(p.contains_dim(4));
    assert!(!p.contains_dim(2));
    assert_eq!(p.value_of(4), Some(7));
    assert_eq!(p.value_of(1), Some(3));
    assert_eq!(p.value_of(0), None);
}

#[test]
fn test_all_pairs() {
    let dim_sizes = [3, 2, 1, 4];
    let pairs = PairSet::all_pairs(&dim_sizes);

    let expected: usize = (0..dim_sizes.len())
        .tuple_combinations::<(usize, usize)>()
        .map(|(a, b)| dim_sizes[a] * dim_sizes[b])
        .sum();
    assert_eq!(pairs.len(), expected);

    for p in pairs.iter() {
        assert!(p.dim1() < p.dim2());
        assert!(p.val1() < dim_sizes[p.dim1()]);
        assert!(p.val2() < dim_sizes[p.dim2()]);
    }
}

#[test]
fn test_add_remove() {
    let mut pairs = PairSet::new();
    assert!(pairs.is_empty());

    pairs.add(pair(0, 1, 1, 1)).expect("First insertion");
    assert_eq!(pairs.len(), 1);
    assert!(pairs.contains(&pair(1, 1, 0, 1)));

    match pairs.add(pair(1, 1, 0, 1)) {
        Err(PairwiseError::LogicError(_)) => {}
        other => panic!("Expected LogicError, got {:?}", other),
    }
    assert_eq!(pairs.len(), 1);

    assert!(pairs.remove(&pair(0, 1, 1, 1)));
    assert!(!pairs.remove(&pair(0, 1, 1, 1)));
    assert!(pairs.is_empty());
    assert_eq!(pairs.first_matching_dims(0, 1), None);
    assert_eq!(pairs.first_matching_value(1, 1, 0), None);
}

#[test]
fn test_first_matching() {
    let pairs: PairSet = vec![pair(0, 0, 2, 1), pair(1, 2, 2, 0)].into_iter().collect();

    assert_eq!(pairs.first_matching(2, 1, 0, 0), Some(pair(0, 0, 2, 1)));
    assert_eq!(pairs.first_matching(0, 0, 2, 1), Some(pair(0, 0, 2, 1)));
    assert_eq!(pairs.first_matching(0, 0, 2, 0), None);
    assert_eq!(pairs.first_matching(2, 0, 2, 0), None);
}

#[test]
fn test_first_matching_value_both_directions() {
    let pairs: PairSet = vec![pair(0, 1, 3, 2), pair(0, 1, 3, 0), pair(0, 0, 3, 1), pair(1, 0, 3, 0)]
        .into_iter()
        .collect();

    // (0, 1) with any value of 3: smallest value first
    assert_eq!(pairs.first_matching_value(0, 1, 3), Some(pair(0, 1, 3, 0)));
    // (3, 1) with any value of 0
    assert_eq!(pairs.first_matching_value(3, 1, 0), Some(pair(0, 0, 3, 1)));
    // (3, 0) with any value of 0 or 1
    assert_eq!(pairs.first_matching_value(3, 0, 0), Some(pair(0, 1, 3, 0)));
    assert_eq!(pairs.first_matching_value(3, 0, 1), Some(pair(1, 0, 3, 0)));

    assert_eq!(pairs.first_matching_value(3, 2, 1), None);
    assert_eq!(pairs.first_matching_value(0, 2, 3), None);
    assert_eq!(pairs.first_matching_value(0, 1, 0), None);
}

#[test]
fn test_first_matching_dims() {
    let mut pairs = PairSet::all_pairs(&[2, 2, 3]);

    assert_eq!(pairs.first_matching_dims(2, 0), Some(pair(0, 0, 2, 0)));
    assert!(pairs.remove(&pair(0, 0, 2, 0)));
    assert_eq!(pairs.first_matching_dims(0, 2), Some(pair(0, 0, 2, 1)));
    assert_eq!(pairs.first_matching_dims(1, 1), None);

    for val1 in 0..2 {
        for val2 in 0..2 {
            assert!(pairs.remove(&pair(0, val1, 1, val2)));
        }
    }
    assert_eq!(pairs.first_matching_dims(0, 1), None);
    assert!(pairs.first_matching_dims(1, 2).is_some());
}

#[test]
fn test_iter_is_sorted() {
    let pairs = PairSet::all_pairs(&[2, 2, 2]);
    let listed: Vec<_> = pairs.iter().map(|p| (p.dim1(), p.dim2(), p.val1(), p.val2())).collect();
    let mut sorted = listed.clone();
    sorted.sort();
    assert_eq!(listed, sorted);
}
