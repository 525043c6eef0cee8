// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use std::collections::HashSet;
use std::thread;

use itertools::Itertools;
use lazy_static::lazy_static;
use log::info;

use pairwise::coverage::{check_coverage, collect_and_check};
use pairwise::{generate, Generator, PairwiseError, PairwiseGenerator};

lazy_static! {
    /// Dimension sizes with the exact rows expected for them.
    static ref SCENARIOS: Vec<(Vec<usize>, Vec<Vec<usize>>)> = vec![
        (vec![2, 2, 1, 1], vec![vec![0, 0, 0, 0], vec![1, 1, 0, 0], vec![0, 1, 0, 0], vec![1, 0, 0, 0]]),
        (vec![1, 2], vec![vec![0, 0], vec![0, 1]]),
        (vec![1, 3, 1, 1, 1], vec![vec![0, 0, 0, 0, 0], vec![0, 1, 0, 0, 0], vec![0, 2, 0, 0, 0]]),
        (vec![1, 2, 1, 1, 1], vec![vec![0, 0, 0, 0, 0], vec![0, 1, 0, 0, 0]]),
        (vec![1, 1, 1], vec![vec![0, 0, 0]]),
    ];
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn collect(dim_sizes: &[usize]) -> Vec<Vec<usize>> {
    generate(dim_sizes)
        .expect("Valid dimension sizes")
        .collect::<Result<_, _>>()
        .expect("No internal errors")
}

#[test]
fn scenarios() {
    init_logger();
    for (dim_sizes, expected) in SCENARIOS.iter() {
        let rows = collect(dim_sizes);
        assert_eq!(rows.len(), expected.len(), "{:?}", dim_sizes);

        let found: HashSet<_> = rows.iter().cloned().collect();
        let expected: HashSet<_> = expected.iter().cloned().collect();
        assert_eq!(found, expected, "{:?}", dim_sizes);
    }
}

#[test]
fn many_tuples() {
    init_logger();
    let dim_sizes = [15, 10, 3, 1];
    let rows = collect(&dim_sizes);

    for (dim1, dim2) in (0..dim_sizes.len()).tuple_combinations::<(usize, usize)>() {
        for (val1, val2) in (0..dim_sizes[dim1]).cartesian_product(0..dim_sizes[dim2]) {
            let count = rows.iter().filter(|row| row[dim1] == val1 && row[dim2] == val2).count();
            assert!(count > 0, "Pair (d{}={}, d{}={}) is not covered", dim1, val1, dim2, val2);
        }
    }
}

#[test]
fn validation() {
    assert_eq!(
        Generator.generate(None).err(),
        Some(PairwiseError::NullArgument { name: "dim_sizes" }),
    );
    let cases: [&[usize]; 8] = [&[], &[0], &[1], &[5], &[0, 0], &[5, 0], &[0, 5], &[1, 1, 1, 1, 0]];
    for dim_sizes in cases {
        match generate(dim_sizes) {
            Err(PairwiseError::InvalidArgument { .. }) => {}
            Err(e) => panic!("Expected InvalidArgument for {:?}, got {:?}", dim_sizes, e),
            Ok(_) => panic!("Expected InvalidArgument for {:?}", dim_sizes),
        }
    }
}

#[test]
fn all_ones() {
    for dimensions in 2..10 {
        assert_eq!(collect(&vec![1; dimensions]), vec![vec![0; dimensions]]);
    }
}

#[test]
fn sweep_sizes() {
    init_logger();
    for dimensions in 2..10 {
        for values in 1..10 {
            let identical = vec![values; dimensions];
            let increasing: Vec<usize> = (1..=dimensions).collect();
            let decreasing: Vec<usize> = increasing.iter().rev().cloned().collect();

            for (name, dim_sizes) in [("identical", identical), ("increasing", increasing), ("decreasing", decreasing)] {
                let report = collect_and_check(&dim_sizes)
                    .unwrap_or_else(|e| panic!("{} {:?}: {}", name, dim_sizes, e));
                assert!(report.tuple_count <= report.pair_count);
                info!(
                    "{} ({}:{}); {}; {}; {}; {:e}; {:.3}",
                    name, dimensions, values,
                    report.sum_repetitions, report.max_repetitions, report.tuple_count,
                    report.cartesian_cardinality as f64, report.reduction_log10(),
                );
            }
        }
    }
}

#[test]
fn independent_threads() {
    let inputs = vec![vec![3, 4, 2], vec![5, 5, 5, 5], vec![2, 7, 3, 1, 2]];
    let handles: Vec<_> = inputs
        .into_iter()
        .map(|dim_sizes| thread::spawn(move || {
            let rows = collect(&dim_sizes);
            check_coverage(&dim_sizes, &rows).map(|report| report.tuple_count)
        }))
        .collect();

    for handle in handles {
        let tuple_count = handle.join().expect("Thread panicked").expect("Covering");
        assert!(tuple_count > 0);
    }
}

#[test]
fn lazy_rows() {
    let mut tuples = generate(&[6, 6, 6, 6]).unwrap();
    let first: Vec<_> = tuples.by_ref().take(3).collect::<Result<_, _>>().unwrap();
    assert_eq!(first.len(), 3);
    assert!(tuples.uncovered() > 0);

    let rest: Vec<_> = tuples.collect::<Result<_, _>>().unwrap();
    let rows: Vec<_> = first.into_iter().chain(rest).collect();
    check_coverage(&[6, 6, 6, 6], &rows).unwrap();
}
