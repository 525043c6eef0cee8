// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate checks whether a set of rows covers every pair of the given dimension sizes.
//!
//! Besides the check itself it reports how often pairs are repeated and how much smaller the rows are than the
//! full cartesian product.
//!
//! # Example
//! ```
//! let report = coverage::collect_and_check(&[3, 3, 2]).expect("Covering");
//! assert_eq!(report.pair_count, 3 * 3 + 3 * 2 + 3 * 2);
//! assert!(report.tuple_count <= report.cartesian_cardinality as usize);
//! ```

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

use common::{time_it, PairwiseError};
use log::{debug, warn};
use pair_set::Pair;
use thiserror::Error;


/// The reasons a set of rows is not a pairwise covering.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum CoverageError {
    /// The dimension sizes themselves are not valid.
    #[error(transparent)]
    Generation(#[from] PairwiseError),

    /// A row does not have one value per dimension.
    #[error("row {row} has {found} values, expected {expected}")]
    WrongLength {
        /// The index of the row.
        row: usize,
        /// The length of the row.
        found: usize,
        /// The number of dimensions.
        expected: usize,
    },

    /// A value is outside the domain of its dimension.
    #[error("row {row} assigns {value} to dimension {dim}, which has {size} values")]
    ValueOutOfRange {
        /// The index of the row.
        row: usize,
        /// The dimension.
        dim: usize,
        /// The value found.
        value: usize,
        /// The size of the dimension.
        size: usize,
    },

    /// A pair does not appear in any row.
    #[error("pair {0} is not covered")]
    Uncovered(Pair),
}

/// Statistics of a covering set of rows.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CoverageReport {
    /// The number of rows.
    pub tuple_count: usize,

    /// The number of pairs that had to be covered.
    pub pair_count: usize,

    /// Sum over all pairs of the number of times it appears beyond the first.
    pub sum_repetitions: usize,

    /// The highest number of times a single pair appears beyond the first.
    pub max_repetitions: usize,

    /// The number of rows of the full cartesian product, saturating at [u128::MAX].
    pub cartesian_cardinality: u128,
}

impl CoverageReport {
    /// `log10(tuple_count / cartesian_cardinality)`, so `-2.0` means a hundred times fewer rows.
    pub fn reduction_log10(&self) -> f64 {
        (self.tuple_count as f64 / self.cartesian_cardinality as f64).log10()
    }
}

/// The number of occurrences of every pair, stored per dimension pair.
struct Occurrences<'a> {
    dim_sizes: &'a [usize],
    /// `offsets[dim1][dim2]` is the start of the block of `(dim1, dim2)`.
    offsets: Vec<Vec<usize>>,
    counts: Vec<usize>,
}

impl<'a> Occurrences<'a> {
    fn new(dim_sizes: &'a [usize]) -> Self {
        let mut offsets = vec![vec![0; dim_sizes.len()]; dim_sizes.len()];
        let mut length = 0;
        for dim1 in 0..dim_sizes.len() {
            for dim2 in dim1 + 1..dim_sizes.len() {
                offsets[dim1][dim2] = length;
                length += dim_sizes[dim1] * dim_sizes[dim2];
            }
        }
        Self { dim_sizes, offsets, counts: vec![0; length] }
    }

    #[inline]
    fn index(&self, dim1: usize, val1: usize, dim2: usize, val2: usize) -> usize {
        self.offsets[dim1][dim2] + val1 * self.dim_sizes[dim2] + val2
    }

    fn add_row(&mut self, row: &[usize]) {
        for dim1 in 0..row.len() {
            for dim2 in dim1 + 1..row.len() {
                let index = self.index(dim1, row[dim1], dim2, row[dim2]);
                self.counts[index] += 1;
            }
        }
    }

    fn first_uncovered(&self) -> Option<Pair> {
        for dim1 in 0..self.dim_sizes.len() {
            for dim2 in dim1 + 1..self.dim_sizes.len() {
                for val1 in 0..self.dim_sizes[dim1] {
                    for val2 in 0..self.dim_sizes[dim2] {
                        if self.counts[self.index(dim1, val1, dim2, val2)] == 0 {
                            return Pair::new(dim1, val1, dim2, val2).ok();
                        }
                    }
                }
            }
        }
        None
    }
}

/// Check that `rows` cover every pair of `dim_sizes` and compute the [CoverageReport].
///
/// The rows are checked for their length and domain before their pairs are counted.
pub fn check_coverage<R: AsRef<[usize]>>(dim_sizes: &[usize], rows: &[R]) -> Result<CoverageReport, CoverageError> {
    generator::validate(Some(dim_sizes))?;

    let mut occurrences = Occurrences::new(dim_sizes);
    for (row_id, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != dim_sizes.len() {
            return Err(CoverageError::WrongLength { row: row_id, found: row.len(), expected: dim_sizes.len() });
        }
        if let Some((dim, (&value, &size))) = row.iter().zip(dim_sizes.iter()).enumerate().find(|(_, (value, size))| value >= size) {
            return Err(CoverageError::ValueOutOfRange { row: row_id, dim, value, size });
        }
        occurrences.add_row(row);
    }

    if let Some(pair) = occurrences.first_uncovered() {
        warn!("Pair {} is not covered by {} rows", pair, rows.len());
        return Err(CoverageError::Uncovered(pair));
    }

    let report = CoverageReport {
        tuple_count: rows.len(),
        pair_count: occurrences.counts.len(),
        sum_repetitions: occurrences.counts.iter().map(|count| count - 1).sum(),
        max_repetitions: occurrences.counts.iter().map(|count| count - 1).max().unwrap_or(0),
        cartesian_cardinality: dim_sizes.iter().fold(1u128, |acc, &size| acc.saturating_mul(size as u128)),
    };
    debug!("{:?}", report);
    Ok(report)
}

/// Generate the rows for `dim_sizes` and check them.
pub fn collect_and_check(dim_sizes: &[usize]) -> Result<CoverageReport, CoverageError> {
    let rows = time_it!(
        generator::generate(dim_sizes)?.collect::<Result<Vec<_>, _>>(),
        "Generation"
    )?;
    check_coverage(dim_sizes, &rows)
}
