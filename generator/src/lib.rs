// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate provides a greedy generator of pairwise covering tuples.
//!
//! Given the sizes of N dimensions it lazily produces rows such that every pair of values of every two dimensions
//! appears in at least one row. The result is not guaranteed to be minimal.
//!
//! # Algorithm
//! All pairs start in generation 0. A row is built by repeatedly freezing one or two dimensions using the first
//! pair found, searching the generations earliest first. A pair that ends up in the row, directly or through the
//! dimensions frozen before, moves to the next generation. Generation stops once generation 0 is empty.
//!
//! # Example
//! ```
//! let rows: Vec<Vec<usize>> = generator::generate(&[1, 2])
//!     .expect("Valid dimension sizes")
//!     .collect::<Result<_, _>>()
//!     .expect("No internal errors");
//!
//! assert_eq!(rows, vec![vec![0, 0], vec![0, 1]]);
//! ```

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

use std::iter::FusedIterator;

use common::combinators::{cartesian_product, triangular_product};
use common::{sub_time_it, DimValue, PairwiseError, MIN_DIMENSIONS};
use log::{debug, info, trace};
use pair_set::{Pair, PairSet};

pub use generations::Generations;
pub use tuple::Tuple;

pub mod generations;
pub mod tuple;

/// This trait allows for the switching of pairwise generation methods.
pub trait PairwiseGenerator {
    /// Used for logging purposes.
    const NAME: &'static str;

    /// The lazy sequence of rows returned by [PairwiseGenerator::generate].
    type Tuples: Iterator<Item=Result<Vec<usize>, PairwiseError>>;

    /// Validate `dim_sizes` and return the rows covering all its pairs.
    ///
    /// [None] stands for a missing input and fails with [PairwiseError::NullArgument].
    fn generate(&self, dim_sizes: Option<&[usize]>) -> Result<Self::Tuples, PairwiseError>;
}

/// The generator moving used pairs through generations.
#[derive(Debug, Default, Copy, Clone)]
pub struct Generator;

impl PairwiseGenerator for Generator {
    const NAME: &'static str = "Generations";

    type Tuples = Tuples;

    fn generate(&self, dim_sizes: Option<&[usize]>) -> Result<Self::Tuples, PairwiseError> {
        let dim_sizes = validate(dim_sizes)?;
        let pairs = sub_time_it!(PairSet::all_pairs(dim_sizes), "Pair generation");
        info!("{}: {} dimensions, {} pairs to cover", Self::NAME, dim_sizes.len(), pairs.len());
        Ok(Tuples::new(dim_sizes.to_vec(), pairs))
    }
}

/// Generate the rows covering all pairs of the given dimension sizes.
///
/// Shorthand for [Generator::generate] with an input that is always present.
pub fn generate(dim_sizes: &[usize]) -> Result<Tuples, PairwiseError> {
    Generator.generate(Some(dim_sizes))
}

/// Check that there are at least two dimensions and that none of them is empty.
pub fn validate(dim_sizes: Option<&[usize]>) -> Result<&[usize], PairwiseError> {
    let dim_sizes = dim_sizes.ok_or(PairwiseError::NullArgument { name: "dim_sizes" })?;

    if dim_sizes.len() < MIN_DIMENSIONS {
        return Err(PairwiseError::invalid(
            "dim_sizes",
            format!("dim_sizes.len() must be greater or equal to {}, got {}", MIN_DIMENSIONS, dim_sizes.len()),
        ));
    }

    if let Some(dim) = dim_sizes.iter().position(|&size| size == 0) {
        return Err(PairwiseError::invalid("dim_sizes", format!("dimension {} has no value", dim)));
    }

    Ok(dim_sizes)
}

/// The lazy sequence of rows.
///
/// Every call to [Iterator::next] builds one complete row. After an error the sequence ends.
#[derive(Debug, Clone)]
pub struct Tuples {
    dim_sizes: Vec<usize>,
    generations: Generations,
    produced: usize,
    failed: bool,
}

impl Tuples {
    fn new(dim_sizes: Vec<usize>, pairs: PairSet) -> Self {
        Self {
            dim_sizes,
            generations: Generations::new(pairs),
            produced: 0,
            failed: false,
        }
    }

    /// The dimension sizes the rows are generated for.
    pub fn dim_sizes(&self) -> &[usize] {
        &self.dim_sizes
    }

    /// The generations in their current state.
    pub fn generations(&self) -> &Generations {
        &self.generations
    }

    /// The number of pairs not covered by the rows produced so far.
    pub fn uncovered(&self) -> usize {
        self.generations.first().len()
    }

    /// The number of rows produced so far.
    pub fn produced(&self) -> usize {
        self.produced
    }

    fn next_tuple(&mut self) -> Result<Vec<usize>, PairwiseError> {
        let mut tuple = Tuple::new(self.dim_sizes.len());

        while !tuple.is_complete() {
            self.freeze_one_or_two_dims(&mut tuple)?;
        }

        let row = tuple.into_result()?;
        debug_assert!(row.iter().zip(self.dim_sizes.iter()).all(|(value, size)| value < size));
        Ok(row)
    }

    fn freeze_one_or_two_dims(&mut self, tuple: &mut Tuple) -> Result<(), PairwiseError> {
        let view: &Tuple = tuple;
        let (generation, pair) = self.generations
            .iter()
            .enumerate()
            .find_map(|(generation, pairs)| best_pair(pairs, view).map(|pair| (generation, pair)))
            .ok_or_else(|| PairwiseError::logic(format!("no pair found for the free dimensions {:?}", view.free_dims())))?;

        trace!("Freezing {} from generation {}", pair, generation);

        let new_dims: Vec<DimValue> = [pair.first(), pair.second()]
            .into_iter()
            .filter(|dim_value| !tuple.is_frozen(dim_value.dim))
            .collect();
        debug_assert!(!new_dims.is_empty());

        if new_dims.len() == 2 {
            self.generations.move_forward(pair, generation)?;
        }

        for &frozen in tuple.frozen_dim_values() {
            for &new_dim in new_dims.iter() {
                self.generations.move_forward(Pair::from_dim_values(frozen, new_dim)?, generation)?;
            }
        }

        for new_dim in new_dims {
            tuple.add(new_dim.dim, new_dim.val)?;
        }
        Ok(())
    }
}

/// Find the first pair of `pairs` fitting the tuple.
///
/// Pairs between two free dimensions come first, then pairs between a free dimension and a frozen assignment.
fn best_pair(pairs: &PairSet, tuple: &Tuple) -> Option<Pair> {
    if pairs.is_empty() {
        return None;
    }

    triangular_product(tuple.free_dims())
        .find_map(|(dim_a, dim_b)| pairs.first_matching_dims(dim_a, dim_b))
        .or_else(|| {
            cartesian_product(tuple.free_dims(), tuple.frozen_dim_values())
                .find_map(|(dim, frozen)| pairs.first_matching_value(frozen.dim, frozen.val, dim))
        })
}

impl Iterator for Tuples {
    type Item = Result<Vec<usize>, PairwiseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.generations.is_exhausted() {
            return None;
        }

        match self.next_tuple() {
            Ok(row) => {
                self.produced += 1;
                debug!("Row {}: {:?}, {} pairs uncovered", self.produced, row, self.uncovered());
                Some(Ok(row))
            }
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        // Every row covers at least one new pair.
        let uncovered = self.uncovered();
        (uncovered.min(1), Some(uncovered))
    }
}

impl FusedIterator for Tuples {}
