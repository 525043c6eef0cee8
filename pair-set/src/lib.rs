// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate contains the [Pair] and [PairSet] structs.
//!
//! A [Pair] is one combination of a value from one dimension and a value from another dimension.
//! A [PairSet] holds the pairs of a single generation and allows lookups on a partial key.

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use common::{DimValue, PairwiseError};
use log::trace;

#[cfg(test)]
mod test_pair_set;

/// A value combination of two distinct dimensions.
///
/// The pair is canonical: `dim1 < dim2` always holds, whatever the order it was created in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Pair {
    dim1: usize,
    val1: usize,
    dim2: usize,
    val2: usize,
}

impl Pair {
    /// Create the canonical pair of `(dim_a, val_a)` and `(dim_b, val_b)`.
    ///
    /// Fails with [PairwiseError::InvalidArgument] if both dimensions are the same.
    pub fn new(dim_a: usize, val_a: usize, dim_b: usize, val_b: usize) -> Result<Self, PairwiseError> {
        if dim_a == dim_b {
            return Err(PairwiseError::invalid("dim_b", format!("a pair needs two distinct dimensions, got {} twice", dim_a)));
        }
        Ok(Self::canonical(dim_a, val_a, dim_b, val_b))
    }

    /// See [Pair::new].
    pub fn from_dim_values(a: DimValue, b: DimValue) -> Result<Self, PairwiseError> {
        Self::new(a.dim, a.val, b.dim, b.val)
    }

    #[inline]
    fn canonical(dim_a: usize, val_a: usize, dim_b: usize, val_b: usize) -> Self {
        debug_assert_ne!(dim_a, dim_b);
        if dim_a < dim_b {
            Self { dim1: dim_a, val1: val_a, dim2: dim_b, val2: val_b }
        } else {
            Self { dim1: dim_b, val1: val_b, dim2: dim_a, val2: val_a }
        }
    }

    /// The lowest dimension of this pair.
    #[inline]
    pub fn dim1(&self) -> usize { self.dim1 }
    /// The value of [Pair::dim1].
    #[inline]
    pub fn val1(&self) -> usize { self.val1 }
    /// The highest dimension of this pair.
    #[inline]
    pub fn dim2(&self) -> usize { self.dim2 }
    /// The value of [Pair::dim2].
    #[inline]
    pub fn val2(&self) -> usize { self.val2 }

    /// The assignment of the lowest dimension.
    #[inline]
    pub fn first(&self) -> DimValue { DimValue::new(self.dim1, self.val1) }

    /// The assignment of the highest dimension.
    #[inline]
    pub fn second(&self) -> DimValue { DimValue::new(self.dim2, self.val2) }

    /// Check whether `dim` is one of the two dimensions of this pair.
    #[inline]
    pub fn contains_dim(&self, dim: usize) -> bool {
        self.dim1 == dim || self.dim2 == dim
    }

    /// The value this pair assigns to `dim`, if `dim` is part of the pair.
    pub fn value_of(&self, dim: usize) -> Option<usize> {
        if self.dim1 == dim {
            Some(self.val1)
        } else if self.dim2 == dim {
            Some(self.val2)
        } else {
            None
        }
    }

    /// The key ordering pairs by dimensions first, then by values.
    #[inline]
    fn forward_key(&self) -> Key {
        (self.dim1, self.dim2, self.val1, self.val2)
    }

    /// The key of [Pair::forward_key] seen from the highest dimension.
    #[inline]
    fn backward_key(&self) -> Key {
        (self.dim2, self.dim1, self.val2, self.val1)
    }

    fn from_forward_key(&(dim1, dim2, val1, val2): &Key) -> Self {
        Self { dim1, val1, dim2, val2 }
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.first(), self.second())
    }
}

/// `(dimension, other dimension, value, other value)`
type Key = (usize, usize, usize, usize);

/// A set of [Pair]s belonging to one generation.
///
/// Every pair is stored twice: once keyed from its lowest dimension and once keyed from its highest dimension.
/// This allows both [PairSet::first_matching_dims] and [PairSet::first_matching_value] to be answered by a single
/// range query. All lookups return the smallest matching pair, so the results are deterministic.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct PairSet {
    forward: BTreeSet<Key>,
    backward: BTreeSet<Key>,
}

impl PairSet {
    /// Create an empty [PairSet].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the [PairSet] holding every pair of values of every two dimensions.
    ///
    /// # Example
    /// ```
    /// use pair_set::PairSet;
    ///
    /// let pairs = PairSet::all_pairs(&[2, 3, 1]);
    /// assert_eq!(pairs.len(), 2 * 3 + 2 * 1 + 3 * 1);
    /// ```
    pub fn all_pairs(dim_sizes: &[usize]) -> Self {
        let mut result = Self::new();
        for (dim1, &size1) in dim_sizes.iter().enumerate() {
            for (dim2, &size2) in dim_sizes.iter().enumerate().skip(dim1 + 1) {
                for val1 in 0..size1 {
                    for val2 in 0..size2 {
                        result.insert(Pair { dim1, val1, dim2, val2 });
                    }
                }
            }
        }
        result
    }

    #[inline]
    fn insert(&mut self, pair: Pair) -> bool {
        let inserted = self.forward.insert(pair.forward_key());
        if inserted {
            self.backward.insert(pair.backward_key());
        }
        inserted
    }

    /// Add the pair to this set.
    ///
    /// Fails with [PairwiseError::LogicError] if the pair is already present,
    /// as a pair may only be part of one generation at a time.
    pub fn add(&mut self, pair: Pair) -> Result<(), PairwiseError> {
        if self.insert(pair) {
            trace!("Added {}", pair);
            Ok(())
        } else {
            Err(PairwiseError::logic(format!("pair {} is already part of this set", pair)))
        }
    }

    /// Remove the pair from this set and return whether it was present.
    pub fn remove(&mut self, pair: &Pair) -> bool {
        let removed = self.forward.remove(&pair.forward_key());
        if removed {
            self.backward.remove(&pair.backward_key());
        }
        removed
    }

    /// Check whether the pair is part of this set.
    #[inline]
    pub fn contains(&self, pair: &Pair) -> bool {
        self.forward.contains(&pair.forward_key())
    }

    /// The number of pairs in this set.
    #[inline]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Check whether this set has no pairs left.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Iterate over the pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item=Pair> + '_ {
        self.forward.iter().map(Pair::from_forward_key)
    }

    /// Return the pair combining `(dim1, val1)` and `(dim2, val2)` if it is part of this set.
    ///
    /// The order of the two dimensions does not matter. Returns [None] if both dimensions are the same.
    pub fn first_matching(&self, dim1: usize, val1: usize, dim2: usize, val2: usize) -> Option<Pair> {
        if dim1 == dim2 {
            return None;
        }
        let pair = Pair::canonical(dim1, val1, dim2, val2);
        if self.contains(&pair) { Some(pair) } else { None }
    }

    /// Return the first pair combining `(dim, val)` with any value of `other_dim`.
    ///
    /// Returns [None] if both dimensions are the same.
    pub fn first_matching_value(&self, dim: usize, val: usize, other_dim: usize) -> Option<Pair> {
        if dim == other_dim {
            return None;
        }
        let (set, swapped) = if dim < other_dim {
            (&self.forward, false)
        } else {
            (&self.backward, true)
        };
        let &(_, _, _, other_val) = set.range((dim, other_dim, val, 0)..=(dim, other_dim, val, usize::MAX)).next()?;
        Some(if swapped {
            Pair { dim1: other_dim, val1: other_val, dim2: dim, val2: val }
        } else {
            Pair { dim1: dim, val1: val, dim2: other_dim, val2: other_val }
        })
    }

    /// Return the first pair of any values of `dim_a` and `dim_b`.
    ///
    /// The order of the two dimensions does not matter. Returns [None] if both dimensions are the same.
    pub fn first_matching_dims(&self, dim_a: usize, dim_b: usize) -> Option<Pair> {
        if dim_a == dim_b {
            return None;
        }
        let (dim1, dim2) = if dim_a < dim_b { (dim_a, dim_b) } else { (dim_b, dim_a) };
        self.forward
            .range((dim1, dim2, 0, 0)..=(dim1, dim2, usize::MAX, usize::MAX))
            .next()
            .map(Pair::from_forward_key)
    }
}

impl Extend<Pair> for PairSet {
    fn extend<I: IntoIterator<Item=Pair>>(&mut self, iter: I) {
        for pair in iter {
            self.insert(pair);
        }
    }
}

impl FromIterator<Pair> for PairSet {
    fn from_iter<I: IntoIterator<Item=Pair>>(iter: I) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}
