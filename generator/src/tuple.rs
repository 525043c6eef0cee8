// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This module contains the [Tuple] struct, the row under construction.

use common::{DimValue, PairwiseError};

/// A row under construction.
///
/// Every dimension starts free and is frozen exactly once.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Tuple {
    values: Vec<Option<usize>>,

    /// Kept sorted, so the search order over the free dimensions is the dimension order.
    free_dims: Vec<usize>,

    /// In the order the dimensions were frozen.
    frozen: Vec<DimValue>,
}

impl Tuple {
    /// Create a tuple with `num_dims` free dimensions.
    pub fn new(num_dims: usize) -> Self {
        Self {
            values: vec![None; num_dims],
            free_dims: (0..num_dims).collect(),
            frozen: Vec::with_capacity(num_dims),
        }
    }

    /// Freeze `dim` to `val`.
    ///
    /// Fails with [PairwiseError::LogicError] if `dim` is already frozen or does not exist.
    pub fn add(&mut self, dim: usize, val: usize) -> Result<(), PairwiseError> {
        let slot = self.values.get_mut(dim)
            .ok_or_else(|| PairwiseError::logic(format!("dimension {} does not exist", dim)))?;
        if let Some(old) = slot {
            return Err(PairwiseError::logic(format!("dimension {} is already frozen to {}", dim, old)));
        }
        *slot = Some(val);

        if let Ok(index) = self.free_dims.binary_search(&dim) {
            self.free_dims.remove(index);
        }
        self.frozen.push(DimValue::new(dim, val));
        Ok(())
    }

    /// The dimensions that are not frozen yet, in ascending order.
    #[inline]
    pub fn free_dims(&self) -> &[usize] {
        &self.free_dims
    }

    /// The frozen assignments, in the order they were frozen.
    #[inline]
    pub fn frozen_dim_values(&self) -> &[DimValue] {
        &self.frozen
    }

    /// Check whether `dim` has been assigned a value.
    #[inline]
    pub fn is_frozen(&self, dim: usize) -> bool {
        matches!(self.values.get(dim), Some(Some(_)))
    }

    /// The value of `dim`, if it is frozen.
    #[inline]
    pub fn get(&self, dim: usize) -> Option<usize> {
        self.values.get(dim).copied().flatten()
    }

    /// The number of dimensions of this tuple.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the tuple has no dimensions at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A tuple is complete once every dimension is frozen.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.free_dims.is_empty()
    }

    /// Convert into the finished row.
    ///
    /// Fails with [PairwiseError::LogicError] if some dimension is still free.
    pub fn into_result(self) -> Result<Vec<usize>, PairwiseError> {
        if !self.is_complete() {
            return Err(PairwiseError::logic(format!("dimensions {:?} are still free", self.free_dims)));
        }
        self.values
            .into_iter()
            .enumerate()
            .map(|(dim, value)| value.ok_or_else(|| PairwiseError::logic(format!("dimension {} has no value", dim))))
            .collect()
    }
}
