// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This module contains the [Generations] list.

use common::PairwiseError;
use log::debug;
use pair_set::{Pair, PairSet};

/// The ordered list of [PairSet]s.
///
/// Generation 0 holds the pairs that have not appeared in any row yet.
/// A pair lives in exactly one generation and only ever moves to the next one.
#[derive(Debug, Clone)]
pub struct Generations {
    sets: Vec<PairSet>,
}

impl Generations {
    /// Create the list with `first` as generation 0.
    pub fn new(first: PairSet) -> Self {
        Self { sets: vec![first] }
    }

    /// The number of generations, at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Always false, generation 0 always exists.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// The pairs that have not appeared in any row yet.
    #[inline]
    pub fn first(&self) -> &PairSet {
        &self.sets[0]
    }

    /// All pairs have appeared in a row once generation 0 is empty.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.first().is_empty()
    }

    /// The generation at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&PairSet> {
        self.sets.get(index)
    }

    /// Iterate over the generations, earliest first.
    pub fn iter(&self) -> std::slice::Iter<PairSet> {
        self.sets.iter()
    }

    /// The total number of pairs over all generations.
    pub fn pair_count(&self) -> usize {
        self.sets.iter().map(PairSet::len).sum()
    }

    fn next_generation_mut(&mut self, index: usize) -> &mut PairSet {
        if index + 1 == self.sets.len() {
            debug!("Opening generation {}", index + 1);
            self.sets.push(PairSet::new());
        }
        &mut self.sets[index + 1]
    }

    /// Move `pair` from the generation it is in to the next one, searching from generation `start`.
    ///
    /// Returns the generation the pair moved into.
    /// Fails with [PairwiseError::LogicError] if the pair is not in any generation from `start` onward.
    pub fn move_forward(&mut self, pair: Pair, start: usize) -> Result<usize, PairwiseError> {
        for index in start..self.sets.len() {
            if self.sets[index].remove(&pair) {
                self.next_generation_mut(index).add(pair)?;
                return Ok(index + 1);
            }
        }

        Err(PairwiseError::logic(format!("pair {} was not found within the generations >= {}", pair, start)))
    }
}
