// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use std::fmt::{Display, Formatter};

/// A single assignment of a value to a dimension.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DimValue {
    /// The index of the dimension.
    pub dim: usize,

    /// The value assigned to the dimension, in `0..size`.
    pub val: usize,
}

impl DimValue {
    /// Create a new assignment of `val` to `dim`.
    #[inline]
    pub const fn new(dim: usize, val: usize) -> Self {
        Self { dim, val }
    }
}

impl Display for DimValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}={}", self.dim, self.val)
    }
}
