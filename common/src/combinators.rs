// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This module contains the two sequence combinators used while searching for pairs.

use itertools::Itertools;

/// Iterate over all pairs `(a, b)` where `a` comes before `b` in `items`, without the diagonal.
///
/// # Example
/// ```
/// use common::combinators::triangular_product;
///
/// let pairs: Vec<_> = triangular_product(&[0, 1, 2]).collect();
/// assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
/// ```
pub fn triangular_product<T: Clone>(items: &[T]) -> impl Iterator<Item=(T, T)> + '_ {
    items.iter().cloned().tuple_combinations::<(T, T)>()
}

/// Iterate over all pairs `(x, y)` with `x` taken from `xs` and `y` from `ys`, with `xs` as the outer loop.
///
/// # Example
/// ```
/// use common::combinators::cartesian_product;
///
/// let pairs: Vec<_> = cartesian_product(&[0, 1], &['a', 'b']).collect();
/// assert_eq!(pairs, vec![(0, 'a'), (0, 'b'), (1, 'a'), (1, 'b')]);
/// ```
pub fn cartesian_product<'a, X: Clone, Y: Clone>(xs: &'a [X], ys: &'a [Y]) -> impl Iterator<Item=(X, Y)> + 'a {
    xs.iter().cloned().cartesian_product(ys.iter().cloned())
}
