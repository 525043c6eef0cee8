// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate provides a greedy generator of pairwise (2-way) covering tuples:
//!   * [generator] Builds the rows one at a time, moving used pairs through generations.
//!   * [coverage] Checks a set of rows for full pair coverage and reports repetition statistics.
//!
//! The other crates included provide the data-types used by the generator.
//!
//! # Features
//! This crate provides the following optional feature:
//!   * `sub-time` Log the timings for all the [common::sub_time_it] calls.
//!
//! # Example
//! ```
//! use pairwise::generate;
//!
//! let rows = generate(&[2, 2, 1, 1])
//!     .expect("Valid dimension sizes")
//!     .collect::<Result<Vec<_>, _>>()
//!     .expect("No internal errors");
//!
//! assert_eq!(rows.len(), 4);
//! pairwise::coverage::check_coverage(&[2, 2, 1, 1], &rows).expect("Every pair is covered");
//! ```

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

pub use common;
pub use coverage;
pub use generator;
pub use pair_set;

pub use common::PairwiseError;
pub use generator::{generate, Generator, PairwiseGenerator, Tuples};
