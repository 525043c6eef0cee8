// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate provides common features used throughout the pairwise generator and its data-types.
//!
//! # Features
//!   * `sub-time` Log the timings for all the [sub_time_it] calls.

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

pub use dim_value::DimValue;
pub use error::PairwiseError;
#[doc(hidden)]
pub use log;

pub mod combinators;
mod dim_value;
mod error;

/// The minimal number of dimensions a pairwise generation needs.
pub const MIN_DIMENSIONS: usize = 2;

/// Log the time it took to provide the result of the provided expression.
/// Returns the result of the provided expression.
///
/// # Example
/// ```
/// use common::time_it;
///
/// time_it!(0 + 1, "Addition");
/// ```
#[macro_export]
macro_rules! time_it {
    ($code:expr, $text:expr) => {{
        let now = std::time::Instant::now();
        let result = $code;
        let duration = now.elapsed();
        $crate::log::info!("{} takes: {}.{:06}s", $text, duration.as_secs(), duration.subsec_micros());
        result
    }};
}

/// Act like [time_it] if the `sub-time` feature is set. Otherwise return the provided expression.
///
/// # Example
/// ```
/// use common::sub_time_it;
///
/// sub_time_it!(0 + 1, "Addition");
/// ```
///
/// The `sub-time` feature has been set.
#[cfg(feature = "sub-time")]
#[macro_export]
macro_rules! sub_time_it {
    ($code:expr, $text:expr) => {{
        let now = std::time::Instant::now();
        let result = $code;
        let duration = now.elapsed();
        $crate::log::info!("{} takes: {}.{:06}s", $text, duration.as_secs(), duration.subsec_micros());
        result
    }};
}

/// Act like [time_it] if the `sub-time` feature is set. Otherwise return the provided expression.
///
/// # Example
/// ```
/// use common::sub_time_it;
///
/// sub_time_it!(0 + 1, "Addition");
/// ```
///
/// The `sub-time` feature has not been set.
#[cfg(not(feature = "sub-time"))]
#[macro_export]
macro_rules! sub_time_it {
    ($code:expr, $text:expr) => {{$code}};
}
