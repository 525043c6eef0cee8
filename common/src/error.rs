// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use thiserror::Error;

/// The errors raised while generating pairwise tuples.
///
/// [PairwiseError::NullArgument] and [PairwiseError::InvalidArgument] mean the input is wrong and are reported before
/// any tuple is produced. [PairwiseError::LogicError] means an internal invariant was broken, which should never
/// happen for valid input.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum PairwiseError {
    /// A required input is missing.
    #[error("missing required argument `{name}`")]
    NullArgument {
        /// The name of the missing argument.
        name: &'static str,
    },

    /// An input is malformed.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// The name of the malformed argument.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// An internal invariant was broken.
    #[error("internal invariant violated: {0}")]
    LogicError(String),
}

impl PairwiseError {
    /// Shorthand for [PairwiseError::InvalidArgument].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument { name, reason: reason.into() }
    }

    /// Shorthand for [PairwiseError::LogicError].
    pub fn logic(message: impl Into<String>) -> Self {
        Self::LogicError(message.into())
    }
}
