// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for precondition violations.

use std::fmt;

/// The input point set does not satisfy an operation's precondition.
///
/// This is the only failure mode in the crate: the computations themselves
/// are total over valid inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidInput {
    /// The operation needs more points than were supplied.
    ///
    /// [`convex_hull`](crate::convex_hull) needs at least 3 points;
    /// [`min_enclosing_circle`](crate::min_enclosing_circle) needs at
    /// least 1.
    TooFewPoints {
        /// The minimum number of points the operation requires.
        needed: usize,
        /// The number of points actually supplied.
        got: usize,
    },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::TooFewPoints { needed, got } => {
                write!(f, "need at least {needed} points, got {got}")
            }
        }
    }
}

impl std::error::Error for InvalidInput {}
