// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The orientation predicate for ordered point triples.

use crate::Point;

/// The turn direction of an ordered triple of points.
///
/// This is the single source of truth for turn direction in the crate: both
/// the hull's angular sort and its scan loop go through it, so the two can
/// never disagree about which way a triple bends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Traversing `p`, `q`, `r` turns right.
    Clockwise,
    /// The three points lie on a common line.
    Collinear,
    /// Traversing `p`, `q`, `r` turns left.
    CounterClockwise,
}

impl Orientation {
    /// Orientation of the ordered triple `(p, q, r)`.
    ///
    /// Computed as the sign of the cross product `(q - p) × (r - p)`, in
    /// full `f64` precision. Exactly zero means collinear; the crate makes
    /// no attempt at exact arithmetic for nearly-collinear triples.
    ///
    /// ```
    /// use corral::{Orientation, Point};
    ///
    /// let p = Point::new(0.0, 0.0);
    /// let q = Point::new(1.0, 0.0);
    /// assert_eq!(Orientation::of(p, q, Point::new(1.0, 1.0)), Orientation::CounterClockwise);
    /// assert_eq!(Orientation::of(p, q, Point::new(1.0, -1.0)), Orientation::Clockwise);
    /// assert_eq!(Orientation::of(p, q, Point::new(2.0, 0.0)), Orientation::Collinear);
    /// ```
    pub fn of(p: Point, q: Point, r: Point) -> Orientation {
        let cross = (q - p).cross(r - p);
        if cross > 0.0 {
            Orientation::CounterClockwise
        } else if cross < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }
}
