// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A circle, described by center and radius.

use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Sub};

use crate::{Point, Vec2};

/// Multiplicative slack applied when testing circle membership.
///
/// Radii are computed with a handful of floating-point operations, so a
/// point that is exactly on the boundary mathematically can land a few ulps
/// outside the stored radius.
const CONTAINMENT_EPSILON: f64 = 1.0 + 1e-14;

/// A circle.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// A new circle from center and radius.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Circle {
        Circle {
            center: center.into(),
            radius,
        }
    }

    /// The circle with `p0` and `p1` as diameter endpoints.
    ///
    /// The radius is taken as the larger of the two center-to-endpoint
    /// distances so that both endpoints satisfy [`contains`](Self::contains)
    /// even when the midpoint rounds.
    pub fn from_diameter(p0: Point, p1: Point) -> Circle {
        let center = p0.midpoint(p1);
        Circle::new(center, center.distance(p0).max(center.distance(p1)))
    }

    /// Does this circle contain the point?
    ///
    /// The test allows a relative tolerance of a few ulps beyond the stored
    /// radius, so boundary points test as contained.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.center.distance(p) <= self.radius * CONTAINMENT_EPSILON
    }

    /// The area of the circle.
    #[inline]
    pub fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }

    /// The circumference of the circle.
    #[inline]
    pub fn circumference(&self) -> f64 {
        (2.0 * PI * self.radius).abs()
    }

    /// Is this circle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }

    /// Is this circle NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.center.is_nan() || self.radius.is_nan()
    }
}

impl Add<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn add(self, v: Vec2) -> Circle {
        Circle {
            center: self.center + v,
            radius: self.radius,
        }
    }
}

impl Sub<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn sub(self, v: Vec2) -> Circle {
        Circle {
            center: self.center - v,
            radius: self.radius,
        }
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Circle centered at {} of radius ", self.center)?;
        fmt::Display::fmt(&self.radius, formatter)
    }
}
