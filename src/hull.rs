// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Convex hull of a point set, by Graham scan.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::{InvalidInput, Orientation, Point};

/// The convex hull of a set of points.
///
/// Returns the hull vertices in counter-clockwise order, starting from the
/// lowest point (ties broken towards the lowest x coordinate). Interior
/// points and points in the interior of hull edges are not included.
///
/// If every input point lies on a common line the hull degenerates to a
/// segment, returned as its two extreme points. Duplicate input points are
/// allowed and never produce duplicate hull vertices.
///
/// ```
/// use corral::{convex_hull, Point};
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
///     Point::new(0.5, 0.5),
/// ];
/// let hull = convex_hull(&points).unwrap();
/// assert_eq!(
///     hull,
///     [
///         Point::new(0.0, 0.0),
///         Point::new(1.0, 0.0),
///         Point::new(1.0, 1.0),
///         Point::new(0.0, 1.0),
///     ]
/// );
/// ```
///
/// # Errors
///
/// Returns [`InvalidInput::TooFewPoints`] when fewer than 3 points are
/// supplied.
pub fn convex_hull(points: &[Point]) -> Result<Vec<Point>, InvalidInput> {
    if points.len() < 3 {
        return Err(InvalidInput::TooFewPoints {
            needed: 3,
            got: points.len(),
        });
    }

    // The lowest point (ties towards low x) is extreme, so it is a hull
    // vertex and every other point subtends an angle in [0, π] from it.
    let mut pivot_ix = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let best = points[pivot_ix];
        if p.y < best.y || (p.y == best.y && p.x < best.x) {
            pivot_ix = i;
        }
    }
    let pivot = points[pivot_ix];

    let mut sorted: Vec<Point> = Vec::with_capacity(points.len() - 1);
    sorted.extend_from_slice(&points[..pivot_ix]);
    sorted.extend_from_slice(&points[pivot_ix + 1..]);
    sorted.sort_unstable_by(|&a, &b| angular_order(pivot, a, b));

    // Scan stack. Points that fail to make a strict left turn are popped,
    // so collinear mid-edge points never survive.
    let mut hull: SmallVec<[Point; 16]> = SmallVec::new();
    hull.push(pivot);
    hull.push(sorted[0]);
    for &p in &sorted[1..] {
        while hull.len() >= 2
            && Orientation::of(hull[hull.len() - 2], hull[hull.len() - 1], p)
                != Orientation::CounterClockwise
        {
            hull.pop();
        }
        hull.push(p);
    }

    Ok(hull.into_vec())
}

/// Angular order about `pivot` that makes the sorted sequence wind
/// counter-clockwise: `a` precedes `b` when the turn `pivot → a → b` is a
/// left turn, i.e. `a` subtends the smaller polar angle. Points collinear
/// with the pivot are ordered nearest first.
fn angular_order(pivot: Point, a: Point, b: Point) -> Ordering {
    match Orientation::of(pivot, a, b) {
        Orientation::CounterClockwise => Ordering::Less,
        Orientation::Clockwise => Ordering::Greater,
        Orientation::Collinear => pivot
            .distance_squared(a)
            .total_cmp(&pivot.distance_squared(b)),
    }
}
