// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimum enclosing circle of a point set.
//!
//! Incremental randomized construction: grow a circle over a shuffled copy
//! of the input, and whenever a point falls outside, rebuild with that
//! point pinned to the boundary. With the shuffle the whole construction
//! runs in expected linear time; without it correctness is unaffected but
//! adversarial orderings degrade to quadratic.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::{Circle, InvalidInput, Point};

/// The smallest circle containing every point of the input.
///
/// The shuffle that makes the expected running time linear draws from the
/// caller's `rng`, so runs are reproducible given a seeded generator (see
/// [`min_enclosing_circle_seeded`] for a shorthand). The result does not
/// depend on the shuffle order beyond floating-point roundoff.
///
/// The input is typically a convex hull, but any point slice works;
/// interior points only cost time.
///
/// Degenerate inputs do the obvious thing: one point (or many copies of
/// it) gives that point with radius 0, two points give their midpoint and
/// half their distance, collinear points give the diameter of the two
/// extremes.
///
/// # Errors
///
/// Returns [`InvalidInput::TooFewPoints`] on an empty slice.
pub fn min_enclosing_circle<R: Rng + ?Sized>(
    points: &[Point],
    rng: &mut R,
) -> Result<Circle, InvalidInput> {
    if points.is_empty() {
        return Err(InvalidInput::TooFewPoints { needed: 1, got: 0 });
    }

    let mut shuffled = points.to_vec();
    shuffled.shuffle(rng);

    let mut circle = Circle::new(shuffled[0], 0.0);
    for (i, &p) in shuffled.iter().enumerate().skip(1) {
        if !circle.contains(p) {
            // p is outside the circle of the prefix, so it lies on the
            // boundary of the prefix's enclosing circle.
            circle = with_one_boundary_point(&shuffled[..=i], p);
        }
    }
    Ok(circle)
}

/// [`min_enclosing_circle`] with a fresh small RNG built from `seed`.
///
/// # Errors
///
/// Returns [`InvalidInput::TooFewPoints`] on an empty slice.
pub fn min_enclosing_circle_seeded(points: &[Point], seed: u64) -> Result<Circle, InvalidInput> {
    let mut rng = SmallRng::seed_from_u64(seed);
    min_enclosing_circle(points, &mut rng)
}

/// Smallest circle enclosing `points` with `p` on the boundary.
fn with_one_boundary_point(points: &[Point], p: Point) -> Circle {
    let mut circle = Circle::new(p, 0.0);
    for (i, &q) in points.iter().enumerate() {
        if !circle.contains(q) {
            circle = if circle.radius == 0.0 {
                Circle::from_diameter(p, q)
            } else {
                with_two_boundary_points(&points[..=i], p, q)
            };
        }
    }
    circle
}

/// Smallest circle enclosing `points` with both `p` and `q` on the
/// boundary.
///
/// Tracks the tightest circumcircle on each side of the chord `p q`; the
/// answer is the `p`-`q` diameter circle if it already covers everything,
/// otherwise the smaller of the two side candidates.
fn with_two_boundary_points(points: &[Point], p: Point, q: Point) -> Circle {
    let diameter = Circle::from_diameter(p, q);
    let mut left: Option<Circle> = None;
    let mut right: Option<Circle> = None;

    let pq = q - p;
    for &r in points {
        if diameter.contains(r) {
            continue;
        }
        let side = pq.cross(r - p);
        let Some(c) = circumcircle(p, q, r) else {
            continue;
        };
        let reach = pq.cross(c.center - p);
        if side > 0.0 && left.map_or(true, |best| reach > pq.cross(best.center - p)) {
            left = Some(c);
        } else if side < 0.0 && right.map_or(true, |best| reach < pq.cross(best.center - p)) {
            right = Some(c);
        }
    }

    match (left, right) {
        (None, None) => diameter,
        (Some(c), None) | (None, Some(c)) => c,
        (Some(l), Some(r)) => {
            if l.radius <= r.radius {
                l
            } else {
                r
            }
        }
    }
}

/// Circumscribed circle of a triangle, or `None` if the corners are
/// collinear.
///
/// Coordinates are taken relative to the triangle's bounding-box midpoint
/// before the determinant is formed, which keeps the subtraction of large
/// near-equal squares in check. The radius is the largest center-to-corner
/// distance so that all three corners test as contained.
fn circumcircle(a: Point, b: Point, c: Point) -> Option<Circle> {
    let ox = 0.5 * (a.x.min(b.x).min(c.x) + a.x.max(b.x).max(c.x));
    let oy = 0.5 * (a.y.min(b.y).min(c.y) + a.y.max(b.y).max(c.y));
    let (ax, ay) = (a.x - ox, a.y - oy);
    let (bx, by) = (b.x - ox, b.y - oy);
    let (cx, cy) = (c.x - ox, c.y - oy);
    let d = 2.0 * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));
    if d == 0.0 {
        return None;
    }
    let a2 = ax * ax + ay * ay;
    let b2 = bx * bx + by * by;
    let c2 = cx * cx + cy * cy;
    let x = (a2 * (by - cy) + b2 * (cy - ay) + c2 * (ay - by)) / d;
    let y = (a2 * (cx - bx) + b2 * (ax - cx) + c2 * (bx - ax)) / d;
    let center = Point::new(ox + x, oy + y);
    let radius = center.distance(a).max(center.distance(b)).max(center.distance(c));
    Some(Circle::new(center, radius))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn assert_covers(circle: Circle, points: &[Point]) {
        for &p in points {
            assert!(
                circle.center.distance(p) <= circle.radius * (1.0 + 1e-12),
                "{p} escapes {circle}"
            );
        }
    }

    /// Exhaustive reference: the smallest of all pair-diameter and
    /// triple-circumscribed circles that covers the whole set.
    fn brute_force_mec(points: &[Point]) -> Circle {
        let mut best: Option<Circle> = None;
        let mut consider = |c: Circle| {
            if points.iter().all(|&p| c.contains(p))
                && best.map_or(true, |b| c.radius < b.radius)
            {
                best = Some(c);
            }
        };
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                consider(Circle::from_diameter(points[i], points[j]));
                for k in (j + 1)..points.len() {
                    if let Some(c) = circumcircle(points[i], points[j], points[k]) {
                        consider(c);
                    }
                }
            }
        }
        best.unwrap_or(Circle::new(points[0], 0.0))
    }

    #[test]
    fn empty_input() {
        assert_eq!(
            min_enclosing_circle_seeded(&[], 0),
            Err(InvalidInput::TooFewPoints { needed: 1, got: 0 })
        );
    }

    #[test]
    fn single_point() {
        let circle = min_enclosing_circle_seeded(&[Point::new(5., 5.)], 0).unwrap();
        assert_eq!(circle.center, Point::new(5., 5.));
        assert_eq!(circle.radius, 0.0);
    }

    #[test]
    fn identical_points() {
        let points = pts(&[(2., 3.), (2., 3.), (2., 3.), (2., 3.)]);
        let circle = min_enclosing_circle_seeded(&points, 7).unwrap();
        assert_eq!(circle.center, Point::new(2., 3.));
        assert_eq!(circle.radius, 0.0);
    }

    #[test]
    fn two_points() {
        let points = pts(&[(0., 0.), (2., 0.)]);
        let circle = min_enclosing_circle_seeded(&points, 0).unwrap();
        assert_eq!(circle.center, Point::new(1., 0.));
        assert!((circle.radius - 1.0).abs() < 1e-15);
    }

    #[test]
    fn collinear_points() {
        let points = pts(&[(0., 0.), (1., 0.), (2., 0.)]);
        let circle = min_enclosing_circle_seeded(&points, 0).unwrap();
        assert_eq!(circle.center, Point::new(1., 0.));
        assert!((circle.radius - 1.0).abs() < 1e-15);
    }

    #[test]
    fn unit_square() {
        let points = pts(&[(0., 0.), (0., 1.), (1., 1.), (1., 0.)]);
        for seed in 0..8 {
            let circle = min_enclosing_circle_seeded(&points, seed).unwrap();
            assert!((circle.center.x - 0.5).abs() < 1e-12);
            assert!((circle.center.y - 0.5).abs() < 1e-12);
            assert!((circle.radius - 0.5_f64.sqrt()).abs() < 1e-12);
            assert_covers(circle, &points);
        }
    }

    #[test]
    fn equilateral_triangle() {
        // Circumradius of an equilateral triangle with side 1 is 1/√3;
        // the old midpoint-only construction overshoots this by 1.5x.
        let points = pts(&[(0., 0.), (1., 0.), (0.5, 0.75_f64.sqrt())]);
        let circle = min_enclosing_circle_seeded(&points, 3).unwrap();
        assert!((circle.radius - 1.0 / 3.0_f64.sqrt()).abs() < 1e-12);
        assert_covers(circle, &points);
    }

    #[test]
    fn obtuse_triangle_uses_longest_side() {
        // For an obtuse triangle the enclosing circle is the diameter of
        // the longest side, not the circumcircle.
        let points = pts(&[(0., 0.), (4., 0.), (1., 0.5)]);
        let circle = min_enclosing_circle_seeded(&points, 11).unwrap();
        assert!((circle.center.x - 2.0).abs() < 1e-12);
        assert!((circle.center.y - 0.0).abs() < 1e-12);
        assert!((circle.radius - 2.0).abs() < 1e-12);
    }

    #[test]
    fn coverage_and_minimality_match_brute_force() {
        let points = pts(&[
            (0.1, 0.3),
            (-2.5, 1.25),
            (3.75, -0.5),
            (1.5, 4.25),
            (-1.0, -3.5),
            (0.0, 0.0),
            (2.25, 2.0),
            (-3.0, -1.75),
            (0.5, -2.25),
            (-0.75, 3.0),
        ]);
        let expected = brute_force_mec(&points);
        for seed in 0..16 {
            let circle = min_enclosing_circle_seeded(&points, seed).unwrap();
            assert_covers(circle, &points);
            assert!(
                (circle.radius - expected.radius).abs() <= 1e-9 * expected.radius,
                "radius {} differs from brute-force {}",
                circle.radius,
                expected.radius
            );
        }
    }

    #[test]
    fn random_clouds_match_brute_force() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        for _ in 0..20 {
            let n = rng.random_range(1..=12);
            let points: Vec<Point> = (0..n)
                .map(|_| {
                    Point::new(
                        rng.random_range(-100.0..100.0),
                        rng.random_range(-100.0..100.0),
                    )
                })
                .collect();
            let circle = min_enclosing_circle(&points, &mut rng).unwrap();
            let expected = brute_force_mec(&points);
            assert_covers(circle, &points);
            assert!(
                (circle.radius - expected.radius).abs() <= 1e-9 * expected.radius.max(1.0),
                "radius {} differs from brute-force {} on {points:?}",
                circle.radius,
                expected.radius
            );
        }
    }

    #[test]
    fn seed_reproducibility() {
        let points = pts(&[(0., 0.), (3., 1.), (1., 4.), (-2., 2.), (1., 1.)]);
        let a = min_enclosing_circle_seeded(&points, 42).unwrap();
        let b = min_enclosing_circle_seeded(&points, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn hull_pipeline() {
        use crate::convex_hull;

        let points = pts(&[(0., 0.), (0., 1.), (1., 1.), (1., 0.), (0.5, 0.5)]);
        let hull = convex_hull(&points).unwrap();
        let circle = min_enclosing_circle_seeded(&hull, 0).unwrap();
        // The circle around the hull covers the interior points too.
        assert_covers(circle, &points);
        assert!((circle.radius - 0.5_f64.sqrt()).abs() < 1e-12);
    }
}
