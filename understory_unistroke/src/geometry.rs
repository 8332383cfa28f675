// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar helpers over point paths.
//!
//! These are the building blocks shared by [`normalize`](crate::normalize)
//! and the matchers in [`metric`](crate::metric). Paths are plain slices of
//! [`kurbo::Point`]; none of the helpers allocate unless they return a new
//! path.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Vec2};

/// Sum of the Euclidean lengths of consecutive segments.
///
/// Returns `0.0` for paths with fewer than two points.
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Arithmetic mean of the points.
///
/// Returns [`Point::ZERO`] for an empty path.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::ZERO;
    }
    let sum = points.iter().fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
    (sum / points.len() as f64).to_point()
}

/// Smallest axis-aligned rectangle containing every point, or `None` for an
/// empty path.
pub fn bounding_box(points: &[Point]) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    Some(rest.iter().fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p)))
}

/// Rotates every point about the path's own centroid by `radians`
/// (counter-clockwise in a y-up frame).
pub fn rotate_by(points: &[Point], radians: f64) -> Vec<Point> {
    let c = centroid(points);
    let (sin, cos) = radians.sin_cos();
    points
        .iter()
        .map(|p| {
            let d = *p - c;
            Point::new(d.x * cos - d.y * sin + c.x, d.x * sin + d.y * cos + c.y)
        })
        .collect()
}

/// Mean Euclidean distance between corresponding points of two paths.
///
/// Both paths must have the same number of points; extra points on the
/// longer path are ignored. Returns `0.0` when `a` is empty.
pub fn path_distance(a: &[Point], b: &[Point]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "paths must be resampled to equal length");
    if a.is_empty() {
        return 0.0;
    }
    let total: f64 = a.iter().zip(b).map(|(p, q)| p.distance(*q)).sum();
    total / a.len() as f64
}
