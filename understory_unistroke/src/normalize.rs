// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path normalization: resample, rotate, scale, translate.
//!
//! [`normalize`] chains the four steps in order and is what the
//! [`Recognizer`](crate::Recognizer) applies to both templates and input. The
//! individual steps are public so callers can inspect intermediate shapes.
//!
//! ```
//! use kurbo::Point;
//! use understory_unistroke::RecognizerConfig;
//! use understory_unistroke::normalize::normalize;
//!
//! let stroke = [
//!     Point::new(10.0, 10.0),
//!     Point::new(60.0, 90.0),
//!     Point::new(110.0, 10.0),
//! ];
//! let config = RecognizerConfig::default();
//! let path = normalize(&stroke, &config).unwrap();
//! assert_eq!(path.len(), config.point_count);
//! ```

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

use crate::config::{ConfigError, RecognizerConfig};
use crate::error::{DegenerateReason, RecognizeError};
use crate::geometry::{bounding_box, centroid, path_length, rotate_by};

/// Runs the full normalization pipeline on a raw stroke.
///
/// The result has exactly `config.point_count` points, its indicative angle
/// is zero, its longer bounding-box side equals `config.square_size`, and its
/// centroid sits on `config.origin`.
pub fn normalize(
    points: &[Point],
    config: &RecognizerConfig,
) -> Result<Vec<Point>, RecognizeError> {
    config.validate()?;
    let resampled = resample(points, config.point_count)?;
    let rotated = rotate_by(&resampled, -indicative_angle(&resampled));
    let scaled = scale_to(&rotated, config.square_size)?;
    Ok(translate_to(&scaled, config.origin))
}

/// Rebuilds `points` as `n` points evenly spaced by arc length.
///
/// The first output point is the first input point. Each following point is
/// placed exactly one interval (`path_length / (n - 1)`) further along the
/// stroke, continuing from the previously emitted point even when that lies
/// inside a segment. If rounding leaves the output short, the last input
/// point fills the remaining slots.
pub fn resample(points: &[Point], n: usize) -> Result<Vec<Point>, RecognizeError> {
    if n < 2 {
        return Err(ConfigError::PointCount(n).into());
    }
    ensure_finite(points)?;
    if points.len() < 2 {
        return Err(DegenerateReason::TooFewPoints { len: points.len() }.into());
    }
    let first = points[0];

    let interval = path_length(points) / (n - 1) as f64;
    if interval <= 0.0 || !interval.is_finite() {
        return Err(DegenerateReason::ZeroLength.into());
    }

    let mut out = Vec::with_capacity(n);
    out.push(first);
    let mut travelled = 0.0;
    let mut prev = first;
    let mut next_ix = 1;
    while next_ix < points.len() && out.len() < n {
        let next = points[next_ix];
        let d = prev.distance(next);
        if travelled + d >= interval {
            let q = prev.lerp(next, (interval - travelled) / d);
            out.push(q);
            // Resume from `q`: the rest of this segment still counts.
            prev = q;
            travelled = 0.0;
        } else {
            travelled += d;
            prev = next;
            next_ix += 1;
        }
    }

    let last = points[points.len() - 1];
    out.resize(n, last);
    Ok(out)
}

/// Angle from the first point to the centroid, in radians.
///
/// Returns `0.0` for an empty path.
pub fn indicative_angle(points: &[Point]) -> f64 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    (centroid(points) - *first).atan2()
}

/// Scales every point uniformly so the longer side of the bounding box
/// becomes `size`.
///
/// Scaling is about the coordinate origin and keeps the aspect ratio, so a
/// flat stroke such as a horizontal line stays flat.
pub fn scale_to(points: &[Point], size: f64) -> Result<Vec<Point>, RecognizeError> {
    let bounds =
        bounding_box(points).ok_or(DegenerateReason::TooFewPoints { len: points.len() })?;
    let longer = bounds.width().max(bounds.height());
    if longer <= 0.0 {
        return Err(DegenerateReason::ZeroExtent.into());
    }
    let factor = size / longer;
    Ok(points
        .iter()
        .map(|p| (p.to_vec2() * factor).to_point())
        .collect())
}

/// Translates the path so its centroid lands on `origin`.
pub fn translate_to(points: &[Point], origin: Point) -> Vec<Point> {
    let offset = origin - centroid(points);
    points.iter().map(|p| *p + offset).collect()
}

fn ensure_finite(points: &[Point]) -> Result<(), RecognizeError> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(RecognizeError::NonFinitePoint { index }),
        None => Ok(()),
    }
}
