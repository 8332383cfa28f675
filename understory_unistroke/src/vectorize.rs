// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unit-vector projection of a normalized path, used by the Protractor metric.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

use crate::error::{DegenerateReason, RecognizeError};

/// Flattens `points` to `[x0, y0, x1, y1, ...]` and divides by the Euclidean
/// norm, so the result has unit magnitude.
///
/// Fails with [`DegenerateReason::ZeroMagnitude`] when every coordinate is
/// zero, which happens for a path collapsed onto the origin.
pub fn vectorize(points: &[Point]) -> Result<Vec<f64>, RecognizeError> {
    let norm = points
        .iter()
        .map(|p| p.x * p.x + p.y * p.y)
        .sum::<f64>()
        .sqrt();
    if norm <= 0.0 || !norm.is_finite() {
        return Err(DegenerateReason::ZeroMagnitude.into());
    }
    Ok(points
        .iter()
        .flat_map(|p| [p.x / norm, p.y / norm])
        .collect())
}

/// Euclidean norm of a flattened vector.
pub fn magnitude(vector: &[f64]) -> f64 {
    vector.iter().map(|v| v * v).sum::<f64>().sqrt()
}
