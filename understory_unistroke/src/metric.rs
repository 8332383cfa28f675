// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distance metrics between a normalized input and a template.
//!
//! Two interchangeable metrics are provided:
//!
//! - [`Metric::RotationSearch`]: golden-section search for the rotation that
//!   minimizes the mean pointwise distance ([`distance_at_best_angle`]).
//! - [`Metric::Protractor`]: closed-form optimal angular distance between unit
//!   vectors ([`optimal_cosine_distance`]).
//!
//! Both distances are mapped to a score with [`score_from_distance`].

use core::f64::consts::FRAC_PI_2;
use core::ops::RangeInclusive;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

use crate::geometry::{path_distance, rotate_by};

/// Golden ratio conjugate, `(√5 − 1) / 2`.
pub const PHI: f64 = 0.618_033_988_749_894_9;

/// Upper bound on golden-section iterations.
///
/// Each iteration shrinks the bracket by [`PHI`], so this is only reached
/// when the tolerance is below what `f64` can resolve.
const MAX_GOLDEN_ITERATIONS: usize = 128;

/// How an input path is compared against templates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Golden-section search over the rotation angle, minimizing the mean
    /// pointwise Euclidean distance.
    #[default]
    RotationSearch,
    /// Closed-form cosine distance between unit vectors ("Protractor").
    Protractor,
}

impl Metric {
    /// Picks [`Metric::Protractor`] when `closed_form` is set and
    /// [`Metric::RotationSearch`] otherwise.
    #[must_use]
    pub fn from_closed_form(closed_form: bool) -> Self {
        if closed_form {
            Self::Protractor
        } else {
            Self::RotationSearch
        }
    }

    /// Returns `true` for the metric that needs vectorized paths.
    #[must_use]
    pub fn is_closed_form(self) -> bool {
        matches!(self, Self::Protractor)
    }
}

/// Converts a distance into a score: `1 − distance / (π/2)`.
///
/// The same constant is applied to both metrics and the result is not
/// clamped; rotation-search distances are in path units, so poor matches can
/// score well below zero.
pub fn score_from_distance(distance: f64) -> f64 {
    1.0 - distance / FRAC_PI_2
}

/// Minimum angular distance between two unit vectors over all rotations.
///
/// `v1` and `v2` are flattened `[x, y, ...]` vectors of equal length as
/// produced by [`vectorize`](crate::vectorize::vectorize). The `acos`
/// argument is clamped to `[-1, 1]` so rounding never yields NaN.
pub fn optimal_cosine_distance(v1: &[f64], v2: &[f64]) -> f64 {
    debug_assert_eq!(v1.len(), v2.len(), "vectors must have equal length");
    let (a, b) = v1
        .chunks_exact(2)
        .zip(v2.chunks_exact(2))
        .fold((0.0, 0.0), |(a, b), (p, q)| {
            (a + p[0] * q[0] + p[1] * q[1], b + p[0] * q[1] - p[1] * q[0])
        });
    // atan(b / 0) tends to ±π/2.
    let angle = if a == 0.0 {
        if b < 0.0 { -FRAC_PI_2 } else { FRAC_PI_2 }
    } else {
        (b / a).atan()
    };
    let (sin, cos) = angle.sin_cos();
    (a * cos + b * sin).clamp(-1.0, 1.0).acos()
}

/// Mean pointwise distance after rotating `points` by `radians` about their
/// centroid.
pub fn distance_at_angle(points: &[Point], template: &[Point], radians: f64) -> f64 {
    path_distance(&rotate_by(points, radians), template)
}

/// Golden-section search for the rotation in `bracket` that best aligns
/// `points` with `template`.
///
/// The bracket shrinks until its width is at most `precision`; the result is
/// the smaller of the two final probes. When the bracket contains `0` the
/// unrotated distance is also considered, so a path compared with itself
/// scores a distance of exactly zero.
pub fn distance_at_best_angle(
    points: &[Point],
    template: &[Point],
    bracket: RangeInclusive<f64>,
    precision: f64,
) -> f64 {
    let (mut a, mut b) = bracket.clone().into_inner();
    let mut x1 = PHI * a + (1.0 - PHI) * b;
    let mut f1 = distance_at_angle(points, template, x1);
    let mut x2 = (1.0 - PHI) * a + PHI * b;
    let mut f2 = distance_at_angle(points, template, x2);
    for _ in 0..MAX_GOLDEN_ITERATIONS {
        if (b - a).abs() <= precision {
            break;
        }
        if f1 < f2 {
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = PHI * a + (1.0 - PHI) * b;
            f1 = distance_at_angle(points, template, x1);
        } else {
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = (1.0 - PHI) * a + PHI * b;
            f2 = distance_at_angle(points, template, x2);
        }
    }
    let best = f1.min(f2);
    if bracket.contains(&0.0) {
        best.min(path_distance(points, template))
    } else {
        best
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::RecognizerConfig;
    use crate::normalize::normalize;
    use crate::vectorize::vectorize;

    fn caret() -> Vec<Point> {
        normalize(
            &[
                Point::new(0.0, 100.0),
                Point::new(50.0, 0.0),
                Point::new(100.0, 100.0),
            ],
            &RecognizerConfig::default(),
        )
        .unwrap()
    }

    fn check() -> Vec<Point> {
        normalize(
            &[
                Point::new(0.0, 50.0),
                Point::new(30.0, 100.0),
                Point::new(100.0, 0.0),
            ],
            &RecognizerConfig::default(),
        )
        .unwrap()
    }

    fn default_bracket() -> (RangeInclusive<f64>, f64) {
        let config = RecognizerConfig::default();
        (
            -config.angle_range..=config.angle_range,
            config.angle_precision,
        )
    }

    #[test]
    fn phi_is_golden_ratio_conjugate() {
        assert!((PHI - 0.5 * (5.0_f64.sqrt() - 1.0)).abs() < 1e-15);
    }

    #[test]
    fn score_uses_quarter_turn() {
        assert_eq!(score_from_distance(0.0), 1.0);
        assert!((score_from_distance(FRAC_PI_2)).abs() < 1e-15);
        assert!(score_from_distance(10.0) < 0.0);
    }

    #[test]
    fn metric_selection() {
        assert_eq!(Metric::from_closed_form(true), Metric::Protractor);
        assert_eq!(Metric::from_closed_form(false), Metric::RotationSearch);
        assert!(Metric::Protractor.is_closed_form());
        assert!(!Metric::default().is_closed_form());
    }

    #[test]
    fn protractor_identical_vectors_are_zero_distance() {
        let v = vectorize(&caret()).unwrap();
        let d = optimal_cosine_distance(&v, &v);
        assert!(d.is_finite());
        assert!(d < 1e-6, "distance was {d}");
    }

    #[test]
    fn protractor_is_symmetric_and_bounded() {
        let v1 = vectorize(&caret()).unwrap();
        let v2 = vectorize(&check()).unwrap();
        let d12 = optimal_cosine_distance(&v1, &v2);
        let d21 = optimal_cosine_distance(&v2, &v1);
        assert!((d12 - d21).abs() < 1e-12);
        assert!(d12 > 0.0 && d12 <= core::f64::consts::PI);
    }

    #[test]
    fn protractor_recovers_rotation() {
        let path = caret();
        let turned = rotate_by(&path, 0.3);
        let d = optimal_cosine_distance(
            &vectorize(&path).unwrap(),
            &vectorize(&turned).unwrap(),
        );
        assert!(d < 1e-6, "distance was {d}");
    }

    #[test]
    fn protractor_orthogonal_input_does_not_nan() {
        // a == 0 and b == 0.
        let d = optimal_cosine_distance(&[1.0, 0.0, 0.0, 0.0], &[0.0, 0.0, 0.0, 1.0]);
        assert!((d - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn rotation_search_self_distance_is_zero() {
        let path = caret();
        let (bracket, precision) = default_bracket();
        assert_eq!(distance_at_best_angle(&path, &path, bracket, precision), 0.0);
    }

    #[test]
    fn rotation_search_finds_small_rotations() {
        let path = check();
        let turned = rotate_by(&path, 20.0_f64.to_radians());
        let (bracket, precision) = default_bracket();
        let searched = distance_at_best_angle(&turned, &path, bracket, precision);
        let unrotated = path_distance(&turned, &path);
        assert!(searched < unrotated / 5.0, "{searched} vs {unrotated}");
    }

    #[test]
    fn rotation_search_outside_bracket_skips_identity() {
        let path = caret();
        let searched = distance_at_best_angle(&path, &path, 0.5..=1.0, 0.01);
        assert!(searched > 0.0);
        assert!((searched - distance_at_angle(&path, &path, 0.5)).abs() < 5.0);
    }

    #[test]
    fn distance_at_zero_angle_is_path_distance() {
        let a = caret();
        let b = check();
        assert!((distance_at_angle(&a, &b, 0.0) - path_distance(&a, &b)).abs() < 1e-12);
    }
}
