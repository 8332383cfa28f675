// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Point;

use crate::metric::Metric;

/// Number of points every path is resampled to by default.
pub const DEFAULT_POINT_COUNT: usize = 64;

/// Side of the reference square paths are scaled into by default.
pub const DEFAULT_SQUARE_SIZE: f64 = 250.0;

/// Default half-width of the rotation-search bracket, in degrees.
pub const DEFAULT_ANGLE_RANGE_DEGREES: f64 = 45.0;

/// Default rotation-search convergence threshold, in degrees.
pub const DEFAULT_ANGLE_PRECISION_DEGREES: f64 = 2.0;

/// Tunables for normalization and matching.
///
/// All templates and inputs handled by one recognizer go through the same
/// configuration; the fields are therefore fixed once a
/// [`Recognizer`](crate::Recognizer) is built.
///
/// ```
/// use understory_unistroke::{Metric, RecognizerConfig};
///
/// let config = RecognizerConfig::default()
///     .with_point_count(32)
///     .with_metric(Metric::Protractor);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.point_count, 32);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RecognizerConfig {
    /// Number of points each path is resampled to.
    pub point_count: usize,
    /// Size that the longer side of the bounding box is scaled to.
    pub square_size: f64,
    /// Where the centroid of a normalized path is placed.
    pub origin: Point,
    /// Half-width of the rotation-search bracket, in radians.
    pub angle_range: f64,
    /// Rotation-search convergence threshold, in radians.
    pub angle_precision: f64,
    /// Metric used by [`Recognizer::recognize`](crate::Recognizer::recognize).
    pub metric: Metric,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            square_size: DEFAULT_SQUARE_SIZE,
            origin: Point::ZERO,
            angle_range: DEFAULT_ANGLE_RANGE_DEGREES.to_radians(),
            angle_precision: DEFAULT_ANGLE_PRECISION_DEGREES.to_radians(),
            metric: Metric::default(),
        }
    }
}

impl RecognizerConfig {
    /// Returns a copy with a different resample density.
    #[must_use]
    pub fn with_point_count(mut self, point_count: usize) -> Self {
        self.point_count = point_count;
        self
    }

    /// Returns a copy with a different normalization square size.
    #[must_use]
    pub fn with_square_size(mut self, square_size: f64) -> Self {
        self.square_size = square_size;
        self
    }

    /// Returns a copy with a different translation origin.
    #[must_use]
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Returns a copy with a different rotation-search bracket and tolerance,
    /// both in radians.
    #[must_use]
    pub fn with_angle_search(mut self, angle_range: f64, angle_precision: f64) -> Self {
        self.angle_range = angle_range;
        self.angle_precision = angle_precision;
        self
    }

    /// Returns a copy with a different default metric.
    #[must_use]
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Checks that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.point_count < 2 {
            return Err(ConfigError::PointCount(self.point_count));
        }
        if !self.square_size.is_finite() || self.square_size <= 0.0 {
            return Err(ConfigError::SquareSize(self.square_size));
        }
        if !self.origin.is_finite() {
            return Err(ConfigError::Origin(self.origin));
        }
        if !self.angle_range.is_finite() || self.angle_range < 0.0 {
            return Err(ConfigError::AngleRange(self.angle_range));
        }
        if !self.angle_precision.is_finite() || self.angle_precision <= 0.0 {
            return Err(ConfigError::AnglePrecision(self.angle_precision));
        }
        Ok(())
    }
}

/// A [`RecognizerConfig`] field holds an unusable value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `point_count` is below 2.
    PointCount(usize),
    /// `square_size` is not a positive finite number.
    SquareSize(f64),
    /// `origin` has a non-finite coordinate.
    Origin(Point),
    /// `angle_range` is negative or not finite.
    AngleRange(f64),
    /// `angle_precision` is not a positive finite number.
    AnglePrecision(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointCount(n) => write!(f, "point_count must be at least 2, got {n}"),
            Self::SquareSize(s) => write!(f, "square_size must be positive and finite, got {s}"),
            Self::Origin(p) => write!(f, "origin must be finite, got {p:?}"),
            Self::AngleRange(r) => {
                write!(f, "angle_range must be non-negative and finite, got {r}")
            }
            Self::AnglePrecision(p) => {
                write!(f, "angle_precision must be positive and finite, got {p}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_constants() {
        let config = RecognizerConfig::default();
        assert_eq!(config.point_count, 64);
        assert_eq!(config.square_size, 250.0);
        assert_eq!(config.origin, Point::ZERO);
        assert!((config.angle_range - core::f64::consts::FRAC_PI_4).abs() < 1e-12);
        assert!((config.angle_precision - 2.0_f64.to_radians()).abs() < 1e-12);
        assert_eq!(config.metric, Metric::RotationSearch);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_unusable_fields() {
        let base = RecognizerConfig::default();
        assert_eq!(
            base.with_point_count(1).validate(),
            Err(ConfigError::PointCount(1))
        );
        assert_eq!(
            base.with_square_size(0.0).validate(),
            Err(ConfigError::SquareSize(0.0))
        );
        assert!(matches!(
            base.with_square_size(f64::NAN).validate(),
            Err(ConfigError::SquareSize(_))
        ));
        assert!(matches!(
            base.with_origin(Point::new(f64::INFINITY, 0.0)).validate(),
            Err(ConfigError::Origin(_))
        ));
        assert_eq!(
            base.with_angle_search(-0.1, 0.01).validate(),
            Err(ConfigError::AngleRange(-0.1))
        );
        assert_eq!(
            base.with_angle_search(0.5, 0.0).validate(),
            Err(ConfigError::AnglePrecision(0.0))
        );
    }

    #[test]
    fn zero_angle_range_is_allowed() {
        let config = RecognizerConfig::default().with_angle_search(0.0, 0.01);
        assert_eq!(config.validate(), Ok(()));
    }
}
