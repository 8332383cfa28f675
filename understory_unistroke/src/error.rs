// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::config::ConfigError;

/// Why a path could not be normalized or vectorized.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DegenerateReason {
    /// The path has fewer than two points.
    TooFewPoints {
        /// Number of points that were supplied.
        len: usize,
    },
    /// Every point coincides, so the path has no arc length to resample.
    ZeroLength,
    /// The bounding box has zero width and zero height.
    ZeroExtent,
    /// The flattened coordinate vector has zero Euclidean norm.
    ZeroMagnitude,
}

impl fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { len } => {
                write!(f, "path has {len} point(s), at least 2 are required")
            }
            Self::ZeroLength => f.write_str("path has zero total length"),
            Self::ZeroExtent => f.write_str("path bounding box has zero extent"),
            Self::ZeroMagnitude => f.write_str("path vector has zero magnitude"),
        }
    }
}

/// Error returned by normalization, registration, and recognition.
///
/// Every error is local to the call that produced it: no partial result is
/// returned and the recognizer state is unchanged.
#[derive(Clone, Debug, PartialEq)]
pub enum RecognizeError {
    /// The stroke geometry cannot be normalized.
    DegeneratePath(DegenerateReason),
    /// A raw coordinate is NaN or infinite.
    NonFinitePoint {
        /// Index of the first offending point in the raw input.
        index: usize,
    },
    /// A template was registered with an empty name.
    EmptyName,
    /// The recognizer configuration is unusable.
    InvalidConfig(ConfigError),
    /// A prepared template was built with a different point count.
    PointCountMismatch {
        /// Point count required by the recognizer configuration.
        expected: usize,
        /// Point count carried by the template.
        found: usize,
    },
}

impl From<DegenerateReason> for RecognizeError {
    fn from(reason: DegenerateReason) -> Self {
        Self::DegeneratePath(reason)
    }
}

impl From<ConfigError> for RecognizeError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfig(err)
    }
}

impl fmt::Display for RecognizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegeneratePath(reason) => write!(f, "degenerate path: {reason}"),
            Self::NonFinitePoint { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
            Self::EmptyName => f.write_str("template name must not be empty"),
            Self::InvalidConfig(err) => write!(f, "invalid recognizer configuration: {err}"),
            Self::PointCountMismatch { expected, found } => write!(
                f,
                "template has {found} points but the recognizer resamples to {expected}"
            ),
        }
    }
}

impl core::error::Error for RecognizeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(err) => Some(err),
            _ => None,
        }
    }
}
