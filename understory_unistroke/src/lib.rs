// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_unistroke --heading-base-level=0

//! Understory Unistroke: single-stroke gesture recognition.
//!
//! This crate classifies a freehand stroke (an ordered list of points from
//! pointer or touch input) against a library of named template strokes. It is
//! a geometric template matcher: every stroke goes through the same
//! normalization pipeline, and one of two distance metrics picks the closest
//! template.
//!
//! The pieces, leaves first:
//!
//! - [`geometry`]: path length, centroid, bounding box, rotation, and mean
//!   pointwise distance over [`kurbo::Point`] slices.
//! - [`normalize`]: resampling to a fixed point count, indicative-angle
//!   rotation, uniform scaling into a reference square, and centroid
//!   translation.
//! - [`vectorize`]: unit-length flattened vectors for the closed-form metric.
//! - [`metric`]: golden-section rotation search and the Protractor distance.
//! - [`Template`] / [`TemplateStore`]: named, pre-normalized strokes kept in
//!   registration order.
//! - [`Recognizer`]: the registry plus matching, producing a [`Recognition`].
//!
//! The crate does not capture input, render strokes, or persist templates.
//! Hosts feed it raw points (for example the positions seen between pointer
//! down and pointer up) and act on the returned name.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_unistroke::{Metric, Recognition, Recognizer};
//!
//! let mut recognizer = Recognizer::new();
//!
//! let square = [
//!     Point::new(0.0, 0.0),
//!     Point::new(100.0, 0.0),
//!     Point::new(100.0, 100.0),
//!     Point::new(0.0, 100.0),
//! ];
//! recognizer.add_template("square", &square).unwrap();
//!
//! // Same shape, drawn larger and elsewhere on screen.
//! let drawn: Vec<Point> = square
//!     .iter()
//!     .map(|p| Point::new(p.x * 2.0 + 300.0, p.y * 2.0 + 40.0))
//!     .collect();
//!
//! let result = recognizer.recognize_with(&drawn, Metric::RotationSearch).unwrap();
//! assert_eq!(result.name(), "square");
//! assert!(result.score() > 0.99);
//!
//! // With nothing registered there is nothing to match.
//! let empty = Recognizer::new();
//! assert_eq!(empty.recognize(&drawn).unwrap(), Recognition::NoMatch);
//! ```
//!
//! ## Scores
//!
//! Both metrics report `1 − distance / (π/2)`. For Protractor the distance is
//! an angle, so scores fall in `[0, 1]`. For rotation search the distance is
//! in reference-square units and poor matches can score below zero; scores
//! are only meaningful relative to each other.
//!
//! ## Errors
//!
//! Degenerate strokes (fewer than two points, zero length, zero extent) and
//! non-finite coordinates are reported as [`RecognizeError`] instead of
//! producing NaN. An empty registry is not an error and yields
//! [`Recognition::NoMatch`].
//!
//! ## Features
//!
//! - `std` (default): use the standard library for float math.
//! - `libm`: use `libm` for float math in `no_std` builds.
//! - `parallel`: measure templates on the `rayon` thread pool. Results are
//!   identical to the serial path, including tie-breaking.
//!
//! Diagnostics are emitted through `tracing` at `debug` and `trace` level.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod collector;
mod config;
mod error;
pub mod geometry;
pub mod metric;
pub mod normalize;
mod recognizer;
mod template;
pub mod vectorize;

pub use config::{
    ConfigError, DEFAULT_ANGLE_PRECISION_DEGREES, DEFAULT_ANGLE_RANGE_DEGREES,
    DEFAULT_POINT_COUNT, DEFAULT_SQUARE_SIZE, RecognizerConfig,
};
pub use error::{DegenerateReason, RecognizeError};
pub use metric::Metric;
pub use recognizer::{Match, NO_MATCH_NAME, Recognition, Recognizer};
pub use template::{Template, TemplateStore};
