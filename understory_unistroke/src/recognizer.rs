// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use tracing::{debug, trace};

use crate::collector::MatchCollector;
use crate::config::RecognizerConfig;
use crate::error::RecognizeError;
use crate::metric::{Metric, distance_at_best_angle, optimal_cosine_distance, score_from_distance};
use crate::normalize::normalize;
use crate::template::{Template, TemplateStore};
use crate::vectorize::vectorize;

/// Name reported by [`Recognition::NoMatch`].
pub const NO_MATCH_NAME: &str = "no match";

/// A template that matched an input stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct Match {
    /// Name of the matched template.
    pub name: String,
    /// `1 − distance / (π/2)`. Not clamped, so it can leave `[0, 1]`.
    pub score: f64,
    /// Raw distance under the metric that produced this match.
    pub distance: f64,
    /// Registration index of the matched template.
    pub index: usize,
}

/// Outcome of [`Recognizer::recognize`].
#[derive(Clone, Debug, PartialEq)]
pub enum Recognition {
    /// The closest template.
    Match(Match),
    /// No template was available to compare against.
    NoMatch,
}

impl Recognition {
    /// Name of the matched template, or [`NO_MATCH_NAME`].
    pub fn name(&self) -> &str {
        match self {
            Self::Match(m) => &m.name,
            Self::NoMatch => NO_MATCH_NAME,
        }
    }

    /// Score of the match, or `0.0` for [`Recognition::NoMatch`].
    pub fn score(&self) -> f64 {
        match self {
            Self::Match(m) => m.score,
            Self::NoMatch => 0.0,
        }
    }

    /// Returns `true` when a template matched.
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match(_))
    }

    /// Borrows the match, if any.
    pub fn as_match(&self) -> Option<&Match> {
        match self {
            Self::Match(m) => Some(m),
            Self::NoMatch => None,
        }
    }

    /// Consumes the recognition, returning the match, if any.
    pub fn into_match(self) -> Option<Match> {
        match self {
            Self::Match(m) => Some(m),
            Self::NoMatch => None,
        }
    }
}

/// Template registry plus the matching engine.
///
/// Registration takes `&mut self` and recognition `&self`, so concurrent
/// recognitions can share a recognizer (for example behind an `RwLock`)
/// while registration stays exclusive.
///
/// ```
/// use kurbo::Point;
/// use understory_unistroke::{Metric, Recognizer};
///
/// let mut recognizer = Recognizer::new();
/// let caret = [
///     Point::new(0.0, 100.0),
///     Point::new(50.0, 0.0),
///     Point::new(100.0, 100.0),
/// ];
/// recognizer.add_template("caret", &caret).unwrap();
/// recognizer
///     .add_template("line", &[Point::new(0.0, 0.0), Point::new(100.0, 0.0)])
///     .unwrap();
///
/// let drawn = [
///     Point::new(210.0, 330.0),
///     Point::new(260.0, 225.0),
///     Point::new(305.0, 328.0),
/// ];
/// let result = recognizer.recognize_with(&drawn, Metric::Protractor).unwrap();
/// assert_eq!(result.name(), "caret");
/// assert!(result.score() > 0.9);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Recognizer {
    config: RecognizerConfig,
    templates: TemplateStore,
}

/// Input normalized for one metric.
enum Prepared {
    Path(Vec<Point>),
    Vector(Vec<f64>),
}

impl Recognizer {
    /// Creates a recognizer with [`RecognizerConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recognizer with a custom configuration.
    pub fn with_config(config: RecognizerConfig) -> Result<Self, RecognizeError> {
        config.validate()?;
        Ok(Self {
            config,
            templates: TemplateStore::new(),
        })
    }

    /// The configuration applied to templates and input.
    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Registered templates, in registration order.
    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    /// Normalizes `points` and registers them as a template called `name`.
    ///
    /// Returns the registration index. On error nothing is registered.
    pub fn add_template(
        &mut self,
        name: impl Into<String>,
        points: &[Point],
    ) -> Result<usize, RecognizeError> {
        let template = Template::new(name, points, &self.config)?;
        Ok(self.push(template))
    }

    /// Registers a template built elsewhere.
    ///
    /// The template must have been normalized with the same configuration as
    /// this recognizer; only the point count can be checked here.
    pub fn insert_template(&mut self, template: Template) -> Result<usize, RecognizeError> {
        let found = template.points().len();
        if found != self.config.point_count {
            return Err(RecognizeError::PointCountMismatch {
                expected: self.config.point_count,
                found,
            });
        }
        Ok(self.push(template))
    }

    /// Removes every template called `name`. Returns how many were removed.
    pub fn remove_templates(&mut self, name: &str) -> usize {
        let removed = self.templates.remove_named(name);
        debug!(name, removed, "removed templates");
        removed
    }

    /// Removes every template.
    pub fn clear_templates(&mut self) {
        self.templates.clear();
    }

    /// Recognizes `points` with the configured [`Metric`].
    pub fn recognize(&self, points: &[Point]) -> Result<Recognition, RecognizeError> {
        self.recognize_with(points, self.config.metric)
    }

    /// Recognizes `points` with an explicit metric.
    ///
    /// An empty registry yields [`Recognition::NoMatch`] without looking at
    /// the input. Otherwise the closest template wins; among equally close
    /// templates the first registered wins.
    pub fn recognize_with(
        &self,
        points: &[Point],
        metric: Metric,
    ) -> Result<Recognition, RecognizeError> {
        if self.templates.is_empty() {
            debug!("no templates registered");
            return Ok(Recognition::NoMatch);
        }
        let input = self.prepare(points, metric)?;

        let mut best = None;
        let mut best_distance = f64::INFINITY;
        for ((index, distance), template) in self
            .distances(&input)
            .into_iter()
            .enumerate()
            .zip(&self.templates)
        {
            trace!(index, distance, "measured template");
            if distance < best_distance {
                best_distance = distance;
                best = Some((index, template));
            }
        }
        let Some((index, template)) = best else {
            return Ok(Recognition::NoMatch);
        };
        let found = Match {
            name: template.name().into(),
            score: score_from_distance(best_distance),
            distance: best_distance,
            index,
        };
        debug!(name = %found.name, score = found.score, ?metric, "recognized stroke");
        Ok(Recognition::Match(found))
    }

    /// Up to `limit` matches ordered by descending score, one per template
    /// name.
    ///
    /// Equal scores keep registration order. An empty registry or a zero
    /// `limit` yields an empty list.
    pub fn recognize_n_best(
        &self,
        points: &[Point],
        metric: Metric,
        limit: usize,
    ) -> Result<Vec<Match>, RecognizeError> {
        if self.templates.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }
        let input = self.prepare(points, metric)?;
        let mut collector = MatchCollector::new(limit);
        for ((index, distance), template) in self
            .distances(&input)
            .into_iter()
            .enumerate()
            .zip(&self.templates)
        {
            collector.file(Match {
                name: template.name().into(),
                score: score_from_distance(distance),
                distance,
                index,
            });
        }
        Ok(collector.into_matches())
    }

    fn push(&mut self, template: Template) -> usize {
        let name = String::from(template.name());
        let index = self.templates.push(template);
        debug!(%name, index, "registered template");
        index
    }

    fn prepare(&self, points: &[Point], metric: Metric) -> Result<Prepared, RecognizeError> {
        let path = normalize(points, &self.config)?;
        Ok(match metric {
            Metric::RotationSearch => Prepared::Path(path),
            Metric::Protractor => Prepared::Vector(vectorize(&path)?),
        })
    }

    fn distance_to(&self, input: &Prepared, template: &Template) -> f64 {
        match input {
            Prepared::Path(path) => distance_at_best_angle(
                path,
                template.points(),
                -self.config.angle_range..=self.config.angle_range,
                self.config.angle_precision,
            ),
            Prepared::Vector(vector) => optimal_cosine_distance(template.vector(), vector),
        }
    }

    /// Distances to every template, in registration order.
    #[cfg(not(feature = "parallel"))]
    fn distances(&self, input: &Prepared) -> Vec<f64> {
        self.templates
            .iter()
            .map(|template| self.distance_to(input, template))
            .collect()
    }

    /// Distances to every template, in registration order.
    #[cfg(feature = "parallel")]
    fn distances(&self, input: &Prepared) -> Vec<f64> {
        use rayon::prelude::*;

        self.templates
            .as_slice()
            .par_iter()
            .map(|template| self.distance_to(input, template))
            .collect()
    }
}
