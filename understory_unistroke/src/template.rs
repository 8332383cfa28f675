// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;

use crate::config::RecognizerConfig;
use crate::error::RecognizeError;
use crate::normalize::normalize;
use crate::vectorize::vectorize;

/// A named, pre-normalized exemplar gesture.
///
/// Templates are immutable once built. Both the normalized path (for rotation
/// search) and its unit vector (for Protractor) are computed up front so
/// recognition never re-normalizes stored gestures.
#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    name: String,
    points: Vec<Point>,
    vector: Vec<f64>,
}

impl Template {
    /// Normalizes and vectorizes a raw stroke under `config`.
    ///
    /// Fails with [`RecognizeError::EmptyName`] for an empty name, and with
    /// the normalization error when the stroke is degenerate.
    pub fn new(
        name: impl Into<String>,
        points: &[Point],
        config: &RecognizerConfig,
    ) -> Result<Self, RecognizeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RecognizeError::EmptyName);
        }
        let points = normalize(points, config)?;
        let vector = vectorize(&points)?;
        Ok(Self {
            name,
            points,
            vector,
        })
    }

    /// The name reported when this template wins.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The normalized path.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The flattened unit vector of [`points`](Self::points).
    pub fn vector(&self) -> &[f64] {
        &self.vector
    }
}

/// Ordered collection of templates.
///
/// Registration order is significant: when two templates are equally close
/// to an input, the one registered first wins. Names need not be unique.
#[derive(Clone, Debug, Default)]
pub struct TemplateStore {
    templates: Vec<Template>,
}

impl TemplateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a template and returns its index.
    pub fn push(&mut self, template: Template) -> usize {
        self.templates.push(template);
        self.templates.len() - 1
    }

    /// Number of stored templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns `true` when no template is stored.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Template at `index`, in registration order.
    pub fn get(&self, index: usize) -> Option<&Template> {
        self.templates.get(index)
    }

    /// Iterates templates in registration order.
    pub fn iter(&self) -> core::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    /// All templates in registration order.
    pub fn as_slice(&self) -> &[Template] {
        &self.templates
    }

    /// Removes every template called `name`, keeping the relative order of
    /// the rest. Returns how many were removed.
    pub fn remove_named(&mut self, name: &str) -> usize {
        let before = self.templates.len();
        self.templates.retain(|t| t.name != name);
        before - self.templates.len()
    }

    /// Removes every template.
    pub fn clear(&mut self) {
        self.templates.clear();
    }
}

impl<'a> IntoIterator for &'a TemplateStore {
    type Item = &'a Template;
    type IntoIter = core::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
