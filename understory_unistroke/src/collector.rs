// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::recognizer::Match;

/// Keeps the best `limit` matches, highest score first, one entry per name.
#[derive(Debug)]
pub(crate) struct MatchCollector {
    limit: usize,
    matches: Vec<Match>,
}

impl MatchCollector {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            limit,
            matches: Vec::with_capacity(limit),
        }
    }

    /// Files a candidate.
    ///
    /// Candidates arrive in registration order; an equal score never displaces
    /// an earlier entry, so ties keep registration order.
    pub(crate) fn file(&mut self, candidate: Match) {
        if self.limit == 0 {
            return;
        }
        if self.matches.len() == self.limit
            && self
                .matches
                .last()
                .is_some_and(|worst| candidate.score <= worst.score)
        {
            return;
        }
        if let Some(ix) = self.matches.iter().position(|m| m.name == candidate.name) {
            if candidate.score <= self.matches[ix].score {
                return;
            }
            self.matches.remove(ix);
        }
        let ix = self
            .matches
            .iter()
            .position(|m| m.score < candidate.score)
            .unwrap_or(self.matches.len());
        self.matches.insert(ix, candidate);
        self.matches.truncate(self.limit);
    }

    pub(crate) fn into_matches(self) -> Vec<Match> {
        self.matches
    }
}
