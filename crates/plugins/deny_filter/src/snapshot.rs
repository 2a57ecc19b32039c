// Copyright 2026
// SPDX-License-Identifier: Apache-2.0
//
// Deny Filter Plugin - dictionary snapshot

use chrono::{DateTime, Utc};

use crate::automaton::{Automaton, MatchSpan};

/// One immutable build of the dictionary.
///
/// Snapshots are shared behind an `Arc` and replaced wholesale on reload;
/// nothing inside is ever mutated after construction.
#[derive(Debug, Clone)]
pub struct Snapshot {
    automaton: Automaton,
    source_count: usize,
    built_at: DateTime<Utc>,
    generation: u64,
}

impl Snapshot {
    pub fn new(automaton: Automaton, source_count: usize) -> Self {
        Self {
            automaton,
            source_count,
            built_at: Utc::now(),
            generation: 0,
        }
    }

    /// Snapshot with no words; matches nothing.
    pub fn empty() -> Self {
        Self::new(Automaton::default(), 0)
    }

    pub(crate) fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn word_count(&self) -> usize {
        self.automaton.word_count()
    }

    /// Number of dictionary files that contributed words.
    pub fn source_count(&self) -> usize {
        self.source_count
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    /// Monotonic publish counter assigned by the engine; 0 until published.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn exists(&self, text: &str) -> bool {
        self.automaton.is_match(text)
    }

    pub fn scan<'a>(&'a self, text: &str) -> Vec<MatchSpan<'a>> {
        self.automaton.find_all(text)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}
