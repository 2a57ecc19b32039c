// Copyright 2026
// SPDX-License-Identifier: Apache-2.0
//
// Deny Filter Plugin - engine handle
//
// Lookups read the current snapshot through an ArcSwap and never block.
// Reloads are serialized by a mutex and publish a fresh snapshot in one
// atomic store; a failed reload leaves the previous snapshot in place.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use arc_swap::ArcSwap;
use tracing::{info, warn};

use crate::config::FilterConfig;
use crate::error::LoadError;
use crate::loader::{LoadReport, Loader};
use crate::masking::filter_text;
use crate::snapshot::Snapshot;

/// Process-wide deny-word engine.
///
/// Cheap to share behind an `Arc`; every method takes `&self`.
///
/// # Example
/// ```
/// use deny_filter::{DenyFilter, FilterConfig};
///
/// let filter = DenyFilter::from_words(FilterConfig::default(), ["darn", "heck"]);
/// assert!(filter.exists("Well, DARN."));
/// assert_eq!(filter.filter("what the heck"), "what the ****");
/// ```
pub struct DenyFilter {
    config: FilterConfig,
    loader: Loader,
    current: ArcSwap<Snapshot>,
    reload_lock: Mutex<()>,
    generation: AtomicU64,
}

impl DenyFilter {
    /// Engine with an empty dictionary.
    pub fn new(config: FilterConfig) -> Self {
        let loader = Loader::new(&config);
        Self {
            config,
            loader,
            current: ArcSwap::from_pointee(Snapshot::empty()),
            reload_lock: Mutex::new(()),
            generation: AtomicU64::new(0),
        }
    }

    /// Engine seeded from in-memory dictionary lines.
    pub fn from_words<I, S>(config: FilterConfig, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let filter = Self::new(config);
        let snapshot = filter.loader.from_lines(words);
        filter.publish(snapshot);
        filter
    }

    /// Engine loaded from the files matched by `pattern`.
    pub fn open(config: FilterConfig, pattern: &str) -> Result<Self, LoadError> {
        let filter = Self::new(config);
        filter.reload(pattern)?;
        Ok(filter)
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// The snapshot currently in effect.
    ///
    /// Holding the returned `Arc` pins that snapshot even across reloads.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current.load_full()
    }

    /// True if any dictionary word occurs in `text`.
    pub fn exists(&self, text: &str) -> bool {
        self.current.load().exists(text)
    }

    /// True if `text` contains no dictionary word.
    pub fn validate(&self, text: &str) -> bool {
        !self.exists(text)
    }

    /// `text` with every dictionary-word occurrence masked.
    pub fn filter(&self, text: &str) -> String {
        let snapshot = self.current.load();
        filter_text(&snapshot, text, self.config.placeholder).into_owned()
    }

    /// Rebuild the dictionary from `pattern` and publish it.
    ///
    /// Returns the word count of the new snapshot.
    pub fn reload(&self, pattern: &str) -> Result<usize, LoadError> {
        self.reload_with_report(pattern).map(|report| report.word_count)
    }

    /// Like [`DenyFilter::reload`], returning the full load report.
    pub fn reload_with_report(&self, pattern: &str) -> Result<LoadReport, LoadError> {
        let _guard = self
            .reload_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let started = Instant::now();
        let (snapshot, report) = match self.loader.load(pattern) {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!("Dictionary reload failed, keeping current dictionary: {e}");
                return Err(e);
            }
        };

        let generation = self.publish(snapshot);
        info!(
            pattern,
            generation,
            words = report.word_count,
            sources = report.sources.len(),
            warnings = report.warnings.len(),
            took = ?started.elapsed(),
            "Dictionary published"
        );
        Ok(report)
    }

    fn publish(&self, snapshot: Snapshot) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        self.current.store(Arc::new(snapshot.with_generation(generation)));
        generation
    }
}

impl Default for DenyFilter {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}

impl std::fmt::Debug for DenyFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.current.load();
        f.debug_struct("DenyFilter")
            .field("config", &self.config)
            .field("generation", &snapshot.generation())
            .field("word_count", &snapshot.word_count())
            .finish()
    }
}
