// Copyright 2026
// SPDX-License-Identifier: Apache-2.0
//
// Deny Filter Plugin - dictionary loader
//
// Best-effort assembly: unreadable files and undecodable lines are reported
// as warnings and skipped, only a bad glob (or a required-but-empty one)
// fails the load.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::automaton::Automaton;
use crate::config::FilterConfig;
use crate::error::{LoadError, PartialSourceWarning};
use crate::normalize::Normalizer;
use crate::snapshot::Snapshot;

/// Summary of a successful load.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Files matched by the glob, in resolution order.
    pub sources: Vec<PathBuf>,
    /// Distinct words that made it into the automaton.
    pub word_count: usize,
    /// Surviving lines before deduplication.
    pub line_count: usize,
    pub warnings: Vec<PartialSourceWarning>,
}

/// Builds snapshots from dictionary files selected by a glob.
#[derive(Debug, Clone)]
pub struct Loader {
    normalizer: Normalizer,
    require_sources: bool,
}

impl Loader {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            normalizer: Normalizer::new(config.comment_prefix.as_deref()),
            require_sources: config.require_sources,
        }
    }

    /// Resolve `pattern`, read every matching file and build a snapshot.
    pub fn load(&self, pattern: &str) -> Result<(Snapshot, LoadReport), LoadError> {
        let paths = glob::glob(pattern).map_err(|source| LoadError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        let mut report = LoadReport::default();
        let mut words = BTreeSet::new();

        for entry in paths {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    let warning = PartialSourceWarning::file(e.path(), e.error());
                    warn!("Skipping dictionary source: {warning}");
                    report.warnings.push(warning);
                    continue;
                }
            };
            if path.is_dir() {
                debug!("Skipping directory {}", path.display());
                continue;
            }

            match self.read_source(&path, &mut report) {
                Ok((file_words, lines)) => {
                    debug!(path = %path.display(), lines, "Read dictionary source");
                    words.extend(file_words);
                    report.line_count += lines;
                    report.sources.push(path);
                }
                Err(e) => {
                    let warning = PartialSourceWarning::file(&path, &e);
                    warn!("Skipping dictionary source: {warning}");
                    report.warnings.push(warning);
                }
            }
        }

        if report.sources.is_empty() && self.require_sources {
            return Err(LoadError::NoSources {
                pattern: pattern.to_string(),
            });
        }
        if report.sources.is_empty() {
            warn!("Dictionary glob '{pattern}' matched no files; dictionary is empty");
        }

        let snapshot = Snapshot::new(Automaton::build(&words), report.sources.len());
        report.word_count = snapshot.word_count();
        Ok((snapshot, report))
    }

    /// Build a snapshot from in-memory lines, normalizing each one.
    pub fn from_lines<I, S>(&self, lines: I) -> Snapshot
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: BTreeSet<String> = lines
            .into_iter()
            .filter_map(|line| self.normalizer.normalize(line.as_ref()))
            .collect();
        Snapshot::new(Automaton::build(&words), 0)
    }

    /// Stream `path` line by line; returns its words and the number of lines
    /// that survived normalization.
    ///
    /// Nothing from a file that fails mid-read reaches the dictionary.
    fn read_source(
        &self,
        path: &Path,
        report: &mut LoadReport,
    ) -> io::Result<(BTreeSet<String>, usize)> {
        self.read_lines(BufReader::new(File::open(path)?), path, report)
    }

    fn read_lines<R: BufRead>(
        &self,
        mut reader: R,
        path: &Path,
        report: &mut LoadReport,
    ) -> io::Result<(BTreeSet<String>, usize)> {
        let mut words = BTreeSet::new();
        let mut buf = Vec::new();
        let mut line_no = 0;
        let mut kept = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    let warning = PartialSourceWarning::line(path, line_no, e);
                    warn!("Skipping dictionary line: {warning}");
                    report.warnings.push(warning);
                    continue;
                }
            };

            if let Some(word) = self.normalizer.normalize(line) {
                words.insert(word);
                kept += 1;
            }
        }

        Ok((words, kept))
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new(&FilterConfig::default())
    }
}
