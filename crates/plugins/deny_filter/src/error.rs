// Copyright 2026
// SPDX-License-Identifier: Apache-2.0
//
// Deny Filter Plugin - error types

use std::fmt;
use std::path::PathBuf;

/// Errors that abort a dictionary load.
///
/// A failed load never touches the published snapshot; the engine keeps
/// serving the previous dictionary.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("invalid dictionary glob '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("dictionary glob '{pattern}' matched no files")]
    NoSources { pattern: String },
}

/// A dictionary source problem that was skipped during a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialSourceWarning {
    pub path: PathBuf,
    /// 1-based line number, `None` when the whole file was skipped.
    pub line: Option<usize>,
    pub reason: String,
}

impl PartialSourceWarning {
    pub fn file(path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        Self {
            path: path.into(),
            line: None,
            reason: reason.to_string(),
        }
    }

    pub fn line(path: impl Into<PathBuf>, line: usize, reason: impl fmt::Display) -> Self {
        Self {
            path: path.into(),
            line: Some(line),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for PartialSourceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}: {}", self.path.display(), line, self.reason),
            None => write!(f, "{}: {}", self.path.display(), self.reason),
        }
    }
}
