// Copyright 2026
// SPDX-License-Identifier: Apache-2.0
//
// Deny Filter Plugin - configuration

use serde::{Deserialize, Serialize};

/// Character written over every masked character.
pub const DEFAULT_PLACEHOLDER: char = '*';

/// Lines starting with this prefix (after leading whitespace) are ignored.
pub const DEFAULT_COMMENT_PREFIX: &str = "#";

/// Engine configuration shared by the loader and the masker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Replacement character used by `filter`, one per masked character.
    pub placeholder: char,
    /// Comment marker for dictionary files. `None` treats every line as a word.
    pub comment_prefix: Option<String>,
    /// Fail a reload when the glob resolves to zero files.
    pub require_sources: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER,
            comment_prefix: Some(DEFAULT_COMMENT_PREFIX.to_string()),
            require_sources: false,
        }
    }
}

impl FilterConfig {
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn with_comment_prefix(mut self, prefix: Option<&str>) -> Self {
        self.comment_prefix = prefix.filter(|p| !p.is_empty()).map(str::to_string);
        self
    }

    pub fn with_require_sources(mut self, require: bool) -> Self {
        self.require_sources = require;
        self
    }
}
