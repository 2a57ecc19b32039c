// Copyright 2026
// SPDX-License-Identifier: Apache-2.0
//
// Deny Filter Plugin - Rust Implementation
//
// Dictionary-based deny-word detection and masking using:
// - A hand-built Aho-Corasick automaton over Unicode characters (single pass)
// - ArcSwap-published immutable snapshots (lock-free lookups, atomic reloads)
// - Glob-selected plain-text word lists (best-effort loading)

pub mod automaton;
pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod masking;
pub mod normalize;
pub mod snapshot;

pub use automaton::{Automaton, MatchSpan, ScanMode, ScanOutcome};
pub use config::FilterConfig;
pub use engine::DenyFilter;
pub use error::{LoadError, PartialSourceWarning};
pub use loader::{LoadReport, Loader};
pub use masking::{filter_text, mask_spans};
pub use normalize::{Normalizer, normalize_line};
pub use snapshot::Snapshot;
