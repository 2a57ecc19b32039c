// Copyright 2026
// SPDX-License-Identifier: Apache-2.0
//
// Deny Filter Plugin - masking
//
// Rewrites matched character ranges with a placeholder, one placeholder per
// character, so the output has exactly as many characters as the input.

use std::borrow::Cow;
use std::ops::Range;

use crate::automaton::MatchSpan;
use crate::snapshot::Snapshot;

/// Merge spans into sorted, disjoint character ranges.
///
/// Overlapping and adjacent spans collapse into one range.
pub fn merge_spans(spans: &[MatchSpan<'_>]) -> Vec<Range<usize>> {
    let mut ranges: Vec<Range<usize>> = spans
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| s.start..s.end)
        .collect();
    ranges.sort_unstable_by_key(|r| (r.start, r.end));

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for r in ranges {
        match merged.last_mut() {
            Some(last) if r.start <= last.end => last.end = last.end.max(r.end),
            _ => merged.push(r),
        }
    }
    merged
}

/// Replace every character covered by `spans` with `placeholder`.
///
/// Returns the input borrowed when there is nothing to mask.
pub fn mask_spans<'t>(text: &'t str, spans: &[MatchSpan<'_>], placeholder: char) -> Cow<'t, str> {
    let ranges = merge_spans(spans);
    if ranges.is_empty() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut ranges = ranges.into_iter().peekable();
    for (i, c) in text.chars().enumerate() {
        while ranges.next_if(|r| r.end <= i).is_some() {}
        match ranges.peek() {
            Some(r) if r.contains(&i) => out.push(placeholder),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Scan `text` against `snapshot` and mask every match.
pub fn filter_text<'t>(snapshot: &Snapshot, text: &'t str, placeholder: char) -> Cow<'t, str> {
    let spans = snapshot.scan(text);
    mask_spans(text, &spans, placeholder)
}
