// Copyright 2026
// SPDX-License-Identifier: Apache-2.0
//
// Deny Filter Plugin - Aho-Corasick automaton
//
// Multi-pattern matcher over Unicode scalar values:
// - Nodes live in a single arena and refer to each other by index
// - Failure links are computed once, breadth-first, at build time
// - Output sets are flattened along failure links so a scan never walks them

use std::collections::VecDeque;

use crate::normalize::fold_char;

type NodeId = u32;

const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    /// Sorted by character for binary search.
    children: Vec<(char, NodeId)>,
    /// Longest proper suffix of this node's path that is also a trie path.
    fail: NodeId,
    /// Word ending exactly at this node.
    word: Option<u32>,
    /// Every word that is a suffix of this node's path, longest first.
    outputs: Vec<u32>,
}

impl Node {
    #[inline]
    fn child(&self, c: char) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&c, |&(k, _)| k)
            .ok()
            .map(|i| self.children[i].1)
    }
}

/// A located occurrence of a dictionary word.
///
/// Offsets count characters, not bytes: `start..end` covers the matched
/// characters of the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchSpan<'a> {
    pub start: usize,
    pub end: usize,
    /// Normalized dictionary word that matched.
    pub word: &'a str,
}

impl MatchSpan<'_> {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// What a scan should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Stop at the first match.
    Exists,
    /// Report every match, overlapping ones included.
    AllSpans,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome<'a> {
    Exists(bool),
    Spans(Vec<MatchSpan<'a>>),
}

/// Immutable trie with failure links built from a normalized word set.
#[derive(Debug, Clone)]
pub struct Automaton {
    nodes: Vec<Node>,
    words: Vec<Box<str>>,
    /// Length of each word in characters.
    word_lens: Vec<usize>,
}

impl Default for Automaton {
    fn default() -> Self {
        Self::build(std::iter::empty::<&str>())
    }
}

impl Automaton {
    /// Build an automaton from already-normalized words.
    ///
    /// Empty strings and duplicates are ignored. An empty input yields a
    /// root-only automaton that never matches.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut automaton = Self {
            nodes: vec![Node::default()],
            words: Vec::new(),
            word_lens: Vec::new(),
        };

        for word in words {
            automaton.insert(word.as_ref());
        }
        automaton.link();
        automaton
    }

    fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut node = ROOT;
        let mut len = 0;
        for c in word.chars() {
            len += 1;
            node = match self.nodes[node as usize]
                .children
                .binary_search_by_key(&c, |&(k, _)| k)
            {
                Ok(i) => self.nodes[node as usize].children[i].1,
                Err(i) => {
                    let id = self.nodes.len() as NodeId;
                    self.nodes.push(Node::default());
                    self.nodes[node as usize].children.insert(i, (c, id));
                    id
                }
            };
        }

        let terminal = &mut self.nodes[node as usize];
        if terminal.word.is_some() {
            return;
        }
        let id = self.words.len() as u32;
        terminal.word = Some(id);
        self.words.push(word.into());
        self.word_lens.push(len);
    }

    /// Compute failure links and flattened output sets breadth-first.
    ///
    /// A node's failure target is always shallower than the node itself, so
    /// its output set is final by the time the node is dequeued.
    fn link(&mut self) {
        let mut queue = VecDeque::new();

        for &(_, child) in &self.nodes[ROOT as usize].children {
            queue.push_back(child);
        }

        while let Some(id) = queue.pop_front() {
            let fail = self.nodes[id as usize].fail;
            let mut outputs: Vec<u32> = self.nodes[id as usize].word.into_iter().collect();
            outputs.extend_from_slice(&self.nodes[fail as usize].outputs);
            self.nodes[id as usize].outputs = outputs;

            let children = self.nodes[id as usize].children.clone();
            for (c, child) in children {
                let mut f = fail;
                let target = loop {
                    if let Some(next) = self.nodes[f as usize].child(c) {
                        break next;
                    }
                    if f == ROOT {
                        break ROOT;
                    }
                    f = self.nodes[f as usize].fail;
                };
                self.nodes[child as usize].fail = target;
                queue.push_back(child);
            }
        }
    }

    /// Number of distinct words in the automaton.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| &**w)
    }

    #[inline]
    fn step(&self, mut node: NodeId, c: char) -> NodeId {
        loop {
            if let Some(next) = self.nodes[node as usize].child(c) {
                return next;
            }
            if node == ROOT {
                return ROOT;
            }
            node = self.nodes[node as usize].fail;
        }
    }

    /// Single left-to-right pass over `text`, folding case on the fly.
    ///
    /// Spans are reported in order of their end offset; spans sharing an end
    /// offset are ordered longest first.
    pub fn scan<'a>(&'a self, text: &str, mode: ScanMode) -> ScanOutcome<'a> {
        let mut spans = Vec::new();
        if self.is_empty() {
            return match mode {
                ScanMode::Exists => ScanOutcome::Exists(false),
                ScanMode::AllSpans => ScanOutcome::Spans(spans),
            };
        }

        let mut node = ROOT;
        for (i, c) in text.chars().enumerate() {
            node = self.step(node, fold_char(c));
            let outputs = &self.nodes[node as usize].outputs;
            if outputs.is_empty() {
                continue;
            }
            if mode == ScanMode::Exists {
                return ScanOutcome::Exists(true);
            }
            let end = i + 1;
            for &w in outputs {
                spans.push(MatchSpan {
                    start: end - self.word_lens[w as usize],
                    end,
                    word: &self.words[w as usize],
                });
            }
        }

        match mode {
            ScanMode::Exists => ScanOutcome::Exists(false),
            ScanMode::AllSpans => ScanOutcome::Spans(spans),
        }
    }

    /// True if any word occurs in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        matches!(self.scan(text, ScanMode::Exists), ScanOutcome::Exists(true))
    }

    /// Every occurrence of every word in `text`.
    pub fn find_all<'a>(&'a self, text: &str) -> Vec<MatchSpan<'a>> {
        match self.scan(text, ScanMode::AllSpans) {
            ScanOutcome::Spans(spans) => spans,
            ScanOutcome::Exists(_) => Vec::new(),
        }
    }
}
