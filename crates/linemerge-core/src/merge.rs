// line-identity merge: first-seen order wins, duplicate lines combine their comments

use crate::model::{Token, TokenSequence};
use std::collections::HashMap;

/// Counters describing what a merge did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Tokens appended because their line had not been seen yet
    pub added: usize,
    /// Incoming tokens whose line was already present
    pub collapsed: usize,
    /// Collapses that changed the stored comment block
    pub comments_combined: usize,
}

/// Running accumulator for a left-to-right merge.
///
/// Lines are unique within the accumulator. Incoming tokens are copied, so
/// callers keep ownership of whatever they pass in.
#[derive(Debug, Default)]
pub struct Merger {
    tokens: TokenSequence,
    index: HashMap<String, usize>,
    stats: MergeStats,
}

impl Merger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one token into the accumulator.
    pub fn push(&mut self, token: &Token) {
        match self.index.get(&token.line).copied() {
            None => {
                self.index.insert(token.line.clone(), self.tokens.len());
                self.tokens.push(token.clone());
                self.stats.added += 1;
            }
            Some(pos) => {
                self.stats.collapsed += 1;
                let existing = &mut self.tokens[pos];
                if existing.has_comments() || token.has_comments() {
                    let combined = merge_comments(&existing.comments, &token.comments);
                    if combined != existing.comments {
                        existing.comments = combined;
                        self.stats.comments_combined += 1;
                    }
                }
            }
        }
    }

    /// Fold a whole sequence into the accumulator, in order.
    pub fn extend(&mut self, source: &[Token]) {
        for token in source {
            self.push(token);
        }
    }

    pub fn stats(&self) -> MergeStats {
        self.stats
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn finish(self) -> TokenSequence {
        self.tokens
    }
}

/// Combine two comment blocks belonging to the same line.
///
/// Identical blocks collapse to one copy; otherwise the existing block comes
/// first and the incoming one is appended as is.
pub fn merge_comments(existing: &[String], incoming: &[String]) -> Vec<String> {
    if existing == incoming {
        return existing.to_vec();
    }

    existing.iter().chain(incoming).cloned().collect()
}

/// Merge `source` after `dest`, returning the combined sequence.
pub fn merge_into(dest: TokenSequence, source: &[Token]) -> TokenSequence {
    let mut merger = Merger::new();
    merger.extend(&dest);
    merger.extend(source);
    merger.finish()
}

/// Merge any number of sequences left to right, starting from an empty one.
pub fn merge_tokens<S: AsRef<[Token]>>(sequences: &[S]) -> TokenSequence {
    merge_tokens_with_stats(sequences).0
}

pub fn merge_tokens_with_stats<S: AsRef<[Token]>>(sequences: &[S]) -> (TokenSequence, MergeStats) {
    let mut merger = Merger::new();
    for sequence in sequences {
        merger.extend(sequence.as_ref());
    }
    let stats = merger.stats();
    (merger.finish(), stats)
}
