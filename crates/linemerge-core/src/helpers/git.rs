// Git integration helpers

use crate::merge::merge_tokens;
use crate::model::Token;
use crate::serialize::{serialize_with, SerializeOptions};
use crate::tokenize::{is_comment, tokenize};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const GITIGNORE: &str = ".gitignore";

/// Append the lines of `sources` that `.gitignore` in `dir` lacks.
///
/// The existing text is kept byte for byte, including trailing comments and
/// blank lines; new tokens are serialized after it. The file is not touched
/// when nothing is new. Returns the added content lines.
pub fn merge_into_gitignore<S: AsRef<str>>(dir: &Path, sources: &[S]) -> Result<Vec<String>> {
    let gitignore_path = dir.join(GITIGNORE);

    let existing_content = if gitignore_path.exists() {
        fs::read_to_string(&gitignore_path)
            .with_context(|| format!("Failed to read {}", gitignore_path.display()))?
    } else {
        String::new()
    };

    let existing = tokenize(&existing_content);
    let known: HashSet<&str> = existing.iter().map(|t| t.line.as_str()).collect();

    let mut sequences = vec![existing.clone()];
    sequences.extend(sources.iter().map(|s| tokenize(s.as_ref())));
    let additions: Vec<Token> = merge_tokens(&sequences)
        .into_iter()
        .filter(|t| !known.contains(t.line.as_str()))
        .collect();

    if additions.is_empty() {
        return Ok(Vec::new());
    }

    let content = append_tokens(&existing_content, &additions);
    fs::write(&gitignore_path, content)
        .with_context(|| format!("Failed to write {}", gitignore_path.display()))?;

    Ok(additions.into_iter().map(|t| t.line).collect())
}

/// `existing` followed by `additions`, kept apart so a trailing comment block
/// in `existing` does not attach to the first added line.
fn append_tokens(existing: &str, additions: &[Token]) -> String {
    let trimmed = existing.trim_end_matches(['\r', '\n']);
    if trimmed.trim().is_empty() {
        return serialize_with(additions, SerializeOptions { leading_blank_line: false });
    }

    let mut out = existing.to_string();
    if !out.ends_with('\n') {
        out.push('\n');
    }

    let ends_in_comment = trimmed.rsplit('\n').next().is_some_and(is_comment);
    let separate = ends_in_comment && !additions[0].has_comments();
    if separate {
        out.push('\n');
    }

    out.push_str(&serialize_with(additions, SerializeOptions { leading_blank_line: !separate }));
    out
}
