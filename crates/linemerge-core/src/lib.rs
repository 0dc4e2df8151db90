//! Merge line-oriented documents such as ignore files.
//!
//! Each document is tokenized into content lines that carry the `#` comment
//! block written directly above them. Merging keeps the first occurrence of
//! every line, in first-seen order, and combines comment blocks of repeated
//! lines. Serializing puts a blank line before each comment block and ends
//! the text with exactly one newline.

pub mod config;
pub mod error;
pub mod helpers;
pub mod interactive;
pub mod lint;
pub mod merge;
pub mod model;
pub mod normalize;
pub mod serialize;
pub mod tokenize;
pub mod value;

pub use error::{MergeError, Result};
pub use merge::{merge_comments, merge_into, merge_tokens, MergeStats, Merger};
pub use model::{Token, TokenSequence};
pub use normalize::normalize;
pub use serialize::{serialize, serialize_with, SerializeOptions};
pub use tokenize::tokenize;
pub use value::{merge_raw_values, merge_values, serialize_value, tokenize_value, tokens_from_value};

use anyhow::Context;
use std::fs;
use std::path::Path;

/// Merge texts into one document with the default formatting.
pub fn merge<S: AsRef<str>>(texts: &[S]) -> String {
    merge_with(texts, SerializeOptions::default())
}

pub fn merge_with<S: AsRef<str>>(texts: &[S], options: SerializeOptions) -> String {
    let sequences: Vec<TokenSequence> = texts.iter().map(|t| tokenize(t.as_ref())).collect();
    serialize_with(&merge_tokens(&sequences), options)
}

/// Merge already tokenized sequences. Inputs are copied, never modified.
pub fn merge_raw<S: AsRef<[Token]>>(sequences: &[S]) -> TokenSequence {
    merge_tokens(sequences)
}

fn read_source(path: &str) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
}

fn read_json(path: &str) -> anyhow::Result<serde_json::Value> {
    let raw = read_source(path)?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse JSON in {}", path))
}

/// Write `content` to `path`, refusing to replace an existing file unless
/// `force` is set or the user confirms.
fn write_output(path: &str, content: &str, force: bool) -> anyhow::Result<()> {
    if Path::new(path).exists() && !force {
        if !interactive::confirm_overwrite(path)? {
            anyhow::bail!("{} already exists. Use --force to overwrite.", path);
        }
    }

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    fs::write(path, content).with_context(|| format!("Failed to write {}", path))
}

/// Per-source numbers collected while merging, for the stats table
struct SourceReport {
    name: String,
    tokens: usize,
    stats: MergeStats,
}

fn merge_files(files: &[String]) -> anyhow::Result<(TokenSequence, Vec<SourceReport>)> {
    let mut merger = Merger::new();
    let mut reports = Vec::with_capacity(files.len());

    for file in files {
        let tokens = tokenize(&read_source(file)?);
        let before = merger.stats();
        merger.extend(&tokens);
        let after = merger.stats();
        reports.push(SourceReport {
            name: file.clone(),
            tokens: tokens.len(),
            stats: MergeStats {
                added: after.added - before.added,
                collapsed: after.collapsed - before.collapsed,
                comments_combined: after.comments_combined - before.comments_combined,
            },
        });
    }

    Ok((merger.finish(), reports))
}

fn print_stats(reports: &[SourceReport], merged: &[Token]) {
    use comfy_table::presets::UTF8_FULL;
    use comfy_table::{Cell, Row, Table};

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Source", "Lines", "Added", "Collapsed", "Comments combined"]);

    for report in reports {
        table.add_row(Row::from(vec![
            Cell::new(&report.name).fg(comfy_table::Color::Cyan),
            Cell::new(report.tokens),
            Cell::new(report.stats.added).fg(comfy_table::Color::Green),
            Cell::new(report.stats.collapsed),
            Cell::new(report.stats.comments_combined),
        ]));
    }

    table.add_row(Row::from(vec![
        Cell::new("Result").fg(comfy_table::Color::Green),
        Cell::new(merged.len()),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
    ]));

    eprintln!("{}", table);
}

/// Merge files, writing to `out` or stdout
pub fn cmd_merge(
    files: &[String],
    out: Option<&str>,
    stats: bool,
    options: SerializeOptions,
    force: bool,
) -> anyhow::Result<()> {
    if files.is_empty() {
        anyhow::bail!("No input files given");
    }

    let (merged, reports) = merge_files(files)?;
    let text = serialize_with(&merged, options);

    if stats {
        print_stats(&reports, &merged);
    }

    match out {
        Some(path) => {
            write_output(path, &text, force)?;
            interactive::print_success(&format!("Merged {} files into {}", files.len(), path));
        }
        None => print!("{}", text),
    }

    Ok(())
}

/// Print the tokens of a file as JSON
pub fn cmd_tokenize(file: &str) -> anyhow::Result<()> {
    let tokens = tokenize(&read_source(file)?);
    println!("{}", serde_json::to_string_pretty(&tokens)?);
    Ok(())
}

/// Merge JSON token arrays and print the merged array as JSON
pub fn cmd_merge_raw(files: &[String]) -> anyhow::Result<()> {
    let values = files.iter().map(|f| read_json(f)).collect::<anyhow::Result<Vec<_>>>()?;
    let merged = merge_raw_values(&values)?;
    println!("{}", serde_json::to_string_pretty(&merged)?);
    Ok(())
}

/// Render a JSON token array as text
pub fn cmd_serialize(file: &str) -> anyhow::Result<()> {
    let value = read_json(file)?;
    print!("{}", serialize_value(&value)?);
    Ok(())
}

/// Merge the sources listed in the config into its output file
pub fn cmd_build(dry_run: bool) -> anyhow::Result<()> {
    let config = config::load_config_with_precedence()?;

    interactive::print_info(&format!("Merging {} sources", config.merge.sources.len()));
    for source in &config.merge.sources {
        interactive::print_source(source);
    }
    eprintln!();

    let (merged, reports) = merge_files(&config.merge.sources)?;
    let options = SerializeOptions { leading_blank_line: config.leading_blank_line() };
    let text = serialize_with(&merged, options);

    if dry_run {
        interactive::print_info(&format!("Dry run - would write {}", config.output.path));
        print_stats(&reports, &merged);
        print!("{}", text);
        return Ok(());
    }

    write_output(&config.output.path, &text, true)?;

    interactive::print_success(&format!("Wrote {} lines to {}", merged.len(), config.output.path));
    Ok(())
}

/// Lint files; fails if any of them could not be checked
pub fn cmd_lint(files: &[String]) -> anyhow::Result<()> {
    let mut result = lint::LintResult::new();

    for file in files {
        match fs::read_to_string(file) {
            Ok(text) => result.extend(lint::lint_document(file, &text)),
            Err(e) => result.add_error(file, &format!("Failed to read: {}", e)),
        }
    }

    result.print();

    if result.has_errors() {
        anyhow::bail!("Lint failed with {} errors", result.error_count());
    }
    Ok(())
}

/// Merge files into ./.gitignore
pub fn cmd_gitignore(files: &[String]) -> anyhow::Result<()> {
    let sources = files.iter().map(|f| read_source(f)).collect::<anyhow::Result<Vec<_>>>()?;
    let added = helpers::git::merge_into_gitignore(Path::new("."), &sources)?;

    if added.is_empty() {
        interactive::print_info("No new patterns for .gitignore");
        return Ok(());
    }

    interactive::print_success("Updated .gitignore");
    for line in &added {
        interactive::print_added(line);
    }
    Ok(())
}
