// Checks for content that a merge would silently drop or collapse

use crate::normalize::normalize;
use crate::tokenize::is_comment;
use owo_colors::OwoColorize;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct LintIssue {
    pub severity: Severity,
    pub file: String,
    pub line: Option<usize>,
    pub code: String,
    pub message: String,
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Default)]
pub struct LintResult {
    pub issues: Vec<LintIssue>,
}

impl LintResult {
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn add_error(&mut self, file: &str, message: &str) {
        self.issues.push(LintIssue {
            severity: Severity::Error,
            file: file.to_string(),
            line: None,
            code: "error".to_string(),
            message: message.to_string(),
            suggestion: None,
        });
    }

    pub fn add(&mut self, issue: LintIssue) {
        self.issues.push(issue);
    }

    pub fn extend(&mut self, other: LintResult) {
        self.issues.extend(other.issues);
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn info_count(&self) -> usize {
        self.count(Severity::Info)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn print(&self) {
        if self.issues.is_empty() {
            println!("{} {}", "✅".bright_green(), "All checks passed!".green().bold());
            return;
        }

        for issue in &self.issues {
            let location = match issue.line {
                Some(line) => format!("{}:{}", issue.file, line),
                None => issue.file.clone(),
            };
            match issue.severity {
                Severity::Error => {
                    println!("  {} {} [{}]", "✗".bright_red(), location.bright_white(), issue.code);
                    println!("    {}", issue.message.red());
                }
                Severity::Warning => {
                    println!("  {} {} [{}]", "▸".bright_yellow(), location.bright_white(), issue.code);
                    println!("    {}", issue.message.yellow());
                }
                Severity::Info => {
                    println!("  {} {} [{}]", "•".bright_blue(), location.bright_white(), issue.code);
                    println!("    {}", issue.message.bright_blue());
                }
            }
            if let Some(ref suggestion) = issue.suggestion {
                println!("    {} {}", "→".bright_blue(), suggestion.bright_blue());
            }
            println!();
        }

        println!("{}", "─".repeat(60).bright_black());
        let summary = format!(
            "Found {} errors, {} warnings, {} notes",
            self.error_count(),
            self.warning_count(),
            self.info_count()
        );
        if self.has_errors() {
            println!("{}", summary.red());
        } else {
            println!("{}", summary.yellow());
        }
    }
}

/// Lint one document. Line numbers are 1-based and refer to the normalized text.
pub fn lint_document(file: &str, text: &str) -> LintResult {
    let mut result = LintResult::new();
    let text = normalize(text);

    let mut pending_comment_start: Option<usize> = None;
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (idx, line) in text.split_terminator('\n').enumerate() {
        let number = idx + 1;

        if line.contains('\r') {
            result.add(LintIssue {
                severity: Severity::Warning,
                file: file.to_string(),
                line: Some(number),
                code: "bare-cr".to_string(),
                message: "Line contains a carriage return that is not part of a CRLF line ending"
                    .to_string(),
                suggestion: Some("Convert the file to LF or CRLF line endings".to_string()),
            });
        }

        if is_comment(line) {
            pending_comment_start.get_or_insert(number);
            continue;
        }
        pending_comment_start = None;

        if let Some(first) = first_seen.get(line) {
            result.add(LintIssue {
                severity: Severity::Info,
                file: file.to_string(),
                line: Some(number),
                code: "duplicate-line".to_string(),
                message: format!("Duplicate of line {}; it will be collapsed on merge", first),
                suggestion: None,
            });
        } else {
            first_seen.insert(line, number);
        }
    }

    if let Some(start) = pending_comment_start {
        result.add(LintIssue {
            severity: Severity::Warning,
            file: file.to_string(),
            line: Some(start),
            code: "dangling-comment".to_string(),
            message: "Comment block at end of file has no following line and will be dropped"
                .to_string(),
            suggestion: Some("Move the comments above the line they describe".to_string()),
        });
    }

    result
}
