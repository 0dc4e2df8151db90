use serde::{Deserialize, Serialize};

/// A content line together with the comment lines that immediately preceded it.
///
/// `line` never starts with `#`; comment lines only ever live in `comments`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Token {
    pub line: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

impl Token {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into(), comments: Vec::new() }
    }

    pub fn with_comments<I, S>(line: impl Into<String>, comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            line: line.into(),
            comments: comments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_comments(&self) -> bool {
        !self.comments.is_empty()
    }
}

/// Ordered tokens; order is output order.
pub type TokenSequence = Vec<Token>;

/// Full configuration after precedence merging and validation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub merge: MergeSection,
    pub output: OutputSection,
    pub format: Option<Format>,
}

impl ProjectConfig {
    pub fn leading_blank_line(&self) -> bool {
        self.format
            .as_ref()
            .and_then(|f| f.leading_blank_line)
            .unwrap_or(true)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MergeSection {
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Format {
    #[serde(rename = "leadingBlankLine")]
    pub leading_blank_line: Option<bool>,
}

/// One config layer as read from disk; any section may be missing.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialProjectConfig {
    pub merge: Option<PartialMergeSection>,
    pub output: Option<PartialOutputSection>,
    pub format: Option<Format>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialMergeSection {
    pub sources: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialOutputSection {
    pub path: Option<String>,
}
