// Line ending normalization

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static CRLF_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\r\n)+").expect("valid regex"));

/// Replace every run of one or more `\r\n` sequences with a single `\n`.
///
/// Bare `\n` and bare `\r` are left untouched. Returns the input unchanged
/// (borrowed) when it contains no `\r\n`.
pub fn normalize(text: &str) -> Cow<'_, str> {
    CRLF_RUN.replace_all(text, "\n")
}
