// split text into tokens, attaching preceding comment runs to the next content line

use crate::model::{Token, TokenSequence};
use crate::normalize::normalize;

/// Marker that makes a line a comment when it appears at column zero.
pub const COMMENT_PREFIX: char = '#';

pub fn is_comment(line: &str) -> bool {
    line.starts_with(COMMENT_PREFIX)
}

/// Tokenize text into content lines with their leading comment blocks.
///
/// Line endings are normalized first. A final `\n` terminates the last line
/// rather than opening an empty one, so `"a\n"` and `"a"` tokenize alike.
/// Comment lines with no content line after them are dropped.
pub fn tokenize(text: &str) -> TokenSequence {
    let text = normalize(text);

    let mut tokens = Vec::new();
    let mut pending: Vec<String> = Vec::new();

    for line in text.split_terminator('\n') {
        if is_comment(line) {
            pending.push(line.to_string());
            continue;
        }

        tokens.push(Token {
            line: line.to_string(),
            comments: std::mem::take(&mut pending),
        });
    }

    tokens
}
