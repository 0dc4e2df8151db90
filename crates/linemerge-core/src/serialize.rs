// render tokens back to text

use crate::model::Token;

/// Output formatting knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Emit the blank separator line before the first token's comments too.
    pub leading_blank_line: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self { leading_blank_line: true }
    }
}

/// Render tokens as text with the default options.
pub fn serialize(tokens: &[Token]) -> String {
    serialize_with(tokens, SerializeOptions::default())
}

/// Render tokens as text.
///
/// Every comment block is preceded by one blank line. The result always ends
/// with exactly one `\n`; trailing whitespace of the last line is trimmed.
pub fn serialize_with(tokens: &[Token], options: SerializeOptions) -> String {
    let mut out = String::new();

    for (i, token) in tokens.iter().enumerate() {
        if token.has_comments() {
            if i > 0 || options.leading_blank_line {
                out.push('\n');
            }
            for comment in &token.comments {
                out.push_str(comment);
                out.push('\n');
            }
        }
        out.push_str(&token.line);
        out.push('\n');
    }

    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out.push('\n');
    out
}
