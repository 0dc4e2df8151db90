// Shape checks for untyped (JSON) input, done once before any typed work

use crate::error::{MergeError, Result};
use crate::model::{Token, TokenSequence};
use crate::serialize::serialize;
use serde_json::Value;

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Convert a JSON array of `{ "line": ..., "comments": [...] }` records into tokens.
pub fn tokens_from_value(value: &Value) -> Result<TokenSequence> {
    let items = value.as_array().ok_or_else(|| {
        MergeError::invalid_argument(format!(
            "expected an array of tokens, got {} {}",
            kind(value),
            value
        ))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if !item.is_object() {
                return Err(MergeError::invalid_argument(format!(
                    "token {} must be an object, got {} {}",
                    i,
                    kind(item),
                    item
                )));
            }
            serde_json::from_value::<Token>(item.clone()).map_err(|e| {
                MergeError::invalid_argument(format!("token {} is malformed: {}", i, e))
            })
        })
        .collect()
}

fn expect_str<'a>(value: &'a Value, operation: &str, position: usize) -> Result<&'a str> {
    value.as_str().ok_or_else(|| {
        MergeError::invalid_argument(format!(
            "{} expects string arguments, argument {} is {} {}",
            operation,
            position,
            kind(value),
            value
        ))
    })
}

pub fn tokenize_value(value: &Value) -> Result<TokenSequence> {
    let text = expect_str(value, "tokenize", 0)?;
    Ok(crate::tokenize(text))
}

pub fn serialize_value(value: &Value) -> Result<String> {
    let tokens = tokens_from_value(value)?;
    Ok(serialize(&tokens))
}

/// Validate every argument first, then merge; nothing is produced on error.
pub fn merge_values(values: &[Value]) -> Result<String> {
    let texts = values
        .iter()
        .enumerate()
        .map(|(i, v)| expect_str(v, "merge", i))
        .collect::<Result<Vec<_>>>()?;
    Ok(crate::merge(&texts))
}

pub fn merge_raw_values(values: &[Value]) -> Result<TokenSequence> {
    let sequences = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            tokens_from_value(v).map_err(|e| match e {
                MergeError::InvalidArgument { message } => MergeError::invalid_argument(
                    format!("merge_raw argument {}: {}", i, message),
                ),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(crate::merge_raw(&sequences))
}
