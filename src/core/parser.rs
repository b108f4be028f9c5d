use crate::utils::error::{Result, RwsError};
use serde_json::Value;

/// Parses the submitted document, optionally requiring it to match its
/// canonical 2-space pretty-printed rendering. Both failure modes are
/// structural: nothing downstream runs on a document that fails here.
pub fn parse_sets_json(raw: &str, check_format: bool) -> Result<Value> {
    let value: Value = serde_json::from_str(raw)?;
    if check_format {
        let canonical = to_canonical_string(&value)?;
        if raw != canonical {
            return Err(RwsError::JsonFormat {
                diff: format_diff(raw, &canonical),
            });
        }
    }
    Ok(value)
}

/// Canonical rendering of a sets document: 2-space indent, key order as
/// submitted, trailing newline.
pub fn to_canonical_string(value: &Value) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(value)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Line diff between the submission and its canonical rendering,
/// fenced so the gate can paste it into a PR comment.
fn format_diff(actual: &str, canonical: &str) -> String {
    let actual_lines: Vec<&str> = actual.lines().collect();
    let canonical_lines: Vec<&str> = canonical.lines().collect();
    let mut out = vec!["```diff".to_string()];
    for i in 0..actual_lines.len().max(canonical_lines.len()) {
        let left = actual_lines.get(i);
        let right = canonical_lines.get(i);
        if left != right {
            if let Some(line) = left {
                out.push(format!("- {line}"));
            }
            if let Some(line) = right {
                out.push(format!("+ {line}"));
            }
        }
    }
    out.push("```".to_string());
    out.join("\n")
}
