//! Parse and render the YAML frontmatter block of skill documents.

use serde_yaml::{Mapping, Value};

/// Keys written by `migrate`; they always override keys already in the file.
pub const MANAGED_KEYS: &[&str] = &["name", "description", "disable-model-invocation"];

/// Parse content into optional YAML frontmatter (between first `---` and second `---`)
/// and body. Returns `None` if no valid frontmatter (missing delimiters or not a mapping).
pub fn parse_frontmatter_and_body(content: &str) -> Option<(Value, String)> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() < 2 || lines[0].trim() != "---" {
        return None;
    }
    let end_idx = lines[1..].iter().position(|l| l.trim() == "---")? + 1;
    let frontmatter_str = lines[1..end_idx].join("\n");
    let mut body = lines[end_idx + 1..].join("\n");
    if content.ends_with('\n') && !body.is_empty() {
        body.push('\n');
    }
    let value: Value = serde_yaml::from_str(&frontmatter_str).ok()?;
    if value.as_mapping().is_none() && !value.is_null() {
        return None;
    }
    Some((value, body))
}

/// Get a string value from a frontmatter Value by key (top-level).
#[cfg(test)]
pub fn get_str(value: &Value, key: &str) -> Option<String> {
    let mapping = value.as_mapping()?;
    let v = mapping.get(Value::String(key.to_string()))?;
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Build the frontmatter of a migrated skill.
///
/// Managed keys come first in a fixed order; any other keys of `existing` keep
/// their original order after them.
pub fn skill_frontmatter(
    existing: Option<&Value>,
    name: &str,
    description: &str,
    disable_model_invocation: bool,
) -> Value {
    let mut out = Mapping::new();
    out.insert(Value::from("name"), Value::from(name));
    out.insert(Value::from("description"), Value::from(description));
    out.insert(
        Value::from("disable-model-invocation"),
        Value::Bool(disable_model_invocation),
    );

    if let Some(mapping) = existing.and_then(Value::as_mapping) {
        for (k, v) in mapping {
            let managed = k.as_str().is_some_and(|key| MANAGED_KEYS.contains(&key));
            if !managed {
                out.insert(k.clone(), v.clone());
            }
        }
    }

    Value::Mapping(out)
}

/// Render a document: frontmatter block, blank line, body.
pub fn render_document(frontmatter: &Value, body: &str) -> String {
    let yaml = serde_yaml::to_string(frontmatter).unwrap_or_default();
    format!("---\n{yaml}---\n\n{}", body.trim_start_matches('\n'))
}

/// Turn a legacy command document into a skill document.
///
/// Existing frontmatter in `content` is merged rather than duplicated.
pub fn migrate_document(
    content: &str,
    name: &str,
    description: &str,
    disable_model_invocation: bool,
) -> String {
    let (existing, body) = match parse_frontmatter_and_body(content) {
        Some((value, body)) => (Some(value), body),
        None => (None, content.to_string()),
    };
    let frontmatter = skill_frontmatter(
        existing.as_ref(),
        name,
        description,
        disable_model_invocation,
    );
    render_document(&frontmatter, &body)
}
