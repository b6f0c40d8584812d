//! Front matter extraction for Markdown-style item files.
//!
//! - `+++` fences: TOML
//! - `---` fences: simple YAML-like `key: value` lines

use serde_json::Value as JsonValue;

use super::JsonMap;

/// Front matter block kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatterKind {
    Toml,
    YamlLike,
}

/// Find the leading front matter block of `content` and its kind.
pub fn detect(content: &str) -> Option<(&str, FrontMatterKind)> {
    let trimmed = content.trim_start();

    for (fence, kind) in [
        ("---", FrontMatterKind::YamlLike),
        ("+++", FrontMatterKind::Toml),
    ] {
        if let Some(rest) = trimmed.strip_prefix(fence)
            && let Some(end) = rest.find(&format!("\n{fence}"))
        {
            return Some((rest[..end].trim(), kind));
        }
    }

    None
}

/// Parse simple YAML-like front matter (`key: value` per line).
///
/// Nested structures aren't supported; indented and list lines are skipped.
pub fn parse_yaml_like(content: &str) -> JsonMap {
    let mut fields = JsonMap::new();

    for line in content.lines() {
        if line.starts_with([' ', '\t']) {
            continue;
        }
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }

        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim();
            if !key.is_empty() {
                fields.insert(key.to_string(), parse_yaml_value(value.trim()));
            }
        }
    }

    fields
}

/// Parse a YAML-like scalar to a JSON value
///
/// Supports:
/// - Booleans: `true`, `false`
/// - Null: `null`, `~`, empty
/// - Numbers: `123`, `3.14`
/// - Inline arrays: `[a, b, c]`
/// - Quoted strings: `"a: b"`, `'x'`
/// - Strings: everything else
fn parse_yaml_value(s: &str) -> JsonValue {
    if s.eq_ignore_ascii_case("true") {
        return JsonValue::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return JsonValue::Bool(false);
    }
    if s.is_empty() || s.eq_ignore_ascii_case("null") || s == "~" {
        return JsonValue::Null;
    }

    if let Ok(n) = s.parse::<i64>() {
        return JsonValue::Number(n.into());
    }
    if let Ok(n) = s.parse::<f64>()
        && let Some(num) = serde_json::Number::from_f64(n)
    {
        return JsonValue::Number(num);
    }

    if let Some(inner) = s.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        let items = inner
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| JsonValue::String(unquote(item).to_string()))
            .collect();
        return JsonValue::Array(items);
    }

    JsonValue::String(unquote(s).to_string())
}

fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}
