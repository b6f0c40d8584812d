//! Loading items from disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;
use thiserror::Error;

use super::frontmatter::{self, FrontMatterKind};
use super::{JsonMap, Page};

/// Item loading errors
#[derive(Debug, Error)]
pub enum PageError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid JSON in `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("invalid TOML in `{0}`")]
    Toml(PathBuf, #[source] toml::de::Error),

    #[error("`{0}` must contain a table of fields at the top level")]
    NotAnObject(PathBuf),

    #[error("unsupported item format `{0}` (expected .json, .toml, .md or .markdown)")]
    UnsupportedFormat(PathBuf),
}

impl Page {
    /// Load an item file.
    ///
    /// | Extension          | Fields                              |
    /// |--------------------|-------------------------------------|
    /// | `.json`            | top-level object                    |
    /// | `.toml`            | top-level table                     |
    /// | `.md`, `.markdown` | `+++` TOML or `---` YAML-like front matter |
    pub fn from_file(path: &Path, collection: &str) -> Result<Self, PageError> {
        let content =
            fs::read_to_string(path).map_err(|err| PageError::Io(path.to_path_buf(), err))?;

        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        let fields = match extension.as_str() {
            "json" => parse_json(&content, path)?,
            "toml" => parse_toml(&content, path)?,
            "md" | "markdown" => parse_markdown(&content, path)?,
            _ => return Err(PageError::UnsupportedFormat(path.to_path_buf())),
        };

        Ok(Self::new(collection, item_filename(path), fields).with_source(path))
    }
}

/// Collection an item belongs to, from its directory (`_posts/a.md` → `posts`).
pub fn collection_from_path(path: &Path) -> Option<String> {
    let dir = path.parent()?.file_name()?.to_string_lossy();
    let name = dir.trim_start_matches('_');
    (!name.is_empty()).then(|| name.to_string())
}

/// Filename without extension; `hello.blade.md` → `hello`.
fn item_filename(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match stem.strip_suffix(".blade") {
        Some(name) => name.to_string(),
        None => stem,
    }
}

fn parse_json(content: &str, path: &Path) -> Result<JsonMap, PageError> {
    match serde_json::from_str(content).map_err(|err| PageError::Json(path.to_path_buf(), err))? {
        JsonValue::Object(map) => Ok(map),
        _ => Err(PageError::NotAnObject(path.to_path_buf())),
    }
}

fn parse_toml(content: &str, path: &Path) -> Result<JsonMap, PageError> {
    let table: toml::Table =
        toml::from_str(content).map_err(|err| PageError::Toml(path.to_path_buf(), err))?;
    Ok(table_to_json(table))
}

fn parse_markdown(content: &str, path: &Path) -> Result<JsonMap, PageError> {
    match frontmatter::detect(content) {
        Some((fm, FrontMatterKind::Toml)) => parse_toml(fm, path),
        Some((fm, FrontMatterKind::YamlLike)) => Ok(frontmatter::parse_yaml_like(fm)),
        None => Ok(JsonMap::new()),
    }
}

fn table_to_json(table: toml::Table) -> JsonMap {
    table
        .into_iter()
        .map(|(key, value)| (key, toml_to_json(value)))
        .collect()
}

/// TOML datetimes become their RFC 3339 text, like dates in JSON items.
fn toml_to_json(value: toml::Value) -> JsonValue {
    match value {
        toml::Value::String(s) => JsonValue::String(s),
        toml::Value::Integer(i) => JsonValue::Number(i.into()),
        toml::Value::Float(f) => {
            serde_json::Number::from_f64(f).map_or(JsonValue::Null, JsonValue::Number)
        }
        toml::Value::Boolean(b) => JsonValue::Bool(b),
        toml::Value::Datetime(dt) => JsonValue::String(dt.to_string()),
        toml::Value::Array(items) => JsonValue::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => JsonValue::Object(table_to_json(table)),
    }
}
