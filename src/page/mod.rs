//! Content items: the data a permalink is resolved against.
//!
//! - [`ContentItem`]: read-only view the resolver consumes
//! - [`Page`]: concrete item loaded from JSON, TOML or front-matter files
//! - [`Extends`] / [`OutputVariant`]: the views an item renders through

mod frontmatter;
mod item;
mod load;

pub use item::Page;
pub use load::{PageError, collection_from_path};

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A JSON object map for storing arbitrary metadata fields.
pub type JsonMap = serde_json::Map<String, JsonValue>;

/// Read-only view of one collection item.
///
/// Field lookups take dotted paths (`author.name`, `tags.0`); metadata
/// lookups take plain keys (`filename`, `collection`).
pub trait ContentItem {
    /// Name of the collection the item belongs to.
    fn collection_name(&self) -> &str;

    /// Source filename without extension.
    fn filename(&self) -> &str;

    /// Look up a user-authored field by dotted path.
    fn field(&self, path: &str) -> Option<&JsonValue>;

    /// Look up a metadata entry.
    fn meta(&self, key: &str) -> Option<&JsonValue>;

    /// Output variants the item renders, in declaration order.
    fn variants(&self) -> &[OutputVariant];
}

/// Two-step value lookup: fields first, then metadata.
///
/// `null` counts as missing in both places.
pub fn lookup<'a, I>(item: &'a I, path: &str) -> Option<&'a JsonValue>
where
    I: ContentItem + ?Sized,
{
    item.field(path)
        .filter(|value| !value.is_null())
        .or_else(|| item.meta(path).filter(|value| !value.is_null()))
}

/// Resolve a dotted path inside a JSON map.
///
/// A literal key containing dots wins over traversal, so `{"a.b": 1}` and
/// `{"a": {"b": 2}}` both answer `a.b`. Array segments are indices.
pub fn get_path<'a>(map: &'a JsonMap, path: &str) -> Option<&'a JsonValue> {
    if let Some(value) = map.get(path) {
        return Some(value);
    }

    let mut segments = path.split('.');
    let mut current = map.get(segments.next()?)?;
    for segment in segments {
        current = match current {
            JsonValue::Object(object) => object.get(segment)?,
            JsonValue::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// One rendered variant of an item: an optional template key and its view.
///
/// Items with a single view have no template key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputVariant {
    pub template_key: Option<String>,
    pub view: String,
}

impl OutputVariant {
    pub fn new(template_key: Option<&str>, view: impl Into<String>) -> Self {
        Self {
            template_key: template_key.map(str::to_owned),
            view: view.into(),
        }
    }
}

/// Views an item extends: one layout, or one per template key.
///
/// Keyed views keep their authored order; non-string entries are skipped.
///
/// ```toml
/// extends = "layouts/post.blade.php"
///
/// [extends]
/// web = "layouts/post.blade.php"
/// feed = "layouts/post.blade.xml"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Extends {
    Single(String),
    Keyed(JsonMap),
}

impl Extends {
    pub fn variants(&self) -> Vec<OutputVariant> {
        match self {
            Self::Single(view) => vec![OutputVariant::new(None, view.clone())],
            Self::Keyed(views) => views
                .iter()
                .filter_map(|(key, view)| Some(OutputVariant::new(Some(key), view.as_str()?)))
                .collect(),
        }
    }
}
