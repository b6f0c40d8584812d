//! In-memory content item.

use std::path::Path;

use serde_json::Value as JsonValue;

use super::{ContentItem, Extends, JsonMap, OutputVariant, get_path};
use crate::config::CollectionConfig;
use crate::permalink::Permalink;

/// A collection item with user fields and derived metadata.
///
/// Metadata keys:
///
/// | Key          | Value                                 |
/// |--------------|---------------------------------------|
/// | `filename`   | source filename without extension     |
/// | `collection` | collection name                       |
/// | `extension`  | source extension (when loaded)        |
/// | `source`     | source path (when loaded)             |
///
/// The `permalink` and `extends` fields, when present, override the
/// collection defaults for this item only.
#[derive(Debug, Clone, Default)]
pub struct Page {
    collection: String,
    filename: String,
    fields: JsonMap,
    meta: JsonMap,
    variants: Vec<OutputVariant>,
    permalink: Option<Permalink>,
}

impl Page {
    pub fn new(collection: impl Into<String>, filename: impl Into<String>, fields: JsonMap) -> Self {
        let collection = collection.into();
        let filename = filename.into();

        let mut meta = JsonMap::new();
        meta.insert("filename".into(), JsonValue::String(filename.clone()));
        meta.insert("collection".into(), JsonValue::String(collection.clone()));

        let variants = fields
            .get("extends")
            .and_then(|value| serde_json::from_value::<Extends>(value.clone()).ok())
            .map(|extends| extends.variants())
            .unwrap_or_default();

        let permalink = fields
            .get("permalink")
            .and_then(|value| serde_json::from_value::<Permalink>(value.clone()).ok())
            .filter(|permalink| !permalink.is_empty());

        Self {
            collection,
            filename,
            fields,
            meta,
            variants,
            permalink,
        }
    }

    /// Record where the item was loaded from.
    pub fn with_source(mut self, path: &Path) -> Self {
        if let Some(ext) = path.extension() {
            self.meta.insert(
                "extension".into(),
                JsonValue::String(ext.to_string_lossy().into_owned()),
            );
        }
        self.meta.insert(
            "source".into(),
            JsonValue::String(path.to_string_lossy().into_owned()),
        );
        self
    }

    /// Replace the declared output variants.
    pub fn with_variants(mut self, variants: Vec<OutputVariant>) -> Self {
        self.variants = variants;
        self
    }

    /// Fill in collection defaults for whatever the item didn't declare.
    ///
    /// An item with no views anywhere still renders once, through an
    /// unnamed view with no extension.
    pub fn apply_collection(&mut self, collection: &CollectionConfig) {
        if self.variants.is_empty() {
            self.variants = collection
                .extends
                .as_ref()
                .map(Extends::variants)
                .unwrap_or_else(|| vec![OutputVariant::new(None, "")]);
        }
        if self.permalink.is_none() && !collection.permalink.is_empty() {
            self.permalink = Some(collection.permalink.clone());
        }
    }

    /// Permalink this item resolves with (item override or collection default).
    pub fn permalink(&self) -> &Permalink {
        static ABSENT: Permalink = Permalink::Absent;
        self.permalink.as_ref().unwrap_or(&ABSENT)
    }

    pub fn fields(&self) -> &JsonMap {
        &self.fields
    }
}

impl ContentItem for Page {
    fn collection_name(&self) -> &str {
        &self.collection
    }

    fn filename(&self) -> &str {
        &self.filename
    }

    fn field(&self, path: &str) -> Option<&JsonValue> {
        get_path(&self.fields, path)
    }

    fn meta(&self, key: &str) -> Option<&JsonValue> {
        self.meta.get(key)
    }

    fn variants(&self) -> &[OutputVariant] {
        &self.variants
    }
}
