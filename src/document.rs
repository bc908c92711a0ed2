use crate::spec::{Definition, Paths, SpecFragment, TagGroup};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SWAGGER_VERSION: &str = "2.0";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `license`, `contact`, `termsOfService` and any other keys, as given.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Static, caller-supplied document fields. Unknown keys are carried through verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub info: Info,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consumes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub produces: Vec<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// The `swaggerDefinition` a document starts from. It may pre-seed paths, tags and definitions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentTemplate {
    #[serde(flatten)]
    pub metadata: Metadata,
    #[serde(default)]
    pub paths: Paths,
    #[serde(default)]
    pub tags: Vec<TagGroup>,
    #[serde(default)]
    pub definitions: BTreeMap<String, Definition>,
}

impl DocumentTemplate {
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            metadata: Metadata {
                info: Info {
                    title: title.into(),
                    version: version.into(),
                    description: None,
                    extra: BTreeMap::new(),
                },
                ..Metadata::default()
            },
            ..Self::default()
        }
    }
}

/// The global document fragments are folded into.
///
/// Merge policy:
/// - paths merge per uri, then per method; the later operation replaces an earlier one
/// - tags are appended in order, skipping names already present
/// - definitions are replaced per type name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecDocument {
    pub swagger: String,
    #[serde(flatten)]
    pub metadata: Metadata,
    pub paths: Paths,
    pub tags: Vec<TagGroup>,
    pub definitions: BTreeMap<String, Definition>,
}

impl SpecDocument {
    pub fn new(template: DocumentTemplate) -> Self {
        let DocumentTemplate {
            mut metadata,
            paths,
            tags,
            definitions,
        } = template;
        metadata.extra.remove("swagger");

        let mut document = Self {
            swagger: SWAGGER_VERSION.to_string(),
            metadata,
            paths,
            tags: Vec::new(),
            definitions,
        };
        for tag in tags {
            document.add_tag(tag);
        }
        document
    }

    pub fn merge(&mut self, fragment: SpecFragment) {
        for (uri, methods) in fragment.paths {
            self.paths.entry(uri).or_default().extend(methods);
        }
        for tag in fragment.tags {
            self.add_tag(tag);
        }
        self.definitions.extend(fragment.definitions);
    }

    pub fn merge_all(&mut self, fragments: impl IntoIterator<Item = SpecFragment>) {
        for fragment in fragments {
            self.merge(fragment);
        }
    }

    /// Number of uri+method operations in the document.
    #[must_use]
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(BTreeMap::len).sum()
    }

    /// Serializes the document into a pretty-printed JSON string.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self)
    }

    /// Serializes the document into a YAML string.
    ///
    /// # Errors
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self)
    }

    fn add_tag(&mut self, tag: TagGroup) {
        if !self.tags.iter().any(|t| t.name == tag.name) {
            self.tags.push(tag);
        }
    }
}
