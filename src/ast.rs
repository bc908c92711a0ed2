use miette::SourceSpan;
use serde::{Deserialize, Deserializer, Serialize};

/// A type expression attached to a directive, e.g. the `Pet.model` in `@param {Pet.model} body`.
///
/// `name` is only present for plain (possibly dotted) names. Composite expressions
/// such as `Array.<Pet>` carry no name.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct TypeToken {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TypeToken {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self { name: None }
    }

    /// The name, treating an empty string the same as no name at all.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct DirectiveRecord {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_token: Option<TypeToken>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl DirectiveRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_type(mut self, type_token: TypeToken) -> Self {
        self.type_token = Some(type_token);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// One doc comment: free-text description plus its ordered directives.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct AnnotatedBlock {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "tags", alias = "directives", default)]
    pub directives: Vec<DirectiveRecord>,
    /// Byte span of the comment in its source file, when extracted from text.
    #[serde(skip)]
    pub span: Option<SourceSpan>,
}

impl AnnotatedBlock {
    pub fn new(description: impl Into<String>, directives: Vec<DirectiveRecord>) -> Self {
        Self {
            description: description.into(),
            directives,
            span: None,
        }
    }
}

// doctrine emits `null` for absent descriptions
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
