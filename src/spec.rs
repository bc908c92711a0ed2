use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A decoded `@route` line.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RouteDirective {
    pub method: String,
    pub uri: String,
}

/// A decoded `name.location.required` parameter name.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FieldDirective {
    pub name: String,
    pub location: String,
    pub required: bool,
}

/// Pointer to a named entry in the document's `definitions` section.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct SchemaRef {
    #[serde(rename = "$ref")]
    pub reference: String,
}

impl SchemaRef {
    pub fn definition(model: &str) -> Self {
        Self {
            reference: format!("#/definitions/{model}"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct TagGroup {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for TagGroup {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            description: Some(String::new()),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaRef>,
}

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct ResponseEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaRef>,
}

/// Responses keyed by status code (`"200"`, `"default"`, ...).
pub type Responses = BTreeMap<String, ResponseEntry>;

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Operation {
    pub description: String,
    pub tags: Vec<String>,
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produces: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumes: Option<Vec<String>>,
    pub responses: Responses,
}

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaRef>,
}

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Definition {
    pub required: Vec<String>,
    pub properties: BTreeMap<String, Property>,
}

/// A definition together with the type name it is indexed under.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Typedef {
    pub type_name: String,
    pub definition: Definition,
}

/// uri -> method -> operation
pub type Paths = BTreeMap<String, BTreeMap<String, Operation>>;

/// The partial document produced from a single annotation block.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecFragment {
    pub paths: Paths,
    pub tags: Vec<TagGroup>,
    pub definitions: BTreeMap<String, Definition>,
}

impl SpecFragment {
    pub fn from_typedef(typedef: Typedef) -> Self {
        let mut definitions = BTreeMap::new();
        definitions.insert(typedef.type_name, typedef.definition);
        Self {
            definitions,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.tags.is_empty() && self.definitions.is_empty()
    }

    pub fn operation(&self, uri: &str, method: &str) -> Option<&Operation> {
        self.paths.get(uri)?.get(method)
    }
}
