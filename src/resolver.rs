use crate::ast::TypeToken;
use crate::spec::SchemaRef;

/// Marker segment that turns `Name.model` into a reference to the `Name` definition.
pub const MODEL_MARKER: &str = "model";

/// Primitive used when a type expression exists but has no plain name.
pub const DEFAULT_TYPE: &str = "string";

/// The outcome of reading a type token's dotted name.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TypeReference<'a> {
    /// No type expression at all.
    Absent,
    /// A type expression without a usable name.
    Unnamed,
    /// A plain name, passed through as written (may itself be dotted).
    Primitive(&'a str),
    /// `Name.model`: a reference to a schema definition.
    Model(&'a str),
}

impl<'a> TypeReference<'a> {
    pub fn classify(token: Option<&'a TypeToken>) -> Self {
        let Some(token) = token else {
            return TypeReference::Absent;
        };
        let Some(name) = token.name() else {
            return TypeReference::Unnamed;
        };
        let mut segments = name.split('.');
        let base = segments.next().unwrap_or(name);
        match segments.next() {
            Some(MODEL_MARKER) => TypeReference::Model(base),
            _ => TypeReference::Primitive(name),
        }
    }
}

/// Resolves a type token to the type name written into the document.
///
/// Total: absent tokens give `None`, unnamed ones fall back to `"string"`, and
/// model references collapse to the bare model name.
pub fn resolve_type(token: Option<&TypeToken>) -> Option<String> {
    match TypeReference::classify(token) {
        TypeReference::Absent => None,
        TypeReference::Unnamed => Some(DEFAULT_TYPE.to_string()),
        TypeReference::Primitive(name) | TypeReference::Model(name) => Some(name.to_string()),
    }
}

/// Resolves a type token to a `#/definitions/...` pointer, if it names a model.
pub fn resolve_schema(token: Option<&TypeToken>) -> Option<SchemaRef> {
    match TypeReference::classify(token) {
        TypeReference::Model(model) => Some(SchemaRef::definition(model)),
        _ => None,
    }
}
