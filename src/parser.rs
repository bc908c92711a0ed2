//! Decoders for the small grammars packed into directive text.
//!
//! Every decoder is total except [`decode_typedef`]: malformed text falls back
//! to a default instead of failing.

use crate::ast::DirectiveRecord;
use crate::error::MalformedTypedefError;
use crate::resolver::{resolve_schema, resolve_type};
use crate::spec::{
    Definition, FieldDirective, Property, ResponseEntry, Responses, RouteDirective, TagGroup,
    Typedef,
};

pub const DEFAULT_METHOD: &str = "get";
pub const DEFAULT_LOCATION: &str = "get";
pub const REQUIRED_MARKER: &str = "required";

/// Route ::= Method " " Uri
///
/// Splits on single spaces, so `"GET  /pets"` has an empty second token.
pub fn decode_route(text: &str) -> RouteDirective {
    let mut tokens = text.split(' ');
    let method = tokens.next().unwrap_or_default().to_lowercase();
    let uri = tokens.next().unwrap_or_default();

    RouteDirective {
        method: if method.is_empty() {
            DEFAULT_METHOD.to_string()
        } else {
            method
        },
        uri: uri.to_string(),
    }
}

/// Field ::= Name [ "." Location [ "." "required" ] ]
pub fn decode_field(name: &str) -> FieldDirective {
    let mut segments = name.split('.');
    let field_name = segments.next().unwrap_or_default();
    let location = segments
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_LOCATION);
    let required = segments.next() == Some(REQUIRED_MARKER);

    FieldDirective {
        name: field_name.to_string(),
        location: location.to_string(),
        required,
    }
}

/// Group ::= Name [ "-" Description ]
///
/// Only the first `group` directive of a block counts.
pub fn decode_group(directives: &[DirectiveRecord]) -> TagGroup {
    directives
        .iter()
        .find(|d| d.title == "group")
        .map(|d| {
            let (name, description) = split_dash(&d.description);
            TagGroup {
                name: name.to_string(),
                description: description.map(str::to_string),
            }
        })
        .unwrap_or_default()
}

/// Return ::= StatusCode [ "-" Description ]
///
/// Collects every `returns`/`return` directive; a repeated status code replaces the earlier entry.
pub fn decode_returns(directives: &[DirectiveRecord]) -> Responses {
    let mut responses = Responses::new();
    for directive in directives
        .iter()
        .filter(|d| d.title == "returns" || d.title == "return")
    {
        let (code, description) = split_dash(&directive.description);
        let mut entry = ResponseEntry {
            description: description.map(str::to_string),
            ..ResponseEntry::default()
        };
        if let Some(type_name) = resolve_type(directive.type_token.as_ref()) {
            entry.type_name = Some(type_name);
            entry.schema = resolve_schema(directive.type_token.as_ref());
        }
        responses.insert(code.to_string(), entry);
    }
    responses
}

/// Produces ::= MediaType { Whitespace MediaType }
///
/// A whitespace run is one separator. Leading or trailing whitespace, and empty
/// text, leave an empty entry at that end.
pub fn decode_media_types(text: &str) -> Vec<String> {
    let mut media_types = vec![String::new()];
    let mut in_separator = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_separator {
                media_types.push(String::new());
                in_separator = true;
            }
        } else {
            in_separator = false;
            if let Some(current) = media_types.last_mut() {
                current.push(c);
            }
        }
    }
    media_types
}

/// Typedef ::= "@typedef" Name { "@property" PropertyName [ "." "required" ] }
///
/// The first directive names the schema; only `property` directives after it contribute.
pub fn decode_typedef(directives: &[DirectiveRecord]) -> Result<Typedef, MalformedTypedefError> {
    let (head, rest) = directives.split_first().ok_or(MalformedTypedefError)?;
    if head.name.is_empty() {
        return Err(MalformedTypedefError);
    }

    let mut definition = Definition::default();
    for directive in rest.iter().filter(|d| d.title == "property") {
        let mut segments = directive.name.split('.');
        let base = segments.next().unwrap_or_default();
        let property_name = if segments.next() == Some(REQUIRED_MARKER) {
            definition.required.push(base.to_string());
            base
        } else {
            directive.name.as_str()
        };

        definition.properties.insert(
            property_name.to_string(),
            Property {
                type_name: resolve_type(directive.type_token.as_ref()),
                schema: resolve_schema(directive.type_token.as_ref()),
            },
        );
    }

    Ok(Typedef {
        type_name: head.name.clone(),
        definition,
    })
}

// Returns the first two dash-separated parts as written, surrounding spaces included.
// Anything past a second dash is dropped.
fn split_dash(text: &str) -> (&str, Option<&str>) {
    let mut parts = text.split('-');
    (parts.next().unwrap_or_default(), parts.next())
}
