use swagdoc_core::ast::{AnnotatedBlock, DirectiveRecord, TypeToken};
use swagdoc_core::parser::{decode_field, decode_route};
use swagdoc_core::resolver::{resolve_schema, resolve_type};
use swagdoc_core::spec::{Definition, Property, SchemaRef};
use swagdoc_core::{compile, compile_source};

fn directive(title: &str) -> DirectiveRecord {
    DirectiveRecord::new(title)
}

#[test]
fn test_route_and_field_decoding() {
    let route = decode_route("GET /pets");
    assert_eq!((route.method.as_str(), route.uri.as_str()), ("get", "/pets"));
    let route = decode_route("");
    assert_eq!((route.method.as_str(), route.uri.as_str()), ("get", ""));

    let field = decode_field("id.path.required");
    assert_eq!(
        (field.name.as_str(), field.location.as_str(), field.required),
        ("id", "path", true)
    );
    let field = decode_field("id.path");
    assert_eq!(
        (field.name.as_str(), field.location.as_str(), field.required),
        ("id", "path", false)
    );
}

#[test]
fn test_type_resolution() {
    let pet = TypeToken::named("Pet.model");
    assert_eq!(resolve_type(Some(&pet)).as_deref(), Some("Pet"));
    assert_eq!(resolve_schema(Some(&pet)), Some(SchemaRef::definition("Pet")));

    let integer = TypeToken::named("integer");
    assert_eq!(resolve_type(Some(&integer)).as_deref(), Some("integer"));
    assert_eq!(resolve_schema(Some(&integer)), None);
}

#[test]
fn test_resolve_type_is_total() {
    let tokens = [
        None,
        Some(TypeToken::anonymous()),
        Some(TypeToken::named("")),
        Some(TypeToken::named("a.b.c")),
        Some(TypeToken::named("X.model")),
        Some(TypeToken::named(".model")),
    ];
    for token in &tokens {
        let resolved = resolve_type(token.as_ref());
        assert_eq!(resolved.is_none(), token.is_none());

        let schema = resolve_schema(token.as_ref());
        let names_model = token
            .as_ref()
            .and_then(|t| t.name())
            .is_some_and(|n| n.split('.').nth(1) == Some("model"));
        assert_eq!(schema.is_some(), names_model, "token {token:?}");
    }
}

#[test]
fn test_operation_id_before_route_is_dropped() {
    let block = AnnotatedBlock::new(
        "",
        vec![
            directive("operationId").with_description("getPet"),
            directive("route").with_description("GET /pets/{id}"),
            directive("param").with_name("id.path.required"),
        ],
    );
    let fragments = compile(&[block]).unwrap();
    let operation = fragments[0].operation("/pets/{id}", "get").unwrap();
    assert_eq!(operation.operation_id, None);
    assert_eq!(operation.parameters.len(), 1);
}

#[test]
fn test_typedef_block_compiles_to_definition() {
    let block = AnnotatedBlock::new(
        "",
        vec![
            directive("typedef").with_name("Pet"),
            directive("property")
                .with_name("id.required")
                .with_type(TypeToken::named("integer")),
            directive("property")
                .with_name("name")
                .with_type(TypeToken::named("string")),
        ],
    );
    let fragments = compile(&[block]).unwrap();
    assert_eq!(fragments.len(), 1);

    let expected = Definition {
        required: vec!["id".to_string()],
        properties: [
            (
                "id".to_string(),
                Property {
                    type_name: Some("integer".to_string()),
                    schema: None,
                },
            ),
            (
                "name".to_string(),
                Property {
                    type_name: Some("string".to_string()),
                    schema: None,
                },
            ),
        ]
        .into_iter()
        .collect(),
    };
    assert_eq!(fragments[0].definitions["Pet"], expected);
    assert!(fragments[0].paths.is_empty());
}

#[test]
fn test_empty_directive_blocks_compile_to_nothing() {
    let blocks = vec![AnnotatedBlock::new("a", vec![]), AnnotatedBlock::default()];
    assert!(compile(&blocks).unwrap().is_empty());
}

#[test]
fn test_compile_is_idempotent() {
    let source = include_str!("fixtures/pets.js");
    let first = compile_source(source, "pets.js").unwrap();
    let second = compile_source(source, "pets.js").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_fragment_order_matches_input() {
    let blocks: Vec<_> = ["/c", "/a", "/b"]
        .iter()
        .map(|uri| {
            AnnotatedBlock::new(
                "",
                vec![directive("route").with_description(format!("GET {uri}"))],
            )
        })
        .collect();
    let uris: Vec<_> = compile(&blocks)
        .unwrap()
        .iter()
        .flat_map(|f| f.paths.keys().cloned())
        .collect();
    assert_eq!(uris, vec!["/c", "/a", "/b"]);
}

#[test]
fn test_fragment_to_json() {
    let source = r#"
        /**
         * Create a pet.
         * @route POST /pets
         * @param {Pet.model} pet.body.required - the new pet
         * @returns {Pet.model} 201 - Created
         */
    "#;
    let fragments = compile_source(source, "inline.js").unwrap();
    let json = serde_json::to_value(&fragments[0]).unwrap();

    let expected = serde_json::json!({
        "paths": {
            "/pets": {
                "post": {
                    "description": "Create a pet.",
                    "tags": ["default"],
                    "parameters": [{
                        "name": "pet",
                        "in": "body",
                        "description": "the new pet",
                        "required": true,
                        "type": "Pet",
                        "schema": { "$ref": "#/definitions/Pet" }
                    }],
                    "responses": {
                        "201 ": {
                            "description": " Created",
                            "type": "Pet",
                            "schema": { "$ref": "#/definitions/Pet" }
                        }
                    }
                }
            }
        },
        "tags": [{ "name": "default", "description": "" }],
        "definitions": {}
    });
    assert_eq!(json, expected);
}

#[test]
fn test_blocks_from_doctrine_json() {
    let json = r#"[
        { "description": "", "tags": [] },
        { "description": "Ping", "tags": [
            { "title": "route", "description": "HEAD /ping", "name": null, "type": null },
            { "title": "returns", "description": "204 - pong", "type": null }
        ] }
    ]"#;
    let blocks: Vec<AnnotatedBlock> = serde_json::from_str(json).unwrap();
    let fragments = compile(&blocks).unwrap();
    assert_eq!(fragments.len(), 1);
    let operation = fragments[0].operation("/ping", "head").unwrap();
    assert_eq!(operation.description, "Ping");
    assert_eq!(operation.responses["204 "].description.as_deref(), Some(" pong"));
    assert_eq!(operation.responses["204 "].type_name, None);
}
