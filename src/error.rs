use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum SwaggerError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Typedef(#[from] MalformedTypedefError),

    #[error("Malformed annotation in {file}")]
    #[diagnostic(
        code(compiler::malformed_annotation),
        help("Name the schema right after the tag, e.g. `@typedef {{object}} Pet`.")
    )]
    Annotation {
        #[source_code]
        src: NamedSource<String>,
        #[label("this @typedef has no type name")]
        span: SourceSpan,
        file: String,
        #[source]
        cause: MalformedTypedefError,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read `{}`", .path.display())]
    #[diagnostic(code(generator::io), help("Check that the file exists and is readable."))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid file pattern `{pattern}`")]
    #[diagnostic(
        code(generator::invalid_pattern),
        help("Patterns follow glob syntax, e.g. `routes/**/*.js`.")
    )]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Raised when a `@typedef` block has no type name to index the definition under.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("Malformed typedef: the schema definition has no type name")]
#[diagnostic(
    code(compiler::malformed_typedef),
    help("A @typedef must be followed by a name, e.g. `@typedef Pet`.")
)]
pub struct MalformedTypedefError;

#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("'{field}' is required")]
    #[diagnostic(
        code(config::missing_field),
        help("Generator options need both `files` and `swaggerDefinition`.")
    )]
    MissingField { field: &'static str },

    #[error("Invalid JSON options")]
    #[diagnostic(code(config::invalid_json))]
    InvalidJson(#[source] serde_json::Error),

    #[error("Invalid YAML options")]
    #[diagnostic(code(config::invalid_yaml))]
    InvalidYaml(#[source] serde_yaml::Error),

    #[error("Unsupported options file `{}`", .path.display())]
    #[diagnostic(
        code(config::unsupported_format),
        help("Use a `.json`, `.yaml` or `.yml` file.")
    )]
    UnsupportedFormat { path: PathBuf },
}
