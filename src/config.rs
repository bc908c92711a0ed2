use crate::document::DocumentTemplate;
use crate::error::{ConfigError, SwaggerError};
use log::{debug, warn};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Options for [`crate::api::generate`], loadable from JSON or YAML.
///
/// ```json
/// {
///   "basedir": "./src",
///   "files": ["routes/**/*.js", "models.js"],
///   "swaggerDefinition": { "info": { "title": "Pets", "version": "1.0.0" } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    #[serde(default)]
    pub basedir: Option<PathBuf>,
    #[serde(default)]
    pub files: Option<Vec<String>>,
    #[serde(default)]
    pub swagger_definition: Option<DocumentTemplate>,
}

/// Options with every required field present.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub basedir: PathBuf,
    pub files: Vec<String>,
    pub template: DocumentTemplate,
}

impl GeneratorOptions {
    pub fn new(template: DocumentTemplate) -> Self {
        Self {
            swagger_definition: Some(template),
            ..Self::default()
        }
    }

    pub fn with_basedir(mut self, basedir: impl Into<PathBuf>) -> Self {
        self.basedir = Some(basedir.into());
        self
    }

    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = Some(files.into_iter().map(Into::into).collect());
        self
    }

    /// # Errors
    /// Returns `ConfigError::InvalidJson` if the text is not valid options JSON.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(ConfigError::InvalidJson)
    }

    /// # Errors
    /// Returns `ConfigError::InvalidYaml` if the text is not valid options YAML.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(text).map_err(ConfigError::InvalidYaml)
    }

    /// Loads options from a `.json`, `.yaml` or `.yml` file.
    ///
    /// # Errors
    /// Fails if the file cannot be read, has another extension, or does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SwaggerError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml" | "yml") => Self::from_yaml_str,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                }
                .into())
            }
        };
        let text = std::fs::read_to_string(path).map_err(|source| SwaggerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(parse(&text)?)
    }

    /// Checks required fields, in the order the generator needs them.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingField` naming the first absent field.
    pub fn resolve(self) -> Result<ResolvedOptions, ConfigError> {
        let template = self
            .swagger_definition
            .ok_or(ConfigError::MissingField {
                field: "swaggerDefinition",
            })?;
        let files = self
            .files
            .ok_or(ConfigError::MissingField { field: "files" })?;

        Ok(ResolvedOptions {
            basedir: self.basedir.unwrap_or_else(|| PathBuf::from(".")),
            files,
            template,
        })
    }
}

impl ResolvedOptions {
    /// Expands every pattern against `basedir`.
    ///
    /// Matches keep pattern order, then lexical order within a pattern. A path matched by
    /// two patterns appears twice.
    ///
    /// # Errors
    /// Returns `SwaggerError::Pattern` for a pattern that is not valid glob syntax.
    pub fn expand_files(&self) -> Result<Vec<PathBuf>, SwaggerError> {
        let mut files = Vec::new();
        for pattern in &self.files {
            let full = self.basedir.join(pattern);
            let full = full.to_string_lossy();
            let entries = glob::glob(&full).map_err(|source| SwaggerError::Pattern {
                pattern: pattern.clone(),
                source,
            })?;

            let before = files.len();
            for entry in entries {
                match entry {
                    Ok(path) if path.is_file() => files.push(path),
                    Ok(_) => {}
                    Err(err) => warn!("skipping unreadable path: {err}"),
                }
            }
            if files.len() == before {
                warn!("pattern `{pattern}` matched no files");
            } else {
                debug!("pattern `{pattern}` matched {} file(s)", files.len() - before);
            }
        }
        Ok(files)
    }
}
