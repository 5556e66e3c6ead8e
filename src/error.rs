use std::path::PathBuf;
use thiserror::Error;

use crate::element::{ElementId, Field};

/// Failures of the durable key-value backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access storage key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize value: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised by the template store.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Imported text or persisted store content is not a valid template payload.
    #[error("Malformed template data: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Template not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Failed to read template file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template import was interrupted before the file was read")]
    ImportCancelled,
}

/// Errors raised by the editor controller.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Element not found: {0}")]
    ElementNotFound(ElementId),

    #[error("Element {id} has no field {field}")]
    UnsupportedField { id: ElementId, field: Field },

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A palette drag token that names no component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown component kind: {0}")]
pub struct UnknownComponent(pub String);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type TemplateResult<T> = Result<T, TemplateError>;
pub type EditorResult<T> = Result<T, EditorError>;
