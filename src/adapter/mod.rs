use std::path::Path;

use serde_json::Value;

use crate::error::{AppError, AppResult};

pub mod json;
pub mod uiautomator_xml;

/// Upload encodings the adapters understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Xml,
}

impl InputFormat {
    /// Infer from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(InputFormat::Json),
            "xml" => Ok(InputFormat::Xml),
            _ => Err(AppError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Resolve a `--format` value (`auto`, `json`, `xml`) against the input path.
pub fn resolve_format(name: &str, path: &Path) -> AppResult<InputFormat> {
    match name.to_lowercase().as_str() {
        "auto" => InputFormat::from_path(path),
        "json" => Ok(InputFormat::Json),
        "xml" => Ok(InputFormat::Xml),
        other => Err(AppError::UnsupportedFormat(other.to_string())),
    }
}

/// Decode upload text into the raw element document the pipeline consumes.
pub fn parse_document(content: &str, format: InputFormat) -> AppResult<Value> {
    match format {
        InputFormat::Json => json::parse_json_document(content),
        InputFormat::Xml => Ok(Value::Object(uiautomator_xml::parse_uiautomator_xml(content)?)),
    }
}

/// Read and decode an upload file.
pub fn load_document(path: &Path, format: InputFormat) -> AppResult<Value> {
    let content = std::fs::read_to_string(path)?;
    parse_document(&content, format)
}
