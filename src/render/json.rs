//! JSON output for converted documents.
//!
//! Documents are written as two-space indented JSON with keys in field
//! declaration order. Absent optional fields are omitted, never `null`.

use std::fs;
use std::path::Path;

use crate::error::{FxError, Result};
use crate::types::Document;

/// Serialize a document to a JSON value tree.
pub fn to_value(document: &Document) -> Result<serde_json::Value> {
    serde_json::to_value(document).map_err(|e| FxError::Build {
        message: format!("Failed to serialize document: {}", e),
        help: None,
    })
}

/// Serialize a document to pretty JSON text.
pub fn to_json_string(document: &Document) -> Result<String> {
    serde_json::to_string_pretty(document).map_err(|e| FxError::Build {
        message: format!("Failed to serialize document: {}", e),
        help: None,
    })
}

/// Write a document to `path`, creating parent directories as needed.
pub fn write_document(document: &Document, path: &Path) -> Result<()> {
    let json = to_json_string(document)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| FxError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    fs::write(path, json + "\n").map_err(|e| FxError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write document: {}", e),
    })?;
    Ok(())
}
