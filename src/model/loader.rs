use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::declarations::EntityDocument;

/// Parses an [`EntityDocument`] from its JSON encoding.
pub fn parse_document(json: &str) -> Result<EntityDocument> {
    let document: EntityDocument =
        serde_json::from_str(json).context("Failed to parse entity document")?;
    tracing::debug!(
        entity = %document.entity.name.name,
        methods = document.entity.methods.len(),
        "parsed entity document"
    );
    Ok(document)
}

/// Reads and parses an [`EntityDocument`] from a JSON file.
pub fn load_document(path: &Path) -> Result<EntityDocument> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let document =
        parse_document(&json).with_context(|| format!("Invalid document {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded entity document");
    Ok(document)
}
