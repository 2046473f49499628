//! Source documents and loaders.
//!
//! A `SourceDocument` is the unit the engine cites against: an id, a
//! display name, a content type tag, and the full text content. Documents
//! are immutable for the duration of a processing call; the engine only
//! reads them.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// A source document supplied to the engine for one processing call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Unique identifier
    pub id: String,

    /// Display name (shown in citations)
    pub name: String,

    /// Content type tag (e.g. "text", "markdown")
    pub kind: String,

    /// Full text content
    pub content: String,

    /// When the document was uploaded/loaded
    pub uploaded_at: DateTime<Utc>,

    /// SHA256 digest of the content bytes ("sha256:<hex>")
    pub content_digest: String,
}

impl SourceDocument {
    /// Create a document from explicit parts, computing the content digest
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let content = content.into();
        let content_digest = content_digest(content.as_bytes());
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            content,
            uploaded_at: Utc::now(),
            content_digest,
        }
    }

    /// Load a document from a UTF-8 text file.
    ///
    /// The display name is the file name, the kind is derived from the
    /// extension, and a fresh UUID is assigned as the id.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::new(
            Uuid::new_v4().to_string(),
            name,
            kind_from_extension(path),
            content,
        ))
    }
}

/// Derive a content type tag from a file extension
fn kind_from_extension(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("md") | Some("markdown") => "markdown",
        Some("html") | Some("htm") => "html",
        Some("txt") | None => "text",
        Some(_) => "text",
    }
}

/// Compute SHA256 of a byte slice, returning hex string with prefix
pub fn content_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

/// YAML manifest listing documents to load
///
/// ```yaml
/// documents:
///   - path: notes/protocol.md
///     name: Protocol Notes
///   - path: report.txt
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentManifest {
    pub documents: Vec<ManifestEntry>,
}

/// One document entry in a manifest
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    /// Path to the document file, relative to the manifest
    pub path: PathBuf,

    /// Explicit id (a UUID is assigned if omitted)
    #[serde(default)]
    pub id: Option<String>,

    /// Display name (defaults to the file name)
    #[serde(default)]
    pub name: Option<String>,

    /// Content type tag (derived from the extension if omitted)
    #[serde(default)]
    pub kind: Option<String>,
}

impl DocumentManifest {
    /// Parse a manifest file and load every document it lists.
    ///
    /// Relative entry paths are resolved against the manifest's directory.
    pub fn load(manifest_path: impl AsRef<Path>) -> Result<Vec<SourceDocument>> {
        let manifest_path = manifest_path.as_ref();
        let raw = std::fs::read_to_string(manifest_path)
            .with_context(|| format!("Failed to read manifest: {}", manifest_path.display()))?;

        let manifest: DocumentManifest = serde_yaml::from_str(&raw)
            .with_context(|| format!("Failed to parse manifest: {}", manifest_path.display()))?;

        let base = manifest_path.parent().unwrap_or(Path::new("."));

        let mut docs = Vec::with_capacity(manifest.documents.len());
        for entry in manifest.documents {
            let path = if entry.path.is_absolute() {
                entry.path.clone()
            } else {
                base.join(&entry.path)
            };

            let mut doc = SourceDocument::from_file(&path)?;
            if let Some(id) = entry.id {
                doc.id = id;
            }
            if let Some(name) = entry.name {
                doc.name = name;
            }
            if let Some(kind) = entry.kind {
                doc.kind = kind;
            }
            docs.push(doc);
        }

        Ok(docs)
    }
}
