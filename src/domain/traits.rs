// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer programs against these traits, not
// against lopdf or the regex-based extractor directly.
//
//   - PdfLoader       implements DocumentSource
//   - CourseExtractor implements CourseSource
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use std::path::Path;

use crate::domain::course::CourseRecord;
use crate::domain::document::Document;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Anything that can turn a file on disk into page texts.
pub trait DocumentSource {
    /// Read the document at `path`. The underlying file handle is
    /// released before this returns.
    fn load(&self, path: &Path) -> Result<Document>;
}

// ─── CourseSource ─────────────────────────────────────────────────────────────
/// Anything that can find course rows in plain text.
pub trait CourseSource {
    /// Return every course row found in `text`, in order of appearance.
    /// Lines that do not look like a course row are skipped, never an error.
    fn courses(&self, text: &str) -> Vec<CourseRecord>;
}
