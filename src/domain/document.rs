// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// Represents a single registration document loaded from disk.
// By the time a Document exists, the PDF has already been
// turned into plain text: one String per page, in page order.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// A registration document reduced to its page texts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The filename the text came from, kept for log messages
    pub source: String,

    /// Extracted plain text of each page, first page first
    pub pages: Vec<String>,
}

impl Document {
    /// Create a new Document from a source name and its page texts.
    ///
    /// Example:
    ///   let doc = Document::new("registration.pdf", vec!["MEM601 ...".into()]);
    pub fn new(source: impl Into<String>, pages: Vec<String>) -> Self {
        Self {
            source: source.into(),
            pages,
        }
    }

    /// Number of pages that were read
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All page texts joined into one string, one newline after each page.
    /// Empty pages still contribute their newline so page boundaries
    /// never glue two rows together.
    pub fn full_text(&self) -> String {
        let mut text = String::new();
        for page in &self.pages {
            text.push_str(page);
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_text_separates_pages() {
        let doc = Document::new(
            "reg.pdf",
            vec!["MEM601 Thermo 4.00".to_string(), "MEM602 Fluids 3.00".to_string()],
        );
        assert_eq!(doc.full_text(), "MEM601 Thermo 4.00\nMEM602 Fluids 3.00\n");
        assert_eq!(doc.page_count(), 2);
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new("empty.pdf", Vec::new());
        assert_eq!(doc.full_text(), "");
    }
}
