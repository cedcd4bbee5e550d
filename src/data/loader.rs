// ============================================================
// Layer 4 — Document Loader
// ============================================================
// Loads a registration record PDF using the lopdf crate and turns
// every page into plain text.
//
// How a PDF page becomes text here:
//   Document
//     └── pages (page number → object id)
//           └── content stream (compressed operator list)
//                 └── BT ... Td ... Tj ... ET   (text operators)
//
// For each page the fonts are read from its resources, then the
// content stream is decoded and replayed by the FragmentWalker,
// which records where each string is drawn and how wide it is.
// The Layout step then rebuilds lines using the configured x/y
// tolerances, so the cells of one table row end up on one line.
//
// If a page draws text but none of it could be decoded, the page
// falls back to lopdf's own extract_text.
//
// The parsed lopdf::Document lives only inside load_bytes().
//
// Reference: lopdf crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use lopdf::content::Content;
use std::{fs, path::Path};

use crate::application::extract_use_case::ExtractConfig;
use crate::data::fonts::FontTable;
use crate::data::fragments::{FragmentWalker, WalkedPage};
use crate::data::layout::Layout;
use crate::domain::document::Document;
use crate::domain::traits::DocumentSource;

/// Reads registration PDFs into page texts.
/// Implements the DocumentSource trait from Layer 3.
pub struct PdfLoader {
    layout: Layout,
}

impl PdfLoader {
    /// Create a loader that joins words and lines with the given tolerances
    pub fn new(config: &ExtractConfig) -> Self {
        Self {
            layout: Layout::new(config.x_tolerance, config.y_tolerance),
        }
    }

    /// Parse a PDF held in memory. `source` is only used for logging.
    pub fn load_bytes(&self, source: &str, bytes: &[u8]) -> Result<Document> {
        let pdf = lopdf::Document::load_mem(bytes)
            .with_context(|| format!("'{}' is not a readable PDF", source))?;

        let pages = pdf.get_pages();
        tracing::debug!("'{}' has {} pages", source, pages.len());

        let mut texts = Vec::with_capacity(pages.len());

        for (page_num, page_id) in pages {
            match self.page_text(&pdf, page_num, page_id) {
                Ok(text) => {
                    tracing::debug!("Page {}: {} chars", page_num, text.len());
                    texts.push(text);
                }
                // One unreadable page should not lose the rest of the record
                Err(e) => {
                    tracing::warn!("Skipping page {} of '{}': {:#}", page_num, source, e);
                    texts.push(String::new());
                }
            }
        }

        tracing::info!("Read {} pages from '{}'", texts.len(), source);
        Ok(Document::new(source, texts))
    }

    /// Text of one page, laid out by position, with lopdf's extractor as fallback
    fn page_text(&self, pdf: &lopdf::Document, page_num: u32, page_id: lopdf::ObjectId) -> Result<String> {
        match Self::walk_page(pdf, page_id) {
            Ok(page) if page.fragments.is_empty() && page.undecoded > 0 => {
                tracing::debug!(
                    "Page {}: {} strings in fonts without a text mapping, using plain extraction",
                    page_num,
                    page.undecoded
                );
                pdf.extract_text(&[page_num])
                    .context("Plain text extraction failed")
            }
            Ok(page) => {
                if page.undecoded > 0 {
                    tracing::debug!("Page {}: skipped {} undecodable strings", page_num, page.undecoded);
                }
                Ok(self.layout.assemble(&page.fragments))
            }
            Err(e) => {
                tracing::debug!("Page {}: {:#}, using plain extraction", page_num, e);
                pdf.extract_text(&[page_num])
                    .context("Plain text extraction failed")
            }
        }
    }

    fn walk_page(pdf: &lopdf::Document, page_id: lopdf::ObjectId) -> Result<WalkedPage> {
        let fonts = FontTable::for_page(pdf, page_id)?;
        let data = pdf.get_page_content(page_id).context("Cannot read page content")?;
        let content = Content::decode(&data).context("Cannot decode page content")?;
        Ok(FragmentWalker::new(&fonts).walk(&content.operations))
    }
}

impl DocumentSource for PdfLoader {
    fn load(&self, path: &Path) -> Result<Document> {
        let bytes = fs::read(path)
            .with_context(|| format!("Cannot read '{}'", path.display()))?;

        // Use the filename as the source identifier
        let source = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");

        self.load_bytes(source, &bytes)
    }
}
