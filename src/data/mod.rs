// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from a registration PDF on disk to course rows.
//
// The pipeline flows in this order:
//
//   registration.pdf
//       │
//       ▼
//   PdfLoader         → reads the file, decodes each page's content
//       │
//       ▼
//   FontTable         → per-page fonts: text decoding and glyph widths
//       │
//       ▼
//   FragmentWalker    → positioned runs of text per page
//       │
//       ▼
//   Layout            → runs joined into words and lines (x/y tolerance)
//       │
//       ▼
//   CourseExtractor   → one CourseRecord per matching line
//
// Each module is responsible for exactly one step.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Loads registration PDFs with lopdf
pub mod loader;

/// Decodes and measures strings by the font that draws them
pub mod fonts;

/// Replays page content streams into positioned text fragments
pub mod fragments;

/// Rebuilds lines from positioned fragments
pub mod layout;

/// Finds course rows in plain text
pub mod extractor;
