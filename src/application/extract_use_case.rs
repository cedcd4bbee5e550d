// ============================================================
// Layer 2 — ExtractUseCase
// ============================================================
// Orchestrates reading a registration record into course rows:
//
//   Step 1: Load the PDF into page texts   (Layer 4 - data)
//   Step 2: Join the pages                 (Layer 3 - domain)
//   Step 3: Extract course rows            (Layer 4 - data)
//
// The joined text goes to the extractor as it is: captured fields
// are trimmed there and nothing else.
//
// An empty result is reported as NoCoursesDetected so the CLI can
// tell the user the file is probably not a registration record.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::{extractor::CourseExtractor, loader::PdfLoader};
use crate::domain::course::CourseRecord;
use crate::domain::error::CgpaError;
use crate::domain::traits::{CourseSource, DocumentSource};

// ─── Extraction Configuration ────────────────────────────────────────────────
// Word and line joining tolerances, in PDF user-space units.
// Two fragments closer than x_tolerance are one word; baselines
// closer than y_tolerance are one line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtractConfig {
    pub x_tolerance: f32,
    pub y_tolerance: f32,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            x_tolerance: 2.0,
            y_tolerance: 2.0,
        }
    }
}

// ─── ExtractUseCase ───────────────────────────────────────────────────────────
pub struct ExtractUseCase<D: DocumentSource, C: CourseSource> {
    source:    D,
    extractor: C,
}

impl ExtractUseCase<PdfLoader, CourseExtractor> {
    /// The PDF-backed pipeline used by the CLI
    pub fn new(config: ExtractConfig) -> Result<Self> {
        Ok(Self::with_parts(PdfLoader::new(&config), CourseExtractor::new()?))
    }
}

impl<D: DocumentSource, C: CourseSource> ExtractUseCase<D, C> {
    pub fn with_parts(source: D, extractor: C) -> Self {
        Self { source, extractor }
    }

    /// Read `path` and return its course rows in document order
    pub fn execute(&self, path: &Path) -> Result<Vec<CourseRecord>> {
        // ── Step 1: Load the document ─────────────────────────────────────────
        tracing::info!("Reading registration record '{}'", path.display());
        let doc = self.source.load(path)?;
        tracing::debug!("'{}' loaded with {} pages", doc.source, doc.page_count());

        // ── Step 2: Join pages ────────────────────────────────────────────────
        let text = doc.full_text();

        // ── Step 3: Extract course rows ───────────────────────────────────────
        let courses = self.extractor.courses(&text);

        if courses.is_empty() {
            tracing::warn!("No course rows found in '{}'", doc.source);
            return Err(CgpaError::NoCoursesDetected.into());
        }

        tracing::info!("Detected {} subjects", courses.len());
        Ok(courses)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::tests::build_pdf;
    use crate::domain::document::Document;
    use rust_decimal::Decimal;

    /// Serves fixed page texts regardless of path
    struct FixedPages(Vec<String>);

    impl DocumentSource for FixedPages {
        fn load(&self, path: &Path) -> Result<Document> {
            Ok(Document::new(path.display().to_string(), self.0.clone()))
        }
    }

    fn use_case(pages: &[&str]) -> ExtractUseCase<FixedPages, CourseExtractor> {
        let pages = pages.iter().map(|p| p.to_string()).collect();
        ExtractUseCase::with_parts(FixedPages(pages), CourseExtractor::new().unwrap())
    }

    #[test]
    fn test_courses_across_pages_in_order() {
        let uc = use_case(&[
            "Course Code   Course Title   Credits\nMEM601\tAdvanced Thermodynamics    4.00",
            "Course Code   Course Title   Credits\nMEM602 Fluid Mechanics 3.00",
        ]);
        let courses = uc.execute(Path::new("reg.pdf")).unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].code, "MEM601");
        assert_eq!(courses[0].name, "Advanced Thermodynamics");
        assert_eq!(courses[1].credit, Decimal::new(300, 2));
    }

    #[test]
    fn test_inner_spacing_of_names_is_kept() {
        let uc = use_case(&["MEM601 Fluid  Mechanics 3.00\r\nMEM602\u{200B}Optics 2.00"]);
        let courses = uc.execute(Path::new("reg.pdf")).unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].name, "Fluid  Mechanics");
    }

    #[test]
    fn test_no_courses_is_reported() {
        let uc = use_case(&["Fee receipt\nAmount paid 1500.00"]);
        let err = uc.execute(Path::new("receipt.pdf")).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CgpaError>(),
            Some(&CgpaError::NoCoursesDetected)
        );
    }

    #[test]
    fn test_pdf_pipeline_end_to_end() {
        let pdf = build_pdf(&[vec![
            (50, 760, "Student Registration Record"),
            (50, 720, "Course Code"),
            (120, 720, "Course Title"),
            (400, 720, "Credits"),
            (50, 700, "MEM601"),
            (120, 700, "Advanced Thermodynamics"),
            (400, 700, "4.00"),
            (50, 685, "MEM602"),
            (120, 685, "Fluid Mechanics"),
            (400, 685, "3.00"),
        ]]);

        let dir  = std::env::temp_dir().join(format!("cgpa-extract-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("registration.pdf");
        std::fs::write(&path, pdf).unwrap();

        let courses = ExtractUseCase::new(ExtractConfig::default())
            .unwrap()
            .execute(&path)
            .unwrap();

        std::fs::remove_dir_all(&dir).ok();

        let codes: Vec<&str> = courses.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["MEM601", "MEM602"]);
        assert_eq!(courses[1].name, "Fluid Mechanics");
    }
}
