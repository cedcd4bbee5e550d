// ============================================================
// Layer 4 — Course Extractor
// ============================================================
// Finds course rows in the plain text of a registration record.
//
// Registration PDFs are tables, but the table structure does not
// survive text extraction. Every line is therefore treated on its
// own and a row is recognised by its shape:
//
//   <3 uppercase letters><3 digits>  <name ...>  <1-2 digits>.<2 digits>
//    MEM601                           Advanced Thermodynamics   4.00
//
// The pattern is searched anywhere in the line (not anchored), so
// a leading serial number or trailing columns do not matter.
//
// A match is dropped when it is really the table header repeated
// on a new page, i.e. the code contains "Course Code" or the name
// contains "Credits". Missing a row is preferred over inventing one.
//
// There is no de-duplication and no sanity range on credits: any
// D.DD or DD.DD value is accepted.
//
// Reference: regex crate documentation
//            Rust Book §13 (Iterators)

use anyhow::{Context, Result};
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::domain::course::CourseRecord;
use crate::domain::traits::CourseSource;

/// Course code, name (non-greedy), credit.
/// The credit is ASCII digits only, the form Decimal can parse.
const COURSE_ROW_PATTERN: &str = r"([A-Z]{3}\d{3})\s+(.+?)\s+([0-9]{1,2}\.[0-9]{2})";

/// Text that only appears in the header row of the course table
const HEADER_CODE_SENTINEL: &str = "Course Code";
const HEADER_NAME_SENTINEL: &str = "Credits";

pub struct CourseExtractor {
    pattern: Regex,
}

impl CourseExtractor {
    /// Compile the course-row pattern
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(COURSE_ROW_PATTERN)
            .context("Failed to compile the course row pattern")?;
        Ok(Self { pattern })
    }

    /// Extract every course row from `text`, in line order.
    /// Never fails: lines that do not match are skipped.
    pub fn extract(&self, text: &str) -> Vec<CourseRecord> {
        let courses: Vec<CourseRecord> = text
            .lines()
            .filter_map(|line| self.parse_line(line))
            .collect();

        tracing::info!("Extracted {} course rows", courses.len());
        courses
    }

    /// Zero or one record for a single line
    pub fn parse_line(&self, line: &str) -> Option<CourseRecord> {
        let caps = self.pattern.captures(line)?;

        let code       = caps.get(1)?.as_str().trim();
        let name       = caps.get(2)?.as_str().trim();
        let credit_str = caps.get(3)?.as_str().trim();

        // Header row that happened to fit the shape
        if code.contains(HEADER_CODE_SENTINEL) || name.contains(HEADER_NAME_SENTINEL) {
            tracing::debug!("Skipping header-like row: '{}'", line.trim());
            return None;
        }

        let credit = match Decimal::from_str(credit_str) {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!("Skipping row with bad credit '{}': {}", credit_str, e);
                return None;
            }
        };

        Some(CourseRecord::new(code, name, credit))
    }
}

impl CourseSource for CourseExtractor {
    fn courses(&self, text: &str) -> Vec<CourseRecord> {
        self.extract(text)
    }
}
