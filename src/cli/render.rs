// ============================================================
// Layer 1 — Output Rendering
// ============================================================
// Turns use-case results into the text printed on stdout,
// either as tables (tabled) or as JSON (serde_json).

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::application::predict_use_case::Prediction;
use crate::domain::course::{total_credits, CourseRecord};
use crate::domain::grade::GradeSymbol;

#[derive(Tabled)]
struct CourseRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Subject")]
    name: String,
    #[tabled(rename = "Credits")]
    credit: String,
}

#[derive(Tabled)]
struct GradedRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Subject")]
    name: String,
    #[tabled(rename = "Credits")]
    credit: String,
    #[tabled(rename = "Grade")]
    grade: String,
    #[tabled(rename = "Points")]
    points: u8,
}

#[derive(Tabled)]
struct ScaleRow {
    #[tabled(rename = "Grade")]
    grade: String,
    #[tabled(rename = "Points")]
    points: u8,
}

#[derive(Serialize)]
struct CoursesJson<'a> {
    courses: &'a [CourseRecord],
    total_credits: Decimal,
}

/// Detected courses with a total line
pub fn courses_table(courses: &[CourseRecord]) -> String {
    let rows = courses.iter().map(|c| CourseRow {
        code: c.code.clone(),
        name: c.name.clone(),
        credit: format!("{:.2}", c.credit),
    });
    let mut table = Table::new(rows);
    table.with(Style::modern());

    format!(
        "Detected {} subjects.\n{}\nTotal credits: {:.2}",
        courses.len(),
        table,
        total_credits(courses)
    )
}

pub fn courses_json(courses: &[CourseRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&CoursesJson {
        courses,
        total_credits: total_credits(courses),
    })?)
}

/// Courses with their chosen grades, then the result message
pub fn prediction_table(p: &Prediction) -> String {
    let rows = p.courses.iter().zip(&p.selections).map(|(c, s)| GradedRow {
        code: c.code.clone(),
        name: c.name.clone(),
        credit: format!("{:.2}", c.credit),
        grade: s.grade.to_string(),
        points: s.grade.points(),
    });
    let mut table = Table::new(rows);
    table.with(Style::modern());

    format!("{}\nTotal credits: {:.2}\n\n{}", table, p.total_credits, p.message())
}

pub fn prediction_json(p: &Prediction) -> Result<String> {
    Ok(serde_json::to_string_pretty(p)?)
}

pub fn scale_table() -> String {
    let rows = GradeSymbol::ALL.iter().map(|g| ScaleRow {
        grade: g.to_string(),
        points: g.points(),
    });
    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.to_string()
}
