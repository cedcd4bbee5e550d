// ============================================================
// Layer 1 — Grade Prompt
// ============================================================
// Asks for one expected grade per detected course:
//
//   [1/3] MEM601 Advanced Thermodynamics (4.00 credits) grade [A]:
//
// Empty input keeps the default (A). An unknown symbol prints the
// accepted scale and asks again. End of input keeps the default
// for every remaining course.
//
// Generic over BufRead/Write so tests can drive it with in-memory
// buffers instead of a terminal.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::domain::course::CourseRecord;
use crate::domain::grade::GradeSymbol;

pub fn ask_grades<R: BufRead, W: Write>(
    courses: &[CourseRecord],
    mut input: R,
    mut out: W,
) -> Result<Vec<GradeSymbol>> {
    let default = GradeSymbol::default();
    let mut grades = Vec::with_capacity(courses.len());

    for (i, course) in courses.iter().enumerate() {
        let grade = loop {
            write!(
                out,
                "[{}/{}] {} {} ({:.2} credits) grade [{}]: ",
                i + 1,
                courses.len(),
                course.code,
                course.name,
                course.credit,
                default
            )?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break default;
            }

            let answer = line.trim();
            if answer.is_empty() {
                break default;
            }

            match answer.parse::<GradeSymbol>() {
                Ok(g) => break g,
                Err(e) => writeln!(out, "{}", e)?,
            }
        };
        grades.push(grade);
    }

    Ok(grades)
}
