// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// The entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Three commands are supported:
//   1. `courses` — list the courses found in a registration PDF
//   2. `predict` — ask for expected grades and print the CGPA range
//   3. `scale`   — print the grade scale
//
// "No courses detected" and "zero credits" are not failures of the
// program: they are printed as messages and the command succeeds.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;
pub mod prompt;
pub mod render;

use anyhow::Result;
use clap::Parser;
use std::io;

use commands::{Commands, CoursesArgs, OutputFormat, PredictArgs};
use crate::application::extract_use_case::{ExtractConfig, ExtractUseCase};
use crate::application::predict_use_case::PredictUseCase;
use crate::domain::error::CgpaError;

/// The main CLI struct
#[derive(Parser, Debug)]
#[command(
    name = "cgpa-predictor",
    version,
    about = "Read a semester registration PDF, enter expected grades, get your CGPA range."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the subcommand, turning informational conditions
    /// into printed messages.
    pub fn run(self) -> Result<()> {
        let outcome = match self.command {
            Commands::Courses(args) => run_courses(args),
            Commands::Predict(args) => run_predict(args),
            Commands::Scale => {
                println!("{}", render::scale_table());
                Ok(())
            }
        };

        match outcome {
            Err(e) => match e.downcast_ref::<CgpaError>() {
                Some(CgpaError::NoCoursesDetected) | Some(CgpaError::ZeroCredits { .. }) => {
                    println!("{}", e);
                    Ok(())
                }
                _ => Err(e),
            },
            ok => ok,
        }
    }
}

/// Handles the `courses` subcommand.
fn run_courses(args: CoursesArgs) -> Result<()> {
    let use_case = ExtractUseCase::new(ExtractConfig::from(&args.pdf))?;
    let courses  = use_case.execute(&args.pdf.pdf)?;

    match args.pdf.format {
        OutputFormat::Table => println!("{}", render::courses_table(&courses)),
        OutputFormat::Json  => println!("{}", render::courses_json(&courses)?),
    }
    Ok(())
}

/// Handles the `predict` subcommand.
/// Grades come from --grades, or from a prompt per course.
fn run_predict(args: PredictArgs) -> Result<()> {
    let use_case = ExtractUseCase::new(ExtractConfig::from(&args.pdf))?;
    let courses  = use_case.execute(&args.pdf.pdf)?;

    let grades = match args.grades {
        Some(grades) => grades,
        None => {
            println!("{}\n", render::courses_table(&courses));
            prompt::ask_grades(&courses, io::stdin().lock(), io::stdout())?
        }
    };

    let prediction = PredictUseCase::new().execute(courses, &grades)?;

    match args.pdf.format {
        OutputFormat::Table => println!("{}", render::prediction_table(&prediction)),
        OutputFormat::Json  => println!("{}", render::prediction_json(&prediction)?),
    }
    Ok(())
}
