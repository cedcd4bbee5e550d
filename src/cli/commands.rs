// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `courses`, `predict` and `scale`
// and all their configurable flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::application::extract_use_case::ExtractConfig;
use crate::domain::grade::GradeSymbol;

/// The top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the courses detected in a registration record PDF
    Courses(CoursesArgs),

    /// Predict the CGPA range for the grades you expect
    Predict(PredictArgs),

    /// Print the grade scale and its points
    Scale,
}

/// How results are printed
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Arguments shared by every command that reads a PDF
#[derive(Args, Debug)]
pub struct PdfArgs {
    /// Path to the semester registration record (PDF)
    pub pdf: PathBuf,

    /// Largest horizontal gap, in PDF units, still treated as the same word
    #[arg(long, default_value_t = 2.0)]
    pub x_tolerance: f32,

    /// Largest baseline difference, in PDF units, still treated as the same line
    #[arg(long, default_value_t = 2.0)]
    pub y_tolerance: f32,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Convert CLI PdfArgs into the application-layer ExtractConfig.
/// The application layer never sees clap types.
impl From<&PdfArgs> for ExtractConfig {
    fn from(a: &PdfArgs) -> Self {
        ExtractConfig {
            x_tolerance: a.x_tolerance,
            y_tolerance: a.y_tolerance,
        }
    }
}

/// All arguments for the `courses` command
#[derive(Args, Debug)]
pub struct CoursesArgs {
    #[command(flatten)]
    pub pdf: PdfArgs,
}

/// All arguments for the `predict` command
#[derive(Args, Debug)]
pub struct PredictArgs {
    #[command(flatten)]
    pub pdf: PdfArgs,

    /// Expected grades in course order, e.g. "A,B,A-".
    /// Prompts for each course when omitted.
    #[arg(long, value_delimiter = ',')]
    pub grades: Option<Vec<GradeSymbol>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_predict_parses_grade_list() {
        let cli = Cli::try_parse_from([
            "cgpa-predictor", "predict", "reg.pdf", "--grades", "A,b-,D-",
        ])
        .unwrap();
        match cli.command {
            Commands::Predict(args) => {
                assert_eq!(
                    args.grades,
                    Some(vec![GradeSymbol::A, GradeSymbol::BMinus, GradeSymbol::DMinus])
                );
                assert_eq!(args.pdf.format, OutputFormat::Table);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_grade_is_rejected() {
        let parsed = Cli::try_parse_from(["cgpa-predictor", "predict", "reg.pdf", "--grades", "A+"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_tolerances_flow_into_config() {
        let cli = Cli::try_parse_from([
            "cgpa-predictor", "courses", "reg.pdf", "--x-tolerance", "3.5", "--y-tolerance", "1",
            "--format", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Courses(args) => {
                let cfg = ExtractConfig::from(&args.pdf);
                assert_eq!(cfg, ExtractConfig { x_tolerance: 3.5, y_tolerance: 1.0 });
                assert_eq!(args.pdf.format, OutputFormat::Json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
