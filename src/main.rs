//! CLI entry point for the GPA calculator.
//!
//! Provides subcommands for calculating semester and cumulative GPA,
//! planning toward a target GPA, and showing the grading scale and help text.

use std::ffi::OsStr;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use gpa_calculator::calculator::planner::Plan;
use gpa_calculator::config::{CalculatorConfig, UnknownGradePolicy};
use gpa_calculator::error::GpaError;
use gpa_calculator::locale::Locale;
use gpa_calculator::output::{
    GpaRecord, append_record, print_pretty, render_info, render_plan, render_result, render_scale,
    to_json,
};
use gpa_calculator::parser::{load_courses, parse_course_arg};
use gpa_calculator::session::{CourseList, CourseRow};
use tracing::{debug, info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gpa_calculator")]
#[command(about = "Semester and cumulative GPA calculator on the 4.0 scale", long_about = None)]
struct Cli {
    /// JSON config file (defaults to $GPA_CONFIG)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Output language: en or ar
    #[arg(short, long, global = true)]
    lang: Option<Locale>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate semester and cumulative GPA
    Calculate {
        /// CSV file with `grade,hours` columns (optional `course`)
        #[arg(long, value_name = "CSV")]
        courses: Option<String>,

        /// A course as GRADE:HOURS, e.g. B+:3 (repeatable)
        #[arg(short, long = "course", value_name = "GRADE:HOURS")]
        course: Vec<String>,

        /// Cumulative GPA before this semester
        #[arg(long)]
        prior_gpa: Option<String>,

        /// Hours completed before this semester
        #[arg(long)]
        prior_hours: Option<String>,

        /// How to treat grades outside A, B+, B, C+, C, D, F
        #[arg(long)]
        unknown_grade: Option<UnknownGradePolicy>,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// CSV file to append the result to
        #[arg(short, long)]
        output: Option<String>,
    },
    /// GPA needed over the remaining hours to reach a target cumulative GPA
    Plan {
        #[arg(long)]
        target: f64,

        #[arg(long)]
        current_gpa: f64,

        #[arg(long)]
        current_hours: f64,

        #[arg(long)]
        remaining_hours: f64,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Show the grading scale
    Scale,
    /// Show usage notes, FAQ and tips
    Info,
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gpa_calculator.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gpa_calculator.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let mut config = CalculatorConfig::resolve(cli.config.as_deref())?;
    if let Some(lang) = cli.lang {
        config.locale = lang;
    }
    debug!(?config, "Configuration resolved");

    match cli.command {
        Commands::Calculate {
            courses,
            course,
            prior_gpa,
            prior_hours,
            unknown_grade,
            format,
            output,
        } => {
            if let Some(policy) = unknown_grade {
                config.unknown_grade = policy;
            }

            let mut rows: Vec<CourseRow> = match &courses {
                Some(path) => load_courses(path)?,
                None => Vec::new(),
            };
            for arg in &course {
                rows.push(parse_course_arg(arg)?);
            }

            let mut list = CourseList::from_rows(rows);
            list.set_prior(
                prior_gpa.unwrap_or_default(),
                prior_hours.unwrap_or_default(),
            );

            return run_calculate(&list, &config, format, output.as_deref());
        }
        Commands::Plan {
            target,
            current_gpa,
            current_hours,
            remaining_hours,
            format,
        } => {
            let plan = match Plan::try_project(target, current_gpa, current_hours, remaining_hours)
            {
                Ok(plan) => plan,
                Err(err) => {
                    warn!(error = %err, "Plan refused");
                    eprintln!("{}", config.locale.error_message(&err));
                    return Ok(ExitCode::FAILURE);
                }
            };
            info!(
                target,
                required_gpa = plan.required_gpa,
                achievable = plan.achievable,
                "Plan projected"
            );
            match format {
                Format::Text => print!("{}", render_plan(&plan, config.locale, config.decimals)),
                Format::Json => println!("{}", to_json(&plan)?),
            }
        }
        Commands::Scale => print!("{}", render_scale(config.locale)),
        Commands::Info => print!("{}", render_info(config.locale)),
    }

    Ok(ExitCode::SUCCESS)
}

/// Runs a calculation over `list` and reports it, or explains why it was
/// refused.
#[tracing::instrument(skip(list, config, format), fields(rows = list.len()))]
fn run_calculate(
    list: &CourseList,
    config: &CalculatorConfig,
    format: Format,
    output: Option<&str>,
) -> Result<ExitCode> {
    let locale = config.locale;

    let result = match list.calculate(config.unknown_grade) {
        Ok(result) => result,
        Err(err) => {
            warn!(error = %err, "Calculation refused");
            report_refusal(list, config, &err);
            return Ok(ExitCode::FAILURE);
        }
    };

    let record = GpaRecord::from_result(&result, config.decimals);
    print_pretty(&record);

    match format {
        Format::Text => print!("{}", render_result(&result, locale, config.decimals)),
        Format::Json => println!("{}", to_json(&record)?),
    }

    if let Some(path) = output {
        append_record(path, &record)?;
        info!(path, "Result appended");
    }

    Ok(ExitCode::SUCCESS)
}

fn report_refusal(list: &CourseList, config: &CalculatorConfig, err: &GpaError) {
    let locale = config.locale;

    if !matches!(err, GpaError::InvalidGrade(_) | GpaError::InvalidHours(_)) {
        eprintln!("{}", locale.error_message(err));
        return;
    }

    eprintln!("{}", locale.invalid_inputs_message());
    let problems = list.blocking_problems(config.unknown_grade);
    if problems.is_empty() {
        eprintln!("  {}", locale.error_message(err));
    }
    for (index, row_err) in problems {
        let name = list.rows()[index].course.as_deref().unwrap_or("-");
        eprintln!("  #{} {name}: {}", index + 1, locale.error_message(&row_err));
    }
}
