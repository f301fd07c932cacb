//! CLI entry point for the gradebook rater tool.
//!
//! Provides subcommands for computing final grades from a gradebook CSV,
//! listing students eligible for honors credit, and emitting a full JSON
//! grade report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gradebook_rater::{
    graders::{
        aggregate::grade_all, eligibility::eligible_for_honors, policy::GradingPolicy,
        report::build_report,
    },
    loader::load_gradebook,
    output::{print_pretty, to_json, write_grades_csv},
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gradebook_rater")]
#[command(about = "A tool to compute final course grades from a gradebook CSV", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute final grades for every student in a gradebook
    Grade {
        /// Path to the gradebook CSV export
        #[arg(value_name = "GRADEBOOK")]
        gradebook: String,

        /// CSV file to write the grades to; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<String>,

        /// JSON file overriding the default grading policy
        #[arg(short, long)]
        policy: Option<String>,
    },
    /// List the students eligible for honors credit
    Honors {
        /// Path to the gradebook CSV export
        #[arg(value_name = "GRADEBOOK")]
        gradebook: String,

        /// Minimum honors-assignment score required for eligibility
        #[arg(short, long, default_value_t = 85)]
        min_score: i64,

        /// JSON file overriding the default grading policy
        #[arg(short, long)]
        policy: Option<String>,
    },
    /// Emit a full JSON grade report for the class
    Report {
        /// Path to the gradebook CSV export
        #[arg(value_name = "GRADEBOOK")]
        gradebook: String,

        /// Minimum honors-assignment score required for eligibility
        #[arg(short, long, default_value_t = 85)]
        min_score: i64,

        /// JSON file overriding the default grading policy
        #[arg(short, long)]
        policy: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gradebook_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gradebook_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Grade {
            gradebook,
            output,
            policy,
        } => {
            let policy = load_policy(policy)?;
            let gradebook = load_gradebook(&gradebook)?;
            let grades = grade_all(&gradebook, &policy);

            match output {
                Some(path) => {
                    write_grades_csv(&path, &grades)?;
                    info!(path = %path, students = grades.len(), "Grades written");
                }
                None => {
                    for (id, grade_point) in &grades {
                        println!("{id},{grade_point}");
                    }
                }
            }
        }
        Commands::Honors {
            gradebook,
            min_score,
            policy,
        } => {
            let policy = load_policy(policy)?;
            let gradebook = load_gradebook(&gradebook)?;
            let eligible = eligible_for_honors(&gradebook, min_score, &policy);

            info!(
                eligible = eligible.len(),
                total = gradebook.len(),
                min_score,
                "Honors eligibility computed"
            );
            for id in &eligible {
                println!("{id}");
            }
        }
        Commands::Report {
            gradebook,
            min_score,
            policy,
        } => {
            let policy = load_policy(policy)?;
            let gradebook = load_gradebook(&gradebook)?;
            let report = build_report(&gradebook, min_score, &policy);

            print_pretty(&report);
            println!("{}", to_json(&report)?);
        }
    }

    Ok(())
}

/// Loads the policy file when one was given, otherwise the course default.
fn load_policy(path: Option<String>) -> Result<GradingPolicy> {
    match path {
        Some(path) => GradingPolicy::load(&path),
        None => Ok(GradingPolicy::default()),
    }
}
