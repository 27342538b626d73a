//! CLI entry point for the ESNU grader.
//!
//! Provides a one-shot `grade` subcommand and an `interactive` session that
//! reads student records line by line, mirroring the course grading sheet
//! format.

use std::ffi::OsStr;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use esnu_grader::grading::{GradingConfig, grade_record};
use esnu_grader::output::{format_report, print_json, print_pretty};
use esnu_grader::parser::parse_record;
use tracing::{debug, info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const FORMAT_HELP: &str = "\
INPUT FORMATTING INFORMATION
--------------------------------------------------------------------------------
The scoring information of a single student should be entered in this format:
Scores on proof problems on psets: #Ep, #Sp, #Np, #Up (as comma-separated ints)
Scores on non-proof problems on psets: #Enp, #Snp, #Nnp, #Unp (as comma-separated ints)
Midterm and final exam scores: X / 100 (as an int score out of 100)
Tasks completed: # of tasks completed (as an int)

The above values should be comma-separated and entered on one line:
#Ep,#Sp,#Np,#Up,#Enp,#Snp,#Nnp,#Unp,midterm,final,tasks";

#[derive(Parser)]
#[command(name = "esnu_grader")]
#[command(about = "Computes course letter grades from ESNU pset outcomes, exams, and tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a single student record given as one argument
    Grade {
        /// Record line: Ep,Sp,Np,Up,Enp,Snp,Nnp,Unp,midterm,final,tasks
        #[arg(value_name = "RECORD")]
        record: String,

        /// Print the full grade report as JSON instead of just the letter
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Start an interactive grading session reading records from stdin
    Interactive,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/esnu_grader.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("esnu_grader.log"));

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
    let config = GradingConfig::default();

    match cli.command {
        Commands::Grade { record, json } => {
            let record = parse_record(&record)?;
            let report = grade_record(&config, &record);
            print_pretty(&report);

            if json {
                print_json(&report)?;
            } else {
                println!("{}", report.letter);
            }
        }
        Commands::Interactive => {
            interactive_session(&config)?;
        }
    }

    Ok(())
}

/// Runs the interactive grading loop until `q` or end of input.
fn interactive_session(config: &GradingConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to the ESNU grader.");

    loop {
        println!("Enter 'q' to quit, 'i' for input formatting information, or any other character to proceed:");
        io::stdout().flush()?;

        let Some(choice) = lines.next().transpose()? else {
            break;
        };
        let choice = choice.trim();

        if choice == "q" {
            break;
        }

        if choice == "i" {
            println!("\n{}\n", FORMAT_HELP);
            continue;
        }

        println!("Enter the scoring information for a single student (or 'q' to skip):");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();

        if line == "q" {
            continue;
        }

        match parse_record(line) {
            Ok(record) => {
                let report = grade_record(config, &record);
                debug!(letter = %report.letter, level = report.level, "Record graded");
                println!("\nThis student's grade is: {}", format_report(&report));
            }
            Err(e) => {
                warn!(error = %e, "Record rejected");
                println!("Invalid record: {}", e);
            }
        }
        println!();
    }

    info!("Interactive session finished");
    Ok(())
}
