//! CLI entry point for the interactive grade calculator.
//!
//! Prompts for grading components and student scores on stdin, prints each
//! student's weighted percentage and letter grade, and can export the results.

use anyhow::Result;
use clap::Parser;
use grade_calculator::console::Console;
use grade_calculator::grading::grade::GradeScale;
use grade_calculator::output::{append_results, write_json};
use grade_calculator::session::{self, SessionOptions};
use std::ffi::OsStr;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "grade_calculator")]
#[command(about = "Interactive weighted grade calculator", long_about = None)]
struct Cli {
    /// CSV file to append student results to
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Write the full report (components, results, summary) as JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Print the class average and grade distribution after the results
    #[arg(short, long, default_value_t = false)]
    summary: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_logging()?;

    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let scale = GradeScale::default();
    let options = SessionOptions {
        summary: cli.summary,
    };

    let Some(report) = session::run(&mut console, &scale, &options)? else {
        return Ok(());
    };

    if let Some(path) = &cli.csv {
        append_results(path, &report)?;
    }
    if let Some(path) = &cli.json {
        write_json(path, &report)?;
    }

    info!(students = report.results.len(), "Finished");
    Ok(())
}

/// Logging setup: stderr for warnings by default, plus a JSON rolling log
/// file when `LOG_FILE_PATH` is set.
///
/// The returned guard must stay alive until exit so buffered file logs flush.
fn init_logging() -> Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .with_filter(env_filter("RUST_LOG", LevelFilter::WARN));

    let Ok(log_file_path) = std::env::var("LOG_FILE_PATH") else {
        tracing_subscriber::registry().with(stderr_layer).init();
        return Ok(None);
    };

    let log_dir = Path::new(&log_file_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("grade_calculator.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(env_filter("RUST_LOG_JSON", LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(Some(guard))
}

/// Filter read from `var`, falling back to `default` when it is unset.
fn env_filter(var: &str, default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(var)
        .from_env_lossy()
}
