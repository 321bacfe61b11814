//! CLI entry point for the bikeshare explorer.
//!
//! Provides an interactive exploration session and a one-shot report
//! subcommand for scripted use.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use bikeshare_explorer::dataset::{self, City};
use bikeshare_explorer::filter::{self, DayFilter, MonthFilter};
use bikeshare_explorer::reports::report_bundle;
use bikeshare_explorer::{derive, output, session};

#[derive(Parser)]
#[command(name = "bikeshare_explorer")]
#[command(about = "Explore descriptive statistics over US bikeshare trip data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Explore a city interactively, with filter prompts and paged raw rows
    Interactive {
        /// Directory containing the city CSV files
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },
    /// Compute every report once for the given city and filters
    Report {
        /// City to analyze
        #[arg(value_name = "CITY")]
        city: City,

        /// Month filter: january through june, 1-6, or all
        #[arg(short, long, default_value = "all")]
        month: MonthFilter,

        /// Day-of-week filter: monday through sunday, or all
        #[arg(short, long, default_value = "all")]
        day: DayFilter,

        /// Directory containing the city CSV files
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// Emit the reports as pretty JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bikeshare_explorer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_explorer.log"));

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
        Commands::Interactive { data_dir } => {
            session::run(&data_dir)?;
        }
        Commands::Report {
            city,
            month,
            day,
            data_dir,
            json,
        } => {
            let store = dataset::load_city(&data_dir, city)?;
            let enriched = derive::enrich(store)?;
            let table = filter::apply(&enriched, month, day);
            let bundle = report_bundle(city, month, day, &table)?;

            if json {
                output::print_json(&bundle)?;
            } else {
                print!("{}", output::render_bundle(&bundle));
            }
        }
    }

    Ok(())
}
