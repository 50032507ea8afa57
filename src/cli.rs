//! Command-line interface components.
//!
//! The binary owns the file handle; the library only ever sees the buffered
//! line source it is given.

use crate::classifier::{SaffirSimpson, WindClassifier};
use crate::config::ReaderConfig;
use crate::models::{Basin, Observation, StormHeader};
use crate::reader::{ReadStats, TrackReader, TrackRecord};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::*;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Output formats for decoded records
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable blocks, one per observation
    Human,
    /// One JSON object per observation line
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "hurdat-reader")]
#[command(about = "Decode HURDAT2 tropical cyclone track files")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to a HURDAT2 text file
    #[arg(value_name = "FILE")]
    pub input_path: PathBuf,

    /// Only show storms from this season
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Only show storms from this basin (AL, EP, CP)
    #[arg(short, long)]
    pub basin: Option<Basin>,

    /// Only show storms with this name (case-insensitive)
    #[arg(short, long)]
    pub storm: Option<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Log and skip malformed lines instead of stopping at the first one
    #[arg(long)]
    pub skip_malformed: bool,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the reader configuration from the filter flags
    pub fn reader_config(&self) -> ReaderConfig {
        let mut config = ReaderConfig::default();
        if self.skip_malformed {
            config = config.with_skip_malformed();
        }
        if let Some(year) = self.year {
            config = config.with_year(year);
        }
        if let Some(basin) = self.basin {
            config = config.with_basin(basin);
        }
        if let Some(name) = &self.storm {
            config = config.with_storm_name(name.clone());
        }
        config
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hurdat_reader={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Decode the input file and print its observations to stdout
pub fn run(args: &Args) -> Result<ReadStats> {
    let file = File::open(&args.input_path)
        .with_context(|| format!("Failed to open {}", args.input_path.display()))?;
    info!("Reading {}", args.input_path.display());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = render_records(
        BufReader::new(file),
        &mut out,
        args.reader_config(),
        args.output_format,
        &SaffirSimpson,
    )
    .with_context(|| format!("Failed to decode {}", args.input_path.display()))?;
    out.flush().context("Failed to flush stdout")?;

    if !args.quiet {
        print_summary(&stats);
    }

    Ok(stats)
}

/// Stream every record from `source` and write the observations to `out`
pub fn render_records<R, W, C>(
    source: R,
    out: &mut W,
    config: ReaderConfig,
    format: OutputFormat,
    classifier: &C,
) -> Result<ReadStats>
where
    R: BufRead,
    W: Write,
    C: WindClassifier + ?Sized,
{
    let mut reader = TrackReader::new(source, config)?;

    for record in reader.by_ref() {
        if let TrackRecord::Observation { storm, observation } = record? {
            match format {
                OutputFormat::Human => write_human(out, &storm, &observation, classifier)?,
                OutputFormat::Json => write_json(out, &storm, &observation, classifier)?,
            }
        }
    }

    Ok(reader.into_stats())
}

fn write_human<W: Write, C: WindClassifier + ?Sized>(
    out: &mut W,
    storm: &StormHeader,
    observation: &Observation,
    classifier: &C,
) -> Result<()> {
    let time = observation.time;
    let landfall = if observation.landfall.is_landfall() {
        "yes".bright_red().bold().to_string()
    } else {
        "no".to_string()
    };
    let pressure = if observation.has_pressure() {
        format!("{} mb", observation.pressure)
    } else {
        "missing".bright_black().to_string()
    };

    writeln!(out)?;
    writeln!(out, "ID       : {}", storm.storm_id.to_string().bright_yellow())?;
    writeln!(out, "Name     : {}", storm.trimmed_name().bright_cyan().bold())?;
    writeln!(out, "Year     : {}", storm.year)?;
    writeln!(
        out,
        "Date     : {:02}/{:02} {:02}00",
        time.month, time.day, time.hour
    )?;
    writeln!(out, "Latitude : {:.1}", observation.latitude)?;
    writeln!(out, "Longitude: {:.1}", observation.longitude)?;
    writeln!(out, "Wind     : {} kt", observation.wind)?;
    writeln!(out, "Pressure : {}", pressure)?;
    writeln!(out, "Category : {}", classifier.classify(observation.wind))?;
    writeln!(out, "Stage    : {}", observation.stage)?;
    writeln!(out, "Landfall : {}", landfall)?;
    Ok(())
}

/// Flat JSON view of one observation
#[derive(Serialize)]
struct ObservationRow<'a> {
    storm_id: i64,
    basin: Basin,
    name: &'a str,
    year: i32,
    timestamp: Option<chrono::NaiveDateTime>,
    #[serde(flatten)]
    observation: &'a Observation,
    category: String,
}

fn write_json<W: Write, C: WindClassifier + ?Sized>(
    out: &mut W,
    storm: &StormHeader,
    observation: &Observation,
    classifier: &C,
) -> Result<()> {
    let row = ObservationRow {
        storm_id: storm.storm_id,
        basin: storm.basin,
        name: storm.trimmed_name(),
        year: storm.year,
        timestamp: observation.timestamp(),
        observation,
        category: classifier.classify(observation.wind).to_string(),
    };
    serde_json::to_writer(&mut *out, &row).context("Failed to serialize observation")?;
    writeln!(out)?;
    Ok(())
}

/// Print read statistics to stderr
pub fn print_summary(stats: &ReadStats) {
    eprintln!();
    eprintln!("{}", "Summary".bright_green().bold());
    eprintln!("  Storms       : {}", stats.storms_seen);
    eprintln!("  Observations : {}", stats.observations_parsed);
    eprintln!("  Reported     : {}", stats.records_emitted);
    if stats.lines_skipped > 0 {
        eprintln!(
            "  Skipped      : {} ({:.1}% decoded)",
            stats.lines_skipped.to_string().bright_red(),
            stats.success_rate()
        );
    }
    if stats.count_mismatches > 0 {
        eprintln!(
            "  Count mismatches: {}",
            stats.count_mismatches.to_string().yellow()
        );
    }
}
