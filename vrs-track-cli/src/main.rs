//! vrs2gpx command-line tool
//!
//! One-shot batch converter: scans a directory of Virtual Radar Server
//! aircraft-list snapshot files for a queried Mode S ICAO transponder code
//! and writes every position sample of that aircraft into a single GPX
//! track file.
//!
//! The heavy lifting lives in the vrs-track-decoder library; this crate adds
//! argument parsing, an optional TOML config file, logging setup and
//! progress output.

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use vrs_track_decoder::{scan_directory, write_track_file, TrackBuilder};

mod config;

/// vrs2gpx - convert VRS snapshot directories to GPX tracks
#[derive(Parser, Debug)]
#[command(name = "vrs2gpx")]
#[command(about = "Convert VRS aircraft-list snapshots to a GPX track", long_about = None)]
#[command(version)]
struct Args {
    /// 6-digit Mode S ICAO transponder code to extract (required unless set
    /// in the config file)
    #[arg(short = 'q', long = "icao", value_name = "ICAO")]
    icao: Option<String>,

    /// Directory containing VRS snapshot files (default: ./files)
    #[arg(short = 'p', long = "path", value_name = "DIR")]
    path: Option<PathBuf>,

    /// Output GPX filename (default: current local time in ISO 8601 form)
    #[arg(short = 'f', long = "gpxfilename", value_name = "FILE")]
    gpxfilename: Option<PathBuf>,

    /// Sort track points by timestamp instead of file order
    #[arg(long)]
    sort_by_time: bool,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short = 'Q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("vrs2gpx v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using decoder library v{}", vrs_track_decoder::VERSION);

    // Config file fills in whatever the command line left unset
    let file_config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => config::AppConfig::default(),
    };

    let Some(icao) = args.icao.clone().or(file_config.icao) else {
        println!("No ICAO argument entered. Type vrs2gpx --help for usage.");
        std::process::exit(2);
    };

    let dir = args
        .path
        .clone()
        .or(file_config.path)
        .unwrap_or_else(|| PathBuf::from("./files"));
    let output = args
        .gpxfilename
        .clone()
        .or(file_config.gpxfilename)
        .unwrap_or_else(default_output_name);
    let sort_by_time = args.sort_by_time || file_config.sort_by_time;

    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    println!("Using {} worker threads. This can take a while...", workers);

    // Stage 1: parallel scan for files mentioning the code
    let report = scan_directory(&dir, &icao, workers)
        .with_context(|| format!("Failed to scan snapshot directory {:?}", dir))?;

    if !report.failures.is_empty() {
        println!(
            "{} of {} files could not be scanned.",
            report.failures.len(),
            report.scanned
        );
    }
    println!(
        "Found {} in {} of {} files.",
        icao,
        report.matches.len(),
        report.scanned
    );

    if report.matches.is_empty() {
        println!("No matches - no output written.");
        return Ok(());
    }

    // Stage 2: sequential track assembly over the matched files
    let built = TrackBuilder::new(&icao)
        .with_time_sorting(sort_by_time)
        .build(&dir, &report.matches);

    if !built.report.skipped_records.is_empty() {
        println!(
            "Skipped {} malformed record(s).",
            built.report.skipped_records.len()
        );
    }

    write_track_file(&output, &built.points)
        .with_context(|| format!("Failed to write GPX file {:?}", output))?;
    println!("Wrote {:?} ({} points).", output, built.points.len());

    Ok(())
}

/// Default output filename: local timestamp in ISO 8601 form plus extension
fn default_output_name() -> PathBuf {
    PathBuf::from(format!("{}.gpx", Local::now().format("%Y-%m-%dT%H:%M:%S%.6f")))
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
