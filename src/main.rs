//! altium-resistor-gen: resistor library generator for Altium Designer
//!
//! Enumerates standard resistor values across a logarithmic series,
//! package sizes and decades, and writes one CSV row per variant for use
//! as an Altium Designer component database.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use altium_resistor_gen::config;
use altium_resistor_gen::library::{
    writer, GenerationParams, Generator, LibraryIdentity,
};

/// Resistor library generator for Altium Designer component databases.
///
/// Writes the generated table to OUTPUT_FILE, or to stdout when no path
/// is given. Logs go to stderr, so stdout stays a clean data sink.
#[derive(Parser, Debug)]
#[command(name = "altium-resistor-gen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output CSV file (stdout when omitted)
    #[arg(value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point for the altium-resistor-gen tool.
fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration
    let cfg = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialise logging
    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting resistor library generation"
    );

    let params = GenerationParams {
        series: cfg.generation.series,
        sizes: cfg.generation.sizes,
        decades: cfg.generation.decades,
        tolerance: cfg.generation.tolerance,
        identity: LibraryIdentity {
            schematic_library: cfg.library.schematic_library,
            library_ref: cfg.library.library_ref,
            footprint_library: cfg.library.footprint_library,
            manufacturer: cfg.library.manufacturer,
            supplier: cfg.library.supplier,
            company: cfg.library.company,
        },
    };

    // All parameter validation happens here, before any output is written
    let generator = match Generator::new(&params) {
        Ok(generator) => generator,
        Err(e) => {
            error!(error = %e, "Invalid generation parameters");
            return ExitCode::FAILURE;
        }
    };

    let rows = generator.rows();
    info!(
        series = params.series,
        sizes = params.sizes.len(),
        rows = rows.len(),
        "Library rows generated"
    );

    let result = match args.output {
        Some(ref path) => {
            info!(path = %path.display(), "Writing library table");
            writer::write_table_to_path(&rows, path)
        }
        None => writer::write_table(&rows, io::stdout().lock()),
    };

    match result {
        Ok(()) => {
            info!("Library generation complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed to write library table");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
