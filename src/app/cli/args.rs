//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// Arguments for a single stamping invocation.
///
/// Platform and target tokens resolve in order: command line, then
/// environment (`PLATFORM` / `TARGET`), then configuration file.
#[derive(Parser, Debug, Clone)]
#[command(name = "gitstamp")]
#[command(about = "Stamp firmware builds with git version metadata")]
#[command(version)]
pub struct Args {
    /// Git-controlled repository directory to stamp
    #[arg(value_name = "REPO_PATH")]
    pub repository: PathBuf,

    /// Platform identifier (falls back to the PLATFORM environment variable)
    #[arg(short = 'p', long = "platform", value_name = "NAME")]
    pub platform: Option<String>,

    /// Target identifier (falls back to the TARGET environment variable)
    #[arg(short = 't', long = "target", value_name = "NAME")]
    pub target: Option<String>,

    /// Directory receiving version_data.h and version_data.c
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Force color output
    #[arg(long = "color")]
    pub color: bool,

    /// Disable color output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
