//! Application startup
//!
//! Linear startup flow: parse arguments, resolve configuration, initialize
//! logging, run the stamper once, map errors to a non-zero exit.

use crate::app::cli::args::Args;
use crate::app::cli::config::ConfigFile;
use crate::common::logging::init_logging;
use crate::git::GitRepository;
use crate::stamp;
use crate::stamp::error::{StampError, StampResult};
use crate::stamp::types::BuildTarget;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

pub fn startup() {
    let args = Args::parse();

    let use_color = (args.color || std::io::stdout().is_terminal()) && !args.no_color;
    colored::control::set_override(use_color);

    // Keep the handle alive for the lifetime of the invocation
    let _logger = match init_logging(args.log_level.as_deref(), use_color) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Error initializing logging: {}", e);
            std::process::exit(1);
        }
    };

    log::debug!(
        "gitstamp {} ({}, built {})",
        env!("CARGO_PKG_VERSION"),
        crate::GIT_HASH,
        crate::BUILD_TIME
    );

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> StampResult<()> {
    let config = ConfigFile::load(args.config_file.clone());

    let platform = resolve_token(args.platform.as_deref(), "PLATFORM", &config.stamp.platform)
        .ok_or_else(|| StampError::MissingConfiguration {
            message: "platform token not supplied (use --platform, PLATFORM, or the config file)"
                .to_string(),
        })?;
    let target = resolve_token(args.target.as_deref(), "TARGET", &config.stamp.target).ok_or_else(
        || StampError::MissingConfiguration {
            message: "target token not supplied (use --target, TARGET, or the config file)"
                .to_string(),
        },
    )?;
    let build_target = BuildTarget::new(&platform, &target)?;

    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| config.stamp.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    log::info!(
        "Stamping {} for {}/{} into {}",
        args.repository.display(),
        build_target.platform(),
        build_target.target(),
        output_dir.display()
    );

    let provider = GitRepository::discover(&args.repository)?;
    stamp::run(&provider, &build_target, &output_dir)?;
    Ok(())
}

/// Flag beats environment beats config file; empty values count as unset
fn resolve_token(flag: Option<&str>, env_var: &str, config: &Option<String>) -> Option<String> {
    flag.map(str::to_string)
        .or_else(|| std::env::var(env_var).ok())
        .or_else(|| config.clone())
        .filter(|value| !value.is_empty())
}
