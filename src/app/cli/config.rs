//! TOML configuration file parsing and loading
//!
//! Provides file-level defaults for values not supplied on the command
//! line or through the environment. A user-specified config file must
//! exist; the probed default (from `GITSTAMP_CONFIG`) is optional.

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub stamp: StampSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StampSection {
    pub platform: Option<String>,
    pub target: Option<String>,
    pub output_dir: Option<PathBuf>,
}

impl ConfigFile {
    /// Load the configuration file, if any applies to this invocation
    pub fn load(config_file: Option<PathBuf>) -> Self {
        let config_path = match config_file {
            Some(path) => {
                // User specified a config file - it must exist
                if !path.exists() {
                    eprintln!(
                        "Error: The specified configuration file does not exist: {}",
                        path.display()
                    );
                    std::process::exit(1);
                }
                Some(path)
            }
            None => match std::env::var_os("GITSTAMP_CONFIG").map(PathBuf::from) {
                Some(path) if path.exists() => Some(path),
                _ => None,
            },
        };

        let Some(path) = config_path else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error parsing configuration file {}: {}", path.display(), e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                eprintln!("Error reading configuration file {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }
}
