//! Logging initialization
//!
//! Thin wrapper over flexi_logger. The `RUST_LOG` environment variable
//! takes precedence over the command-line level when set.

use flexi_logger::{colored_detailed_format, detailed_format, FlexiLoggerError, Logger, LoggerHandle};

/// Start the logger. The returned handle must stay alive for the duration
/// of the process; dropping it shuts logging down.
pub fn init_logging(
    log_level: Option<&str>,
    use_color: bool,
) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(log_level.unwrap_or("info"))?;
    let logger = if use_color {
        logger.format(colored_detailed_format)
    } else {
        logger.format(detailed_format)
    };
    logger.start()
}
