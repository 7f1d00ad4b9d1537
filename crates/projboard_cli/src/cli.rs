//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

/// projboard - collect projects from a terminal form and list them
#[derive(Parser, Debug)]
#[command(name = "projboard")]
#[command(author, version = projboard_core::core_version(), about, long_about = None)]
pub struct Cli {
    /// JSON file overriding the form validation rules
    #[arg(long, env = "PROJBOARD_RULES")]
    pub rules: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = projboard_core::default_log_level())]
    pub log_level: String,

    /// Absolute directory for rotating log files (logs to stderr when unset)
    #[arg(long, env = "PROJBOARD_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    pub fn logging_config(&self) -> projboard_core::LoggingConfig {
        projboard_core::LoggingConfig {
            level: self.log_level.clone(),
            log_dir: self.log_dir.clone(),
        }
    }
}
