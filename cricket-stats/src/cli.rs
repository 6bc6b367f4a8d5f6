//! Command-line arguments
//!
//! Each flag can also be set through its environment variable; clap gives
//! the flag priority over the variable.

use clap::Parser;
use cricket_common::config::ConfigOverrides;
use std::path::PathBuf;

/// Command-line arguments for cricket-stats
#[derive(Parser, Debug)]
#[command(name = "cricket-stats")]
#[command(about = "HTTP service for cricket player and match statistics")]
#[command(version)]
pub struct Args {
    /// Port to listen on (default 3000)
    #[arg(short, long, env = "CRICKET_PORT")]
    pub port: Option<u16>,

    /// Address to bind to (default 0.0.0.0)
    #[arg(long, env = "CRICKET_HOST")]
    pub host: Option<String>,

    /// Path to the SQLite store (default ./cricketMatchDetails.db)
    #[arg(short, long, env = "CRICKET_DATABASE")]
    pub database: Option<PathBuf>,

    /// TOML config file (default <config dir>/cricket/config.toml)
    #[arg(short, long, env = "CRICKET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, env = "CRICKET_LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl Args {
    /// Command-line and environment values, for merging over the TOML file
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            database_path: self.database.clone(),
            host: self.host.clone(),
            port: self.port,
            log_level: self.log_level.clone(),
        }
    }
}
