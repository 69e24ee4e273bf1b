use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Participant check-in server
#[derive(Debug, Parser)]
#[command(name = "checkin", about = "Participant check-in server with normalized JSON errors")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "checkin.toml", env = "CHECKIN_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "CHECKIN_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Log filter used when the config file sets none
    #[arg(long, default_value = "info", env = "CHECKIN_LOG")]
    pub log_filter: String,
}
