use crate::constants::{DEFAULT_DAEMON_BINARY, DEFAULT_OUTPUT_DIR, VERSION};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "gatorhead-snapshot", author, version = VERSION, about, long_about = Some("Gatorhead Snapshot\n\n\
Snapshot the delegators of a Dymension validator set into active and inactive CSV files"))]
pub struct SnapshotArgs {
    /// Path to the chain daemon executable
    #[arg(long, default_value = DEFAULT_DAEMON_BINARY)]
    pub binary: PathBuf,

    /// RPC endpoint passed to the daemon as `--node`
    #[arg(long)]
    pub node: Option<String>,

    /// Directory the CSV files are written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Max stderr log level
    #[arg(long, default_value_t = LogLevelFilter::default())]
    pub log_level: LogLevelFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevelFilter(pub LevelFilter);

impl std::str::FromStr for LogLevelFilter {
    type Err = <LevelFilter as std::str::FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LevelFilter::from_str(s).map(Self)
    }
}

impl Default for LogLevelFilter {
    fn default() -> Self {
        Self(LevelFilter::Info)
    }
}

impl std::fmt::Display for LogLevelFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
