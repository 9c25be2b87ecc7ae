//! Command-line and environment configuration.
//!
//! Every flag has an environment fallback:
//! - `--data` / `LAUNCH_DASH_DATA`: dataset file (`.csv` or `.json`)
//! - `--host` / `LAUNCH_DASH_HOST`: bind address
//! - `--port` / `LAUNCH_DASH_PORT`: bind port

use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8070;

#[derive(Parser, Debug)]
#[command(name = "launch-dash")]
#[command(version, about = "Interactive dashboard of SpaceX launch outcomes by site and payload mass")]
pub struct Cli {
    /// Launch records file
    #[arg(long, env = "LAUNCH_DASH_DATA", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Address to bind the HTTP server to
    #[arg(long, env = "LAUNCH_DASH_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to serve on
    #[arg(long, env = "LAUNCH_DASH_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Cli {
    pub fn to_config(&self) -> DashboardConfig {
        DashboardConfig {
            host: self.host.clone(),
            port: self.port,
            data_path: self.data.clone(),
        }
    }
}

/// Dashboard configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    pub host: String,
    pub port: u16,
    pub data_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl DashboardConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from(["launch-dash", "--port", "9000", "--data", "launches.json"]);
        let config = cli.to_config();
        assert_eq!(config.port, 9000);
        assert_eq!(config.data_path, PathBuf::from("launches.json"));
        assert_eq!(config.addr(), "127.0.0.1:9000");
    }

    #[test]
    fn default_config_matches_flag_defaults() {
        assert_eq!(DashboardConfig::default().addr(), "127.0.0.1:8070");
    }
}
