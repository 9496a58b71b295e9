//! Configuration management for the Agricultural Production Dashboard
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code (serve `crop_factor.xlsx` on 127.0.0.1:8050)
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides such as `AGRI__SERVER__PORT`

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Input spreadsheet configuration
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Spreadsheet to load at startup (.xlsx, .xls, .xlsm, .ods or .csv)
    pub path: PathBuf,

    /// Worksheet name; the first worksheet when unset
    #[serde(default)]
    pub sheet: Option<String>,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8050)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("data.path", "crop_factor.xlsx")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRI__ prefix)
            .add_source(
                Environment::with_prefix("AGRI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Address the HTTP server binds to
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8050,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("crop_factor.xlsx"),
            sheet: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            data: DataConfig::default(),
        }
    }
}
