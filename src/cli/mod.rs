//! Command-line arguments for the server binary
//!
//! Flags override environment variables, which override the config file.

use std::path::PathBuf;

use clap::Parser;

use crate::core::config::{
    Config, LogFormat, ENV_HOST, ENV_LOG_FORMAT, ENV_PORT, ENV_VARIANT,
};
use crate::core::error::Result;
use crate::core::variant::Variant;

/// omikuji-server - greeting, omikuji and diagnosis HTTP service
#[derive(Parser, Debug, Default)]
#[command(name = "omikuji-server")]
#[command(version)]
#[command(about = "Omikuji and personality diagnosis HTTP service", long_about = None)]
pub struct Cli {
    /// Config file (TOML)
    #[arg(short, long, env = "OMIKUJI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Service flavour
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Log output format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Build the effective config: file, then environment, then flags
    ///
    /// Environment variables for settings given as flags are not read.
    /// Validation runs once, on the final result.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load_from(self.config.as_deref())?;
        config.merge_env(&self.flagged_env_vars())?;
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Env vars shadowed by flags given on the command line
    pub fn flagged_env_vars(&self) -> Vec<&'static str> {
        let mut vars = Vec::new();
        if self.host.is_some() {
            vars.push(ENV_HOST);
        }
        if self.port.is_some() {
            vars.push(ENV_PORT);
        }
        if self.variant.is_some() {
            vars.push(ENV_VARIANT);
        }
        if self.log_format.is_some() {
            vars.push(ENV_LOG_FORMAT);
        }
        vars
    }

    /// Apply explicitly given flags to `config`
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(variant) = self.variant {
            config.service.variant = variant;
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }
    }
}
