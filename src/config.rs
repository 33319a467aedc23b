// src/config.rs

use std::{env, net::SocketAddr};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Where the survey CSV lives when `GSS_SOURCE` is unset.
pub const DEFAULT_SOURCE: &str =
    "https://github.com/jkropko/DS-6001/raw/master/localdata/gss2018.csv";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8051;

/// Runtime settings, read once from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `http(s)://` URL, `file://` URL, or plain filesystem path.
    pub source: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// Fallbacks taken while reading the environment. Logged once the
    /// subscriber is up, see [`Config::log_notes`].
    pub notes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
            notes: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut notes = Vec::new();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                notes.push(format!("invalid PORT `{}`, using {}", raw, DEFAULT_PORT));
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        Self {
            source: lookup("GSS_SOURCE").unwrap_or(defaults.source),
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            notes,
        }
    }

    /// `RUST_LOG` when set and valid, otherwise `LOG_LEVEL`.
    pub fn env_filter(&self, rust_log: Option<&str>) -> EnvFilter {
        rust_log
            .filter(|s| !s.trim().is_empty())
            .and_then(|s| EnvFilter::try_new(s).ok())
            .unwrap_or_else(|| EnvFilter::new(&self.log_level))
    }

    /// Emit the fallbacks collected by [`Config::from_lookup`].
    pub fn log_notes(&self) {
        for note in &self.notes {
            warn!("{}", note);
        }
    }

    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("invalid HOST/PORT {}: {}", addr, e))
    }
}
