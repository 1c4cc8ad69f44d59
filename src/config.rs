// src/config.rs

use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    InvalidAddr(String),
    InvalidWorkers(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAddr(v) => write!(f, "ELITE_ADDR is not a socket address: {v}"),
            ConfigError::InvalidWorkers(v) => {
                write!(f, "ELITE_WORKERS must be a positive integer: {v}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub max_workers: usize,
    pub static_dir: PathBuf,
    /// JSON file replacing the embedded catalog.
    pub catalog_path: Option<String>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            static_dir: PathBuf::from("static"),
            catalog_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Read settings from the process environment (after loading `.env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();

        if let Some(addr) = lookup("ELITE_ADDR") {
            cfg.addr = addr
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddr(addr.clone()))?;
        }

        if let Some(workers) = lookup("ELITE_WORKERS") {
            cfg.max_workers = workers
                .trim()
                .parse()
                .ok()
                .filter(|n: &usize| *n > 0)
                .ok_or_else(|| ConfigError::InvalidWorkers(workers.clone()))?;
        }

        if let Some(dir) = lookup("ELITE_STATIC_DIR").filter(|d| !d.trim().is_empty()) {
            cfg.static_dir = PathBuf::from(dir);
        }

        cfg.catalog_path = lookup("ELITE_CATALOG").filter(|p| !p.trim().is_empty());

        if let Some(filter) = lookup("RUST_LOG").filter(|f| !f.trim().is_empty()) {
            cfg.log_filter = filter;
        }

        Ok(cfg)
    }
}
