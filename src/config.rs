//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file is read first (see `main.rs`).
//!
//! ## Variables
//!
//! - `HOST` - Bind host (default: `0.0.0.0`)
//! - `PORT` - First listening port (default: `3000`, or `4000` when more than
//!   one worker is configured)
//! - `WORKERS` - Number of listeners, or `auto` for one less than the available
//!   CPU parallelism (default: `1`). Worker `i` listens on `PORT + i`; all
//!   workers share one store.
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::thread;

/// Port used when a single worker is configured and `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;
/// Port used in multi-worker mode when `PORT` is unset.
pub const DEFAULT_CLUSTER_PORT: u16 = 4000;
/// Upper bound on `WORKERS`.
pub const MAX_WORKERS: usize = 256;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `WORKERS` is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let workers = match env::var("WORKERS") {
            Ok(value) => parse_workers(&value)?,
            Err(_) => 1,
        };

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{value}'"))?,
            Err(_) => default_port(workers),
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            host,
            port,
            workers,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `workers` is 0 or greater than [`MAX_WORKERS`]
    /// - `port` is 0 or the worker port range exceeds 65535
    /// - `log_format` is not `text` or `json`
    /// - `host` is empty
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 || self.workers > MAX_WORKERS {
            anyhow::bail!(
                "WORKERS must be between 1 and {}, got {}",
                MAX_WORKERS,
                self.workers
            );
        }

        if self.port == 0 {
            anyhow::bail!("PORT must be greater than 0");
        }

        let last_port = u32::from(self.port) + self.workers as u32 - 1;
        if last_port > u32::from(u16::MAX) {
            anyhow::bail!(
                "PORT {} with {} workers exceeds the port range (last port would be {})",
                self.port,
                self.workers,
                last_port
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.host.trim().is_empty() {
            anyhow::bail!("HOST must not be empty");
        }

        Ok(())
    }

    /// Ports to listen on, one per worker: `port, port + 1, ...`.
    ///
    /// Call [`Config::validate`] first; ports past 65535 are skipped.
    pub fn worker_ports(&self) -> Vec<u16> {
        (0..self.workers)
            .filter_map(|i| u16::try_from(usize::from(self.port) + i).ok())
            .collect()
    }

    /// Returns whether more than one listener will be bound.
    pub fn is_multi_worker(&self) -> bool {
        self.workers > 1
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Host: {}", self.host);
        if self.is_multi_worker() {
            tracing::info!(
                "  Workers: {} (ports {}-{}, shared store)",
                self.workers,
                self.port,
                usize::from(self.port) + self.workers - 1
            );
        } else {
            tracing::info!("  Port: {}", self.port);
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Default port for the given worker count.
pub fn default_port(workers: usize) -> u16 {
    if workers > 1 {
        DEFAULT_CLUSTER_PORT
    } else {
        DEFAULT_PORT
    }
}

/// Parses `WORKERS`: a positive number, or `auto`.
///
/// `auto` resolves to available parallelism minus one (at least 1), leaving a
/// core for the rest of the process.
fn parse_workers(value: &str) -> Result<usize> {
    if value.eq_ignore_ascii_case("auto") {
        let cpus = thread::available_parallelism().map_or(1, |n| n.get());
        return Ok(cpus.saturating_sub(1).max(1));
    }

    value
        .parse()
        .with_context(|| format!("WORKERS must be a number or 'auto', got '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_config() -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 3000,
            workers: 1,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    fn clear_env() {
        // SAFETY: Tests touching the environment run serially via #[serial]
        unsafe {
            env::remove_var("HOST");
            env::remove_var("PORT");
            env::remove_var("WORKERS");
            env::remove_var("LOG_FORMAT");
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = test_config();
        assert!(config.validate().is_ok());

        config.workers = 0;
        assert!(config.validate().is_err());

        config.workers = MAX_WORKERS + 1;
        assert!(config.validate().is_err());

        config.workers = 4;
        assert!(config.validate().is_ok());

        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.host = "  ".to_string();
        assert!(config.validate().is_err());

        config.host = "localhost".to_string();
        config.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_port_range_overflow_rejected() {
        let mut config = test_config();
        config.port = 65534;
        config.workers = 2;
        assert!(config.validate().is_ok());

        config.workers = 3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_worker_ports_are_successive() {
        let mut config = test_config();
        config.port = 4000;
        config.workers = 3;

        assert_eq!(config.worker_ports(), vec![4000, 4001, 4002]);
        assert!(config.is_multi_worker());
    }

    #[test]
    fn test_parse_workers() {
        assert_eq!(parse_workers("3").unwrap(), 3);
        assert!(parse_workers("auto").unwrap() >= 1);
        assert!(parse_workers("AUTO").unwrap() >= 1);
        assert!(parse_workers("many").is_err());
        assert!(parse_workers("-1").is_err());
    }

    #[test]
    #[serial]
    fn test_defaults_single_worker() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.workers, 1);
        assert_eq!(config.log_format, "text");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_multi_worker_default_port() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial]
        unsafe {
            env::set_var("WORKERS", "4");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.workers, 4);
        assert_eq!(config.port, DEFAULT_CLUSTER_PORT);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_explicit_port_wins() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial]
        unsafe {
            env::set_var("WORKERS", "2");
            env::set_var("PORT", "8080");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.worker_ports(), vec![8080, 8081]);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_error() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial]
        unsafe {
            env::set_var("PORT", "not-a-port");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }
}
