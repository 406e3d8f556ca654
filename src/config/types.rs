//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_L402_HEADER_KEY, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Where and how the controller builds lookup URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// Base lookup endpoint (without query string)
    pub endpoint: String,
    /// API key sent as the `apiKey` query parameter
    pub api_key: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use ip_geolocation::Config;
///
/// let config = Config {
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint and API key
    pub lookup: LookupConfig,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Scheme name used in the `Authorization` header after paying an invoice
    pub header_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lookup: LookupConfig::default(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            header_key: DEFAULT_L402_HEADER_KEY.to_string(),
        }
    }
}

/// Command-line options for the `ip_geolocation` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "ip_geolocation", version, about)]
pub struct Opt {
    /// IPv4 address to look up (dotted-quad)
    pub ip: String,

    /// API key for the lookup service
    #[arg(long, env = API_KEY_ENV, default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Lookup endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Authorization scheme name sent with the proof of payment
    #[arg(long, default_value = DEFAULT_L402_HEADER_KEY)]
    pub header_key: String,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            lookup: LookupConfig {
                endpoint: opt.endpoint,
                api_key: opt.api_key,
            },
            log_level: opt.log_level,
            log_format: opt.log_format,
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent,
            header_key: opt.header_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(log::LevelFilter::from(LogLevel::Warn), log::LevelFilter::Warn);
        assert_eq!(log::LevelFilter::from(LogLevel::Info), log::LevelFilter::Info);
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.lookup.endpoint, DEFAULT_ENDPOINT);
        assert!(config.lookup.api_key.is_empty());
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.header_key, "L402");
        assert!(matches!(config.log_format, LogFormat::Plain));
    }

    #[test]
    fn test_opt_into_config() {
        let opt = Opt::try_parse_from([
            "ip_geolocation",
            "8.8.8.8",
            "--api-key",
            "secret",
            "--endpoint",
            "http://localhost:9000/ipgeo",
            "--timeout-seconds",
            "3",
            "--log-format",
            "json",
        ])
        .expect("options should parse");
        assert_eq!(opt.ip, "8.8.8.8");

        let config = Config::from(opt);
        assert_eq!(config.lookup.api_key, "secret");
        assert_eq!(config.lookup.endpoint, "http://localhost:9000/ipgeo");
        assert_eq!(config.timeout_seconds, 3);
        assert!(matches!(config.log_format, LogFormat::Json));
    }

    #[test]
    fn test_opt_requires_ip() {
        let result = Opt::try_parse_from(["ip_geolocation"]);
        assert!(result.is_err(), "IP argument is mandatory");
    }
}
