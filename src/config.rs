//! Runtime configuration, read from the environment once at startup.
//!
//! | Variable | Default |
//! |---|---|
//! | `WMATA_API_KEY` | required |
//! | `INCIDENTS_URL` | [`DEFAULT_INCIDENTS_URL`] |
//! | `BIND_ADDR` | `127.0.0.1:5000` |
//! | `LOG_LEVEL` | `info` (ignored when `RUST_LOG` is set) |
//! | `LOG_FORMAT` | `pretty` (or `json`) |

use std::net::SocketAddr;
use std::str::FromStr;

use crate::error::Error;

/// The WMATA elevator/escalator incidents feed.
pub const DEFAULT_INCIDENTS_URL: &str =
    "https://api.wmata.com/Incidents.svc/json/ElevatorIncidents";

const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 5000);

/// Log output format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(Error::config("LOG_FORMAT", format!("expected `pretty` or `json`, got `{other}`"))),
        }
    }
}

/// Proxy configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Credential sent upstream in the `api_key` header.
    pub api_key: String,
    /// Upstream incidents endpoint.
    pub incidents_url: http::Uri,
    /// Listen address for the inbound server.
    pub bind_addr: SocketAddr,
    /// Fallback `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Defaults for everything except the credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            incidents_url: http::Uri::from_static(DEFAULT_INCIDENTS_URL),
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
            log_level: "info".to_owned(),
            log_format: LogFormat::default(),
        }
    }

    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let api_key = get("WMATA_API_KEY")
            .ok_or_else(|| Error::config("WMATA_API_KEY", "must be set"))?;
        let mut config = Self::new(api_key);

        if let Some(url) = get("INCIDENTS_URL") {
            config.incidents_url = url
                .parse()
                .map_err(|e| Error::config("INCIDENTS_URL", format!("{e}")))?;
        }
        if let Some(addr) = get("BIND_ADDR") {
            config.bind_addr = addr
                .parse()
                .map_err(|e| Error::config("BIND_ADDR", format!("{e}")))?;
        }
        if let Some(level) = get("LOG_LEVEL") {
            config.log_level = level;
        }
        if let Some(format) = get("LOG_FORMAT") {
            config.log_format = format.parse()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, Error> {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|var| env.get(var).cloned())
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = load(&[("WMATA_API_KEY", "k")]).unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.incidents_url, DEFAULT_INCIDENTS_URL);
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:5000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn missing_or_blank_key_is_rejected() {
        assert!(matches!(load(&[]), Err(Error::Config { var: "WMATA_API_KEY", .. })));
        assert!(matches!(
            load(&[("WMATA_API_KEY", "  ")]),
            Err(Error::Config { var: "WMATA_API_KEY", .. })
        ));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = load(&[
            ("WMATA_API_KEY", "k"),
            ("INCIDENTS_URL", "http://127.0.0.1:9000/feed"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("LOG_LEVEL", "debug"),
            ("LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.incidents_url, "http://127.0.0.1:9000/feed");
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn bad_values_name_their_variable() {
        let bad_addr = load(&[("WMATA_API_KEY", "k"), ("BIND_ADDR", "localhost")]);
        assert!(matches!(bad_addr, Err(Error::Config { var: "BIND_ADDR", .. })));

        let bad_url = load(&[("WMATA_API_KEY", "k"), ("INCIDENTS_URL", "http://exa mple")]);
        assert!(matches!(bad_url, Err(Error::Config { var: "INCIDENTS_URL", .. })));

        let bad_format = load(&[("WMATA_API_KEY", "k"), ("LOG_FORMAT", "xml")]);
        assert!(matches!(bad_format, Err(Error::Config { var: "LOG_FORMAT", .. })));
    }
}
