//! Server configuration from the environment.

use std::net::SocketAddr;
use std::time::Duration;

use crate::planner::SearchConfig;
use crate::web::DEFAULT_MAX_UPLOAD_BYTES;

/// Address to listen on.
pub const ADDR_VAR: &str = "FARE_SERVER_ADDR";

/// Per-search deadline in milliseconds; `0` disables it.
pub const TIMEOUT_VAR: &str = "FARE_SEARCH_TIMEOUT_MS";

/// Maximum cities a search may settle; unset means no cap.
pub const MAX_SETTLED_VAR: &str = "FARE_SEARCH_MAX_SETTLED";

/// Largest accepted `PUT /flights` body in bytes.
pub const MAX_UPLOAD_VAR: &str = "FARE_MAX_UPLOAD_BYTES";

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}={value:?}: {reason}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: String,
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub search: SearchConfig,
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value if set.
    ///
    /// Unset variables fall back to defaults: listen on `127.0.0.1:3000`,
    /// a 2 second search deadline, no settled-city cap and a 64 MiB upload
    /// limit.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = match lookup(ADDR_VAR) {
            Some(value) => parse_var(ADDR_VAR, value)?,
            None => DEFAULT_ADDR.parse().map_err(|e| ConfigError {
                var: ADDR_VAR,
                value: DEFAULT_ADDR.to_string(),
                reason: format!("{e}"),
            })?,
        };

        let mut search = SearchConfig::default();

        if let Some(value) = lookup(TIMEOUT_VAR) {
            let millis: u64 = parse_var(TIMEOUT_VAR, value)?;
            search.timeout = (millis > 0).then(|| Duration::from_millis(millis));
        }

        if let Some(value) = lookup(MAX_SETTLED_VAR) {
            search.max_settled = Some(parse_var(MAX_SETTLED_VAR, value)?);
        }

        let max_upload_bytes = match lookup(MAX_UPLOAD_VAR) {
            Some(value) => {
                let bytes: usize = parse_var(MAX_UPLOAD_VAR, value.clone())?;
                if bytes == 0 {
                    return Err(ConfigError {
                        var: MAX_UPLOAD_VAR,
                        value,
                        reason: "must be greater than zero".to_string(),
                    });
                }
                bytes
            }
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            addr,
            search,
            max_upload_bytes,
        })
    }
}

fn parse_var<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| ConfigError {
        var,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.search, SearchConfig::default());
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn custom_values() {
        let config = config_from(&[
            (ADDR_VAR, "0.0.0.0:8080"),
            (TIMEOUT_VAR, "250"),
            (MAX_SETTLED_VAR, " 10000 "),
            (MAX_UPLOAD_VAR, "1048576"),
        ])
        .unwrap();

        assert_eq!(config.addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.search.timeout, Some(Duration::from_millis(250)));
        assert_eq!(config.search.max_settled, Some(10_000));
        assert_eq!(config.max_upload_bytes, 1_048_576);
    }

    #[test]
    fn zero_timeout_disables_deadline() {
        let config = config_from(&[(TIMEOUT_VAR, "0")]).unwrap();
        assert_eq!(config.search.timeout, None);
    }

    #[test]
    fn invalid_values_rejected() {
        let err = config_from(&[(ADDR_VAR, "not an address")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid FARE_SERVER_ADDR=\"not an address\""));

        let err = config_from(&[(TIMEOUT_VAR, "-5")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid FARE_SEARCH_TIMEOUT_MS"));

        assert!(config_from(&[(MAX_SETTLED_VAR, "lots")]).is_err());

        let err = config_from(&[(MAX_UPLOAD_VAR, "0")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid FARE_MAX_UPLOAD_BYTES=\"0\": must be greater than zero"
        );
    }
}
