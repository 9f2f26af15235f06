//! Server configuration from the environment.
//!
//! | Variable | Fallback | Default |
//! |----------|----------|---------|
//! | `BUNNY_HOST` | `HOST` | `0.0.0.0` |
//! | `BUNNY_PORT` | `PORT` | `8000` |
//! | `BUNNY_DECAY_GRACE_SECS` | | `10` |

use std::env;

use bunny_logic::config::{BunnyConfig, DEFAULT_GRACE_SECONDS};

use tokio::net::TcpListener;

use crate::error::ServerError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub decay_grace_seconds: f64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            decay_grace_seconds: DEFAULT_GRACE_SECONDS,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("BUNNY_HOST")
            .or_else(|| lookup("HOST"))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = lookup("BUNNY_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|raw| parse_or_warn("port", &raw))
            .unwrap_or(DEFAULT_PORT);

        let decay_grace_seconds = lookup("BUNNY_DECAY_GRACE_SECS")
            .and_then(|raw| parse_or_warn::<f64>("decay grace", &raw))
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
            .unwrap_or(DEFAULT_GRACE_SECONDS);

        Self {
            host,
            port,
            decay_grace_seconds,
        }
    }

    /// Bind the listener. `host` may be an IP literal or a resolvable name.
    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        TcpListener::bind((self.host.as_str(), self.port))
            .await
            .map_err(|source| ServerError::Bind {
                target: format!("{}:{}", self.host, self.port),
                source,
            })
    }

    pub fn bunny_config(&self) -> BunnyConfig {
        BunnyConfig::default().with_grace_seconds(self.decay_grace_seconds)
    }
}

fn parse_or_warn<T: std::str::FromStr>(what: &str, raw: &str) -> Option<T> {
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        tracing::warn!("Ignoring unparseable {} value {:?}", what, raw);
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_bunny_vars_win_over_generic() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("HOST", "10.0.0.1"),
            ("BUNNY_HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("BUNNY_PORT", "9100"),
        ]));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9100);
    }

    #[test]
    fn test_generic_fallback() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "3000")]));
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BUNNY_PORT", "eighty"),
            ("BUNNY_DECAY_GRACE_SECS", "-4"),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.decay_grace_seconds, DEFAULT_GRACE_SECONDS);
    }

    #[test]
    fn test_grace_override() {
        let config = ServerConfig::from_lookup(lookup(&[("BUNNY_DECAY_GRACE_SECS", "2.5")]));
        assert_eq!(config.bunny_config().decay_grace_seconds, 2.5);
    }

    #[tokio::test]
    async fn test_bind_resolves_hostname() {
        let config = ServerConfig::from_lookup(lookup(&[("HOST", "localhost"), ("PORT", "0")]));
        let listener = config.bind().await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_bind_unresolvable_host() {
        let config = ServerConfig {
            host: "not a host".into(),
            port: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.bind().await,
            Err(ServerError::Bind { .. })
        ));
    }
}
