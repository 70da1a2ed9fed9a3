// src/config.rs
use http::HeaderValue;
use sqlx::postgres::PgConnectOptions;
use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3001";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub connect_options: PgConnectOptions,
    pub max_connections: u32,
    pub port: u16,
    pub cors_origin: HeaderValue,
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any variable source.
    ///
    /// `DATABASE_URL` wins when present; otherwise the connection is assembled
    /// from `DATABASE_USER`, `DATABASE_PASSWORD`, `DATABASE_HOST` and
    /// `DATABASE_DB`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let connect_options = match lookup("DATABASE_URL") {
            Some(url) => url
                .parse::<PgConnectOptions>()
                .map_err(|e| ConfigError::Invalid {
                    name: "DATABASE_URL",
                    reason: e.to_string(),
                })?,
            None => {
                let user = lookup("DATABASE_USER").ok_or(ConfigError::Missing("DATABASE_USER"))?;
                let password = lookup("DATABASE_PASSWORD").unwrap_or_default();
                let host = lookup("DATABASE_HOST").ok_or(ConfigError::Missing("DATABASE_HOST"))?;
                let database = lookup("DATABASE_DB").ok_or(ConfigError::Missing("DATABASE_DB"))?;
                let (host, port) = split_host_port(&host)?;

                PgConnectOptions::new()
                    .host(host)
                    .port(port)
                    .username(&user)
                    .password(&password)
                    .database(&database)
            }
        };

        let max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;

        let origin = lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());
        let cors_origin = HeaderValue::from_str(&origin).map_err(|e| ConfigError::Invalid {
            name: "CORS_ORIGIN",
            reason: e.to_string(),
        })?;

        Ok(Self {
            connect_options,
            max_connections,
            port,
            cors_origin,
        })
    }
}

fn split_host_port(host: &str) -> Result<(&str, u16), ConfigError> {
    match host.rsplit_once(':') {
        Some((name, port)) => {
            let port = port.parse().map_err(|_| ConfigError::Invalid {
                name: "DATABASE_HOST",
                reason: format!("bad port in {host:?}"),
            })?;
            Ok((name, port))
        }
        None => Ok((host, DEFAULT_DB_PORT)),
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            reason: format!("{v:?} is not a number"),
        }),
        None => Ok(default),
    }
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
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn assembles_connection_from_parts() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_USER", "polls"),
            ("DATABASE_PASSWORD", "secret"),
            ("DATABASE_HOST", "db.internal"),
            ("DATABASE_DB", "polls_db"),
        ]))
        .unwrap();

        assert_eq!(config.connect_options.get_host(), "db.internal");
        assert_eq!(config.connect_options.get_port(), 5432);
        assert_eq!(config.connect_options.get_database(), Some("polls_db"));
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.cors_origin, "http://localhost:3001");
    }

    #[test]
    fn host_may_carry_a_port() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_USER", "polls"),
            ("DATABASE_HOST", "localhost:5433"),
            ("DATABASE_DB", "polls_db"),
        ]))
        .unwrap();

        assert_eq!(config.connect_options.get_host(), "localhost");
        assert_eq!(config.connect_options.get_port(), 5433);
    }

    #[test]
    fn database_url_takes_precedence() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://u:p@urlhost:6000/fromurl"),
            ("DATABASE_HOST", "ignored"),
            ("PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(config.connect_options.get_host(), "urlhost");
        assert_eq!(config.connect_options.get_port(), 6000);
        assert_eq!(config.connect_options.get_database(), Some("fromurl"));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn missing_credentials_are_reported() {
        let err = Config::from_lookup(lookup(&[("DATABASE_USER", "polls")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_HOST")));
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/polls"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }
}
