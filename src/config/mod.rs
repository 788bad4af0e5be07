use std::env;

use crate::errors::ConfigError;

const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_DB_PORT: u16 = 3306;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Process configuration, built once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_max_connections: u32,
    /// Full connection URL. Takes precedence over the `db_*` parts.
    pub database_url: Option<String>,
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        // The DB_* parts are only mandatory when no full URL was given.
        let required = |key: &'static str| -> Result<String, ConfigError> {
            match lookup(key) {
                Some(value) => Ok(value),
                None if database_url.is_some() => Ok(String::new()),
                None => Err(ConfigError::Missing(key)),
            }
        };

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_or(&lookup, "SERVER_PORT", DEFAULT_SERVER_PORT)?,
            db_user: required("DB_USER")?,
            db_password: lookup("DB_PASSWORD").unwrap_or_default(),
            db_host: required("DB_HOST")?,
            db_port: parse_or(&lookup, "DB_PORT", DEFAULT_DB_PORT)?,
            db_name: required("DB_NAME")?,
            db_max_connections: parse_or(
                &lookup,
                "DB_MAX_CONNECTIONS",
                DEFAULT_DB_MAX_CONNECTIONS,
            )?,
            database_url,
        })
    }

    /// Connection URL for the user store.
    pub fn database_url(&self) -> String {
        if let Some(url) = &self.database_url {
            return url.clone();
        }

        format!(
            "mysql://{}:{}@{}:{}/{}",
            urlencoding::encode(&self.db_user),
            urlencoding::encode(&self.db_password),
            self.db_host,
            self.db_port,
            self.db_name
        )
    }

    /// The effective database target without credentials or query options,
    /// for log lines.
    pub fn database_target(&self) -> String {
        let url = self.database_url();
        let (scheme, rest) = match url.split_once("://") {
            Some((scheme, rest)) => (Some(scheme), rest),
            None => (None, url.as_str()),
        };
        let rest = rest.split_once('?').map_or(rest, |(target, _)| target);
        let target = rest.rsplit_once('@').map_or(rest, |(_, target)| target);

        match scheme {
            Some(scheme) => format!("{}://{}", scheme, target),
            None => target.to_string(),
        }
    }

    /// Address the HTTP server binds to.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}
