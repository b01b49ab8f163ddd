use sqlx::postgres::PgConnectOptions;

use crate::error::ConfigError;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DatabaseConfig {
    pub user: Option<String>,
    pub host: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub port: Option<u16>
}

impl DatabaseConfig {

    // anything left unset falls back to the PG* variables and the libpq defaults
    pub fn connect_options(&self) -> PgConnectOptions {

        let mut options = PgConnectOptions::new();

        if let Some(host) = &self.host {
            options = options.host(host);
        }
        if let Some(port) = self.port {
            options = options.port(port);
        }
        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        if let Some(name) = &self.name {
            options = options.database(name);
        }

        options

    }

}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub database: DatabaseConfig
}

impl Config {

    pub fn from_env() -> Result<Self, ConfigError> {

        Self::from_lookup(|key| std::env::var(key).ok())

    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>
    {

        // empty values count as unset, same as a blank line in .env
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(value) => parse_port("PORT", &value)?,
            None => DEFAULT_PORT
        };

        let db_port = var("DB_PORT")
            .map(|value| parse_port("DB_PORT", &value))
            .transpose()?;

        Ok(Config {
            port,
            database: DatabaseConfig {
                user: var("DB_USER"),
                host: var("DB_HOST"),
                name: var("DB_NAME"),
                password: var("DB_PASSWORD"),
                port: db_port
            }
        })

    }

}

fn parse_port(var: &'static str, value: &str) -> Result<u16, ConfigError> {

    value.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPort { var, value: value.to_string() })

}
