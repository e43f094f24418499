//! PostgreSQL connection settings.

use serde::{Deserialize, Serialize};

use super::PgError;

fn default_port() -> u16 {
    5432
}

/// Connection settings, either as a connection string or as individual fields.
///
/// When `connection_string` is present it wins over the individual fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostgresConfig {
    #[serde(default)]
    pub connection_string: Option<String>,

    #[serde(default)]
    pub host: Option<String>,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub user: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    #[serde(default)]
    pub database: Option<String>,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            connection_string: None,
            host: None,
            port: default_port(),
            user: None,
            password: None,
            database: None,
        }
    }
}

impl PostgresConfig {
    pub fn from_connection_string(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: Some(connection_string.into()),
            ..Default::default()
        }
    }

    /// Build a driver configuration.
    ///
    /// # Errors
    /// Returns an error if the connection string cannot be parsed or if
    /// neither a connection string nor a host is given.
    pub fn to_pg_config(&self) -> Result<postgres::Config, PgError> {
        if let Some(connection_string) = &self.connection_string {
            return Ok(connection_string.parse::<postgres::Config>()?);
        }

        let Some(host) = &self.host else {
            return Err(PgError::Config(
                "either connection_string or host must be set".to_string(),
            ));
        };

        let mut config = postgres::Config::new();
        config.host(host).port(self.port);
        if let Some(user) = &self.user {
            config.user(user);
        }
        if let Some(password) = &self.password {
            config.password(password);
        }
        if let Some(database) = &self.database {
            config.dbname(database);
        }
        Ok(config)
    }
}
