//! Connection settings for [`Client`](crate::client::Client).

use serde::Deserialize;

use neomap_core::MapError;

const ENV_URI: &str = "NEO4J_URI";
const ENV_USER: &str = "NEO4J_USER";
const ENV_PASSWORD: &str = "NEO4J_PASSWORD";
const ENV_DATABASE: &str = "NEO4J_DATABASE";

/// Where and how to connect.
///
/// Deserializable, so it can sit inside any serde-based application
/// config:
///
/// ```toml
/// uri = "bolt://localhost:7687"
/// user = "neo4j"
/// password = "password"
/// max_connections = 8
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub fetch_size: Option<usize>,
    #[serde(default)]
    pub max_connections: Option<usize>,
}

impl ClientConfig {
    pub fn new(uri: impl Into<String>, user: impl Into<String>, password: impl Into<String>) -> Self {
        ClientConfig {
            uri: uri.into(),
            user: user.into(),
            password: password.into(),
            database: None,
            fetch_size: None,
            max_connections: None,
        }
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    pub fn fetch_size(mut self, fetch_size: usize) -> Self {
        self.fetch_size = Some(fetch_size);
        self
    }

    pub fn max_connections(mut self, max_connections: usize) -> Self {
        self.max_connections = Some(max_connections);
        self
    }

    /// Read `NEO4J_URI`, `NEO4J_USER`, `NEO4J_PASSWORD` and the optional
    /// `NEO4J_DATABASE` from the environment.
    pub fn from_env() -> Result<Self, MapError> {
        let required = |key: &str| {
            std::env::var(key).map_err(|_| MapError::Config(format!("{key} is not set")))
        };
        let mut config = ClientConfig::new(required(ENV_URI)?, required(ENV_USER)?, required(ENV_PASSWORD)?);
        config.database = std::env::var(ENV_DATABASE).ok();
        Ok(config)
    }

    /// Translate into a driver configuration.
    pub fn to_neo4rs(&self) -> Result<neo4rs::Config, MapError> {
        let mut builder = neo4rs::ConfigBuilder::default()
            .uri(self.uri.as_str())
            .user(self.user.as_str())
            .password(self.password.as_str());
        if let Some(db) = &self.database {
            builder = builder.db(db.as_str());
        }
        if let Some(n) = self.fetch_size {
            builder = builder.fetch_size(n);
        }
        if let Some(n) = self.max_connections {
            builder = builder.max_connections(n);
        }
        Ok(builder.build()?)
    }
}
