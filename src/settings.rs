use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment};
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    pub pool_size: usize,
}

impl DatabaseSettings {
    /// Connection string with the password masked, for log lines.
    pub fn redacted(&self) -> String {
        format!("{}@{}:{}/{}", self.user, self.host, self.port, self.name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn address(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
}

impl Settings {
    /// Defaults overridden by `DB_*` and `SERVER_*` environment variables.
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn load() -> Result<Self, ConfigError> {
        let database = Self::database_defaults()?
            .add_source(Environment::with_prefix("DB").try_parsing(true))
            .build()?
            .try_deserialize()?;

        let server = Self::server_defaults()?
            .add_source(Environment::with_prefix("SERVER").try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(Settings { database, server })
    }

    pub fn database_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("host", "localhost")?
            .set_default("port", 5432)?
            .set_default("name", "signlearn_db")?
            .set_default("user", "signlearn_user")?
            .set_default("password", "")?
            .set_default("pool_size", 16)
    }

    pub fn server_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3000)
    }
}
