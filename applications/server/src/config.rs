/// Server configuration
use crate::error::{Result, ServerError};
use airwave_catalog::CatalogConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_catalog")]
    pub catalog: CatalogSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_url")]
    pub base_url: String,

    #[serde(default)]
    pub client_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_catalog() -> CatalogSettings {
    CatalogSettings {
        base_url: default_catalog_url(),
        client_id: None,
    }
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_catalog_url() -> String {
    "https://api.soundcloud.com".to_string()
}

fn default_database_url() -> String {
    "sqlite://airwave.db".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            catalog: default_catalog(),
            storage: default_storage(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// Settings come from the TOML file (when present) with
    /// `AIRWAVE_`-prefixed environment variables layered on top.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        let path = config_path.unwrap_or_else(|| Path::new("config.toml"));
        if path.exists() {
            settings = settings.add_source(config::File::from(path));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("AIRWAVE")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.catalog.base_url.is_empty() {
            return Err(ServerError::Config(
                "catalog.base_url must not be empty".to_string(),
            ));
        }
        if self.storage.database_url.is_empty() {
            return Err(ServerError::Config(
                "storage.database_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Catalog client configuration derived from the settings
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            base_url: self.catalog.base_url.clone(),
            client_id: self.catalog.client_id.clone(),
        }
    }
}
