use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection settings for the device table's database.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StoreConfig {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Keep at 1 for `sqlite::memory:`, every pooled connection opens its own
    /// in-memory database.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
    /// Create the DEVICE table on connect if it does not exist yet
    #[serde(default)]
    pub create_schema: bool,
}

fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}
fn default_max_connections() -> u32 {
    1
}
fn default_acquire_timeout_secs() -> u64 {
    30
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
            create_schema: false,
        }
    }
}

impl StoreConfig {
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            .set_default("database_url", default_database_url())?
            .set_default("max_connections", default_max_connections() as i64)?
            .set_default("acquire_timeout_secs", default_acquire_timeout_secs() as i64)?
            .set_default("create_schema", false)?
            // Shared settings, e.g. config/default.toml
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            // Per-environment overrides, e.g. config/production.toml
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            // Environment variables (e.g. DEVICE_STORE__DATABASE_URL=sqlite://devices.db)
            .add_source(Environment::with_prefix("DEVICE_STORE").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir() -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("device-store-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_defaults_without_config_files() {
        let dir = scratch_dir();

        let config = StoreConfig::load(dir.to_str().unwrap()).unwrap();

        assert_eq!(config.max_connections, 1);
        assert_eq!(config.acquire_timeout(), Duration::from_secs(30));
        assert!(!config.create_schema);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_default_file_overrides_defaults() {
        let dir = scratch_dir();
        fs::write(
            dir.join("default.toml"),
            r#"
database_url = "sqlite://devices.db?mode=rwc"
max_connections = 4
create_schema = true
"#,
        )
        .unwrap();

        let config = StoreConfig::load(dir.to_str().unwrap()).unwrap();

        assert_eq!(config.database_url, "sqlite://devices.db?mode=rwc");
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.acquire_timeout_secs, 30);
        assert!(config.create_schema);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_struct_default_matches_loader_defaults() {
        let config = StoreConfig::default();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.max_connections, 1);
    }
}
