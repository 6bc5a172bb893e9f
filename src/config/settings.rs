use std::time::Duration;

const DEFAULT_DATABASE_PATH: &str = "tournament.db";

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub database_path: String,
    pub pool_max_size: u32,
    pub connection_timeout_secs: u64,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            pool_max_size: 4,
            connection_timeout_secs: 30,
        }
    }
}

impl StoreSettings {
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_secs)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            store: StoreSettings::default(),
        }
    }

    /// Defaults overridden by `DATABASE_PATH` and `DATABASE_POOL_SIZE`.
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(path) = std::env::var("DATABASE_PATH") {
            config.store.database_path = path;
        }

        if let Some(size) = std::env::var("DATABASE_POOL_SIZE")
            .ok()
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|size| *size > 0)
        {
            config.store.pool_max_size = size;
        }

        config
    }
}
