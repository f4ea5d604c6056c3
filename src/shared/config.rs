use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub sync: SyncConfig,
    pub archive: ArchiveConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    pub sync_on_focus: bool,
    pub max_retry: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    pub free_window_days: u32,
    pub page_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite:data/karuta.db".to_string(),
                max_connections: 5,
                connection_timeout: 30,
            },
            sync: SyncConfig {
                sync_on_focus: true,
                max_retry: 3,
            },
            archive: ArchiveConfig {
                free_window_days: 7,
                page_size: 20,
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        // 既定値
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("KARUTA_DATABASE_URL") {
            if !v.trim().is_empty() {
                cfg.database.url = v.trim().to_string();
            }
        }
        if let Ok(v) = std::env::var("KARUTA_DB_MAX_CONNECTIONS") {
            if let Some(value) = parse_u32(&v) {
                cfg.database.max_connections = value;
            }
        }
        if let Ok(v) = std::env::var("KARUTA_SYNC_ON_FOCUS") {
            cfg.sync.sync_on_focus = parse_bool(&v, cfg.sync.sync_on_focus);
        }
        if let Ok(v) = std::env::var("KARUTA_SYNC_MAX_RETRY") {
            if let Some(value) = parse_u32(&v) {
                cfg.sync.max_retry = value;
            }
        }
        if let Ok(v) = std::env::var("KARUTA_FREE_WINDOW_DAYS") {
            if let Some(value) = parse_u32(&v) {
                cfg.archive.free_window_days = value;
            }
        }
        if let Ok(v) = std::env::var("KARUTA_PAGE_SIZE") {
            if let Some(value) = parse_u32(&v) {
                cfg.archive.page_size = value;
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections == 0 {
            return Err("Database max_connections must be greater than 0".to_string());
        }
        if self.archive.free_window_days == 0 {
            return Err("Archive free_window_days must be greater than 0".to_string());
        }
        if self.archive.page_size == 0 {
            return Err("Archive page_size must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn parse_bool(s: &str, default: bool) -> bool {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

fn parse_u32(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}
