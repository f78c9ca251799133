use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Root directory holding one subdirectory of daily CSV logs per machine.
    pub dataset_dir: String,
    /// SQLite database with one sales table per machine.
    pub sales_db: String,
    #[serde(default = "default_machines")]
    pub machines: Vec<String>,
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,
    #[serde(default = "default_base_work_hours")]
    pub base_work_hours: f64,
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
}

fn default_machines() -> Vec<String> {
    [
        "M1-1", "M1-2", "M1-3", "M1-4", "M1-6", "M1-7", "M2-3", "LAB_M1-1", "LAB_M1-3",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_start_hour() -> u32 {
    crate::core::daily::DEFAULT_START_HOUR
}

fn default_base_work_hours() -> f64 {
    crate::core::daily::DEFAULT_BASE_WORK_HOURS
}

fn default_cache_ttl() -> u64 {
    3600
}

impl Default for Config {
    fn default() -> Self {
        let dataset = Self::config_dir().join("dataset");
        Self {
            dataset_dir: dataset.to_string_lossy().to_string(),
            sales_db: dataset.join("sales.db").to_string_lossy().to_string(),
            machines: default_machines(),
            start_hour: default_start_hour(),
            base_work_hours: default_base_work_hours(),
            cache_ttl_secs: default_cache_ttl(),
        }
    }
}

impl Config {
    /// Standard configuration directory for the current platform.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".machlog")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("machlog.conf")
    }

    /// Load configuration: an explicit `--config` path must exist and parse;
    /// otherwise the standard file is used when present, defaults if not.
    pub fn load(override_path: Option<&str>) -> AppResult<Self> {
        let path = match override_path {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
        } else if override_path.is_some() {
            Err(AppError::Config(format!(
                "config file not found: {}",
                path.display()
            )))
        } else {
            Ok(Config::default())
        }
    }

    /// Create the config directory, default config file, and dataset dir.
    pub fn init_all() -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;

        let config = Config::default();
        fs::create_dir_all(&config.dataset_dir)?;

        let path = Self::config_file();
        if !path.exists() {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(&path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(path)
    }
}
