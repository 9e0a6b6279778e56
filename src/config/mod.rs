use crate::core::reminder::{DEFAULT_LEAD_MINUTES, MAX_LEAD_MINUTES};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_lead_minutes")]
    pub reminder_lead_minutes: i64,
    #[serde(default = "default_refresh_secs")]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_lead_minutes() -> i64 {
    DEFAULT_LEAD_MINUTES
}
fn default_refresh_secs() -> u64 {
    30
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            reminder_lead_minutes: default_lead_minutes(),
            refresh_interval_secs: default_refresh_secs(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.smartcal`, or `./.smartcal`
    /// when no home directory can be resolved).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".smartcal")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("smartcal.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("smartcal.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()
    }

    /// Reject values the scheduler cannot work with.
    fn validate(self) -> AppResult<Self> {
        if !(1..=MAX_LEAD_MINUTES).contains(&self.reminder_lead_minutes) {
            return Err(AppError::Config(format!(
                "reminder_lead_minutes must be between 1 and {}, got {}",
                MAX_LEAD_MINUTES, self.reminder_lead_minutes
            )));
        }
        Ok(self)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Create the config directory, write the config file (unless it
    /// already exists or `is_test` is set) and return the resolved
    /// database path.
    ///
    /// A relative `custom_db` is placed inside the config directory.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if is_test {
            return Ok(db_path);
        }

        fs::create_dir_all(&dir)?;
        let conf_path = Self::config_file();
        if !conf_path.exists() {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(&conf_path).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
        }

        Ok(db_path)
    }
}
