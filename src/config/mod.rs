use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Application-level constants
pub const APP_NAME: &str = "caresync";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "CARESYNC_LOG";

/// Diagnostic log filter used when neither CARESYNC_LOG nor RUST_LOG is set.
pub fn default_log_filter() -> &'static str {
    "caresync=warn"
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_trend_unit")]
    pub trend_unit: String,
    #[serde(default = "default_trend_low")]
    pub trend_low: f64,
    #[serde(default = "default_trend_high")]
    pub trend_high: f64,
    /// Feature flag for the privacy banner above the timeline.
    #[serde(default = "default_trust_banner")]
    pub trust_banner: bool,
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_trend_unit() -> String {
    "mg/dL".to_string()
}
fn default_trend_low() -> f64 {
    125.0
}
fn default_trend_high() -> f64 {
    200.0
}
fn default_trust_banner() -> bool {
    true
}
fn default_share_base_url() -> String {
    "https://caresync.health/timeline".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            trend_unit: default_trend_unit(),
            trend_low: default_trend_low(),
            trend_high: default_trend_high(),
            trust_banner: default_trust_banner(),
            share_base_url: default_share_base_url(),
            separator_char: default_separator_char(),
        }
    }

    /// `~/.caresync`, or `%APPDATA%\caresync` on Windows.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_NAME)
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".caresync")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("caresync.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("caresync.sqlite")
    }

    /// A relative database path lives in the config directory.
    pub fn resolve_database(name: &str) -> PathBuf {
        let p = Path::new(name);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Load configuration from the default file, or defaults if it does not exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !(self.trend_low.is_finite() && self.trend_high.is_finite()) {
            return Err(AppError::Config("trend bounds must be finite numbers".into()));
        }
        if self.trend_low > self.trend_high {
            return Err(AppError::Config(format!(
                "trend_low ({}) is greater than trend_high ({})",
                self.trend_low, self.trend_high
            )));
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Create the config directory and, unless `is_test`, write the config file.
    /// Returns the configuration that was written.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => Self::resolve_database(name),
            None => Self::database_file(),
        };

        let config = Self::with_database(db_path);

        if !is_test {
            config.save_to(&Self::config_file())?;
        }

        Ok(config)
    }
}
