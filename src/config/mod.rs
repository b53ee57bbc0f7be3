use crate::errors::{AppError, AppResult};
use crate::utils::path::resolve_in;
use crate::utils::time::{generate_slots, parse_hhmm};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_names")]
    pub names: Vec<String>,
    #[serde(default = "default_day_start")]
    pub day_start: String,
    #[serde(default = "default_day_end")]
    pub day_end: String,
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: u32,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_names() -> Vec<String> {
    vec!["Venus".to_string(), "Jupiter".to_string()]
}
fn default_day_start() -> String {
    "08:00".to_string()
}
fn default_day_end() -> String {
    "17:00".to_string()
}
fn default_slot_minutes() -> u32 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            names: default_names(),
            day_start: default_day_start(),
            day_end: default_day_end(),
            slot_minutes: default_slot_minutes(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtracklog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtracklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtracklog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtracklog.sqlite")
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Prepare the config file and the database path for `init`.
    ///
    /// Returns the resolved database path. In test mode the config file is
    /// left untouched.
    pub fn init_all(
        config_path: &Path,
        custom_db: Option<&str>,
        is_test: bool,
    ) -> AppResult<(Config, PathBuf)> {
        let dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_dir);
        fs::create_dir_all(&dir)?;

        let mut cfg = Config::load(config_path)?;

        let db_path = match custom_db {
            Some(name) => resolve_in(&dir, name),
            None => resolve_in(&dir, &cfg.database),
        };
        cfg.database = db_path.to_string_lossy().to_string();

        if !is_test {
            cfg.save(config_path)?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok((cfg, db_path))
    }

    pub fn window(&self) -> AppResult<(NaiveTime, NaiveTime)> {
        let start = parse_hhmm(&self.day_start)
            .ok_or_else(|| AppError::Config(format!("invalid day_start '{}'", self.day_start)))?;
        let end = parse_hhmm(&self.day_end)
            .ok_or_else(|| AppError::Config(format!("invalid day_end '{}'", self.day_end)))?;
        Ok((start, end))
    }

    /// The valid time-of-day slots derived from the configured window.
    pub fn slots(&self) -> AppResult<Vec<NaiveTime>> {
        let (start, end) = self.window()?;
        if self.slot_minutes == 0 || self.slot_minutes > 60 {
            return Err(AppError::Config(format!(
                "slot_minutes must be between 1 and 60, got {}",
                self.slot_minutes
            )));
        }
        Ok(generate_slots(start, end, self.slot_minutes))
    }

    /// List every problem found in the configuration; empty means valid.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.names.is_empty() {
            problems.push("names: at least one person name is required".to_string());
        }

        let mut seen = HashSet::new();
        for n in &self.names {
            if n.trim().is_empty() {
                problems.push("names: empty name".to_string());
            } else if !seen.insert(n.trim()) {
                problems.push(format!("names: duplicate name '{}'", n));
            }
        }

        match self.window() {
            Ok((start, end)) if start > end => problems.push(format!(
                "day_start {} is after day_end {}",
                self.day_start, self.day_end
            )),
            Ok(_) => {}
            Err(e) => problems.push(e.to_string()),
        }

        if self.slot_minutes == 0 || self.slot_minutes > 60 {
            problems.push(format!(
                "slot_minutes must be between 1 and 60, got {}",
                self.slot_minutes
            ));
        }

        if self.database.trim().is_empty() {
            problems.push("database: path is empty".to_string());
        }

        problems
    }
}
