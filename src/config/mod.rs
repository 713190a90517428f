//! Display preferences persisted as JSON under the application directory.

use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::ConfigError;
use crate::render::RenderOptions;

const DEFAULT_DIR_NAME: &str = ".dynamic_form";
const HOME_ENV: &str = "DYNAMIC_FORM_HOME";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

pub const PROGRESS_WIDTH_RANGE: (usize, usize) = (5, 100);
pub const COLUMN_WIDTH_RANGE: (usize, usize) = (4, 120);

/// Keys accepted by [`Config::set`], in display order.
pub const CONFIG_KEYS: &[&str] = &[
    "plain_mode",
    "screen_reader_mode",
    "quiet_mode",
    "progress_width",
    "max_column_width",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub plain_mode: bool,
    pub screen_reader_mode: bool,
    pub quiet_mode: bool,
    pub progress_width: usize,
    pub max_column_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            plain_mode: false,
            screen_reader_mode: false,
            quiet_mode: false,
            progress_width: 20,
            max_column_width: 24,
        }
    }
}

impl Config {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            plain: self.plain_mode || self.screen_reader_mode,
            progress_width: self.progress_width,
            max_column_width: self.max_column_width,
        }
    }

    /// `(key, value)` pairs for display.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("plain_mode", self.plain_mode.to_string()),
            ("screen_reader_mode", self.screen_reader_mode.to_string()),
            ("quiet_mode", self.quiet_mode.to_string()),
            ("progress_width", self.progress_width.to_string()),
            ("max_column_width", self.max_column_width.to_string()),
        ]
    }

    /// Parses `value` and assigns it to `key`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "plain_mode" => self.plain_mode = parse_bool(key, value)?,
            "screen_reader_mode" => self.screen_reader_mode = parse_bool(key, value)?,
            "quiet_mode" => self.quiet_mode = parse_bool(key, value)?,
            "progress_width" => {
                self.progress_width = parse_bounded(key, value, PROGRESS_WIDTH_RANGE)?
            }
            "max_column_width" => {
                self.max_column_width = parse_bounded(key, value, COLUMN_WIDTH_RANGE)?
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// Pulls numeric settings back into range after loading a hand-edited file.
    fn clamped(mut self) -> Self {
        self.progress_width = self
            .progress_width
            .clamp(PROGRESS_WIDTH_RANGE.0, PROGRESS_WIDTH_RANGE.1);
        self.max_column_width = self
            .max_column_width
            .clamp(COLUMN_WIDTH_RANGE.0, COLUMN_WIDTH_RANGE.1);
        self
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "on" | "1" => Ok(true),
        "n" | "no" | "false" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "expected true/false, yes/no, on/off, or 1/0".into(),
        }),
    }
}

fn parse_bounded(key: &str, value: &str, (min, max): (usize, usize)) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|parsed| (min..=max).contains(parsed))
        .ok_or_else(|| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a whole number between {min} and {max}"),
        })
}

/// Returns the application directory, defaulting to `~/.dynamic_form`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Loads and saves [`Config`] at a fixed path.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            path: base.into().join(CONFIG_FILE),
        }
    }

    /// Reads the stored configuration; a missing file yields defaults.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        Ok(config.clamped())
    }

    /// Writes atomically by staging to a temporary file.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
