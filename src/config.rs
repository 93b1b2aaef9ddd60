//! Configuration management
//!
//! Thresholds for every filter, the HTTP adapter address and bulk limits.
//! Config is TOML, looked up in order:
//!
//! 1. an explicit path (`--config`), which must exist
//! 2. `./nonsense.toml`
//! 3. `~/.config/nonsense/config.toml` (XDG standard)
//!
//! and falls back to the defaults when none is found.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::filters::{
    CharacterRepetitionFilter, DominantCharacterFilter, DominantWordFilter, Filter,
    PurePunctuationFilter, TrigramFilter, WordLengthFilter, WordRepetitionFilter,
};
use crate::core::services::Classifier;

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "nonsense.toml";

/// Errors that can occur when loading or saving config
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Config could not be rendered as TOML
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Config file could not be written
    #[error("failed to write config {}: {source}", .path.display())]
    Write {
        /// File that was written
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// A value is out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Filter thresholds and enable flags
    #[serde(default)]
    pub filters: FilterConfig,
    /// HTTP adapter settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Batch limits
    #[serde(default)]
    pub bulk: BulkConfig,
}

/// Settings for the whole battery, one table per filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Trigram Filter
    pub trigram: TrigramSettings,
    /// Dominant Character Filter
    pub dominant_character: DominantCharacterSettings,
    /// Character Repetition Filter
    pub character_repetition: CharacterRepetitionSettings,
    /// Word to Character Ratio Filter
    pub word_length: WordLengthSettings,
    /// Dominant Word Filter
    pub dominant_word: DominantWordSettings,
    /// Word Repetition Filter
    pub word_repetition: WordRepetitionSettings,
    /// Pure Punctuation Filter
    pub pure_punctuation: PurePunctuationSettings,
}

/// Trigram Filter settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrigramSettings {
    /// Whether the filter runs
    pub enabled: bool,
    /// Fires when distinct/total trigrams falls below this (0..=1)
    pub min_unique_ratio: f64,
    /// Minimum number of trigrams before the ratio is trusted
    pub min_trigrams: usize,
}

impl Default for TrigramSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            min_unique_ratio: TrigramFilter::DEFAULT_MIN_UNIQUE_RATIO,
            min_trigrams: TrigramFilter::DEFAULT_MIN_TRIGRAMS,
        }
    }
}

/// Dominant Character Filter settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DominantCharacterSettings {
    /// Whether the filter runs
    pub enabled: bool,
    /// Fires when one character exceeds this share (0..=100)
    pub max_percentage: f64,
    /// Minimum number of non-whitespace characters
    pub min_chars: usize,
}

impl Default for DominantCharacterSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            max_percentage: DominantCharacterFilter::DEFAULT_MAX_PERCENTAGE,
            min_chars: DominantCharacterFilter::DEFAULT_MIN_CHARS,
        }
    }
}

/// Character Repetition Filter settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterRepetitionSettings {
    /// Whether the filter runs
    pub enabled: bool,
    /// Fires on runs longer than this
    pub max_run: usize,
}

impl Default for CharacterRepetitionSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            max_run: CharacterRepetitionFilter::DEFAULT_MAX_RUN,
        }
    }
}

/// Word to Character Ratio Filter settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordLengthSettings {
    /// Whether the filter runs
    pub enabled: bool,
    /// Fires when the average word length exceeds this
    pub max_average: f64,
}

impl Default for WordLengthSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            max_average: WordLengthFilter::DEFAULT_MAX_AVERAGE,
        }
    }
}

/// Dominant Word Filter settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DominantWordSettings {
    /// Whether the filter runs
    pub enabled: bool,
    /// Fires when one word exceeds this share (0..=100)
    pub max_percentage: f64,
    /// Minimum number of words
    pub min_words: usize,
}

impl Default for DominantWordSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            max_percentage: DominantWordFilter::DEFAULT_MAX_PERCENTAGE,
            min_words: DominantWordFilter::DEFAULT_MIN_WORDS,
        }
    }
}

/// Word Repetition Filter settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordRepetitionSettings {
    /// Whether the filter runs
    pub enabled: bool,
    /// Fires on runs longer than this
    pub max_run: usize,
}

impl Default for WordRepetitionSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            max_run: WordRepetitionFilter::DEFAULT_MAX_RUN,
        }
    }
}

/// Pure Punctuation Filter settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurePunctuationSettings {
    /// Whether the filter runs
    pub enabled: bool,
}

impl Default for PurePunctuationSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// One row of the battery overview (`nonsense filters`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterEntry {
    /// Filter name
    pub name: String,
    /// Whether the filter runs
    pub enabled: bool,
    /// Thresholds, as `key=value` pairs
    pub settings: String,
}

impl FilterConfig {
    /// Build a classifier from the enabled filters, in registration order
    #[must_use]
    pub fn build(&self) -> Classifier {
        let mut filters: Vec<Box<dyn Filter>> = Vec::with_capacity(7);

        if self.trigram.enabled {
            filters.push(Box::new(TrigramFilter::new(
                self.trigram.min_unique_ratio,
                self.trigram.min_trigrams,
            )));
        }
        if self.dominant_character.enabled {
            filters.push(Box::new(DominantCharacterFilter::new(
                self.dominant_character.max_percentage,
                self.dominant_character.min_chars,
            )));
        }
        if self.character_repetition.enabled {
            filters.push(Box::new(CharacterRepetitionFilter::new(
                self.character_repetition.max_run,
            )));
        }
        if self.word_length.enabled {
            filters.push(Box::new(WordLengthFilter::new(self.word_length.max_average)));
        }
        if self.dominant_word.enabled {
            filters.push(Box::new(DominantWordFilter::new(
                self.dominant_word.max_percentage,
                self.dominant_word.min_words,
            )));
        }
        if self.word_repetition.enabled {
            filters.push(Box::new(WordRepetitionFilter::new(self.word_repetition.max_run)));
        }
        if self.pure_punctuation.enabled {
            filters.push(Box::new(PurePunctuationFilter));
        }

        Classifier::new(filters)
    }

    /// Every filter with its enable flag and thresholds, in registration order
    #[must_use]
    pub fn entries(&self) -> Vec<FilterEntry> {
        let entry = |name: &str, enabled: bool, settings: String| FilterEntry {
            name: name.to_string(),
            enabled,
            settings,
        };

        vec![
            entry(
                TrigramFilter::NAME,
                self.trigram.enabled,
                format!(
                    "min_unique_ratio={}, min_trigrams={}",
                    self.trigram.min_unique_ratio, self.trigram.min_trigrams
                ),
            ),
            entry(
                DominantCharacterFilter::NAME,
                self.dominant_character.enabled,
                format!(
                    "max_percentage={}, min_chars={}",
                    self.dominant_character.max_percentage, self.dominant_character.min_chars
                ),
            ),
            entry(
                CharacterRepetitionFilter::NAME,
                self.character_repetition.enabled,
                format!("max_run={}", self.character_repetition.max_run),
            ),
            entry(
                WordLengthFilter::NAME,
                self.word_length.enabled,
                format!("max_average={}", self.word_length.max_average),
            ),
            entry(
                DominantWordFilter::NAME,
                self.dominant_word.enabled,
                format!(
                    "max_percentage={}, min_words={}",
                    self.dominant_word.max_percentage, self.dominant_word.min_words
                ),
            ),
            entry(
                WordRepetitionFilter::NAME,
                self.word_repetition.enabled,
                format!("max_run={}", self.word_repetition.max_run),
            ),
            entry(PurePunctuationFilter::NAME, self.pure_punctuation.enabled, String::new()),
        ]
    }

    /// Reject thresholds that can never be meaningful
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("filters.trigram.min_unique_ratio", self.trigram.min_unique_ratio, 0.0, 1.0)?;
        check_range(
            "filters.dominant_character.max_percentage",
            self.dominant_character.max_percentage,
            0.0,
            100.0,
        )?;
        check_range(
            "filters.dominant_word.max_percentage",
            self.dominant_word.max_percentage,
            0.0,
            100.0,
        )?;
        if !self.word_length.max_average.is_finite() || self.word_length.max_average <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "filters.word_length.max_average must be a positive number, got {}",
                self.word_length.max_average
            )));
        }
        Ok(())
    }
}

fn check_range(key: &str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{key} must be between {min} and {max}, got {value}")))
    }
}

/// HTTP adapter settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Batch limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkConfig {
    /// Largest batch accepted by the API
    pub max_items: usize,
    /// Worker threads per batch (`0` = available cores)
    pub workers: usize,
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            max_items: 10_000,
            workers: 0,
        }
    }
}

impl Config {
    /// Global config file path, if the platform has a config directory
    #[must_use]
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nonsense").join("config.toml"))
    }

    /// Files searched when no explicit path is given, in order
    #[must_use]
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        paths.extend(Self::global_path());
        paths
    }

    /// Load config from `explicit`, or the first file found on the search
    /// path, or the defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::search_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => Self::from_file(&path),
            None => {
                log::debug!("no config file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load and validate a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.filters.validate()?;
        if self.bulk.max_items == 0 {
            return Err(ConfigError::Invalid("bulk.max_items must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Render as pretty TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save config to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(write_err)?;
        }
        fs::write(path, self.to_toml()?).map_err(write_err)?;
        Ok(())
    }

    /// Build the classifier described by this config
    #[must_use]
    pub fn classifier(&self) -> Classifier {
        self.filters.build()
    }
}
