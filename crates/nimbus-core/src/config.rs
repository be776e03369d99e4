//! Configuration types for nimbus.
//!
//! [`Config::load`] reads `~/.config/nimbus/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).
//!
//! The search and extraction functions never read configuration themselves;
//! callers pull values out of [`Config`] and pass them as arguments.

use crate::locate::SkipRange;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[matrix]
size = 21
max_size = 201

[search]
min_skip = 1
max_skip = 100

[corpus]
# path    = "/usr/share/nimbus/corpus.txt"
normalize = true

[server]
bind = "127.0.0.1:8787"

[ui]
theme = "default"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/nimbus/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub matrix: MatrixConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[matrix]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixConfig {
    #[serde(default = "default_matrix_size")]
    pub size: usize,
    /// Largest edge length a query may ask for.
    #[serde(default = "default_max_matrix_size")]
    pub max_size: usize,
}

fn default_matrix_size() -> usize { crate::DEFAULT_MATRIX_SIZE }
fn default_max_matrix_size() -> usize { 201 }

impl Default for MatrixConfig {
    fn default() -> Self {
        Self { size: default_matrix_size(), max_size: default_max_matrix_size() }
    }
}

impl MatrixConfig {
    /// Reject sizes without a centre cell or above `max_size`.
    pub fn check(&self, size: usize) -> crate::Result<()> {
        crate::matrix::check_size(size)?;
        if size > self.max_size {
            return Err(crate::ElsError::InvalidArgument(format!(
                "matrix size {size} exceeds the maximum of {}",
                self.max_size
            )));
        }
        Ok(())
    }
}

/// `[search]` section: the skip range tried when no explicit skip is given.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_min_skip")]
    pub min_skip: i64,
    #[serde(default = "default_max_skip")]
    pub max_skip: i64,
}

fn default_min_skip() -> i64 { 1 }
fn default_max_skip() -> i64 { 100 }

impl Default for SearchConfig {
    fn default() -> Self {
        Self { min_skip: default_min_skip(), max_skip: default_max_skip() }
    }
}

impl SearchConfig {
    pub fn skip_range(&self) -> crate::Result<SkipRange> {
        SkipRange::new(self.min_skip, self.max_skip)
    }
}

/// `[corpus]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default = "default_normalize")]
    pub normalize: bool,
}

fn default_normalize() -> bool { true }

impl Default for CorpusConfig {
    fn default() -> Self {
        Self { path: None, normalize: default_normalize() }
    }
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String { "127.0.0.1:8787".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

/// `[ui]` section: terminal viewer settings.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Built-in theme name: `default` or `gruvbox_dark`.
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String { "default".to_string() }

impl Default for UiConfig {
    fn default() -> Self {
        Self { theme: default_theme() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/nimbus/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load a specific file layered on top of the built-in defaults. The file
    /// must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).format(config::FileFormat::Toml).required(true))
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Reject values the search layer would refuse anyway, so that a bad
    /// config file fails at startup rather than on the first request.
    pub fn validate(&self) -> anyhow::Result<()> {
        crate::matrix::check_size(self.matrix.max_size)
            .and_then(|()| self.matrix.check(self.matrix.size))
            .map_err(|e| anyhow::anyhow!("[matrix] {e}"))?;
        self.search
            .skip_range()
            .map_err(|e| anyhow::anyhow!("[search] {e}"))?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("nimbus")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
