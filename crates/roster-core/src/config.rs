//! Configuration types for roster.
//!
//! [`Config::load`] layers, in order: the embedded defaults, an optional TOML
//! file (explicit path, else `~/.config/roster/config.toml`), and `ROSTER_`
//! environment variables such as `ROSTER_OUTPUT__HEADER`. [`Config::defaults`]
//! returns the embedded defaults without touching the filesystem or
//! environment (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[output]
header             = "All Students:"
announce_additions = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level roster configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Line written before the record lines of a listing.
    #[serde(default = "default_header")]
    pub header: String,
    /// Write `Added student: <name>` after a successful insert.
    #[serde(default = "default_announce_additions")]
    pub announce_additions: bool,
}

fn default_header() -> String { "All Students:".to_string() }
fn default_announce_additions() -> bool { true }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            header: default_header(),
            announce_additions: default_announce_additions(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. A missing file is skipped; a file that
    /// exists but does not parse is an error.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
        tracing::debug!(path = %path.display(), "loading config");

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("ROSTER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
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
        .join("roster")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
