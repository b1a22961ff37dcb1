//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treelab/treelab.toml`
//! 3. Local config: `<dir>/.treelab.toml`
//! 4. Environment variables: `TREELAB_*` prefix

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::arena::TreeVariant;

pub const LOCAL_CONFIG_NAME: &str = ".treelab.toml";

/// Unified configuration for treelab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Structural variant used when none is given on the command line
    pub default_variant: TreeVariant,
    /// Settle delay between visited nodes during an animated walk
    pub settle_ms: u64,
    /// Prefilled value sequence used when no values are given
    pub sample_values: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_variant: TreeVariant::Bst,
            settle_ms: 300,
            sample_values: "50, 30, 70, 20, 40, 60, 80".to_string(),
        }
    }
}

impl Settings {
    /// Loads layered settings. `local_dir` points at the directory whose
    /// `.treelab.toml` (if any) overrides the global config.
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Settings::default())?);

        if let Some(global) = Self::global_config_path() {
            if global.exists() {
                builder = builder.add_source(File::from(global));
            }
        }

        if let Some(dir) = local_dir {
            let local = dir.join(LOCAL_CONFIG_NAME);
            if local.exists() {
                builder = builder.add_source(File::from(local));
            }
        }

        builder = builder.add_source(Environment::with_prefix("TREELAB"));
        builder.build()?.try_deserialize()
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "treelab").map(|dirs| dirs.config_dir().join("treelab.toml"))
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// TOML template with the compiled defaults, for `config init`.
    pub fn template() -> String {
        toml::to_string_pretty(&Settings::default())
            .unwrap_or_else(|_| String::from("# treelab configuration\n"))
    }

    /// Merged settings rendered as TOML, for `config show`.
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}
