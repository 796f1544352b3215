// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Configuration file support for framedec.
//!
//! Config is loaded from the `[framedec]` section of `framedec.toml`.
//! Default search order:
//! 1. Path specified via `--config` CLI argument
//! 2. `./framedec.toml`
//! 3. `~/.config/framedec/framedec.toml`
//! 4. `/etc/framedec/framedec.toml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use framedec_app::{ConfigError, ConfigFile};
use framedec_core::{DecodePolicy, FrameKind};

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FramedecConfig {
    /// General settings
    pub general: GeneralConfig,
    /// Record decoding behaviour
    pub decode: DecodeConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// Frame kind applied to every record. When unset, each record must
    /// name its kind in a `type` field.
    pub kind: Option<FrameKind>,
    /// Handling of missing or mistyped fields
    pub policy: DecodePolicy,
    /// Warn when a session or hole bound loses bits while narrowing to 32 bits
    pub report_truncation: bool,
}

impl FramedecConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        validate_log_level(self.general.log_level.as_deref())
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        <Self as ConfigFile>::load_from_file(path)
    }

    /// Load configuration from the default search paths.
    /// Returns default config if no config file is found.
    pub fn load_from_default_paths() -> Result<(Self, Option<PathBuf>), ConfigError> {
        <Self as ConfigFile>::load_from_default_paths()
    }

    /// Generate an example configuration wrapped under the `[framedec]`
    /// section header.
    pub fn example_toml() -> String {
        #[derive(Serialize)]
        struct Wrapper {
            framedec: FramedecConfig,
        }
        let example = FramedecConfig {
            general: GeneralConfig {
                log_level: Some("info".to_string()),
            },
            decode: DecodeConfig {
                kind: None,
                policy: DecodePolicy::Strict,
                report_truncation: false,
            },
        };
        toml::to_string_pretty(&Wrapper { framedec: example }).unwrap_or_default()
    }
}

fn validate_log_level(level: Option<&str>) -> Result<(), String> {
    if let Some(level) = level {
        match level {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(format!(
                    "[general].log_level '{}' is invalid (expected one of: trace, debug, info, warn, error)",
                    level
                ))
            }
        }
    }
    Ok(())
}

impl ConfigFile for FramedecConfig {
    fn section_key() -> &'static str {
        "framedec"
    }
}
