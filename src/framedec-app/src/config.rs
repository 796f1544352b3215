// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, String),

    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, String),
}

/// Candidate locations for `framedec.toml`, most specific first: the working
/// directory, then the user's config dir, then the system-wide `/etc` copy.
fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("framedec.toml")];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("framedec").join("framedec.toml"));
    }
    paths.push(PathBuf::from("/etc/framedec/framedec.toml"));
    paths
}

/// Read `path` and deserialize only the `[key]` table from it.
///
/// A file without that table yields `Ok(None)` so the caller can keep
/// searching. Other tables in the file are ignored.
fn load_section_from_file<T: DeserializeOwned>(
    path: &Path,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e.to_string()))?;

    let mut table: toml::Table = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e.to_string()))?;

    let Some(section) = table.remove(key) else {
        return Ok(None);
    };

    // Keys missing from the table fall back to the type's serde defaults.
    let cfg = section
        .try_into::<T>()
        .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e.to_string()))?;
    Ok(Some(cfg))
}

/// A configuration type that lives in one table of `framedec.toml`.
pub trait ConfigFile: Sized + Default + DeserializeOwned {
    /// Name of the table holding this configuration.
    fn section_key() -> &'static str;

    /// Load from a file the user named explicitly.
    ///
    /// Unlike the search, a file given this way must contain the table.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        load_section_from_file::<Self>(path, Self::section_key())?.ok_or_else(|| {
            ConfigError::ParseError(
                path.to_path_buf(),
                format!("missing [{}] section", Self::section_key()),
            )
        })
    }

    /// Walk the candidate locations and use the first file that has the table.
    ///
    /// Files without the table are skipped. With no match the defaults are
    /// used and the returned path is `None`.
    fn load_from_default_paths() -> Result<(Self, Option<PathBuf>), ConfigError> {
        for path in config_search_paths() {
            if path.exists() {
                if let Some(cfg) = load_section_from_file::<Self>(&path, Self::section_key())? {
                    return Ok((cfg, Some(path)));
                }
            }
        }
        Ok((Self::default(), None))
    }
}
