// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::Locale;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Kasbook", "kasbook"));

pub const DATA_ENV: &str = "KASBOOK_DATA";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub currency: String,
    pub locale: String,
    pub data_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "IDR".into(),
            locale: "id-ID".into(),
            data_file: None,
        }
    }
}

impl Settings {
    pub fn locale(&self) -> Locale {
        Locale::from_tag(&self.locale)
    }
}

pub fn settings_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("settings.json"))
}

/// Missing file means defaults.
pub fn load_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read settings at {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Parse settings at {}", path.display()))
}

/// Settings file, then `KASBOOK_DATA`, then the `--data` flag.
pub fn resolve(cli_data: Option<&str>) -> Result<Settings> {
    let mut s = load_from(&settings_path()?)?;
    if let Ok(p) = std::env::var(DATA_ENV) {
        if !p.trim().is_empty() {
            s.data_file = Some(PathBuf::from(p));
        }
    }
    if let Some(p) = cli_data {
        s.data_file = Some(PathBuf::from(p));
    }
    tracing::debug!(?s, "settings resolved");
    Ok(s)
}
