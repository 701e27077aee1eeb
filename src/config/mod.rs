// SPDX-License-Identifier: MPL-2.0
//! This module handles the persisted user preferences, currently a single
//! value: the selected dashboard language, stored under the `cm_lang` key in
//! a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use controlman_i18n::config;
//!
//! // Load existing preferences
//! let mut prefs = config::load().unwrap_or_default();
//!
//! // Select a language
//! prefs.language = Some("en".to_string());
//!
//! // Save the modified preferences
//! config::save(&prefs).expect("Failed to save preferences");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ControlMan";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Prefs {
    /// Selected language code. `None` means no selection was ever persisted.
    #[serde(rename = "cm_lang", default)]
    pub language: Option<String>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Prefs> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Prefs::default())
}

pub fn save(prefs: &Prefs) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(prefs, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Prefs> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(prefs: &Prefs, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(prefs)?;
    fs::write(path, content)?;
    Ok(())
}
