/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

//! Application configuration, read from TOML.
//!
//! ```toml
//! [storage]
//! key_prefix = "webcraft"
//!
//! [editor]
//! autosave_interval_secs = 30   # 0 disables autosave
//! save_feedback_ms = 2000
//!
//! [site]
//! base_path = "/websitebuilder"
//! ```
//!
//! Every section and key is optional; a missing one takes its default.

use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WebcraftConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Prefix of the browser storage keys (`<prefix>_users`, ...).
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default = "default_autosave_interval")]
    pub autosave_interval_secs: u32,
    /// How long the save button reads "Saved!".
    #[serde(default = "default_save_feedback")]
    pub save_feedback_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

fn default_key_prefix() -> String {
    "webcraft".to_string()
}

fn default_autosave_interval() -> u32 {
    30
}

fn default_save_feedback() -> u32 {
    2000
}

fn default_base_path() -> String {
    "/websitebuilder".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { key_prefix: default_key_prefix() }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            autosave_interval_secs: default_autosave_interval(),
            save_feedback_ms: default_save_feedback(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { base_path: default_base_path() }
    }
}

impl StorageConfig {
    pub fn users_key(&self) -> String {
        format!("{}_users", self.key_prefix)
    }

    pub fn projects_key(&self) -> String {
        format!("{}_projects", self.key_prefix)
    }

    pub fn session_key(&self) -> String {
        format!("{}_current_user", self.key_prefix)
    }
}

impl SiteConfig {
    /// Public address of a project's rendered page.
    pub fn project_url(&self, project_id: &str) -> String {
        format!("{}/view.html?project={project_id}", self.base_path.trim_end_matches('/'))
    }
}

impl WebcraftConfig {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_the_default() {
        let config = WebcraftConfig::from_toml_str("").unwrap();
        assert_eq!(config, WebcraftConfig::default());
        assert_eq!(config.editor.autosave_interval_secs, 30);
        assert_eq!(config.storage.users_key(), "webcraft_users");
        assert_eq!(config.storage.session_key(), "webcraft_current_user");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = WebcraftConfig::from_toml_str("[editor]\nautosave_interval_secs = 0\n").unwrap();
        assert_eq!(config.editor.autosave_interval_secs, 0);
        assert_eq!(config.editor.save_feedback_ms, 2000);
        assert_eq!(config.site.base_path, "/websitebuilder");
    }

    #[test]
    fn config_roundtrip() {
        let mut config = WebcraftConfig::default();
        config.storage.key_prefix = "demo".to_string();

        let text = config.to_toml_string().unwrap();
        assert_eq!(WebcraftConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn project_url_uses_the_base_path() {
        let site = SiteConfig { base_path: "/sites/".to_string() };
        assert_eq!(site.project_url("my-site"), "/sites/view.html?project=my-site");
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(WebcraftConfig::from_toml_str("[editor\n").is_err());
    }
}
