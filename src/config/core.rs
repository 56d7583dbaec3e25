use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};

use super::{AppConfig, smart_load};
use crate::error::Result;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Layered configuration source
pub struct ConfigLoader {
    figment: Figment,
}

impl ConfigLoader {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        // A custom config replaces the user and project files
        if let Some(custom_path) = custom_config {
            tracing::debug!("Loading custom config {}", custom_path);
            figment = figment.merge(smart_load::auto(custom_path));
        } else {
            let user = Self::user_config_base();
            figment = figment
                .merge(Toml::file(format!("{}.toml", user)))
                .merge(Json::file(format!("{}.json", user)))
                .merge(Yaml::file(format!("{}.yaml", user)))
                .merge(Yaml::file(format!("{}.yml", user)))
                .merge(Toml::file("citizen-report.toml"))
                .merge(Json::file("citizen-report.json"))
                .merge(Yaml::file("citizen-report.yaml"))
                .merge(Yaml::file("citizen-report.yml"));
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed("CITIZEN_").split("__"));

        Ok(ConfigLoader { figment })
    }

    /// Typed view of the merged configuration
    pub fn config(&self) -> Result<AppConfig> {
        Ok(self.figment.extract()?)
    }

    /// Get a nested object/section as JSON
    pub fn get_section(&self, path: &str) -> Result<serde_json::Value> {
        Ok(self.figment.extract_inner(path)?)
    }

    /// Get the full merged configuration as a structured value
    pub fn get_full_config(&self) -> Result<serde_json::Value> {
        Ok(self.figment.extract()?)
    }

    fn user_config_base() -> String {
        match dirs::config_dir() {
            Some(dir) => dir.join("citizen-report").join("config").display().to_string(),
            None => "~/.config/citizen-report/config".to_string(),
        }
    }
}
