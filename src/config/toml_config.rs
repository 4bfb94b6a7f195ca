use crate::config::settings::ApiSettings;
use crate::utils::error::{HeroError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub heroes_path: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HeroError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HERO_API_BASE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HeroError::Config {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Values present in the file replace those in `base`.
    pub fn apply_to(&self, base: ApiSettings) -> ApiSettings {
        let mut settings = base;
        if let Some(base_url) = &self.api.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(heroes_path) = &self.api.heroes_path {
            settings.heroes_path = heroes_path.clone();
        }
        if let Some(timeout) = self.api.timeout_seconds {
            settings.timeout_seconds = timeout;
        }
        if let Some(headers) = &self.api.headers {
            settings
                .headers
                .extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        settings
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_required_field("api.base_url", &self.api.base_url)?;
        self.apply_to(ApiSettings::default()).validate()
    }
}
