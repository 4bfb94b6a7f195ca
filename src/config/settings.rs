use crate::adapters::http::DEFAULT_TIMEOUT_SECONDS;
use crate::core::hero_service::DEFAULT_HEROES_PATH;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_positive_number, validate_resource_path, validate_url, Validate,
};
use std::collections::HashMap;

pub const DEFAULT_API_BASE: &str = "http://localhost:3000/";

/// Resolved connection settings for the hero API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub base_url: String,
    pub heroes_path: String,
    pub timeout_seconds: u64,
    pub headers: HashMap<String, String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            heroes_path: DEFAULT_HEROES_PATH.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            headers: HashMap::new(),
        }
    }
}

impl ConfigProvider for ApiSettings {
    fn api_base(&self) -> &str {
        &self.base_url
    }

    fn heroes_path(&self) -> &str {
        &self.heroes_path
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn default_headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

impl Validate for ApiSettings {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.base_url)?;
        validate_resource_path("api.heroes_path", &self.heroes_path)?;
        validate_positive_number("api.timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
