use crate::utils::error::{HeroError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(HeroError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(HeroError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(HeroError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_resource_path(field_name: &str, path: &str) -> Result<()> {
    let trimmed = path.trim_matches('/');
    if trimmed.trim().is_empty() {
        return Err(HeroError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.starts_with("//") || trimmed.contains(':') {
        return Err(HeroError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path must be relative to the API base, not a URL".to_string(),
        });
    }

    if trimmed.contains(|c: char| c.is_whitespace() || c == '?' || c == '#') {
        return Err(HeroError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path must not contain whitespace, query or fragment".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(HeroError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| HeroError::MissingConfig {
        field: field_name.to_string(),
    })
}
