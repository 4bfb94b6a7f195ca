use crate::domain::model::{ApiRequest, ApiResponse, HttpMethod};
use crate::domain::ports::{ConfigProvider, HttpTransport};
use crate::utils::error::{HeroError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// `HttpTransport` over a reqwest client, resolving request paths against a base URL.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
    headers: HashMap<String, String>,
}

impl ReqwestTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_options(base_url, DEFAULT_TIMEOUT_SECONDS, HashMap::new())
    }

    pub fn with_options(
        base_url: &str,
        timeout_seconds: u64,
        headers: HashMap<String, String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: normalize_base(base_url)?,
            headers,
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::with_options(
            config.api_base(),
            config.timeout_seconds(),
            config.default_headers().clone(),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `path` under the base URL; anything landing outside it is rejected.
    fn resolve(&self, path: &str) -> Result<Url> {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| HeroError::InvalidConfigValue {
                field: "path".to_string(),
                value: path.to_string(),
                reason: format!("Cannot resolve against {}: {}", self.base_url, e),
            })?;

        if !url.as_str().starts_with(self.base_url.as_str()) {
            return Err(HeroError::InvalidConfigValue {
                field: "path".to_string(),
                value: path.to_string(),
                reason: format!("Resolves outside of {}", self.base_url),
            });
        }

        Ok(url)
    }
}

// Url::join drops the last segment of a base without a trailing slash.
fn normalize_base(base_url: &str) -> Result<Url> {
    let mut raw = base_url.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }

    Url::parse(&raw).map_err(|e| HeroError::InvalidConfigValue {
        field: "api_base".to_string(),
        value: base_url.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Post => Method::POST,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.resolve(&request.path)?;
        tracing::debug!("Making API request: {} {}", request.method, url);

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), url.clone());

        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if request.method != HttpMethod::Get {
            builder = builder.header(CONTENT_TYPE, "application/json");
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let text = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Ok(ApiResponse::new(
                status.as_u16(),
                serde_json::from_str(&text).ok(),
            ));
        }

        if !status.is_success() {
            return Err(HeroError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body: (!text.is_empty()).then_some(text),
            });
        }

        let body = if text.trim().is_empty() {
            None
        } else {
            Some(serde_json::from_str(&text)?)
        };

        Ok(ApiResponse::new(status.as_u16(), body))
    }
}
