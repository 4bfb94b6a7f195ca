use crate::domain::model::{ApiRequest, ApiResponse};
use crate::utils::error::{HeroError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Sends one request to the hero API. Implementations return `Err` for
/// transport failures and non-2xx statuses other than 404.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// User-facing message log.
pub trait MessageSink: Send + Sync {
    fn add(&self, message: String);
}

/// Out-of-band error reporting.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, operation: &str, error: &HeroError);
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn heroes_path(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn default_headers(&self) -> &HashMap<String, String>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        (**self).send(request).await
    }
}

impl<T: MessageSink + ?Sized> MessageSink for Arc<T> {
    fn add(&self, message: String) {
        (**self).add(message)
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Arc<T> {
    fn report(&self, operation: &str, error: &HeroError) {
        (**self).report(operation, error)
    }
}
