use crate::adapters::messages::TracingDiagnostics;
use crate::core::{
    ApiRequest, ApiResponse, DiagnosticSink, Hero, HeroRef, HttpTransport, MessageSink, NewHero,
};
use crate::utils::error::{HeroError, Result};
use serde::de::DeserializeOwned;

pub const DEFAULT_HEROES_PATH: &str = "api/heroes";

/// CRUD access to the hero resource.
///
/// Every outcome is written to the message log. Failures are also reported to
/// the diagnostic channel and then returned, so the caller decides whether to
/// fall back (`unwrap_or_default()`) or surface the error.
pub struct HeroService<H, M, D = TracingDiagnostics> {
    http: H,
    messages: M,
    diagnostics: D,
    heroes_url: String,
}

impl<H: HttpTransport, M: MessageSink> HeroService<H, M> {
    pub fn new(http: H, messages: M) -> Self {
        Self::with_diagnostics(http, messages, TracingDiagnostics)
    }
}

impl<H: HttpTransport, M: MessageSink, D: DiagnosticSink> HeroService<H, M, D> {
    pub fn with_diagnostics(http: H, messages: M, diagnostics: D) -> Self {
        Self {
            http,
            messages,
            diagnostics,
            heroes_url: DEFAULT_HEROES_PATH.to_string(),
        }
    }

    pub fn with_heroes_path(mut self, path: &str) -> Self {
        self.heroes_url = path.trim_matches('/').to_string();
        self
    }

    pub fn heroes_url(&self) -> &str {
        &self.heroes_url
    }

    /// GET heroes from the server
    pub async fn get_heroes(&self) -> Result<Vec<Hero>> {
        let result = async {
            let response = self.send(ApiRequest::get(&self.heroes_url)).await?;
            Ok::<_, HeroError>(decode::<Vec<Hero>>(response.body)?.unwrap_or_default())
        }
        .await;

        self.finish("getHeroes", result, |_| "fetched heroes".to_string())
    }

    /// GET hero by id. A 404 means there is no such hero and yields `Ok(None)`.
    pub async fn get_hero(&self, id: i64) -> Result<Option<Hero>> {
        let result = async {
            let url = self.item_url(id);
            let response = self.http.send(ApiRequest::get(&url)).await?;
            if response.status == 404 {
                return Ok(None);
            }
            decode::<Hero>(ensure_success(&url, response)?.body)
        }
        .await;

        self.finish("getHero", result, |hero| match hero {
            Some(_) => format!("fetched hero id={}", id),
            None => format!("did not find hero id={}", id),
        })
    }

    /// PUT: update the hero on the server. Returns whatever the server sent back.
    pub async fn update_hero(&self, hero: &Hero) -> Result<Option<serde_json::Value>> {
        let result = async {
            let body = serde_json::to_value(hero)?;
            let response = self.send(ApiRequest::put(&self.heroes_url, body)).await?;
            Ok::<_, HeroError>(response.body)
        }
        .await;

        self.finish("updateHero", result, |_| {
            format!("updated hero id={}", hero.id)
        })
    }

    /// POST: add a new hero to the server
    pub async fn add_hero(&self, hero: &NewHero) -> Result<Hero> {
        let result = async {
            let body = serde_json::to_value(hero)?;
            let response = self.send(ApiRequest::post(&self.heroes_url, body)).await?;
            let created: Hero = serde_json::from_value(response.body.unwrap_or_default())?;
            Ok::<_, HeroError>(created)
        }
        .await;

        self.finish("addHero", result, |created: &Hero| {
            format!("added hero w/ id={}", created.id)
        })
    }

    /// DELETE: delete the hero from the server
    pub async fn delete_hero(&self, hero: impl Into<HeroRef>) -> Result<Option<Hero>> {
        let id = hero.into().id();
        let result = async {
            let response = self.send(ApiRequest::delete(self.item_url(id))).await?;
            decode::<Hero>(response.body)
        }
        .await;

        self.finish("deleteHero", result, |_| format!("deleted hero id={}", id))
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.heroes_url, id)
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let path = request.path.clone();
        let response = self.http.send(request).await?;
        ensure_success(&path, response)
    }

    fn finish<T>(
        &self,
        operation: &str,
        result: Result<T>,
        on_success: impl FnOnce(&T) -> String,
    ) -> Result<T> {
        match result {
            Ok(value) => {
                self.log(on_success(&value));
                Ok(value)
            }
            Err(error) => {
                self.diagnostics.report(operation, &error);
                self.log(format!("{} failed: {}", operation, error));
                Err(error)
            }
        }
    }

    fn log(&self, message: String) {
        self.messages.add(format!("HeroService: {}", message));
    }
}

// Transports only let 404 through; every other non-2xx is already an error.
fn ensure_success(path: &str, response: ApiResponse) -> Result<ApiResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(HeroError::Status {
            url: path.to_string(),
            status: response.status,
            body: response.body.map(|b| b.to_string()),
        })
    }
}

fn decode<T: DeserializeOwned>(body: Option<serde_json::Value>) -> Result<Option<T>> {
    Ok(body.map(serde_json::from_value).transpose()?)
}
