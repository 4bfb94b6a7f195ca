use crate::domain::model::{ApiRequest, ApiResponse, Hero, HttpMethod};
use crate::domain::ports::HttpTransport;
use crate::utils::error::{HeroError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

/// The demo data set the in-memory API starts from.
pub fn mock_heroes() -> Vec<Hero> {
    vec![
        Hero::new(11, "Dr Nice"),
        Hero::new(12, "Narco"),
        Hero::new(13, "Bombasto"),
        Hero::new(14, "Celeritas"),
        Hero::new(15, "Magneta"),
        Hero::new(16, "RubberMan"),
        Hero::new(17, "Dynama"),
        Hero::new(18, "Dr IQ"),
        Hero::new(19, "Magma"),
        Hero::new(20, "Tornado"),
    ]
}

const FIRST_ID: i64 = 11;

/// Serves a hero collection from memory, answering like a REST backend would.
pub struct InMemoryHeroApi {
    collection: String,
    heroes: Mutex<BTreeMap<i64, Hero>>,
}

enum Route {
    Collection,
    Item(i64),
}

impl InMemoryHeroApi {
    pub fn new(collection: &str, heroes: Vec<Hero>) -> Self {
        Self {
            collection: collection.trim_matches('/').to_string(),
            heroes: Mutex::new(heroes.into_iter().map(|h| (h.id, h)).collect()),
        }
    }

    pub fn seeded(collection: &str) -> Self {
        Self::new(collection, mock_heroes())
    }

    pub async fn snapshot(&self) -> Vec<Hero> {
        self.heroes.lock().await.values().cloned().collect()
    }

    fn route(&self, path: &str) -> Result<Option<Route>> {
        let path = path.trim_matches('/');
        if path == self.collection {
            return Ok(Some(Route::Collection));
        }

        let Some(segment) = path
            .strip_prefix(self.collection.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
        else {
            return Ok(None);
        };

        segment
            .parse::<i64>()
            .map(|id| Some(Route::Item(id)))
            .map_err(|_| bad_request(path, format!("'{}' is not a hero id", segment)))
    }
}

fn bad_request(path: &str, reason: String) -> HeroError {
    HeroError::Status {
        url: path.to_string(),
        status: 400,
        body: Some(reason),
    }
}

fn status_error(path: &str, status: u16) -> HeroError {
    HeroError::Status {
        url: path.to_string(),
        status,
        body: None,
    }
}

fn gen_id(heroes: &BTreeMap<i64, Hero>) -> i64 {
    heroes
        .keys()
        .next_back()
        .map(|max| max + 1)
        .unwrap_or(FIRST_ID)
}

fn hero_json(hero: &Hero) -> Result<Option<serde_json::Value>> {
    Ok(Some(serde_json::to_value(hero)?))
}

#[async_trait]
impl HttpTransport for InMemoryHeroApi {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let path = request.path.as_str();
        tracing::debug!("In-memory API request: {} {}", request.method, path);

        let Some(route) = self.route(path)? else {
            return Ok(ApiResponse::new(404, None));
        };

        let mut heroes = self.heroes.lock().await;

        match (request.method, route) {
            (HttpMethod::Get, Route::Collection) => {
                let all: Vec<&Hero> = heroes.values().collect();
                Ok(ApiResponse::new(200, Some(serde_json::to_value(all)?)))
            }
            (HttpMethod::Get, Route::Item(id)) => match heroes.get(&id) {
                Some(hero) => Ok(ApiResponse::new(200, hero_json(hero)?)),
                None => Ok(ApiResponse::new(404, None)),
            },
            (HttpMethod::Put, Route::Collection) => {
                let body = request
                    .body
                    .ok_or_else(|| bad_request(path, "missing hero body".to_string()))?;
                let hero: Hero = serde_json::from_value(body)
                    .map_err(|e| bad_request(path, format!("invalid hero: {}", e)))?;
                heroes.insert(hero.id, hero);
                Ok(ApiResponse::new(204, None))
            }
            (HttpMethod::Post, Route::Collection) => {
                let body = request
                    .body
                    .ok_or_else(|| bad_request(path, "missing hero body".to_string()))?;
                let name = body
                    .get("name")
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| bad_request(path, "hero needs a name".to_string()))?;
                let id = match body.get("id").and_then(|v| v.as_i64()) {
                    Some(id) if heroes.contains_key(&id) => {
                        return Err(status_error(path, 409));
                    }
                    Some(id) => id,
                    None => gen_id(&heroes),
                };

                let hero = Hero::new(id, name);
                let created = hero_json(&hero)?;
                heroes.insert(id, hero);
                Ok(ApiResponse::new(201, created))
            }
            (HttpMethod::Delete, Route::Item(id)) => match heroes.remove(&id) {
                Some(_) => Ok(ApiResponse::new(204, None)),
                None => Ok(ApiResponse::new(404, None)),
            },
            _ => Err(status_error(path, 405)),
        }
    }
}
