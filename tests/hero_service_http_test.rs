use hero_service::core::DiagnosticSink;
use hero_service::{Hero, HeroError, HeroService, MessageService, NewHero, ReqwestTransport};
use httpmock::prelude::*;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingDiagnostics {
    reports: Mutex<Vec<(String, Option<u16>)>>,
}

impl DiagnosticSink for RecordingDiagnostics {
    fn report(&self, operation: &str, error: &HeroError) {
        self.reports
            .lock()
            .unwrap()
            .push((operation.to_string(), error.status()));
    }
}

type TestService = HeroService<ReqwestTransport, Arc<MessageService>, Arc<RecordingDiagnostics>>;

fn service_for(
    server: &MockServer,
) -> (TestService, Arc<MessageService>, Arc<RecordingDiagnostics>) {
    let transport = ReqwestTransport::new(&server.base_url()).unwrap();
    let log = Arc::new(MessageService::new());
    let diagnostics = Arc::new(RecordingDiagnostics::default());
    let service = HeroService::with_diagnostics(transport, log.clone(), diagnostics.clone());
    (service, log, diagnostics)
}

#[tokio::test]
async fn test_list_returns_server_payload() {
    let server = MockServer::start();
    let payload = serde_json::json!([
        {"id": 11, "name": "Dr Nice"},
        {"id": 12, "name": "Narco"},
        {"id": 13, "name": "Bombasto"}
    ]);

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/heroes");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(payload);
    });

    let (service, log, diagnostics) = service_for(&server);
    let heroes = service.get_heroes().await.unwrap();

    api_mock.assert();
    assert_eq!(
        heroes,
        vec![
            Hero::new(11, "Dr Nice"),
            Hero::new(12, "Narco"),
            Hero::new(13, "Bombasto"),
        ]
    );
    let fetched = log
        .messages()
        .iter()
        .filter(|m| m.as_str() == "HeroService: fetched heroes")
        .count();
    assert_eq!(fetched, 1);
    assert!(diagnostics.reports.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_server_error_degrades_to_empty() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/heroes");
        then.status(500).body("Internal Server Error");
    });

    let (service, log, diagnostics) = service_for(&server);
    let heroes = service.get_heroes().await.unwrap_or_default();

    api_mock.assert();
    assert!(heroes.is_empty());
    assert_eq!(
        diagnostics.reports.lock().unwrap().clone(),
        vec![("getHeroes".to_string(), Some(500))]
    );

    let messages = log.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("HeroService: getHeroes failed: "));
    assert!(messages[0].contains("500"));
}

#[tokio::test]
async fn test_list_transport_error_degrades_to_empty() {
    // Nothing listens on port 9 (discard) on a test host.
    let transport = ReqwestTransport::with_options("http://127.0.0.1:9/", 2, Default::default())
        .unwrap();
    let log = Arc::new(MessageService::new());
    let service = HeroService::new(transport, log.clone());

    let result = service.get_heroes().await;

    assert!(matches!(result, Err(HeroError::Transport(_))));
    assert!(result.unwrap_or_default().is_empty());
    assert!(log.messages()[0].starts_with("HeroService: getHeroes failed: "));
}

#[tokio::test]
async fn test_get_hero_and_not_found() {
    let server = MockServer::start();
    let found = server.mock(|when, then| {
        when.method(GET).path("/api/heroes/15");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"id": 15, "name": "Magneta"}));
    });
    let missing = server.mock(|when, then| {
        when.method(GET).path("/api/heroes/42");
        then.status(404);
    });

    let (service, log, _) = service_for(&server);

    assert_eq!(
        service.get_hero(15).await.unwrap(),
        Some(Hero::new(15, "Magneta"))
    );
    assert_eq!(service.get_hero(42).await.unwrap(), None);

    found.assert();
    missing.assert();
    assert_eq!(
        log.messages(),
        vec![
            "HeroService: fetched hero id=15",
            "HeroService: did not find hero id=42"
        ]
    );
}

#[tokio::test]
async fn test_update_sends_full_hero_as_json() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/heroes")
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"id": 5, "name": "Dr Nice"}));
        then.status(200);
    });

    let (service, log, _) = service_for(&server);
    let result = service
        .update_hero(&Hero::new(5, "Dr Nice"))
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(result, None);
    assert!(log
        .messages()
        .contains(&"HeroService: updated hero id=5".to_string()));
}

#[tokio::test]
async fn test_add_echoes_with_assigned_id() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/heroes")
            .json_body(serde_json::json!({"name": "Celeritas"}));
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"id": 14, "name": "Celeritas"}));
    });

    let (service, log, _) = service_for(&server);
    let input = NewHero::new("Celeritas");
    let created = service.add_hero(&input).await.unwrap();

    api_mock.assert();
    assert_eq!(created.id, 14);
    assert_eq!(created.name, input.name);
    assert_eq!(log.messages(), vec!["HeroService: added hero w/ id=14"]);
}

#[tokio::test]
async fn test_add_failure_is_reported() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/heroes");
        then.status(503);
    });

    let (service, log, diagnostics) = service_for(&server);
    let result = service.add_hero(&NewHero::new("Magma")).await;

    assert_eq!(result.ok(), None);
    assert_eq!(
        diagnostics.reports.lock().unwrap().clone(),
        vec![("addHero".to_string(), Some(503))]
    );
    assert!(log.messages()[0].starts_with("HeroService: addHero failed: "));
}

#[tokio::test]
async fn test_delete_by_hero_or_id_targets_same_path() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(DELETE)
            .path("/api/heroes/16")
            .header("Content-Type", "application/json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"id": 16, "name": "RubberMan"}));
    });

    let (service, log, _) = service_for(&server);
    let hero = Hero::new(16, "RubberMan");

    let by_hero = service.delete_hero(&hero).await.unwrap();
    let by_id = service.delete_hero(16).await.unwrap();

    api_mock.assert_hits(2);
    assert_eq!(by_hero, Some(hero.clone()));
    assert_eq!(by_id, Some(hero));
    assert_eq!(
        log.messages(),
        vec![
            "HeroService: deleted hero id=16",
            "HeroService: deleted hero id=16"
        ]
    );
}

#[tokio::test]
async fn test_delete_missing_hero_fails() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE)
            .path("/api/heroes/77")
            .header("Content-Type", "application/json");
        then.status(404);
    });

    let (service, log, diagnostics) = service_for(&server);
    let err = service.delete_hero(77).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(
        diagnostics.reports.lock().unwrap().clone(),
        vec![("deleteHero".to_string(), Some(404))]
    );
    assert!(log.messages()[0].starts_with("HeroService: deleteHero failed: "));
}
