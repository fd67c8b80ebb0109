//! End-to-end tests driving `GamesClient` and `GameRecordManager` against a
//! wiremock server standing in for the games backend.

use games_admin::{
    api::GamesClient,
    config::Config,
    games::{AppId, GamePatch, GameRecord},
    manager::{GameRecordManager, Request},
    Error,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GamesClient {
    let config = Config {
        base_url: server.uri(),
        node: "node1".to_string(),
        ..Default::default()
    };
    GamesClient::new(&config).unwrap()
}

fn sample_json() -> serde_json::Value {
    json!([{
        "app_id": 1,
        "name": "A",
        "release_date": "2020-01-01",
        "price": 9.99,
        "developers": "D",
        "publishers": "P"
    }])
}

async fn mount_list(server: &MockServer, body: serde_json::Value, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/games/node1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Execute `request` and every follow-up the manager asks for.
async fn run(manager: &mut GameRecordManager, client: &GamesClient, request: Request) {
    let mut next = Some(request);
    while let Some(request) = next {
        let outcome = request.execute(client).await;
        next = manager.complete(outcome);
    }
}

// ============================================================================
// Client Tests
// ============================================================================

#[tokio::test]
async fn test_list_games() {
    let server = MockServer::start().await;
    mount_list(&server, sample_json(), 1).await;

    let games = client_for(&server).list_games().await.unwrap();

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].app_id, AppId::Number(1));
    assert_eq!(games[0].name, "A");
    assert_eq!(games[0].price, 9.99);
}

#[tokio::test]
async fn test_create_posts_full_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/games/node1"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "app_id": "abc",
            "name": "B",
            "release_date": "2022-02-02",
            "price": 0.0,
            "developers": "D1, D2",
            "publishers": "P"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let record = GameRecord {
        app_id: AppId::Text("abc".to_string()),
        name: "B".to_string(),
        release_date: "2022-02-02".to_string(),
        price: 0.0,
        developers: "D1, D2".to_string(),
        publishers: "P".to_string(),
    };
    client_for(&server).create_game(&record).await.unwrap();
}

#[tokio::test]
async fn test_patch_sends_only_given_fields() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/games/node1/7"))
        .and(body_json(json!({ "price": 4.99 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let patch = GamePatch {
        price: Some(4.99),
        ..Default::default()
    };
    client_for(&server)
        .patch_game(&AppId::Number(7), &patch)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/games/node1/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such game"))
        .mount(&server)
        .await;

    let result = client_for(&server).delete_game(&AppId::Number(404)).await;

    match result {
        Err(Error::Api { status, body }) => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(body, "no such game");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_with_quoted_prices() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        json!([
            { "app_id": 1, "name": "A", "release_date": "2020-01-01", "price": 9.99, "developers": "D", "publishers": "P" },
            { "app_id": 2, "name": "B", "release_date": "2020-01-02", "price": "4.99", "developers": "D", "publishers": "P" }
        ]),
        1,
    )
    .await;

    let games = client_for(&server).list_games().await.unwrap();

    assert_eq!(games.len(), 2);
    assert_eq!(games[1].price, 4.99);
}

#[tokio::test]
async fn test_malformed_list_is_a_json_error() {
    let server = MockServer::start().await;
    mount_list(&server, json!({ "not": "a list" }), 1).await;

    let result = client_for(&server).list_games().await;
    assert!(matches!(result, Err(Error::Http(_)) | Err(Error::Json(_))));
}

// ============================================================================
// Manager + Client Scenarios
// ============================================================================

#[tokio::test]
async fn test_mount_lists_exactly_once() {
    let server = MockServer::start().await;
    mount_list(&server, sample_json(), 1).await;

    let client = client_for(&server);
    let mut manager = GameRecordManager::new();

    let request = manager.mount().unwrap();
    run(&mut manager, &client, request).await;
    assert!(manager.mount().is_none());

    assert_eq!(manager.games().len(), 1);
    let row = &manager.games()[0];
    assert_eq!(row.release_date, "2020-01-01");
    assert_eq!(row.developers, "D");
    assert_eq!(row.publishers, "P");
}

#[tokio::test]
async fn test_edit_price_updates_and_reloads() {
    let server = MockServer::start().await;
    mount_list(&server, sample_json(), 2).await;

    Mock::given(method("PUT"))
        .and(path("/games/node1/1"))
        .and(body_partial_json(json!({ "app_id": 1, "price": 4.99 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut manager = GameRecordManager::new();
    let request = manager.mount().unwrap();
    run(&mut manager, &client, request).await;

    let record = manager.games()[0].clone();
    manager.begin_edit(&record);
    manager.form_mut().unwrap().values.price = "4.99".to_string();

    let request = manager.save().unwrap();
    run(&mut manager, &client, request).await;

    assert!(!manager.is_form_open());
}

#[tokio::test]
async fn test_create_then_reload() {
    let server = MockServer::start().await;
    mount_list(&server, json!([]), 1).await;

    Mock::given(method("POST"))
        .and(path("/games/node1"))
        .and(body_partial_json(json!({ "app_id": 2, "name": "New" })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut manager = GameRecordManager::new();
    manager.begin_create();
    {
        let values = &mut manager.form_mut().unwrap().values;
        values.app_id = "2".to_string();
        values.name = "New".to_string();
        values.release_date = "2024-12-31".to_string();
        values.price = "19.5".to_string();
        values.developers = "Dev".to_string();
        values.publishers = "Pub".to_string();
    }

    let request = manager.save().unwrap();
    run(&mut manager, &client, request).await;

    assert!(!manager.is_form_open());
    assert!(manager.games().is_empty());
}

#[tokio::test]
async fn test_delete_reloads_regardless_of_response() {
    let server = MockServer::start().await;
    mount_list(&server, json!([]), 1).await;

    Mock::given(method("DELETE"))
        .and(path("/games/node1/1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("{\"oops\":true}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut manager = GameRecordManager::new();

    let request = manager.delete(&AppId::Number(1));
    run(&mut manager, &client, request).await;

    assert!(manager.games().is_empty());
    assert!(manager.status().unwrap().contains("Failed to delete game"));
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_rows() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games/node1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_json()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/games/node1"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut manager = GameRecordManager::new();
    let request = manager.mount().unwrap();
    run(&mut manager, &client, request).await;

    let request = manager.list();
    run(&mut manager, &client, request).await;

    assert_eq!(manager.games().len(), 1);
    assert!(manager.status().unwrap().contains("503"));
}
