mod common;

use keylink::application::services::LinkPolicy;
use keylink::domain::repositories::LinkRepository;
use serde_json::{Value, json};

#[tokio::test]
async fn test_create_link_success() {
    let (server, _store) = common::create_test_server(LinkPolicy::Deduplicate);

    let response = server
        .post("/")
        .form(&json!({ "url": "http://example.com/a/very/long/path" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let key = json["key"].as_str().unwrap();

    assert_eq!(key.len(), 5);
    assert!(key.chars().all(|c| c.is_ascii_alphabetic()));
    assert_eq!(json["url"], "http://example.com/a/very/long/path");
    assert_eq!(json["count"], 0);
    assert_eq!(json["link"], format!("{}/{}", common::DOMAIN_URL, key));
}

#[tokio::test]
async fn test_create_link_created_format() {
    let (server, _store) = common::create_test_server(LinkPolicy::Deduplicate);

    let response = server
        .post("/")
        .form(&json!({ "url": "http://example.com" }))
        .await;

    let json = response.json::<Value>();
    let created = json["created"].as_str().unwrap();

    assert!(
        chrono::NaiveDateTime::parse_from_str(created, "%Y-%m-%d %H:%M:%S").is_ok(),
        "unexpected created format: {created}"
    );
}

#[tokio::test]
async fn test_create_link_deduplicates() {
    let (server, store) = common::create_test_server(LinkPolicy::Deduplicate);

    let first = server
        .post("/")
        .form(&json!({ "url": "https://dedup.example.com" }))
        .await
        .json::<Value>();

    let second = server
        .post("/")
        .form(&json!({ "url": "https://dedup.example.com" }))
        .await
        .json::<Value>();

    assert_eq!(first["key"], second["key"]);

    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_link_always_new() {
    let (server, _store) = common::create_test_server(LinkPolicy::AlwaysNew);

    let first = server
        .post("/")
        .form(&json!({ "url": "https://again.example.com" }))
        .await
        .json::<Value>();

    let second = server
        .post("/")
        .form(&json!({ "url": "https://again.example.com" }))
        .await
        .json::<Value>();

    assert_ne!(first["key"], second["key"]);
    assert_eq!(first["url"], second["url"]);
}

#[tokio::test]
async fn test_create_link_different_urls_get_different_keys() {
    let (server, _store) = common::create_test_server(LinkPolicy::Deduplicate);

    let first = server
        .post("/")
        .form(&json!({ "url": "https://example.com/1" }))
        .await
        .json::<Value>();

    let second = server
        .post("/")
        .form(&json!({ "url": "https://example.com/2" }))
        .await
        .json::<Value>();

    assert_ne!(first["key"], second["key"]);
}

#[tokio::test]
async fn test_create_link_stores_url_as_submitted() {
    let (server, _store) = common::create_test_server(LinkPolicy::Deduplicate);

    let response = server
        .post("/")
        .form(&json!({ "url": "not even a url" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["url"], "not even a url");
}

#[tokio::test]
async fn test_create_link_missing_url_field() {
    let (server, _store) = common::create_test_server(LinkPolicy::Deduplicate);

    let response = server
        .post("/")
        .form(&json!({ "link": "http://example.com" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["status"], 400);
}

#[tokio::test]
async fn test_create_link_empty_url() {
    let (server, _store) = common::create_test_server(LinkPolicy::Deduplicate);

    let response = server.post("/").form(&json!({ "url": "" })).await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["fields"], json!(["url"]));
}

#[tokio::test]
async fn test_create_link_url_too_long() {
    let (server, _store) = common::create_test_server(LinkPolicy::Deduplicate);

    let url = format!("http://example.com/{}", "a".repeat(600));
    let response = server.post("/").form(&json!({ "url": url })).await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_link_database_down() {
    let (server, store) = common::create_test_server(LinkPolicy::Deduplicate);
    store.set_unavailable(true);

    let response = server
        .post("/")
        .form(&json!({ "url": "http://example.com" }))
        .await;

    response.assert_status_internal_server_error();
    assert_eq!(response.json::<Value>()["error"]["code"], "internal_error");
}
