//! End-to-end HTTP API tests against a live server on a random port.
//!
//! Each test mounts a fresh in-memory store, so servers are fully isolated
//! from one another.
//!
//! Verification command: `cargo test --test http_api_integration`

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code indexes JSON bodies after shape assertions"
)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use daybook::server::start_server;
use daybook::todo::adapters::memory::InMemoryTodoRepository;
use daybook::todo::services::TodoService;
use mockable::DefaultClock;
use serde_json::{Value, json};

/// Starts a server over a fresh in-memory store on a random port.
async fn start_test_server() -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let service = TodoService::new(
        Arc::new(InMemoryTodoRepository::new()),
        Arc::new(DefaultClock),
    );
    start_server("127.0.0.1:0", service)
        .await
        .expect("failed to start test server")
}

fn api_url(addr: SocketAddr, path: &str) -> String {
    format!("http://{addr}/api{path}")
}

/// Short pause so consecutive creation timestamps are strictly ordered.
fn pause() {
    std::thread::sleep(Duration::from_millis(2));
}

#[tokio::test(flavor = "multi_thread")]
async fn health_reports_running_backend() {
    let (addr, _handle) = start_test_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(api_url(addr, "/health"))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["message"], "Backend is running");
}

#[tokio::test(flavor = "multi_thread")]
async fn create_returns_created_record_in_wire_format() {
    let (addr, _handle) = start_test_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(api_url(addr, "/todos"))
        .json(&json!({"text": "  Water the plants  ", "date": "2024-05-10"}))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["text"], "Water the plants");
    assert_eq!(body["completed"], false);
    assert_eq!(body["date"], "2024-05-10");
    assert!(body["id"].is_i64());
    assert!(body["createdAt"].is_string());
    assert_eq!(body["createdAt"], body["updatedAt"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_without_required_fields_is_rejected() {
    let (addr, _handle) = start_test_server().await;
    let client = reqwest::Client::new();

    for payload in [json!({}), json!({"text": "no date"}), json!({"date": "2024-05-10"})] {
        let response = client
            .post(api_url(addr, "/todos"))
            .json(&payload)
            .send()
            .await
            .expect("request");
        assert_eq!(response.status(), 400);

        let body: Value = response.json().await.expect("json body");
        assert_eq!(body["error"], "text and date are required");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn create_with_malformed_date_is_rejected() {
    let (addr, _handle) = start_test_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(api_url(addr, "/todos"))
        .json(&json!({"text": "valid", "date": "2024-13-40"}))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("json body");
    assert!(
        body["error"]
            .as_str()
            .expect("error message")
            .contains("invalid date")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn get_missing_record_returns_not_found() {
    let (addr, _handle) = start_test_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(api_url(addr, "/todos/42"))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["error"], "todo 42 not found");
}

#[tokio::test(flavor = "multi_thread")]
async fn full_crud_flow_round_trips() {
    let (addr, _handle) = start_test_server().await;
    let client = reqwest::Client::new();

    // Create
    let created: Value = client
        .post(api_url(addr, "/todos"))
        .json(&json!({"text": "Draft report", "date": "2024-05-10"}))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("json body");
    let id = created["id"].as_i64().expect("id");

    // Read back
    let fetched: Value = client
        .get(api_url(addr, &format!("/todos/{id}")))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("json body");
    assert_eq!(fetched, created);

    // Partial update keeps the unmentioned fields
    pause();
    let update_response = client
        .put(api_url(addr, &format!("/todos/{id}")))
        .json(&json!({"completed": true}))
        .send()
        .await
        .expect("request");
    assert_eq!(update_response.status(), 200);
    let updated: Value = update_response.json().await.expect("json body");
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["text"], "Draft report");
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_ne!(updated["updatedAt"], created["updatedAt"]);

    // Delete
    let delete_response = client
        .delete(api_url(addr, &format!("/todos/{id}")))
        .send()
        .await
        .expect("request");
    assert_eq!(delete_response.status(), 200);
    let body: Value = delete_response.json().await.expect("json body");
    assert_eq!(body["message"], "Todo deleted successfully");

    // Gone afterwards
    let missing_response = client
        .get(api_url(addr, &format!("/todos/{id}")))
        .send()
        .await
        .expect("request");
    assert_eq!(missing_response.status(), 404);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_missing_record_returns_not_found() {
    let (addr, _handle) = start_test_server().await;
    let client = reqwest::Client::new();

    let response = client
        .put(api_url(addr, "/todos/42"))
        .json(&json!({"completed": true}))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 404);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_orders_and_filters_by_date() {
    let (addr, _handle) = start_test_server().await;
    let client = reqwest::Client::new();

    for (text, day) in [
        ("old day", "2024-05-01"),
        ("new day early", "2024-05-02"),
        ("new day late", "2024-05-02"),
    ] {
        let response = client
            .post(api_url(addr, "/todos"))
            .json(&json!({"text": text, "date": day}))
            .send()
            .await
            .expect("request");
        assert_eq!(response.status(), 201);
        pause();
    }

    // Unfiltered: newest date first, ties newest-created first
    let items: Value = client
        .get(api_url(addr, "/todos"))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("json body");
    let texts: Vec<&str> = items
        .as_array()
        .expect("array")
        .iter()
        .map(|item| item["text"].as_str().expect("text"))
        .collect();
    assert_eq!(texts, vec!["new day late", "new day early", "old day"]);

    // Filtered to one date
    let filtered: Value = client
        .get(api_url(addr, "/todos?date=2024-05-02"))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("json body");
    let filtered_texts: Vec<&str> = filtered
        .as_array()
        .expect("array")
        .iter()
        .map(|item| item["text"].as_str().expect("text"))
        .collect();
    assert_eq!(filtered_texts, vec!["new day late", "new day early"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_with_malformed_filter_is_rejected() {
    let (addr, _handle) = start_test_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(api_url(addr, "/todos?date=yesterday"))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 400);
}

#[tokio::test(flavor = "multi_thread")]
async fn date_summary_tallies_each_date() {
    let (addr, _handle) = start_test_server().await;
    let client = reqwest::Client::new();

    for (text, day, completed) in [
        ("open one", "2024-05-10", false),
        ("done one", "2024-05-10", true),
        ("elsewhere", "2024-05-11", false),
    ] {
        let response = client
            .post(api_url(addr, "/todos"))
            .json(&json!({"text": text, "date": day, "completed": completed}))
            .send()
            .await
            .expect("request");
        assert_eq!(response.status(), 201);
    }

    let summary: Value = client
        .get(api_url(addr, "/todos/dates"))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("json body");

    assert_eq!(summary["2024-05-10"]["total"], 2);
    assert_eq!(summary["2024-05-10"]["incomplete"], 1);
    assert_eq!(summary["2024-05-11"]["total"], 1);
    assert_eq!(summary["2024-05-11"]["incomplete"], 1);
}
