//! API integration tests
//!
//! These run against a live server with a seeded database:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Create a book and return its id
async fn create_book(client: &Client, title: &str, author: &str) -> i32 {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": title,
            "author": author,
            "publisher_id": 1,
            "isbn": "0441013597",
            "year_published": 1965
        }))
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse create response");
    body["id"].as_i64().expect("No id in response") as i32
}

async fn delete_book(client: &Client, id: i32) {
    let response = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send delete request");

    assert_eq!(response.status(), 204);
}

async fn list_books(client: &Client) -> Vec<Value> {
    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send list request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse list response");
    body.as_array().expect("Expected an array").clone()
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_add_book_round_trips_every_field() {
    let client = Client::new();
    let id = create_book(&client, "Dune", "Frank Herbert").await;

    let books = list_books(&client).await;
    let dune = books
        .iter()
        .find(|book| book["id"] == json!(id))
        .expect("Created book missing from catalogue");

    assert_eq!(dune["title"], "Dune");
    assert_eq!(dune["author"], "Frank Herbert");
    assert_eq!(dune["publisher_id"], 1);
    assert_eq!(dune["isbn"], "0441013597");
    assert_eq!(dune["year_published"], 1965);

    delete_book(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_create_book_rejects_blank_title() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": "   ",
            "author": "Frank Herbert",
            "publisher_id": 1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
#[ignore]
async fn test_delete_book_is_idempotent() {
    let client = Client::new();
    let id = create_book(&client, "Deleted Twice", "Nobody").await;

    delete_book(&client, id).await;

    let books = list_books(&client).await;
    assert!(!books.iter().any(|book| book["id"] == json!(id)));

    // Second delete of the same id must also succeed
    delete_book(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_update_book_changes_fields_and_keeps_id() {
    let client = Client::new();
    let id = create_book(&client, "Dune Mesiah", "Frank Herbert").await;

    let response = client
        .put(format!("{}/books/{}", BASE_URL, id))
        .json(&json!({
            "title": "Dune Messiah",
            "author": "Frank Herbert",
            "publisher_id": 2,
            "isbn": "0441172695",
            "year_published": 1969
        }))
        .send()
        .await
        .expect("Failed to send update request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], json!(id));
    assert_eq!(body["title"], "Dune Messiah");
    assert_eq!(body["publisher_id"], 2);
    assert_eq!(body["year_published"], 1969);

    delete_book(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_update_missing_book_is_not_found() {
    let client = Client::new();

    let response = client
        .put(format!("{}/books/999999", BASE_URL))
        .json(&json!({
            "title": "Ghost",
            "author": "Nobody",
            "publisher_id": 1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_books_by_author_matches_exactly() {
    let client = Client::new();
    let id = create_book(&client, "Children of Dune", "Frank Herbert").await;

    let response = client
        .post(format!("{}/queries", BASE_URL))
        .json(&json!({
            "query": "books_by_author",
            "author": "Frank Herbert"
        }))
        .send()
        .await
        .expect("Failed to send query");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["kind"], "books");
    let rows = body["rows"].as_array().expect("Expected rows");
    assert!(rows.iter().all(|book| book["author"] == "Frank Herbert"));
    assert!(rows.iter().any(|book| book["id"] == json!(id)));

    // Author lookup follows the database's default (case-sensitive) comparison
    let response = client
        .post(format!("{}/queries", BASE_URL))
        .json(&json!({
            "query": "books_by_author",
            "author": "frank herbert"
        }))
        .send()
        .await
        .expect("Failed to send query");

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["rows"].as_array().expect("Expected rows").len(), 0);

    delete_book(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_query_requires_author_input() {
    let client = Client::new();

    let response = client
        .post(format!("{}/queries", BASE_URL))
        .json(&json!({ "query": "books_by_author" }))
        .send()
        .await
        .expect("Failed to send query");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
#[ignore]
async fn test_members_by_unknown_book_short_circuits_to_empty() {
    let client = Client::new();

    let response = client
        .post(format!("{}/queries", BASE_URL))
        .json(&json!({
            "query": "members_by_book",
            "title": "Nonexistent Title"
        }))
        .send()
        .await
        .expect("Failed to send query");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["kind"], "borrow_records");
    assert_eq!(body["rows"].as_array().expect("Expected rows").len(), 0);
}

#[tokio::test]
#[ignore]
async fn test_query_menu_lists_all_five_lookups() {
    let client = Client::new();

    let response = client
        .get(format!("{}/queries", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let menu = body.as_array().expect("Expected an array");
    assert_eq!(menu.len(), 5);
    assert!(menu
        .iter()
        .any(|entry| entry["query"] == "members_with_loans"));
}

#[tokio::test]
#[ignore]
async fn test_list_loans() {
    let client = Client::new();

    let response = client
        .get(format!("{}/loans", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}
