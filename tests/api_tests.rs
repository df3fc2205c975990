//! API integration tests
//!
//! These exercise a running server. Start one locally, then run:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Unique suffix so repeated runs do not collide on unique columns
fn unique(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{}_{}", prefix, nanos)
}

/// Register a fresh user and return a bearer token for it
async fn register_and_login(client: &Client) -> String {
    let username = unique("user");

    let response = client
        .post(format!("{}/register", BASE_URL))
        .json(&json!({ "username": username, "password": "secret" }))
        .send()
        .await
        .expect("Failed to send register request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({ "username": username, "password": "secret" }))
        .send()
        .await
        .expect("Failed to send login request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["access_token"]
        .as_str()
        .expect("No access_token in response")
        .to_string()
}

/// Create a customer with a unique email, returning its id
async fn create_customer(client: &Client, token: &str) -> i64 {
    let response = client
        .post(format!("{}/customers", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Test Customer",
            "email": format!("{}@example.com", unique("customer")),
            "phone": "555-0100"
        }))
        .send()
        .await
        .expect("Failed to send create customer request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No customer ID")
}

/// Create a rented book for the given customer, returning its id
async fn create_rented_book(client: &Client, token: &str, customer_id: i64) -> i64 {
    let response = client
        .post(format!("{}/rented_books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "title": "The Test Book",
            "rent_date": "2024-03-01",
            "customer_id": customer_id
        }))
        .send()
        .await
        .expect("Failed to send create rented book request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No rented book ID")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
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
async fn test_register_duplicate_username_is_rejected() {
    let client = Client::new();
    let username = unique("dup");

    let response = client
        .post(format!("{}/register", BASE_URL))
        .json(&json!({ "username": username, "password": "secret" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/register", BASE_URL))
        .json(&json!({ "username": username, "password": "secret" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_register_with_missing_fields_is_bad_request() {
    let client = Client::new();

    let response = client
        .post(format!("{}/register", BASE_URL))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send request");

    // Missing fields answer 400 with the error envelope, not a bare 422
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_customer_create_with_missing_fields_is_bad_request() {
    let client = Client::new();
    let token = register_and_login(&client).await;

    let response = client
        .post(format!("{}/customers", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": "No Email" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_register_without_password_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/register", BASE_URL))
        .json(&json!({ "username": unique("nopass"), "password": "" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_login_wrong_password() {
    let client = Client::new();
    let username = unique("wrongpw");

    let response = client
        .post(format!("{}/register", BASE_URL))
        .json(&json!({ "username": username, "password": "secret" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({ "username": username, "password": "not-it" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_login_unknown_username() {
    let client = Client::new();

    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({ "username": unique("ghost"), "password": "secret" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_logged_out_token_is_rejected() {
    let client = Client::new();
    let token = register_and_login(&client).await;

    // Token works before logout
    let response = client
        .get(format!("{}/customers", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/logout", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    // Same token must now be rejected everywhere
    let response = client
        .get(format!("{}/customers", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 401);

    // Logging out again is idempotent
    let response = client
        .post(format!("{}/logout", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[ignore]
async fn test_customer_create_then_get_round_trips() {
    let client = Client::new();
    let token = register_and_login(&client).await;
    let email = format!("{}@example.com", unique("roundtrip"));

    let response = client
        .post(format!("{}/customers", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": "Ada", "email": email, "phone": "555-0199" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let created: Value = response.json().await.expect("Failed to parse response");
    let id = created["id"].as_i64().expect("No customer ID");

    let response = client
        .get(format!("{}/customers/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let fetched: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched["name"], "Ada");
    assert_eq!(fetched["email"], email.as_str());
    assert_eq!(fetched["phone"], "555-0199");
}

#[tokio::test]
#[ignore]
async fn test_duplicate_customer_email_conflicts() {
    let client = Client::new();
    let token = register_and_login(&client).await;
    let email = format!("{}@example.com", unique("taken"));

    for expected in [200, 409] {
        let response = client
            .post(format!("{}/customers", BASE_URL))
            .header("Authorization", format!("Bearer {}", token))
            .json(&json!({ "name": "Ada", "email": email }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
#[ignore]
async fn test_deleting_customer_cascades_to_rented_books() {
    let client = Client::new();
    let token = register_and_login(&client).await;

    let customer_id = create_customer(&client, &token).await;
    let book_id = create_rented_book(&client, &token, customer_id).await;

    let response = client
        .delete(format!("{}/customers/{}", BASE_URL, customer_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    // The customer's books must be gone too
    let response = client
        .get(format!("{}/rented_books/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_rented_book_create_with_unknown_customer_fails() {
    let client = Client::new();
    let token = register_and_login(&client).await;

    let response = client
        .post(format!("{}/rented_books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "title": "Orphan Book",
            "rent_date": "2024-03-01",
            "customer_id": 999999999
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_rented_book_update_ignores_empty_and_null_fields() {
    let client = Client::new();
    let token = register_and_login(&client).await;

    let customer_id = create_customer(&client, &token).await;
    let book_id = create_rented_book(&client, &token, customer_id).await;

    let response = client
        .put(format!("{}/rented_books/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "title": "", "return_date": null }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "The Test Book");
    assert!(body["return_date"].is_null());

    // A real value does change the record
    let response = client
        .put(format!("{}/rented_books/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "title": "Renamed", "return_date": "2024-03-15" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "Renamed");
    assert_eq!(body["return_date"], "2024-03-15");
}

#[tokio::test]
#[ignore]
async fn test_unknown_ids_answer_not_found() {
    let client = Client::new();
    let token = register_and_login(&client).await;

    for path in ["customers/999999999", "rented_books/999999999"] {
        let response = client
            .get(format!("{}/{}", BASE_URL, path))
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 404);
    }
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/customers", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}
