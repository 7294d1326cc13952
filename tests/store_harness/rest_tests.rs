//! REST integration test macro for payment stores.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that drive
//! the full application router over a store:
//! JSON → HTTP request → handler → PaymentService → store → envelope → JSON.
//!
//! # Generated Tests
//!
//! ## Create
//! - `test_rest_create`: 201 with a fresh identifier
//! - `test_rest_create_ignores_caller_id`: caller `id` never becomes the key
//! - `test_rest_create_distinct_ids`: identical bodies get different ids
//! - `test_rest_create_non_positive_amount`: 422 on `amount`
//! - `test_rest_create_bad_currency_length`: 422 on `currency`
//! - `test_rest_create_wrong_types`: 422 on both fields
//! - `test_rest_create_missing_fields`: 422 "Required" on both fields
//! - `test_rest_create_malformed_json`: 422 for an unparsable body
//!
//! ## Get
//! - `test_rest_get`: 200 with the stored record
//! - `test_rest_get_not_found`: 404
//! - `test_rest_get_missing_id`: 400
//! - `test_rest_get_undecodable_id`: 404 envelope for a non-UTF-8 segment
//!
//! ## List
//! - `test_rest_list_all`, `test_rest_list_by_currency`,
//!   `test_rest_list_empty_currency`, `test_rest_list_invalid_currency`,
//!   `test_rest_list_ignores_limit`
//!
//! ## Scenario
//! - `test_rest_end_to_end`: create, get, list, filter by two currencies

/// Generate a REST integration test suite for a payment store.
///
/// `$store_factory` must produce an empty `impl PaymentStore + 'static`.
macro_rules! rest_integration_tests {
    ($store_factory:expr) => {
        mod rest_integration_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use serde_json::{Value, json};

            async fn make_server() -> TestServer {
                let store = $store_factory;
                TestServer::try_new(build_test_router(store)).unwrap()
            }

            async fn create(server: &TestServer, body: Value) -> String {
                let response = server.post("/payments").json(&body).await;
                response.assert_status(StatusCode::CREATED);
                let body: Value = response.json();
                body["result"]
                    .as_str()
                    .expect("result should be a string")
                    .to_string()
            }

            fn violation_paths(body: &Value) -> Vec<String> {
                body["details"]
                    .as_array()
                    .expect("details should be an array")
                    .iter()
                    .map(|v| v["path"][0].as_str().unwrap_or_default().to_string())
                    .collect()
            }

            // ==============================================================
            // Create
            // ==============================================================

            #[tokio::test]
            async fn test_rest_create() {
                let server = make_server().await;

                let response = server
                    .post("/payments")
                    .json(&json!({ "amount": 150, "currency": "AUD" }))
                    .await;

                response.assert_status(StatusCode::CREATED);
                let body: Value = response.json();
                let id = body["result"].as_str().unwrap();
                assert!(!id.is_empty());
                uuid::Uuid::parse_str(id).unwrap();
                assert_eq!(body.as_object().unwrap().len(), 1);
            }

            #[tokio::test]
            async fn test_rest_create_ignores_caller_id() {
                let server = make_server().await;

                let id = create(
                    &server,
                    json!({ "id": "user-chosen-id-123", "amount": 300, "currency": "EUR" }),
                )
                .await;

                assert_ne!(id, "user-chosen-id-123");
                server
                    .get("/payments/user-chosen-id-123")
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
                server
                    .get(&format!("/payments/{}", id))
                    .await
                    .assert_status_ok();
            }

            #[tokio::test]
            async fn test_rest_create_distinct_ids() {
                let server = make_server().await;
                let body = json!({ "amount": 10, "currency": "USD" });

                let first = create(&server, body.clone()).await;
                let second = create(&server, body).await;

                assert_ne!(first, second);
            }

            #[tokio::test]
            async fn test_rest_create_non_positive_amount() {
                let server = make_server().await;

                for amount in [json!(-50), json!(0)] {
                    let response = server
                        .post("/payments")
                        .json(&json!({ "amount": amount, "currency": "AUD" }))
                        .await;

                    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
                    let body: Value = response.json();
                    assert_eq!(body["error"], "Invalid input");
                    assert_eq!(violation_paths(&body), vec!["amount"]);
                    assert_eq!(body["details"][0]["code"], "too_small");
                }
            }

            #[tokio::test]
            async fn test_rest_create_bad_currency_length() {
                let server = make_server().await;

                for (currency, code) in [("AUDD", "too_big"), ("AU", "too_small")] {
                    let response = server
                        .post("/payments")
                        .json(&json!({ "amount": 100, "currency": currency }))
                        .await;

                    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
                    let body: Value = response.json();
                    assert_eq!(violation_paths(&body), vec!["currency"]);
                    assert_eq!(body["details"][0]["code"], code);
                }
            }

            #[tokio::test]
            async fn test_rest_create_wrong_types() {
                let server = make_server().await;

                let response = server
                    .post("/payments")
                    .json(&json!({ "amount": "100", "currency": 123 }))
                    .await;

                response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
                let body: Value = response.json();
                assert_eq!(violation_paths(&body), vec!["amount", "currency"]);
                assert!(
                    body["details"]
                        .as_array()
                        .unwrap()
                        .iter()
                        .all(|v| v["code"] == "invalid_type")
                );
            }

            #[tokio::test]
            async fn test_rest_create_missing_fields() {
                let server = make_server().await;

                let response = server.post("/payments").json(&json!({})).await;

                response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
                let body: Value = response.json();
                assert_eq!(violation_paths(&body), vec!["amount", "currency"]);
                assert_eq!(body["details"][0]["message"], "Required");
            }

            #[tokio::test]
            async fn test_rest_create_malformed_json() {
                let server = make_server().await;

                let response = server.post("/payments").text("{not json").await;

                response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
                let body: Value = response.json();
                assert_eq!(body["error"], "Invalid input");

                let listed: Value = server.get("/payments").await.json();
                assert_eq!(listed, json!({ "data": [] }));
            }

            // ==============================================================
            // Get
            // ==============================================================

            #[tokio::test]
            async fn test_rest_get() {
                let server = make_server().await;
                let id = create(&server, json!({ "amount": 150, "currency": "AUD" })).await;

                let response = server.get(&format!("/payments/{}", id)).await;

                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["paymentId"], id.as_str());
                assert_eq!(body["amount"].as_f64(), Some(150.0));
                assert_eq!(body["currency"], "AUD");
                assert!(body.get("id").is_none());
            }

            #[tokio::test]
            async fn test_rest_get_not_found() {
                let server = make_server().await;

                let response = server.get("/payments/no-such-payment").await;

                response.assert_status(StatusCode::NOT_FOUND);
                response.assert_json(&json!({ "error": "Payment not found" }));
            }

            #[tokio::test]
            async fn test_rest_get_missing_id() {
                let server = make_server().await;

                let response = server.get("/payments/").await;

                response.assert_status(StatusCode::BAD_REQUEST);
                response.assert_json(&json!({ "error": "Payment ID is required" }));
            }

            #[tokio::test]
            async fn test_rest_get_undecodable_id() {
                let server = make_server().await;

                let response = server.get("/payments/%FF").await;

                response.assert_status(StatusCode::NOT_FOUND);
                response.assert_json(&json!({ "error": "Payment not found" }));
            }

            // ==============================================================
            // List
            // ==============================================================

            #[tokio::test]
            async fn test_rest_list_all() {
                let server = make_server().await;
                let mut ids = std::collections::HashSet::new();
                for (amount, currency) in [(100, "AUD"), (200, "USD"), (300, "EUR")] {
                    ids.insert(
                        create(&server, json!({ "amount": amount, "currency": currency })).await,
                    );
                }

                let response = server.get("/payments").await;

                response.assert_status_ok();
                assert_eq!(ids_in_body(&response.json()), ids);
            }

            #[tokio::test]
            async fn test_rest_list_by_currency() {
                let server = make_server().await;
                let aud = create(&server, json!({ "amount": 100, "currency": "AUD" })).await;
                create(&server, json!({ "amount": 200, "currency": "USD" })).await;

                let response = server.get("/payments?currency=AUD").await;

                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(ids_in_body(&body), std::collections::HashSet::from([aud]));
                assert_eq!(body["data"][0]["currency"], "AUD");

                let none: Value = server.get("/payments?currency=JPY").await.json();
                assert_eq!(none, json!({ "data": [] }));
            }

            #[tokio::test]
            async fn test_rest_list_empty_currency() {
                let server = make_server().await;

                let response = server.get("/payments?currency=").await;

                response.assert_status(StatusCode::BAD_REQUEST);
                response.assert_json(&json!({ "error": "Currency parameter cannot be empty" }));
            }

            #[tokio::test]
            async fn test_rest_list_invalid_currency() {
                let server = make_server().await;

                let response = server.get("/payments?currency=AUDD").await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["error"], "Invalid Input");
                assert_eq!(violation_paths(&body), vec!["currency"]);
                assert_eq!(body["details"][0]["message"], "Currency must be 3 characters");
            }

            #[tokio::test]
            async fn test_rest_list_ignores_limit() {
                let server = make_server().await;
                for _ in 0..3 {
                    create(&server, json!({ "amount": 1, "currency": "AUD" })).await;
                }

                let response = server.get("/payments?currency=AUD&limit=1").await;

                response.assert_status_ok();
                assert_eq!(ids_in_body(&response.json()).len(), 3);
            }

            // ==============================================================
            // Scenario
            // ==============================================================

            #[tokio::test]
            async fn test_rest_end_to_end() {
                let server = make_server().await;

                let id = create(&server, json!({ "amount": 150, "currency": "USD" })).await;

                let fetched: Value = server.get(&format!("/payments/{}", id)).await.json();
                assert_eq!(fetched["paymentId"], id.as_str());
                assert_eq!(fetched["currency"], "USD");

                let all: Value = server.get("/payments").await.json();
                assert!(ids_in_body(&all).contains(&id));

                let usd: Value = server.get("/payments?currency=USD").await.json();
                assert!(ids_in_body(&usd).contains(&id));

                let eur: Value = server.get("/payments?currency=EUR").await.json();
                assert!(!ids_in_body(&eur).contains(&id));
            }
        }
    };
}
