//! Comprehensive integration tests for the Pricing and Settlement Engine.
//!
//! This test suite drives the HTTP API end-to-end and covers:
//! - The reference fixture batch (three rentals, every discount tier)
//! - Option surcharges on both beneficiary sides
//! - Settlement balance across every rental
//! - Partial-failure reporting
//! - Determinism of the output
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use rental_engine::api::{AppState, create_router};
use rental_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/marketplace").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn post_settlements(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/settlements")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// The reference fixture: three cars, three rentals spanning one day, a
/// month boundary, and all four discount tiers.
fn reference_request() -> Value {
    json!({
        "cars": [
            {"id": 1, "price_per_day": 2000, "price_per_km": 10},
            {"id": 2, "price_per_day": 3000, "price_per_km": 15},
            {"id": 3, "price_per_day": 1700, "price_per_km": 8}
        ],
        "rentals": [
            {
                "id": 1,
                "car_id": 1,
                "start_date": "2015-12-08",
                "end_date": "2015-12-08",
                "distance": 100,
                "options": ["gps", "baby_seat"]
            },
            {
                "id": 2,
                "car_id": 1,
                "start_date": "2015-03-31",
                "end_date": "2015-04-01",
                "distance": 300,
                "options": ["additional_insurance"]
            },
            {
                "id": 3,
                "car_id": 2,
                "start_date": "2015-07-03",
                "end_date": "2015-07-14",
                "distance": 1000
            }
        ]
    })
}

fn action(who: &str, action_type: &str, amount: i64) -> Value {
    json!({"who": who, "type": action_type, "amount": amount})
}

fn assert_balanced(rental: &Value) {
    let actions = rental["actions"].as_array().unwrap();
    let debits: i64 = actions
        .iter()
        .filter(|a| a["type"] == "debit")
        .map(|a| a["amount"].as_i64().unwrap())
        .sum();
    let credits: i64 = actions
        .iter()
        .filter(|a| a["type"] == "credit")
        .map(|a| a["amount"].as_i64().unwrap())
        .sum();
    assert_eq!(
        debits, credits,
        "rental {} does not balance",
        rental["id"]
    );
}

// =============================================================================
// Reference Batch
// =============================================================================

#[tokio::test]
async fn test_reference_batch_settles_all_rentals() {
    let (status, body) = post_settlements(create_router_for_test(), reference_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("failures").is_none());

    let rentals = body["rentals"].as_array().unwrap();
    assert_eq!(rentals.len(), 3);
}

#[tokio::test]
async fn test_one_day_rental_with_owner_side_options() {
    let (_, body) = post_settlements(create_router_for_test(), reference_request()).await;

    let rental = &body["rentals"][0];
    assert_eq!(rental["id"], 1);
    assert_eq!(rental["options"], json!(["gps", "baby_seat"]));
    assert_eq!(
        rental["actions"],
        json!([
            action("driver", "debit", 3700),
            action("owner", "credit", 2800),
            action("insurance", "credit", 450),
            action("assistance", "credit", 100),
            action("drivy", "credit", 350),
        ])
    );
}

#[tokio::test]
async fn test_two_day_rental_with_platform_side_option() {
    let (_, body) = post_settlements(create_router_for_test(), reference_request()).await;

    let rental = &body["rentals"][1];
    assert_eq!(rental["id"], 2);
    assert_eq!(rental["options"], json!(["additional_insurance"]));
    assert_eq!(
        rental["actions"],
        json!([
            action("driver", "debit", 8800),
            action("owner", "credit", 4760),
            action("insurance", "credit", 1020),
            action("assistance", "credit", 200),
            action("drivy", "credit", 2820),
        ])
    );
}

#[tokio::test]
async fn test_twelve_day_rental_crosses_every_discount_tier() {
    let (_, body) = post_settlements(create_router_for_test(), reference_request()).await;

    let rental = &body["rentals"][2];
    assert_eq!(rental["id"], 3);
    assert_eq!(rental["options"], json!([]));
    assert_eq!(
        rental["actions"],
        json!([
            action("driver", "debit", 41700),
            action("owner", "credit", 29190),
            action("insurance", "credit", 6255),
            action("assistance", "credit", 1200),
            action("drivy", "credit", 5055),
        ])
    );
}

#[tokio::test]
async fn test_every_settlement_balances() {
    let (_, body) = post_settlements(create_router_for_test(), reference_request()).await;

    for rental in body["rentals"].as_array().unwrap() {
        assert_balanced(rental);
    }
}

#[tokio::test]
async fn test_output_is_deterministic() {
    let (_, first) = post_settlements(create_router_for_test(), reference_request()).await;
    let (_, second) = post_settlements(create_router_for_test(), reference_request()).await;

    assert_eq!(first, second);
}

// =============================================================================
// Edge Cases
// =============================================================================

#[tokio::test]
async fn test_empty_batch_returns_empty_rentals() {
    let body = json!({"cars": [], "rentals": []});

    let (status, body) = post_settlements(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"rentals": []}));
}

#[tokio::test]
async fn test_short_cheap_rental_yields_negative_platform_credit() {
    let body = json!({
        "cars": [
            {"id": 1, "price_per_day": 100, "price_per_km": 0}
        ],
        "rentals": [
            {
                "id": 1,
                "car_id": 1,
                "start_date": "2015-12-08",
                "end_date": "2015-12-08",
                "distance": 0
            }
        ]
    });

    let (_, body) = post_settlements(create_router_for_test(), body).await;

    // fee 30, insurance 15, assistance 100; the residual is not clamped
    let rental = &body["rentals"][0];
    assert_eq!(rental["actions"][4], action("drivy", "credit", -85));
    assert_balanced(rental);
}

#[tokio::test]
async fn test_same_car_rented_twice() {
    let body = json!({
        "cars": [
            {"id": 1, "price_per_day": 2000, "price_per_km": 10}
        ],
        "rentals": [
            {
                "id": 1,
                "car_id": 1,
                "start_date": "2015-12-08",
                "end_date": "2015-12-08",
                "distance": 100
            },
            {
                "id": 2,
                "car_id": 1,
                "start_date": "2015-12-08",
                "end_date": "2015-12-08",
                "distance": 100
            }
        ]
    });

    let (_, body) = post_settlements(create_router_for_test(), body).await;

    let rentals = body["rentals"].as_array().unwrap();
    assert_eq!(rentals.len(), 2);
    // Identical inputs settle identically; car records are never mutated
    assert_eq!(rentals[0]["actions"], rentals[1]["actions"]);
}

// =============================================================================
// Partial Failures
// =============================================================================

#[tokio::test]
async fn test_unknown_car_does_not_abort_the_batch() {
    let mut request = reference_request();
    request["rentals"]
        .as_array_mut()
        .unwrap()
        .push(json!({
            "id": 4,
            "car_id": 99,
            "start_date": "2015-12-08",
            "end_date": "2015-12-08",
            "distance": 50
        }));

    let (status, body) = post_settlements(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rentals"].as_array().unwrap().len(), 3);

    let failures = body["failures"].as_array().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0]["rental_id"], 4);
    assert_eq!(failures[0]["error"], "Rental 4 references unknown car 99");
}

#[tokio::test]
async fn test_inverted_period_is_reported_as_failure() {
    let body = json!({
        "cars": [
            {"id": 1, "price_per_day": 2000, "price_per_km": 10}
        ],
        "rentals": [
            {
                "id": 1,
                "car_id": 1,
                "start_date": "2015-12-10",
                "end_date": "2015-12-08",
                "distance": 100
            }
        ]
    });

    let (status, body) = post_settlements(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["rentals"].as_array().unwrap().is_empty());
    assert_eq!(
        body["failures"][0]["error"],
        "Invalid rental period: end date 2015-12-08 is before start date 2015-12-10"
    );
}

// =============================================================================
// Error Cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/settlements")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_unknown_option_returns_400() {
    let body = json!({
        "cars": [
            {"id": 1, "price_per_day": 2000, "price_per_km": 10}
        ],
        "rentals": [
            {
                "id": 1,
                "car_id": 1,
                "start_date": "2015-12-08",
                "end_date": "2015-12-08",
                "distance": 100,
                "options": ["jacuzzi"]
            }
        ]
    });

    let (status, _) = post_settlements(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
