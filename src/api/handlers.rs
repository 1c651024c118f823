//! HTTP request handlers for the Pricing and Settlement Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::settle_batch;
use crate::models::{Car, Rental};

use super::request::SettlementRequest;
use super::response::ApiError;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/settlements", post(settlements_handler))
        .with_state(state)
}

/// Handler for POST /settlements endpoint.
///
/// Accepts a car catalog and a batch of rentals, and returns the per-rental
/// settlement breakdowns. Per-rental failures are reported inside the batch
/// result; only malformed requests are rejected outright.
async fn settlements_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing settlement request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let cars: Vec<Car> = request.cars.into_iter().map(Into::into).collect();
    let rentals: Vec<Rental> = request.rentals.into_iter().map(Into::into).collect();

    let batch = settle_batch(&cars, &rentals, state.config().config());

    for failure in &batch.failures {
        warn!(
            correlation_id = %correlation_id,
            rental_id = failure.rental_id,
            error = %failure.error,
            "Rental could not be settled"
        );
    }
    info!(
        correlation_id = %correlation_id,
        rentals_count = rentals.len(),
        settled_count = batch.rentals.len(),
        failures_count = batch.failures.len(),
        "Settlement completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(batch),
    )
        .into_response()
}
