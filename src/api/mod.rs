//! HTTP API module for the Pricing and Settlement Engine.
//!
//! This module provides the REST API endpoint for settling a batch of
//! rentals.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SettlementRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
