//! HTTP request handlers for the settlement API.
//!
//! Both endpoints take the same body. They differ only in how the principal
//! amount is read: as the gross to split, or as the net to reach.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{settle_from_gross, settle_from_net};
use crate::models::{EngagementParameters, Settlement, SettlementReport};

use super::request::SettlementRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/simulations/gross-to-net", post(gross_to_net_handler))
        .route("/api/v1/simulations/net-to-gross", post(net_to_gross_handler))
        .with_state(state)
}

/// Which way a simulation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    GrossToNet,
    NetToGross,
}

impl Direction {
    fn name(self) -> &'static str {
        match self {
            Direction::GrossToNet => "gross_to_net",
            Direction::NetToGross => "net_to_gross",
        }
    }

    fn settle(self, params: &EngagementParameters) -> Settlement {
        match self {
            Direction::GrossToNet => settle_from_gross(params),
            Direction::NetToGross => settle_from_net(params),
        }
    }
}

/// Handler for POST /api/v1/simulations/gross-to-net.
async fn gross_to_net_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> Response {
    simulate(Direction::GrossToNet, &state, payload)
}

/// Handler for POST /api/v1/simulations/net-to-gross.
async fn net_to_gross_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> Response {
    simulate(Direction::NetToGross, &state, payload)
}

fn simulate(
    direction: Direction,
    state: &AppState,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        direction = direction.name(),
        "Processing simulation request"
    );

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return ApiErrorResponse::bad_request(rejection_error(correlation_id, rejection))
                .into_response();
        }
    };

    let params = match request.resolve(state.config()) {
        Ok(params) => params,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Request rejected"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    let settlement = direction.settle(&params);
    let report = SettlementReport::from(&settlement);

    info!(
        correlation_id = %correlation_id,
        direction = direction.name(),
        work_days = params.work_days,
        principal = %params.principal,
        gross_used = %settlement.scenario.gross,
        net_received = %settlement.scenario.net,
        iterations = settlement.trace.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Simulation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}

fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
        JsonRejection::MissingJsonContentType(_) => {
            warn!(correlation_id = %correlation_id, "Missing JSON content type");
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}
