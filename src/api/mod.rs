//! HTTP API module for the settlement engine.
//!
//! This module provides the REST endpoints that run the forward
//! (gross-to-net) and inverse (net-to-gross) simulations.

mod handlers;
mod request;
mod response;
mod state;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

pub use handlers::create_router;
pub use request::{EquipmentRentalRequest, SettlementRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;

/// Binds `0.0.0.0:port` and serves the API until the process stops.
pub async fn run_http_server(state: AppState, port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    let schedule = state.config().schedule();
    info!(
        %addr,
        schedule_code = %schedule.code,
        schedule_name = %schedule.name,
        schedule_version = %schedule.version,
        effective_date = %schedule.effective_date,
        "Settlement API listening"
    );

    axum::serve(listener, create_router(state)).await
}
