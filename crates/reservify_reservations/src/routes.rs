// --- File: crates/reservify_reservations/src/routes.rs ---
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handlers::{
    check_handler, check_query_handler, dispatch_handler, facilities_handler, reserve_handler,
    ReservationState,
};

/// Routes of the reservation core, meant to be nested under `/api`.
pub fn routes(state: Arc<ReservationState>) -> Router {
    Router::new()
        .route("/check", get(check_query_handler).post(check_handler))
        .route("/reserve", post(reserve_handler))
        .route("/reservations", post(dispatch_handler))
        .route("/facilities", get(facilities_handler))
        .with_state(state)
}
