// File: crates/reservify_reservations/src/doc.rs

#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::models::{
    CalendarResult, CheckRequest, CheckResponse, FacilitiesResponse, FacilityInfo,
    ReserveRequest, ReserveResponse, ResponseStatus,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::check_handler,
        crate::handlers::check_query_handler,
        crate::handlers::reserve_handler,
        crate::handlers::dispatch_handler,
        crate::handlers::facilities_handler
    ),
    components(
        schemas(
            CheckRequest,
            CheckResponse,
            ReserveRequest,
            ReserveResponse,
            CalendarResult,
            ResponseStatus,
            FacilityInfo,
            FacilitiesResponse
        )
    ),
    tags(
        (name = "Reservations", description = "Facility slot availability and reservations")
    ),
    servers(
        (url = "/api", description = "Reservation API server")
    )
)]
pub struct ReservationApiDoc;
