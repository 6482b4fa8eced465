// File: crates/reservify_reservations/src/handlers.rs
use axum::{
    body::Bytes,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::SecondsFormat;
use reservify_common::services::ServiceFactory;
use reservify_common::{HttpStatusCode, ReservifyError};
use reservify_config::AppConfig;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use crate::availability::AvailabilityChecker;
use crate::capacity::CapacityPolicy;
use crate::commit::{CalendarOutcome, ReservationCommitter};
use crate::error::ReservationError;
use crate::models::{
    ActionQuery, CalendarResult, CheckRequest, CheckResponse, FacilitiesResponse, FacilityInfo,
    ReserveRequest, ReserveResponse, ResponseStatus,
};
use crate::time::TimeSettings;

/// Shared state of the reservation routes.
#[derive(Clone)]
pub struct ReservationState {
    pub checker: Arc<AvailabilityChecker>,
    pub committer: Arc<ReservationCommitter>,
}

impl ReservationState {
    pub fn new(checker: Arc<AvailabilityChecker>, committer: Arc<ReservationCommitter>) -> Self {
        Self { checker, committer }
    }

    /// Wires checker and committer from configuration and the injected services.
    pub fn from_services(
        config: &AppConfig,
        services: &dyn ServiceFactory,
    ) -> Result<Self, ReservifyError> {
        let settings = TimeSettings::from_config(&config.reservations)?;
        let capacities = Arc::new(CapacityPolicy::from_config(
            &config.reservations.facilities,
        )?);
        let checker = Arc::new(AvailabilityChecker::new(
            services.reservation_log(),
            capacities,
            settings,
        ));
        let calendar_id = config.gcal.as_ref().and_then(|g| g.calendar_id.clone());
        let committer = ReservationCommitter::new(
            checker.clone(),
            services.lock_provider(),
            Duration::from_secs(config.reservations.lock_timeout_secs),
        )
        .with_calendar(services.calendar_service(), calendar_id);

        Ok(Self::new(checker, Arc::new(committer)))
    }
}

type CheckReply = (StatusCode, Json<CheckResponse>);
type ReserveReply = (StatusCode, Json<ReserveResponse>);

fn status_of(err: &ReservationError) -> StatusCode {
    StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn failure_message(err: &ReservationError) -> String {
    let status = status_of(err);
    if status.is_server_error() {
        error!("reservation request failed: {}", err);
    } else {
        info!("reservation request rejected: {}", err);
    }
    err.client_message()
}

fn check_failure(err: ReservationError) -> CheckReply {
    let message = failure_message(&err);
    (
        status_of(&err),
        Json(CheckResponse {
            status: ResponseStatus::Error,
            available: false,
            message: Some(message),
        }),
    )
}

fn reserve_failure(err: ReservationError) -> ReserveReply {
    let message = failure_message(&err);
    (
        status_of(&err),
        Json(ReserveResponse {
            status: ResponseStatus::Error,
            message,
            calendar_result: None,
            start_time: None,
            end_time: None,
        }),
    )
}

fn calendar_result(outcome: CalendarOutcome) -> CalendarResult {
    match outcome {
        CalendarOutcome::Created(result) => CalendarResult {
            status: ResponseStatus::Ok,
            event_id: result.event_id,
            message: "calendar event created".to_string(),
        },
        CalendarOutcome::Failed(e) => CalendarResult {
            status: ResponseStatus::Error,
            event_id: None,
            message: e.to_string(),
        },
    }
}

async fn run_check(state: &ReservationState, request: CheckRequest) -> CheckReply {
    match state.checker.check(&request).await {
        Ok(occupancy) => (
            StatusCode::OK,
            Json(CheckResponse {
                status: ResponseStatus::Ok,
                available: occupancy.available(),
                message: None,
            }),
        ),
        Err(e) => check_failure(e),
    }
}

async fn run_reserve(state: &ReservationState, request: ReserveRequest) -> ReserveReply {
    match state.committer.reserve(&request).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(ReserveResponse {
                status: ResponseStatus::Ok,
                message: "reservation confirmed".to_string(),
                start_time: Some(outcome.start.to_rfc3339_opts(SecondsFormat::Secs, false)),
                end_time: Some(outcome.end.to_rfc3339_opts(SecondsFormat::Secs, false)),
                calendar_result: Some(calendar_result(outcome.calendar)),
            }),
        ),
        Err(e) => reserve_failure(e),
    }
}

fn malformed(rejection: JsonRejection) -> ReservationError {
    ReservationError::MalformedRequest(rejection.body_text())
}

fn malformed_query(rejection: QueryRejection) -> ReservationError {
    ReservationError::MalformedRequest(rejection.body_text())
}

/// Reports whether a slot still has room.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/check",
    request_body = CheckRequest,
    responses(
        (status = 200, description = "Availability of the slot", body = CheckResponse),
        (status = 400, description = "Missing field, bad time or unknown facility", body = CheckResponse),
        (status = 500, description = "Log store failure", body = CheckResponse)
    ),
    tag = "Reservations"
))]
pub async fn check_handler(
    State(state): State<Arc<ReservationState>>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> CheckReply {
    match payload {
        Ok(Json(request)) => run_check(&state, request).await,
        Err(rejection) => check_failure(malformed(rejection)),
    }
}

/// Same as [`check_handler`], reading the request from the query string.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/check",
    params(CheckRequest),
    responses(
        (status = 200, description = "Availability of the slot", body = CheckResponse),
        (status = 400, description = "Malformed query, missing field, bad time or unknown facility", body = CheckResponse)
    ),
    tag = "Reservations"
))]
pub async fn check_query_handler(
    State(state): State<Arc<ReservationState>>,
    query: Result<Query<CheckRequest>, QueryRejection>,
) -> CheckReply {
    match query {
        Ok(Query(request)) => run_check(&state, request).await,
        Err(rejection) => check_failure(malformed_query(rejection)),
    }
}

#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/reserve",
    request_body = ReserveRequest,
    responses(
        (status = 200, description = "Reservation stored; calendar outcome reported separately", body = ReserveResponse),
        (status = 400, description = "Invalid request", body = ReserveResponse),
        (status = 409, description = "Slot full", body = ReserveResponse),
        (status = 503, description = "Reservation lock busy", body = ReserveResponse)
    ),
    tag = "Reservations"
))]
pub async fn reserve_handler(
    State(state): State<Arc<ReservationState>>,
    payload: Result<Json<ReserveRequest>, JsonRejection>,
) -> ReserveReply {
    match payload {
        Ok(Json(request)) => run_reserve(&state, request).await,
        Err(rejection) => reserve_failure(malformed(rejection)),
    }
}

/// An empty body reads as an empty request, so missing fields are reported
/// field by field.
fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ReservationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| ReservationError::MalformedRequest(e.to_string()))
}

/// Single endpoint used by the booking form: `?action=check|reserve`.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/reservations",
    params(ActionQuery),
    request_body(content = String, description = "JSON body of the selected action"),
    responses(
        (status = 200, description = "Result of the selected action"),
        (status = 400, description = "Unknown action or malformed body")
    ),
    tag = "Reservations"
))]
pub async fn dispatch_handler(
    State(state): State<Arc<ReservationState>>,
    Query(query): Query<ActionQuery>,
    body: Bytes,
) -> Response {
    let action = query.action.unwrap_or_default();
    match action.as_str() {
        "check" => match parse_body::<CheckRequest>(&body) {
            Ok(request) => run_check(&state, request).await.into_response(),
            Err(e) => check_failure(e).into_response(),
        },
        "reserve" => match parse_body::<ReserveRequest>(&body) {
            Ok(request) => run_reserve(&state, request).await.into_response(),
            Err(e) => reserve_failure(e).into_response(),
        },
        _ => reserve_failure(ReservationError::UnknownAction(action)).into_response(),
    }
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/facilities",
    responses(
        (status = 200, description = "Configured facilities", body = FacilitiesResponse)
    ),
    tag = "Reservations"
))]
pub async fn facilities_handler(
    State(state): State<Arc<ReservationState>>,
) -> Json<FacilitiesResponse> {
    let facilities = state
        .checker
        .capacities()
        .facilities()
        .iter()
        .map(|f| FacilityInfo {
            id: f.id.clone(),
            capacity: f.capacity,
            display_name: f.display_name.clone(),
        })
        .collect();

    Json(FacilitiesResponse {
        time_zone: state.checker.settings().zone.name().to_string(),
        facilities,
    })
}
