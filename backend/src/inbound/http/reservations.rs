//! Reservation HTTP handlers.
//!
//! ```text
//! PUT    /reservations/{id}
//! DELETE /reservations/{id}
//! ```

use actix_web::{delete, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::responses::{ErrorResponse, MutationResponse};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_id, require};

/// Request body for `PUT /reservations/{id}`.
///
/// The single lowercase field name is part of the existing wire contract.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateRoomRequest {
    pub roomnumber: Option<i32>,
}

fn missing_reservation_error(id: &str) -> Error {
    Error::precondition(format!("Reservation id:{id} does not exist"))
}

/// Reallocate the room for a reservation.
#[utoipa::path(
    put,
    path = "/reservations/{id}",
    request_body = UpdateRoomRequest,
    responses(
        (status = 200, description = "Reservation updated", body = MutationResponse),
        (status = 400, description = "Unknown id or missing room number", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tags = ["reservations"],
    operation_id = "updateReservationRoom"
)]
#[put("/reservations/{id}")]
pub async fn update_reservation_room(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateRoomRequest>,
) -> ApiResult<web::Json<MutationResponse>> {
    let raw_id = path.into_inner();
    let room = require(payload.into_inner().roomnumber, "roomnumber")?;

    let id = parse_id(&raw_id).ok_or_else(|| missing_reservation_error(&raw_id))?;
    if !state.reservations.exists(id).await? {
        return Err(missing_reservation_error(&raw_id));
    }

    let updated = state.reservations.update_room(id, room).await?;
    Ok(web::Json(MutationResponse::new(format!(
        "Reservation id:{updated} updated. Room {room} allocated"
    ))))
}

/// Delete a reservation together with its invoices.
#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    responses(
        (status = 200, description = "Reservation deleted", body = MutationResponse),
        (status = 400, description = "Unknown id", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tags = ["reservations"],
    operation_id = "deleteReservation"
)]
#[delete("/reservations/{id}")]
pub async fn delete_reservation(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MutationResponse>> {
    let raw_id = path.into_inner();
    let id = parse_id(&raw_id).ok_or_else(|| missing_reservation_error(&raw_id))?;
    if !state.reservations.exists(id).await? {
        return Err(missing_reservation_error(&raw_id));
    }

    state.reservations.delete_cascade(id).await?;
    Ok(web::Json(MutationResponse::new(format!(
        "Reservation id:{id} deleted"
    ))))
}
