// src/routes/updates.rs
use axum::Json;

use crate::message::{UpdatesRequest, UpdatesResponse};
use crate::services::updates::dispatch_update;

/// Lookups never fail; unrecognized inputs degrade to sentinel text.
pub async fn updates_handler(Json(payload): Json<UpdatesRequest>) -> Json<UpdatesResponse> {
    Json(UpdatesResponse {
        response: dispatch_update(&payload.kind, &payload.region),
    })
}
